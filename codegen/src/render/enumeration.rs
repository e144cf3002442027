/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use super::string_literal;
use crate::index::EnumIr;
use crate::writer::RustWriter;

pub(crate) fn render(w: &mut RustWriter, enumeration: &EnumIr) {
    let name = &enumeration.name;

    w.blank();
    w.docs(enumeration.docs.as_deref());
    w.line("#[non_exhaustive]");
    w.line("#[derive(std::clone::Clone, std::cmp::Eq, std::cmp::Ord, std::cmp::PartialEq, std::cmp::PartialOrd, std::fmt::Debug, std::hash::Hash)]");
    w.block(format!("pub enum {}", name), |w| {
        for variant in &enumeration.variants {
            w.docs(variant.docs.as_deref());
            w.line(format!("{},", variant.name));
        }
        w.doc("Unknown contains new variants that have been added since this code was generated.");
        w.line("Unknown(std::string::String),");
    });

    w.block(format!("impl std::convert::From<&str> for {}", name), |w| {
        w.block("fn from(s: &str) -> Self", |w| {
            w.block("match s", |w| {
                for variant in &enumeration.variants {
                    w.line(format!(
                        "{} => {}::{},",
                        string_literal(&variant.value),
                        name,
                        variant.name
                    ));
                }
                w.line(format!("other => {}::Unknown(other.to_owned()),", name));
            });
        });
    });

    w.block(format!("impl std::str::FromStr for {}", name), |w| {
        w.line("type Err = std::convert::Infallible;");
        w.blank();
        w.block(
            "fn from_str(s: &str) -> std::result::Result<Self, Self::Err>",
            |w| {
                w.line(format!("Ok({}::from(s))", name));
            },
        );
    });

    w.block(format!("impl {}", name), |w| {
        w.doc("Returns the `&str` value of the enum member.");
        w.block("pub fn as_str(&self) -> &str", |w| {
            w.block("match self", |w| {
                for variant in &enumeration.variants {
                    w.line(format!(
                        "{}::{} => {},",
                        name,
                        variant.name,
                        string_literal(&variant.value)
                    ));
                }
                w.line(format!("{}::Unknown(s) => s.as_str(),", name));
            });
        });
        w.doc("Returns all the `&str` values of the enum members.");
        w.block("pub fn values() -> &'static [&'static str]", |w| {
            let values: Vec<String> = enumeration
                .variants
                .iter()
                .map(|variant| string_literal(&variant.value))
                .collect();
            w.line(format!("&[{}]", values.join(", ")));
        });
    });

    w.block(format!("impl std::convert::AsRef<str> for {}", name), |w| {
        w.block("fn as_ref(&self) -> &str", |w| {
            w.line("self.as_str()");
        });
    });

    w.block(format!("impl serde::Serialize for {}", name), |w| {
        w.block(
            "fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> where S: serde::Serializer",
            |w| {
                w.line("serializer.serialize_str(self.as_str())");
            },
        );
    });

    w.block(format!("impl<'de> serde::Deserialize<'de> for {}", name), |w| {
        w.block(
            "fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error> where D: serde::Deserializer<'de>",
            |w| {
                w.line("let value = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;");
                w.line(format!("Ok({}::from(value.as_str()))", name));
            },
        );
    });
}
