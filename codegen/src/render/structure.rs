/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Structures, their accessors, and their builders.

use super::{string_literal, RenderContext};
use crate::index::{MemberIr, StructureIr};
use crate::symbol::{Module, RustType};
use crate::writer::RustWriter;

pub(crate) fn render(ctx: &RenderContext<'_>, w: &mut RustWriter, structure: &StructureIr) {
    let path = format!("{}::{}", structure.module.path(), structure.name);
    let builder_path = format!(
        "{}::{}::Builder",
        structure.module.path(),
        structure.builder_module()
    );

    w.blank();
    w.docs(structure.docs.as_deref());
    w.line("#[non_exhaustive]");
    w.line(derives(structure));
    w.block(format!("pub struct {}", structure.name), |w| {
        for member in &structure.members {
            render_member_docs(w, member);
            w.line(serde_attributes(ctx, structure, member));
            w.line(format!(
                "pub {}: std::option::Option<{}>,",
                member.field_name,
                member.ty.render(ctx.types_crate)
            ));
        }
    });

    if !structure.members.is_empty() {
        w.block(format!("impl {}", structure.name), |w| {
            for member in &structure.members {
                render_getter(ctx, w, member);
            }
        });
    }

    if structure.error.is_some() {
        render_error_impls(w, structure);
    }

    w.block(format!("impl {}", structure.name), |w| {
        w.doc(format!(
            "Creates a new builder-style object to manufacture [`{}`]({})",
            structure.name, path
        ));
        w.block(format!("pub fn builder() -> {}", builder_path), |w| {
            w.line(format!("{}::default()", builder_path));
        });
        if structure.module == Module::Input {
            render_make_request(w, structure);
        }
    });

    w.doc(format!("See [`{}`]({})", structure.name, path));
    w.block(format!("pub mod {}", structure.builder_module()), |w| {
        render_builder(ctx, w, structure, &path);
    });
}

fn derives(structure: &StructureIr) -> String {
    let mut derives = vec!["std::clone::Clone", "std::cmp::PartialEq"];
    if structure.derive_eq {
        derives.push("std::cmp::Eq");
        derives.push("std::hash::Hash");
    }
    derives.extend(["std::fmt::Debug", "serde::Serialize", "serde::Deserialize"]);
    format!("#[derive({})]", derives.join(", "))
}

fn serde_attributes(ctx: &RenderContext<'_>, structure: &StructureIr, member: &MemberIr) -> String {
    let mut attributes = vec![format!("rename = {}", string_literal(&member.wire_name))];
    // error bodies spell the message member either way
    if structure.error.is_some() && member.stem == "message" {
        let alias = if member.wire_name == "message" {
            "Message"
        } else {
            "message"
        };
        if member.wire_name != alias {
            attributes.push(format!("alias = {}", string_literal(alias)));
        }
    }
    attributes.push("default".to_owned());
    attributes.push("skip_serializing_if = \"std::option::Option::is_none\"".to_owned());
    if member.ty == RustType::Instant {
        attributes.push(format!(
            "with = \"{}::instant::epoch_seconds\"",
            ctx.types_crate
        ));
    }
    format!("#[serde({})]", attributes.join(", "))
}

fn render_member_docs(w: &mut RustWriter, member: &MemberIr) {
    w.docs(member.docs.as_deref());
    if member.required {
        if member.docs.is_some() {
            w.doc("");
        }
        w.doc("This member is required by the service model.");
    }
}

fn render_getter(ctx: &RenderContext<'_>, w: &mut RustWriter, member: &MemberIr) {
    let (return_type, body) = match &member.ty {
        RustType::String => ("std::option::Option<&str>".to_owned(), "as_deref()"),
        RustType::Vec(inner) => (
            format!("std::option::Option<&[{}]>", inner.render(ctx.types_crate)),
            "as_deref()",
        ),
        ty if ty.is_copy() => (
            format!("std::option::Option<{}>", ty.render(ctx.types_crate)),
            "",
        ),
        ty => (
            format!("std::option::Option<&{}>", ty.render(ctx.types_crate)),
            "as_ref()",
        ),
    };
    render_member_docs(w, member);
    w.block(
        format!("pub fn {}(&self) -> {}", member.field_name, return_type),
        |w| {
            if body.is_empty() {
                w.line(format!("self.{}", member.field_name));
            } else {
                w.line(format!("self.{}.{}", member.field_name, body));
            }
        },
    );
}

fn render_error_impls(w: &mut RustWriter, structure: &StructureIr) {
    w.block(format!("impl std::fmt::Display for {}", structure.name), |w| {
        w.block(
            "fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result",
            |w| {
                w.line(format!("write!(f, {})?;", string_literal(&structure.name)));
                if let Some(message) = structure.message_member() {
                    w.block(
                        format!("if let Some(inner_1) = &self.{}", message.field_name),
                        |w| {
                            w.line("write!(f, \": {}\", inner_1)?;");
                        },
                    );
                }
                w.line("Ok(())");
            },
        );
    });
    w.line(format!("impl std::error::Error for {} {{}}", structure.name));
}

fn render_make_request(w: &mut RustWriter, structure: &StructureIr) {
    let operation = structure
        .name
        .strip_suffix("Input")
        .unwrap_or(&structure.name);
    w.doc(format!(
        "Serializes this input into an `awsJson1_1` request for the [`{op}`](crate::operation::{op}) operation.",
        op = operation
    ));
    w.block(
        "pub fn make_request(&self) -> std::result::Result<http::Request<bytes::Bytes>, crate::protocol::SerializationError>",
        |w| {
            w.line(format!(
                "crate::protocol::serialize_request::<crate::operation::{}>(self)",
                operation
            ));
        },
    );
}

fn render_builder(
    ctx: &RenderContext<'_>,
    w: &mut RustWriter,
    structure: &StructureIr,
    path: &str,
) {
    let has_maps = structure.has_maps();
    let build_error = format!("{}::error::BuildError", ctx.types_crate);

    w.doc(format!("A builder for [`{}`]({})", structure.name, path));
    w.line("#[non_exhaustive]");
    w.line("#[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]");
    w.block("pub struct Builder", |w| {
        for member in &structure.members {
            w.line(format!(
                "pub(crate) {}: std::option::Option<{}>,",
                member.field_name,
                member.ty.render(ctx.types_crate)
            ));
        }
        if has_maps {
            w.line(format!(
                "pub(crate) build_error: std::option::Option<{}>,",
                build_error
            ));
        }
    });

    w.block("impl Builder", |w| {
        for member in &structure.members {
            render_member_setters(ctx, w, member, &build_error);
        }

        w.doc(format!(
            "Consumes the builder and constructs a [`{}`]({})",
            structure.name, path
        ));
        if has_maps {
            w.doc("");
            w.doc("Fails with the first rejected input, such as a key added to a map member twice.");
            w.block(
                format!(
                    "pub fn build(self) -> std::result::Result<{}, {}>",
                    path, build_error
                ),
                |w| {
                    w.block("if let Some(err) = self.build_error", |w| {
                        w.line("return Err(err);");
                    });
                    w.block_closed_by(format!("Ok({}", path), "})", |w| {
                        render_field_moves(w, structure);
                    });
                },
            );
        } else {
            w.block(format!("pub fn build(self) -> {}", path), |w| {
                w.block(path, |w| {
                    render_field_moves(w, structure);
                });
            });
        }
    });
}

fn render_field_moves(w: &mut RustWriter, structure: &StructureIr) {
    for member in &structure.members {
        w.line(format!("{field}: self.{field},", field = member.field_name));
    }
}

fn render_member_setters(
    ctx: &RenderContext<'_>,
    w: &mut RustWriter,
    member: &MemberIr,
    build_error: &str,
) {
    let field = &member.field_name;
    let full_type = member.ty.render(ctx.types_crate);
    match &member.ty {
        RustType::Vec(inner) => {
            let param = Param::new(ctx, inner);
            w.doc(format!("Appends an item to `{}`.", member.stem));
            w.doc("");
            w.doc(format!(
                "To override the contents of this collection use [`set_{}`](Self::set_{}).",
                member.stem, member.stem
            ));
            w.doc("");
            w.docs(member.docs.as_deref());
            w.block(format!("pub fn {}(mut self, input: {}) -> Self", field, param.ty), |w| {
                w.line(format!("let mut v = self.{}.unwrap_or_default();", field));
                w.line(format!("v.push({});", param.value("input")));
                w.line(format!("self.{} = Some(v);", field));
                w.line("self");
            });
        }
        RustType::HashMap(key, value_ty) => {
            let key_param = Param::new(ctx, key);
            let value_param = Param::new(ctx, value_ty);
            w.doc(format!("Adds a key-value pair to `{}`.", member.stem));
            w.doc("");
            w.doc(format!(
                "Adding a key that is already present keeps the existing entry and makes `build()` fail. To override the contents of this collection use [`set_{}`](Self::set_{}).",
                member.stem, member.stem
            ));
            w.doc("");
            w.docs(member.docs.as_deref());
            w.block(
                format!(
                    "pub fn {}(mut self, k: {}, v: {}) -> Self",
                    field, key_param.ty, value_param.ty
                ),
                |w| {
                    w.line(format!("let mut hash_map = self.{}.unwrap_or_default();", field));
                    w.block(format!("match hash_map.entry({})", key_param.value("k")), |w| {
                        w.block("std::collections::hash_map::Entry::Occupied(entry) =>", |w| {
                            w.block("if self.build_error.is_none()", |w| {
                                w.line(format!(
                                    "self.build_error = Some({}::duplicate_map_key({}, entry.key().as_str()));",
                                    build_error,
                                    string_literal(&member.stem)
                                ));
                            });
                        });
                        w.block("std::collections::hash_map::Entry::Vacant(entry) =>", |w| {
                            w.line(format!("entry.insert({});", value_param.value("v")));
                        });
                    });
                    w.line(format!("self.{} = Some(hash_map);", field));
                    w.line("self");
                },
            );
        }
        ty => {
            let param = Param::new(ctx, ty);
            w.docs(member.docs.as_deref());
            w.block(format!("pub fn {}(mut self, input: {}) -> Self", field, param.ty), |w| {
                w.line(format!("self.{} = Some({});", field, param.value("input")));
                w.line("self");
            });
        }
    }

    w.docs(member.docs.as_deref());
    w.block(
        format!(
            "pub fn set_{}(mut self, input: std::option::Option<{}>) -> Self",
            member.stem, full_type
        ),
        |w| {
            w.line(format!("self.{} = input;", field));
            w.line("self");
        },
    );
    w.docs(member.docs.as_deref());
    w.block(
        format!(
            "pub fn get_{}(&self) -> &std::option::Option<{}>",
            member.stem, full_type
        ),
        |w| {
            w.line(format!("&self.{}", field));
        },
    );
}

/// Setter parameter for a member value.
struct Param {
    ty: String,
    into: bool,
}

impl Param {
    fn new(ctx: &RenderContext<'_>, ty: &RustType) -> Param {
        if *ty == RustType::String {
            Param {
                ty: "impl std::convert::Into<std::string::String>".to_owned(),
                into: true,
            }
        } else {
            Param {
                ty: ty.render(ctx.types_crate),
                into: false,
            }
        }
    }

    /// Expression turning the argument `arg` into the stored value.
    fn value(&self, arg: &str) -> String {
        if self.into {
            format!("{}.into()", arg)
        } else {
            arg.to_owned()
        }
    }
}
