/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::fmt;

/// Generated module a named type lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Module {
    Model,
    Input,
    Output,
    Error,
    Operation,
}

impl Module {
    pub fn name(self) -> &'static str {
        match self {
            Module::Model => "model",
            Module::Input => "input",
            Module::Output => "output",
            Module::Error => "error",
            Module::Operation => "operation",
        }
    }

    /// Absolute path of the module within the generated crate.
    pub fn path(self) -> String {
        format!("crate::{}", self.name())
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedKind {
    Structure,
    Enum,
}

/// Rust type of a structure member, without the `Option` wrapper every member carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RustType {
    String,
    Bool,
    I8,
    I16,
    I32,
    I64,
    F32,
    F64,
    Instant,
    Vec(Box<RustType>),
    HashMap(Box<RustType>, Box<RustType>),
    Named {
        module: Module,
        name: String,
        kind: NamedKind,
    },
}

impl RustType {
    /// Renders the fully qualified type.
    pub fn render(&self, types_crate: &str) -> String {
        match self {
            RustType::String => "std::string::String".to_owned(),
            RustType::Bool => "bool".to_owned(),
            RustType::I8 => "i8".to_owned(),
            RustType::I16 => "i16".to_owned(),
            RustType::I32 => "i32".to_owned(),
            RustType::I64 => "i64".to_owned(),
            RustType::F32 => "f32".to_owned(),
            RustType::F64 => "f64".to_owned(),
            RustType::Instant => format!("{}::Instant", types_crate),
            RustType::Vec(member) => format!("std::vec::Vec<{}>", member.render(types_crate)),
            RustType::HashMap(key, value) => format!(
                "std::collections::HashMap<{}, {}>",
                key.render(types_crate),
                value.render(types_crate)
            ),
            RustType::Named { module, name, .. } => format!("{}::{}", module.path(), name),
        }
    }

    /// Whether the type is `Copy` and therefore returned by value from getters.
    pub fn is_copy(&self) -> bool {
        matches!(
            self,
            RustType::Bool
                | RustType::I8
                | RustType::I16
                | RustType::I32
                | RustType::I64
                | RustType::F32
                | RustType::F64
        )
    }

    pub fn is_float(&self) -> bool {
        matches!(self, RustType::F32 | RustType::F64)
    }

    pub fn is_map(&self) -> bool {
        matches!(self, RustType::HashMap(..))
    }
}

#[cfg(test)]
mod test {
    use super::{Module, NamedKind, RustType};

    #[test]
    fn renders_fully_qualified_paths() {
        let ty = RustType::HashMap(
            Box::new(RustType::Named {
                module: Module::Model,
                name: "ConnectionPropertyKey".to_owned(),
                kind: NamedKind::Enum,
            }),
            Box::new(RustType::Vec(Box::new(RustType::Instant))),
        );
        assert_eq!(
            ty.render("smithy_types"),
            "std::collections::HashMap<crate::model::ConnectionPropertyKey, std::vec::Vec<smithy_types::Instant>>"
        );
        assert_eq!(RustType::String.render("smithy_types"), "std::string::String");
        assert!(RustType::F64.is_copy());
        assert!(!RustType::Instant.is_copy());
    }
}
