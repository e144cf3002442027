/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Renders a [`ServiceIndex`] into the source of the generated modules.
//!
//! Each module is written as a file of items meant to be pulled in with `include!`, so no
//! file carries inner attributes or inner doc comments.

use crate::error::CodegenError;
use crate::index::{ServiceIndex, StructureIr};
use crate::settings::CodegenSettings;
use crate::symbol::Module;
use crate::writer::RustWriter;
use std::path::Path;
use tracing::{debug, trace};

mod enumeration;
mod error;
mod operation;
mod structure;

/// Source of each generated module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedModules {
    pub model: String,
    pub input: String,
    pub output: String,
    pub error: String,
    pub operation: String,
}

impl GeneratedModules {
    /// File name and contents of each module.
    pub fn files(&self) -> [(&'static str, &str); 5] {
        [
            ("model.rs", self.model.as_str()),
            ("input.rs", self.input.as_str()),
            ("output.rs", self.output.as_str()),
            ("error.rs", self.error.as_str()),
            ("operation.rs", self.operation.as_str()),
        ]
    }

    /// Writes every module into `dir`, leaving files whose contents haven't changed untouched.
    pub fn write_to(&self, dir: &Path) -> Result<(), CodegenError> {
        std::fs::create_dir_all(dir).map_err(|err| CodegenError::io(dir, err))?;
        for (name, contents) in self.files() {
            let path = dir.join(name);
            if std::fs::read_to_string(&path).ok().as_deref() == Some(contents) {
                debug!("{} is up to date", path.display());
                continue;
            }
            std::fs::write(&path, contents).map_err(|err| CodegenError::io(&path, err))?;
            debug!("wrote {}", path.display());
        }
        Ok(())
    }
}

/// Shared state for the renderers.
pub(crate) struct RenderContext<'a> {
    pub(crate) index: &'a ServiceIndex,
    pub(crate) types_crate: &'a str,
}

pub fn render(index: &ServiceIndex, settings: &CodegenSettings) -> GeneratedModules {
    let ctx = RenderContext {
        index,
        types_crate: &settings.runtime_config.types_crate,
    };

    let mut model = module_writer(index);
    for structure in index.structures_in(Module::Model) {
        render_structure(&ctx, &mut model, structure);
    }
    for enumeration in &index.enums {
        trace!(shape = %enumeration.shape_id, "rendering enum {}", enumeration.name);
        enumeration::render(&mut model, enumeration);
    }

    let mut input = module_writer(index);
    for structure in index.structures_in(Module::Input) {
        render_structure(&ctx, &mut input, structure);
    }

    let mut output = module_writer(index);
    for structure in index.structures_in(Module::Output) {
        render_structure(&ctx, &mut output, structure);
    }

    let mut errors = module_writer(index);
    for operation in &index.operations {
        error::render_operation_error(&ctx, &mut errors, operation);
    }
    for structure in index.structures_in(Module::Error) {
        render_structure(&ctx, &mut errors, structure);
    }

    let mut operations = module_writer(index);
    operation::render(&mut operations, &index.operations);

    GeneratedModules {
        model: model.into_string(),
        input: input.into_string(),
        output: output.into_string(),
        error: errors.into_string(),
        operation: operations.into_string(),
    }
}

fn render_structure(ctx: &RenderContext<'_>, w: &mut RustWriter, structure: &StructureIr) {
    debug!(
        shape = %structure.shape_id,
        module = structure.module.name(),
        derive_eq = structure.derive_eq,
        "rendering {}",
        structure.name
    );
    structure::render(ctx, w, structure);
}

fn module_writer(index: &ServiceIndex) -> RustWriter {
    let mut writer = RustWriter::new();
    writer.line(format!(
        "// Code generated by smithy-codegen from {} ({}). DO NOT EDIT.",
        index.service, index.version
    ));
    writer
}

/// Renders `value` as a Rust string literal.
pub(crate) fn string_literal(value: &str) -> String {
    format!("{:?}", value)
}
