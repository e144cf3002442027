/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Generates Rust bindings for a Smithy service model.
//!
//! The generator reads a Smithy JSON AST model plus the `rust-codegen` plugin settings from a
//! `smithy-build.json` file, and renders five modules meant to be pulled into a crate with
//! `include!`:
//!
//! - `model`: shared structures and enums
//! - `input` / `output`: per-operation request and result structures
//! - `error`: modeled service errors and a per-operation error type
//! - `operation`: per-operation marker types tying the above together
//!
//! ```no_run
//! use smithy_codegen::model::Model;
//! use smithy_codegen::settings::CodegenSettings;
//!
//! # fn main() -> Result<(), smithy_codegen::error::CodegenError> {
//! let model = Model::from_file("model/glue.json")?;
//! let settings = CodegenSettings::from_file("smithy-build.json")?;
//! let modules = smithy_codegen::generate(&model, &settings)?;
//! modules.write_to(std::path::Path::new("target/generated"))?;
//! # Ok(())
//! # }
//! ```

pub mod docs;
pub mod error;
pub mod index;
pub mod model;
pub mod naming;
pub mod render;
pub mod settings;
pub mod shape_id;
pub mod symbol;
pub mod writer;

pub use render::GeneratedModules;

use crate::error::CodegenError;
use crate::index::ServiceIndex;
use crate::model::Model;
use crate::settings::CodegenSettings;

/// Generates the modules for the service named in `settings`.
pub fn generate(
    model: &Model,
    settings: &CodegenSettings,
) -> Result<GeneratedModules, CodegenError> {
    let index = ServiceIndex::build(model, settings)?;
    tracing::info!(
        service = %index.service,
        operations = index.operations.len(),
        structures = index.structures.len(),
        enums = index.enums.len(),
        "generating bindings"
    );
    Ok(render::render(&index, settings))
}
