/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Settings for the `rust-codegen` plugin, read out of `smithy-build.json`.

use crate::error::CodegenError;
use crate::shape_id::ShapeId;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;

pub const PLUGIN_NAME: &str = "rust-codegen";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodegenSettings {
    /// Service shape to generate bindings for.
    pub service: ShapeId,
    /// Name of the crate the generated modules are compiled into.
    pub module: String,
    #[serde(default)]
    pub runtime_config: RuntimeConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeConfig {
    /// Path generated code uses to reach the `smithy-types` crate.
    #[serde(default = "default_types_crate")]
    pub types_crate: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        RuntimeConfig {
            types_crate: default_types_crate(),
        }
    }
}

fn default_types_crate() -> String {
    "smithy_types".to_owned()
}

#[derive(Debug, Deserialize)]
struct SmithyBuildRoot {
    #[serde(default)]
    plugins: BTreeMap<String, Value>,
    #[serde(default)]
    projections: BTreeMap<String, SmithyBuildProjection>,
}

#[derive(Debug, Deserialize)]
struct SmithyBuildProjection {
    #[serde(default)]
    plugins: BTreeMap<String, Value>,
}

impl CodegenSettings {
    /// Reads the `rust-codegen` plugin settings from a `smithy-build.json` document.
    ///
    /// Top-level plugin settings take precedence. Otherwise exactly one projection must
    /// configure the plugin.
    pub fn from_slice(bytes: &[u8]) -> Result<CodegenSettings, CodegenError> {
        let root: SmithyBuildRoot = serde_json::from_slice(bytes)
            .map_err(|err| CodegenError::json("smithy-build.json", err))?;
        let plugin = match root.plugins.get(PLUGIN_NAME) {
            Some(plugin) => plugin,
            None => {
                let mut configured = root
                    .projections
                    .values()
                    .filter_map(|projection| projection.plugins.get(PLUGIN_NAME));
                match (configured.next(), configured.next()) {
                    (Some(plugin), None) => plugin,
                    (None, _) => {
                        return Err(CodegenError::Settings(format!(
                            "no `{}` plugin is configured",
                            PLUGIN_NAME
                        )))
                    }
                    (Some(_), Some(_)) => {
                        return Err(CodegenError::Settings(format!(
                            "more than one projection configures `{}`",
                            PLUGIN_NAME
                        )))
                    }
                }
            }
        };
        let settings = CodegenSettings::deserialize(plugin)
            .map_err(|err| CodegenError::Settings(err.to_string()))?;
        if settings.service.namespace().is_none() {
            return Err(CodegenError::Settings(format!(
                "`service` must be an absolute shape ID, found `{}`",
                settings.service
            )));
        }
        Ok(settings)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<CodegenSettings, CodegenError> {
        let path = path.as_ref();
        let contents = std::fs::read(path).map_err(|err| CodegenError::io(path, err))?;
        Self::from_slice(&contents)
    }
}
