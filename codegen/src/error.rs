/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::shape_id::ShapeId;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CodegenError {
    #[error("failed to access {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{context} is not valid JSON")]
    Json {
        context: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("unsupported Smithy IDL version `{0}`")]
    Version(String),
    #[error("invalid codegen settings: {0}")]
    Settings(String),
    #[error("shape {0} is referenced but not defined in the model")]
    MissingShape(ShapeId),
    #[error("expected {id} to be a {expected} shape")]
    UnexpectedShape { id: ShapeId, expected: &'static str },
    #[error("{id}: {reason}")]
    Unsupported { id: ShapeId, reason: String },
    #[error("shapes {first} and {second} both generate `{module}::{name}`")]
    NameConflict {
        module: &'static str,
        name: String,
        first: ShapeId,
        second: ShapeId,
    },
    #[error("service {0} does not declare a supported protocol (expected aws.protocols#awsJson1_1)")]
    Protocol(ShapeId),
}

impl CodegenError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CodegenError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn json(context: impl Into<String>, source: serde_json::Error) -> Self {
        CodegenError::Json {
            context: context.into(),
            source,
        }
    }
}
