/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Generic error metadata and builder errors for generated shapes.

use std::collections::HashMap;
use std::fmt;

const REQUEST_ID: &str = "request_id";

/// Generic Error type
///
/// Services only model some of the errors they return. When an error response can't be matched
/// to a modeled error, this type still exposes its `code`, `message` and `request_id`.
#[derive(Debug, Eq, PartialEq, Default, Clone)]
pub struct Error {
    code: Option<String>,
    message: Option<String>,
    extras: Option<HashMap<&'static str, String>>,
}

/// Builder for [`Error`].
#[derive(Debug, Default)]
pub struct Builder {
    inner: Error,
}

impl Builder {
    /// Sets the error message.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.inner.message = Some(message.into());
        self
    }

    /// Sets the error code.
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.inner.code = Some(code.into());
        self
    }

    /// Sets the ID of the request that failed.
    pub fn request_id(self, request_id: impl Into<String>) -> Self {
        self.custom(REQUEST_ID, request_id)
    }

    /// Set a custom field on the error metadata
    pub fn custom(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.inner
            .extras
            .get_or_insert_with(HashMap::new)
            .insert(key, value.into());
        self
    }

    /// Creates the error.
    pub fn build(self) -> Error {
        self.inner
    }
}

impl Error {
    /// Returns the error code.
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// Returns the error message.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Returns the request ID the service assigned to the failed request, if it sent one.
    pub fn request_id(&self) -> Option<&str> {
        self.extra(REQUEST_ID)
    }

    /// Returns additional information about the error if it's present.
    pub fn extra(&self, key: &'static str) -> Option<&str> {
        self.extras
            .as_ref()
            .and_then(|extras| extras.get(key).map(|k| k.as_str()))
    }

    /// Creates an `Error` builder.
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Converts an `Error` into a builder.
    pub fn into_builder(self) -> Builder {
        Builder { inner: self }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut fmt = f.debug_struct("Error");
        if let Some(code) = &self.code {
            fmt.field("code", code);
        }
        if let Some(message) = &self.message {
            fmt.field("message", message);
        }
        if let Some(extras) = &self.extras {
            let mut extras: Vec<_> = extras.iter().collect();
            extras.sort();
            for (k, v) in extras {
                fmt.field(k, &v);
            }
        }
        fmt.finish()
    }
}

impl std::error::Error for Error {}

#[derive(Debug, Clone, PartialEq, Eq)]
enum BuildErrorKind {
    DuplicateMapKey { field: &'static str, key: String },
}

/// Error produced when a builder is given inputs it can't accept.
///
/// Builders of shapes with map members record the first rejected input and return it from
/// `build()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildError {
    kind: BuildErrorKind,
}

impl BuildError {
    /// A key was added to the map member `field` twice.
    pub fn duplicate_map_key(field: &'static str, key: impl Into<String>) -> Self {
        BuildError {
            kind: BuildErrorKind::DuplicateMapKey {
                field,
                key: key.into(),
            },
        }
    }

    /// Name of the member the rejected input was given for.
    pub fn field(&self) -> &'static str {
        match &self.kind {
            BuildErrorKind::DuplicateMapKey { field, .. } => field,
        }
    }

    /// The duplicated key, for duplicate key errors.
    pub fn key(&self) -> Option<&str> {
        match &self.kind {
            BuildErrorKind::DuplicateMapKey { key, .. } => Some(key),
        }
    }

    pub fn is_duplicate_map_key(&self) -> bool {
        matches!(self.kind, BuildErrorKind::DuplicateMapKey { .. })
    }
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            BuildErrorKind::DuplicateMapKey { field, key } => {
                write!(f, "duplicate key `{}` provided for `{}`", key, field)
            }
        }
    }
}

impl std::error::Error for BuildError {}
