/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use serde::Deserialize;
use std::fmt;

/// A Smithy Shape ID.
///
/// Shape IDs uniquely identify shapes in a Smithy model.
/// Format: `namespace#shapeName` or `namespace#shapeName$memberName`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(transparent)]
pub struct ShapeId {
    value: String,
}

impl ShapeId {
    /// Creates a new ShapeId from a string.
    ///
    /// # Examples
    /// ```
    /// use smithy_codegen::shape_id::ShapeId;
    ///
    /// let shape_id = ShapeId::new("com.amazonaws.glue#Table");
    /// ```
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Creates a ShapeId out of a namespace and a shape name.
    pub fn from_parts(namespace: &str, shape_name: &str) -> Self {
        Self::new(format!("{}#{}", namespace, shape_name))
    }

    /// Returns the string representation of this ShapeId.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Returns the namespace portion of the ShapeId.
    ///
    /// # Examples
    /// ```
    /// use smithy_codegen::shape_id::ShapeId;
    ///
    /// let shape_id = ShapeId::new("smithy.api#String");
    /// assert_eq!(shape_id.namespace(), Some("smithy.api"));
    /// ```
    pub fn namespace(&self) -> Option<&str> {
        self.value.split_once('#').map(|(ns, _)| ns)
    }

    /// Returns the shape name portion of the ShapeId.
    pub fn shape_name(&self) -> Option<&str> {
        self.value
            .split_once('#')
            .and_then(|(_, rest)| rest.split_once('$').map(|(name, _)| name).or(Some(rest)))
    }

    /// Returns the member name if this is a member shape ID.
    pub fn member_name(&self) -> Option<&str> {
        self.value
            .split_once('#')
            .and_then(|(_, rest)| rest.split_once('$').map(|(_, member)| member))
    }

    /// Name of the shape, falling back to the full ID when it carries no namespace.
    pub(crate) fn name(&self) -> &str {
        self.shape_name().unwrap_or(&self.value)
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl From<String> for ShapeId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for ShapeId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}
