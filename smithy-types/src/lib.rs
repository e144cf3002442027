/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Runtime types used by code generated with `smithy-codegen`.

pub mod error;
pub mod instant;

pub use crate::error::{BuildError, Error};
pub use crate::instant::Instant;
