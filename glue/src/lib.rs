/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Typed request, result, and data types for the AWS Glue API.
//!
//! Every type is generated at build time from `model/glue.json`. Each operation `Op` has:
//!
//! - [`input::OpInput`](input) with a builder, and [`output::OpOutput`](output)
//! - [`error::OpError`](error) wrapping the modeled errors the operation can return
//! - [`operation::Op`](operation), which ties the three together for the [`protocol`] helpers
//!
//! All members are optional. Builders for shapes with map members reject adding the same key
//! twice:
//!
//! ```
//! let err = glue::model::Column::builder()
//!     .name("id")
//!     .parameters("comment", "primary key")
//!     .parameters("comment", "again")
//!     .build()
//!     .unwrap_err();
//! assert!(err.is_duplicate_map_key());
//! ```

/// Data types shared between operations.
pub mod model {
    include!(concat!(env!("OUT_DIR"), "/model.rs"));
}

/// Operation requests.
pub mod input {
    include!(concat!(env!("OUT_DIR"), "/input.rs"));
}

/// Operation results.
pub mod output {
    include!(concat!(env!("OUT_DIR"), "/output.rs"));
}

/// Modeled service errors and per-operation error types.
pub mod error {
    include!(concat!(env!("OUT_DIR"), "/error.rs"));
}

/// Marker types for each operation.
pub mod operation {
    include!(concat!(env!("OUT_DIR"), "/operation.rs"));
}

pub mod protocol;

pub use smithy_types::error::BuildError;
pub use smithy_types::Error;
pub use smithy_types::Instant;
