/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Per-operation error types wrapping the modeled errors each operation can return.

use super::{string_literal, RenderContext};
use crate::index::OperationIr;
use crate::naming;
use crate::symbol::Module;
use crate::writer::RustWriter;

const BOXED_ERROR: &str =
    "std::boxed::Box<dyn std::error::Error + std::marker::Send + std::marker::Sync + 'static>";

pub(crate) fn render_operation_error(
    ctx: &RenderContext<'_>,
    w: &mut RustWriter,
    operation: &OperationIr,
) {
    let error = operation.error_name();
    let kind = operation.error_kind_name();
    let meta = format!("{}::Error", ctx.types_crate);

    w.blank();
    w.doc(format!("Error type for the `{}` operation.", operation.name));
    w.line("#[non_exhaustive]");
    w.line("#[derive(std::fmt::Debug)]");
    w.block(format!("pub struct {}", error), |w| {
        w.doc("Kind of error that occurred.");
        w.line(format!("pub kind: {},", kind));
        w.doc("Additional metadata about the error, including error code, message, and request ID.");
        w.line(format!("pub(crate) meta: {},", meta));
    });

    w.doc(format!(
        "Types of errors that can occur for the `{}` operation.",
        operation.name
    ));
    w.line("#[non_exhaustive]");
    w.line("#[derive(std::fmt::Debug)]");
    w.block(format!("pub enum {}", kind), |w| {
        for variant in &operation.errors {
            let docs = ctx
                .index
                .structure(Module::Error, variant)
                .and_then(|structure| structure.docs.as_deref());
            w.docs(docs);
            w.line(format!("{}(crate::error::{}),", variant, variant));
        }
        w.doc("An unexpected error, e.g. invalid JSON returned by the service or an unknown error code");
        w.line(format!("Unhandled({}),", BOXED_ERROR));
    });

    w.block(format!("impl std::fmt::Display for {}", error), |w| {
        w.block(
            "fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result",
            |w| {
                w.block("match &self.kind", |w| {
                    for variant in &operation.errors {
                        w.line(format!(
                            "{}::{}(_inner) => std::fmt::Display::fmt(_inner, f),",
                            kind, variant
                        ));
                    }
                    w.line(format!(
                        "{}::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),",
                        kind
                    ));
                });
            },
        );
    });

    w.block(format!("impl {}", error), |w| {
        w.doc(format!("Creates a new `{}`.", error));
        w.block(format!("pub fn new(kind: {}, meta: {}) -> Self", kind, meta), |w| {
            w.line("Self { kind, meta }");
        });
        w.blank();
        w.doc(format!(
            "Creates the `{}::Unhandled` variant from any error type.",
            error
        ));
        w.block(
            format!(
                "pub fn unhandled(err: impl std::convert::Into<{}>) -> Self",
                BOXED_ERROR
            ),
            |w| {
                w.block_closed_by("Self", "}", |w| {
                    w.line(format!("kind: {}::Unhandled(err.into()),", kind));
                    w.line("meta: std::default::Default::default(),");
                });
            },
        );
        w.blank();
        w.doc(format!(
            "Creates the `{}::Unhandled` variant from generic error metadata.",
            error
        ));
        w.block(format!("pub fn generic(err: {}) -> Self", meta), |w| {
            w.block_closed_by("Self", "}", |w| {
                w.line("meta: err.clone(),");
                w.line(format!("kind: {}::Unhandled(err.into()),", kind));
            });
        });
        w.blank();
        w.doc("Returns the error message if one is available.");
        w.block("pub fn message(&self) -> std::option::Option<&str>", |w| {
            w.line("self.meta.message()");
        });
        w.blank();
        w.doc("Returns error metadata, which includes the error code, message, request ID, and potentially additional information.");
        w.block(format!("pub fn meta(&self) -> &{}", meta), |w| {
            w.line("&self.meta");
        });
        w.blank();
        w.doc("Returns the request ID if it's available.");
        w.block("pub fn request_id(&self) -> std::option::Option<&str>", |w| {
            w.line("self.meta.request_id()");
        });
        w.blank();
        w.doc("Returns the error code if it's available.");
        w.block("pub fn code(&self) -> std::option::Option<&str>", |w| {
            w.line("self.meta.code()");
        });
        for variant in &operation.errors {
            w.blank();
            w.doc(format!(
                "Returns `true` if the error kind is `{}::{}`.",
                kind, variant
            ));
            w.block(
                format!("pub fn is_{}(&self) -> bool", naming::to_snake_case(variant)),
                |w| {
                    w.line(format!("matches!(&self.kind, {}::{}(_))", kind, variant));
                },
            );
        }
    });

    w.block(format!("impl std::error::Error for {}", error), |w| {
        w.block(
            "fn source(&self) -> std::option::Option<&(dyn std::error::Error + 'static)>",
            |w| {
                w.block("match &self.kind", |w| {
                    for variant in &operation.errors {
                        w.line(format!("{}::{}(_inner) => Some(_inner),", kind, variant));
                    }
                    w.line(format!(
                        "{}::Unhandled(_inner) => Some(_inner.as_ref()),",
                        kind
                    ));
                });
            },
        );
    });

    w.block(
        format!("impl crate::protocol::ParseErrorResponse for {}", error),
        |w| {
            let body = if operation.errors.is_empty() {
                "_body"
            } else {
                "body"
            };
            w.block(
                format!("fn from_error_response(meta: {}, {}: &[u8]) -> Self", meta, body),
                |w| {
                    if operation.errors.is_empty() {
                        w.line("Self::generic(meta)");
                        return;
                    }
                    w.line("let code = meta.code().unwrap_or_default().to_owned();");
                    w.block("match code.as_str()", |w| {
                        for variant in &operation.errors {
                            w.block_closed_by(
                                format!(
                                    "{} => match serde_json::from_slice::<crate::error::{}>(body)",
                                    string_literal(variant),
                                    variant
                                ),
                                "},",
                                |w| {
                                    w.line(format!(
                                        "Ok(inner) => Self::new({}::{}(inner), meta),",
                                        kind, variant
                                    ));
                                    w.line(format!(
                                        "Err(err) => Self::new({}::Unhandled(err.into()), meta),",
                                        kind
                                    ));
                                },
                            );
                        }
                        w.line("_ => Self::generic(meta),");
                    });
                },
            );
            w.blank();
            w.block(format!("fn from_unhandled(err: {}) -> Self", BOXED_ERROR), |w| {
                w.line("Self::unhandled(err)");
            });
        },
    );
}
