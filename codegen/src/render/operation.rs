/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use super::string_literal;
use crate::index::OperationIr;
use crate::naming;
use crate::writer::RustWriter;

pub(crate) fn render(w: &mut RustWriter, operations: &[OperationIr]) {
    for operation in operations {
        render_operation(w, operation);
    }

    w.blank();
    w.doc("Names of every operation the service supports, in alphabetical order.");
    w.line("pub const OPERATION_NAMES: &[&str] = &[");
    for operation in operations {
        w.line(format!("    {},", string_literal(&operation.name)));
    }
    w.line("];");
}

fn render_operation(w: &mut RustWriter, operation: &OperationIr) {
    let name = &operation.name;
    let input_builder = format!(
        "crate::input::{}::Builder",
        naming::escape_keyword(naming::to_snake_case(&operation.input))
    );

    w.blank();
    w.docs(operation.docs.as_deref());
    w.line("#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]");
    w.block(format!("pub struct {}", name), |w| {
        w.line("_private: (),");
    });
    w.block(format!("impl {}", name), |w| {
        w.doc(format!("Creates a new `{}` operation.", name));
        w.block("pub fn new() -> Self", |w| {
            w.line("Self { _private: () }");
        });
        w.blank();
        w.doc(format!(
            "Creates a new builder-style object to manufacture [`{input}`](crate::input::{input})",
            input = operation.input
        ));
        w.block(format!("pub fn builder() -> {}", input_builder), |w| {
            w.line(format!("crate::input::{}::builder()", operation.input));
        });
    });
    w.block(
        format!("impl crate::protocol::OperationShape for {}", name),
        |w| {
            w.line(format!("const NAME: &'static str = {};", string_literal(name)));
            w.line(format!(
                "const TARGET: &'static str = {};",
                string_literal(&operation.target)
            ));
            w.line(format!("type Input = crate::input::{};", operation.input));
            w.line(format!("type Output = crate::output::{};", operation.output));
            w.line(format!("type Error = crate::error::{};", operation.error_name()));
        },
    );
}
