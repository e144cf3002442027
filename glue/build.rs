/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use smithy_codegen::model::Model;
use smithy_codegen::settings::CodegenSettings;
use std::path::PathBuf;

const MODEL: &str = "model/glue.json";
const SETTINGS: &str = "smithy-build.json";

fn main() {
    println!("cargo:rerun-if-changed={}", MODEL);
    println!("cargo:rerun-if-changed={}", SETTINGS);
    println!("cargo:rerun-if-changed=build.rs");

    let out_dir = PathBuf::from(std::env::var_os("OUT_DIR").expect("cargo sets OUT_DIR"));
    if let Err(err) = generate(&out_dir) {
        panic!("failed to generate Glue bindings: {}", error_chain(&err));
    }
}

fn generate(out_dir: &std::path::Path) -> Result<(), smithy_codegen::error::CodegenError> {
    let model = Model::from_file(MODEL)?;
    let settings = CodegenSettings::from_file(SETTINGS)?;
    smithy_codegen::generate(&model, &settings)?.write_to(out_dir)
}

fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
