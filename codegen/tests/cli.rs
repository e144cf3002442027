/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use pretty_assertions::assert_eq;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

const GENERATED_FILES: [&str; 5] = ["error.rs", "input.rs", "model.rs", "operation.rs", "output.rs"];

fn glue_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../glue")
}

fn run(args: &[&OsStr]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_smithy-codegen"))
        .args(args)
        .env("RUST_LOG", "error")
        .output()
        .unwrap()
}

fn codegen(model: &Path, settings: &Path, output_dir: &Path, dry_run: bool) -> Output {
    let mut args = vec![
        OsStr::new("--model"),
        model.as_os_str(),
        OsStr::new("--settings"),
        settings.as_os_str(),
        OsStr::new("--output-dir"),
        output_dir.as_os_str(),
    ];
    if dry_run {
        args.push(OsStr::new("--dry-run"));
    }
    run(&args)
}

fn listing(dir: &Path) -> Vec<String> {
    let mut names: Vec<_> = std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn writes_every_module() {
    let out = tempfile::tempdir().unwrap();
    let glue = glue_dir();
    let output = codegen(
        &glue.join("model/glue.json"),
        &glue.join("smithy-build.json"),
        out.path(),
        false,
    );
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(listing(out.path()), GENERATED_FILES);
    let operation = std::fs::read_to_string(out.path().join("operation.rs")).unwrap();
    assert!(operation.contains("const TARGET: &'static str = \"AWSGlue.GetDatabase\";"));
}

#[test]
fn dry_run_writes_nothing() {
    let out = tempfile::tempdir().unwrap();
    let glue = glue_dir();
    let output = codegen(
        &glue.join("model/glue.json"),
        &glue.join("smithy-build.json"),
        out.path(),
        true,
    );
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(listing(out.path()).is_empty());
}

#[test]
fn failures_report_the_context_chain() {
    let out = tempfile::tempdir().unwrap();
    let missing = out.path().join("missing.json");
    let output = codegen(
        &missing,
        &glue_dir().join("smithy-build.json"),
        out.path(),
        false,
    );
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains(&format!("failed to load model {}", missing.display())),
        "stderr: {}",
        stderr
    );
    assert!(stderr.contains("Caused by:"), "stderr: {}", stderr);

    let settings = out.path().join("smithy-build.json");
    std::fs::write(&settings, r#"{"version": "1.0"}"#).unwrap();
    let output = codegen(
        &glue_dir().join("model/glue.json"),
        &settings,
        out.path(),
        false,
    );
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to load settings"), "stderr: {}", stderr);
    assert!(
        stderr.contains("no `rust-codegen` plugin is configured"),
        "stderr: {}",
        stderr
    );
    assert_eq!(listing(out.path()), vec!["smithy-build.json"]);
}

#[test]
fn required_flags_are_enforced() {
    let output = run(&[OsStr::new("--model"), OsStr::new("model.json")]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--settings"), "stderr: {}", stderr);
}
