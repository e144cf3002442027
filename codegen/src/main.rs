/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use anyhow::{Context, Result};
use clap::Parser;
use smithy_codegen::model::Model;
use smithy_codegen::settings::CodegenSettings;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// Path to the Smithy JSON AST model
    #[clap(long)]
    model: PathBuf,
    /// Path to the `smithy-build.json` holding the `rust-codegen` plugin settings
    #[clap(long)]
    settings: PathBuf,
    /// Directory the generated modules are written into
    #[clap(long)]
    output_dir: PathBuf,
    /// Generate everything but don't write any files
    #[clap(long)]
    dry_run: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "error,smithy_codegen=info".to_owned()),
        )
        .init();

    let args = Args::parse();
    let model = Model::from_file(&args.model)
        .with_context(|| format!("failed to load model {}", args.model.display()))?;
    let settings = CodegenSettings::from_file(&args.settings)
        .with_context(|| format!("failed to load settings {}", args.settings.display()))?;
    let modules = smithy_codegen::generate(&model, &settings)
        .with_context(|| format!("failed to generate code for {}", settings.service))?;

    if args.dry_run {
        for (name, contents) in modules.files() {
            tracing::info!("{}: {} bytes", name, contents.len());
        }
        return Ok(());
    }
    modules
        .write_to(&args.output_dir)
        .with_context(|| format!("failed to write {}", args.output_dir.display()))?;
    tracing::info!("wrote generated modules to {}", args.output_dir.display());
    Ok(())
}
