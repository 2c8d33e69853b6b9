//! gvrm-export - GVRM to UE5 asset converter
//!
//! Unpacks a .gvrm archive into files for the Unreal Engine import pipeline
//! (model.vrm, model.ply, splat_binding.csv, metadata.json,
//! IMPORT_INSTRUCTIONS.md).
//!
//! ```bash
//! gvrm-export assets/author.gvrm -o ./output
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use gvrm_export::Converter;

#[derive(Parser)]
#[command(name = "gvrm-export")]
#[command(about = "Convert GVRM files to UE5 assets")]
#[command(version)]
struct Cli {
    /// Path to .gvrm file
    input: PathBuf,

    /// Output directory
    #[arg(short, long)]
    output: PathBuf,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::default().add_directive(level.into()))
        .with_target(false)
        .init();

    let converter = Converter::new(&cli.input, &cli.output)
        .with_context(|| format!("Cannot convert {:?}", cli.input))?;
    let report = converter
        .convert()
        .with_context(|| format!("Conversion of {:?} failed", converter.input()))?;

    tracing::info!(
        "Done! {} splats exported to {:?}",
        report.binding_rows,
        converter.output_dir()
    );
    Ok(())
}
