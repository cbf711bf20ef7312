use std::path::PathBuf;
use std::process::ExitCode;

use align_core::config::AlignConfig;
use align_core::models::OutcomeStatement;
use anyhow::Context;
use clap::Args;
use serde::Deserialize;

use crate::output;

#[derive(Args)]
pub struct MatrixArgs {
    /// JSON file with `sources` and `targets` arrays of { id, category?, text }
    #[arg(long)]
    pub input: PathBuf,
}

#[derive(Deserialize)]
struct MatrixInput {
    sources: Vec<OutcomeStatement>,
    targets: Vec<OutcomeStatement>,
}

pub fn run(config: AlignConfig, args: MatrixArgs, json: bool) -> anyhow::Result<ExitCode> {
    let raw = std::fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let input: MatrixInput = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse {}", args.input.display()))?;

    let engine = super::build_engine(config)?;
    let report = engine.analyze_matrix(&input.sources, &input.targets)?;
    if json {
        output::print_json(&report)?;
    } else {
        print!("{}", output::render_matrix(&report));
    }
    Ok(ExitCode::SUCCESS)
}
