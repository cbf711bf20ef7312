use std::process::ExitCode;

use align_core::config::AlignConfig;
use clap::Args;

use crate::output;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Source (broader) outcome text
    #[arg(long)]
    pub source: String,
    /// Target (narrower) outcome text
    #[arg(long)]
    pub target: String,
    /// Prior score on the 1-5 scale; 0 means none
    #[arg(long, default_value_t = 0.0)]
    pub baseline: f64,
}

pub fn run(config: AlignConfig, args: AnalyzeArgs, json: bool) -> anyhow::Result<ExitCode> {
    let engine = super::build_engine(config)?;
    let result = engine.analyze(&args.source, &args.target, args.baseline)?;
    if json {
        output::print_json(&result)?;
    } else {
        print!("{}", output::render_result(&result));
    }
    Ok(ExitCode::SUCCESS)
}
