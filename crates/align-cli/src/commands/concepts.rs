use std::process::ExitCode;

use align_core::config::AlignConfig;

use crate::output;

pub fn run(config: AlignConfig, json: bool) -> anyhow::Result<ExitCode> {
    let engine = super::build_engine(config)?;
    let caps = engine.capabilities();
    if json {
        output::print_json(&caps)?;
    } else {
        print!("{}", output::render_capabilities(&caps));
    }
    Ok(ExitCode::SUCCESS)
}
