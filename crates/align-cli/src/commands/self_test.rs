use std::process::ExitCode;

use align_core::config::AlignConfig;

use crate::output;

/// Fails when the sample pair produces a failure result.
pub fn run(config: AlignConfig, json: bool) -> anyhow::Result<ExitCode> {
    let engine = super::build_engine(config)?;
    let result = engine.self_test()?;
    if json {
        output::print_json(&result)?;
    } else {
        print!("{}", output::render_result(&result));
    }
    Ok(if result.is_failure() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
