use std::process::ExitCode;

use align_core::config::AlignConfig;
use align_core::models::{HealthStatus, StatusReport};
use align_engine::AlignmentEngine;

use crate::output;

/// Always prints a report; the exit code is non-zero when unhealthy.
pub fn run(config: AlignConfig, json: bool) -> anyhow::Result<ExitCode> {
    let report = match AlignmentEngine::new(config) {
        Ok(engine) => engine.status(),
        Err(e) => StatusReport::from_init_error(&e),
    };
    if json {
        output::print_json(&report)?;
    } else {
        print!("{}", output::render_status(&report));
    }
    Ok(match report.overall_status {
        HealthStatus::Unhealthy => ExitCode::FAILURE,
        HealthStatus::Healthy | HealthStatus::Degraded => ExitCode::SUCCESS,
    })
}
