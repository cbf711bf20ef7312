pub mod analyze;
pub mod concepts;
pub mod matrix;
pub mod self_test;
pub mod status;

use align_core::config::AlignConfig;
use align_core::errors::AlignError;
use align_engine::AlignmentEngine;
use anyhow::Context;

/// Exit status for configuration and catalog problems.
pub const CONFIG_EXIT: u8 = 2;

pub fn build_engine(config: AlignConfig) -> anyhow::Result<AlignmentEngine> {
    AlignmentEngine::new(config).context("failed to initialize the alignment engine")
}

/// Exit status for a failed command: [`CONFIG_EXIT`] when the engine rejected
/// its config or catalog, 1 for everything else.
pub fn exit_status(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<AlignError>() {
        Some(AlignError::Config(_) | AlignError::Catalog(_)) => CONFIG_EXIT,
        _ => 1,
    }
}
