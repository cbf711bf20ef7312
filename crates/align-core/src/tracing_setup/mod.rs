//! Tracing setup: structured logging with span definitions and event helpers.

pub mod events;
pub mod spans;

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::defaults::LOG_ENV_VAR;
use crate::config::ObservabilityConfig;

static INIT: Once = Once::new();

/// Initialize the tracing subscriber.
///
/// Reads `ALIGN_LOG` for the filter (e.g. `ALIGN_LOG=align_scoring=debug,info`),
/// falling back to `config.log_level`, then to `info` if that does not parse.
/// Logs go to stderr so JSON results on stdout stay machine-readable.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .or_else(|_| EnvFilter::try_new(&config.log_level))
            .unwrap_or_else(|_| EnvFilter::new("info"));

        let registry = tracing_subscriber::registry().with(filter);
        // A subscriber installed by the host process wins; ignore the error.
        let _ = if config.json_logs {
            registry
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_writer(std::io::stderr),
                )
                .try_init()
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_line_number(true)
                        .with_writer(std::io::stderr),
                )
                .try_init()
        };
    });
}
