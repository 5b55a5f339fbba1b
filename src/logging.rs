//! Logging initialization
//!
//! Library code logs through `tracing`; the binary installs one subscriber
//! writing to stderr so stdout stays clean for `--json` output.

use tracing_subscriber::EnvFilter;

use crate::config::Verbosity;

/// Filter directive: `RUST_LOG` when set, otherwise the verbosity level
pub fn env_filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity.log_filter()))
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init_logging(verbosity: Verbosity) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbosity))
        .with_writer(std::io::stderr)
        .with_target(verbosity == Verbosity::Debug)
        .try_init();

    tracing::debug!(?verbosity, "logging initialized");
}
