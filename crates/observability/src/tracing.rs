//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

/// Environment variable consulted for the log filter.
pub const LOG_FILTER_ENV: &str = "RUST_LOG";

/// Install a JSON subscriber filtered by `RUST_LOG`, or `default_filter` when unset.
///
/// Returns `false` if a global subscriber was already installed.
pub fn init(default_filter: &str) -> bool {
    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init()
        .is_ok()
}
