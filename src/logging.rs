//! Diagnostic logging setup.
//!
//! Logs go to stderr through `tracing-subscriber`; user-facing output is the
//! renderer's job and never depends on the log level.

use tracing_subscriber::EnvFilter;

use crate::settings::DEFAULT_LOG_FILTER;

/// Install the global subscriber. An invalid directive falls back to the
/// default level; a second call is a no-op.
pub fn init_logging(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
