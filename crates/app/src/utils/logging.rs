//! Logging setup and command-execution helpers

use std::time::Duration;

use biterec_domain::BiteRecError;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Initialise the global tracing subscriber.
///
/// Honors `RUST_LOG`; defaults to `info` for our crates and `warn` for
/// everything else.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,biterec_app=info,biterec_core=info,biterec_infra=info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Log the outcome of a command execution with structured fields.
///
/// `command` is the logical command identifier (e.g.
/// `"lists::load_lists"`); callers must not forward user data in it.
#[inline]
pub fn log_command_execution(command: &str, elapsed: Duration, success: bool) {
    let duration_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);

    if success {
        info!(command, duration_ms, "command_execution_success");
    } else {
        warn!(command, duration_ms, "command_execution_failure");
    }
}

/// Convert a domain error into a stable label suitable for logging.
#[inline]
pub fn error_label(error: &BiteRecError) -> &'static str {
    match error {
        BiteRecError::Database(_) => "database",
        BiteRecError::Config(_) => "config",
        BiteRecError::Network(_) => "network",
        BiteRecError::NotFound(_) => "not_found",
        BiteRecError::InvalidInput(_) => "invalid_input",
        BiteRecError::Internal(_) => "internal",
    }
}
