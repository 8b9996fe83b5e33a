//! Page commands
//!
//! One module per page. Commands take the context explicitly, log their
//! execution, and translate domain errors into user-facing message
//! strings; the rendering sink shows those inline.

pub mod explore;
pub mod home;
pub mod lists;
pub mod place;
pub mod profile;

use std::time::Instant;

use biterec_domain::Result as DomainResult;

use crate::utils::logging::{error_label, log_command_execution};

/// Record the outcome of a command and map its error to a display string.
pub(crate) fn finish<T>(
    command: &str,
    start: Instant,
    result: DomainResult<T>,
) -> Result<T, String> {
    let success = result.is_ok();
    log_command_execution(command, start.elapsed(), success);
    result.map_err(|e| {
        tracing::warn!(command, error = %e, error_type = error_label(&e), "command failed");
        e.to_string()
    })
}
