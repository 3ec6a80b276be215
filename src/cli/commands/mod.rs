//! CLI command dispatch and handlers
//!
//! Routes a parsed CLI invocation to the validation command and maps the
//! verdict to a process exit code.

pub mod report;
pub mod validate;

use crate::cli::args::Cli;
use crate::error::AnchorKitError;

/// Dispatch a parsed CLI invocation.
///
/// Returns the exit code the process should terminate with.
///
/// # Errors
///
/// Returns an error if a required file is missing or the schema cannot be
/// loaded; an invalid configuration is reported, not returned as an error.
pub fn dispatch(cli: &Cli) -> Result<i32, AnchorKitError> {
    validate::run(cli)
}
