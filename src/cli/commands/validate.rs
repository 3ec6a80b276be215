//! Configuration validation command
//!
//! Checks that both input files exist, validates the configuration, and
//! prints the report to stdout.

use std::io::Write;

use crate::cli::args::Cli;
use crate::cli::commands::report;
use crate::config::ConfigValidator;
use crate::error::{AnchorKitError, ExitCode};

/// Validate the configuration named on the command line.
///
/// # Errors
///
/// Returns an error if the config or schema file does not exist, the
/// schema cannot be compiled, or the report cannot be written.
pub fn run(cli: &Cli) -> Result<i32, AnchorKitError> {
    if !cli.config.exists() {
        return Err(AnchorKitError::MissingConfig(cli.config.clone()));
    }
    if !cli.schema.exists() {
        return Err(AnchorKitError::MissingSchema(cli.schema.clone()));
    }

    let validator = ConfigValidator::from_schema_file(&cli.schema)?;
    let mut result = validator.validate_config(&cli.config);
    if cli.strict {
        tracing::debug!(warnings = result.warning_count(), "strict mode: promoting warnings");
        result = result.promote_warnings();
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    report::render(&mut out, cli.format, &cli.config, &result)?;
    out.flush()?;

    Ok(if result.is_valid() {
        ExitCode::SUCCESS
    } else {
        ExitCode::ERROR
    })
}
