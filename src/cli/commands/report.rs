//! Validation report rendering
//!
//! Human output mirrors what operators read in deploy logs; JSON output is
//! for pipelines.

use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::cli::args::OutputFormat;
use crate::config::{ValidationResult, ValidationSummary};
use crate::error::AnchorKitError;

const RULE_WIDTH: usize = 60;

/// Machine-readable report.
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    file: String,
    valid: bool,
    errors: Vec<&'a str>,
    warnings: Vec<&'a str>,
    summary: ValidationSummary,
}

/// Render `result` for `config_path` in the requested format.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn render<W: Write>(
    out: &mut W,
    format: OutputFormat,
    config_path: &Path,
    result: &ValidationResult,
) -> Result<(), AnchorKitError> {
    match format {
        OutputFormat::Human => render_human(out, config_path, result)?,
        OutputFormat::Json => render_json(out, config_path, result)?,
    }
    Ok(())
}

/// Banner, warnings (always, if any), then the verdict and, when invalid,
/// the numbered error list.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn render_human<W: Write>(
    out: &mut W,
    config_path: &Path,
    result: &ValidationResult,
) -> std::io::Result<()> {
    let rule = "=".repeat(RULE_WIDTH);
    let name = config_path
        .file_name()
        .map_or_else(|| config_path.display().to_string(), |n| n.to_string_lossy().into_owned());

    writeln!(out)?;
    writeln!(out, "{rule}")?;
    writeln!(out, "Configuration Validation: {name}")?;
    writeln!(out, "{rule}")?;
    writeln!(out)?;

    if !result.warnings.is_empty() {
        writeln!(out, "⚠️  Warnings:")?;
        for warning in &result.warnings {
            writeln!(out, "  • {warning}")?;
        }
        writeln!(out)?;
    }

    if result.is_valid() {
        writeln!(out, "✅ Configuration is valid")?;
        if result.warning_count() > 0 {
            writeln!(
                out,
                "   ({} warning(s) - review recommended)",
                result.warning_count()
            )?;
        }
    } else {
        writeln!(out, "❌ Configuration is invalid")?;
        writeln!(out)?;
        writeln!(out, "Errors ({}):", result.error_count())?;
        for error in &result.errors {
            writeln!(out, "  • {error}")?;
        }
        writeln!(out)?;
    }

    Ok(())
}

/// Single JSON document with the verdict, both finding lists, and counts.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn render_json<W: Write>(
    out: &mut W,
    config_path: &Path,
    result: &ValidationResult,
) -> Result<(), AnchorKitError> {
    let report = JsonReport {
        file: config_path.display().to_string(),
        valid: result.is_valid(),
        errors: result.errors.iter().map(|e| e.message.as_str()).collect(),
        warnings: result.warnings.iter().map(|w| w.message.as_str()).collect(),
        summary: result.summary(),
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}
