//! CLI argument definitions
//!
//! Clap derive structs for `anchorkit-config` command-line parsing.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

use crate::observability::LogFormat;

/// Default schema location, relative to the working directory.
pub const DEFAULT_SCHEMA_PATH: &str = "config_schema.json";

// ============================================================================
// Root CLI
// ============================================================================

/// Validate an AnchorKit deployment configuration before it ships.
#[derive(Parser, Debug)]
#[command(name = "anchorkit-config", author, version, about)]
pub struct Cli {
    /// Configuration file to validate (`.toml` or `.json`).
    pub config: PathBuf,

    /// Draft-7 JSON Schema to validate against.
    #[arg(default_value = DEFAULT_SCHEMA_PATH)]
    pub schema: PathBuf,

    /// Report format.
    #[arg(
        short,
        long,
        default_value = "human",
        env = "ANCHORKIT_OUTPUT_FORMAT"
    )]
    pub format: OutputFormat,

    /// Treat warnings as errors.
    #[arg(long)]
    pub strict: bool,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress log output (the report is still printed).
    #[arg(short, long)]
    pub quiet: bool,

    /// Log output format.
    #[arg(long, default_value = "human")]
    pub log_format: LogFormat,

    /// Color output control.
    #[arg(long, default_value = "auto", env = "ANCHORKIT_COLOR")]
    pub color: ColorChoice,
}

// ============================================================================
// Shared Value Types
// ============================================================================

/// Color output choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal support.
    #[default]
    Auto,
    /// Always use color.
    Always,
    /// Never use color.
    Never,
}

/// Output format for the validation report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}
