//! Error types for `anchorkit-config`
//!
//! Load errors and schema errors are the only failures that stop a run.
//! Everything found while validating a loaded configuration is reported as
//! data through [`ValidationIssue`] instead.

use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for the `anchorkit-config` CLI.
pub struct ExitCode;

impl ExitCode {
    /// Configuration is valid
    pub const SUCCESS: i32 = 0;

    /// Configuration is invalid, or a required file is missing
    pub const ERROR: i32 = 1;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for CLI operations.
///
/// An invalid configuration is not an error at this level: it is a
/// successful run whose report says "invalid".
#[derive(Debug, Error)]
pub enum AnchorKitError {
    /// The configuration file to validate does not exist
    #[error("Config file not found: {}", .0.display())]
    MissingConfig(PathBuf),

    /// The schema file does not exist
    #[error("Schema file not found: {}", .0.display())]
    MissingSchema(PathBuf),

    /// The schema could not be loaded or compiled
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AnchorKitError {
    /// Returns the process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::MissingConfig(_)
            | Self::MissingSchema(_)
            | Self::Schema(_)
            | Self::Io(_)
            | Self::Json(_) => ExitCode::ERROR,
        }
    }
}

// ============================================================================
// Load Errors
// ============================================================================

/// Failures while turning a configuration file into a tree.
///
/// Each of these short-circuits a validation run; the display string is the
/// single error reported for that run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The file extension is neither `.toml` nor `.json`
    #[error("Unsupported file format: {extension}")]
    UnsupportedFormat {
        /// Extension as written with its leading dot, empty when there is none
        extension: String,
    },

    /// Malformed TOML
    #[error("TOML parsing error: {message}")]
    TomlParse {
        /// Error message from the TOML parser
        message: String,
    },

    /// Malformed JSON
    #[error("JSON parsing error: {message}")]
    JsonParse {
        /// Error message from the JSON parser
        message: String,
    },

    /// Any other failure while reading the file
    #[error("Failed to load config: {message}")]
    Load {
        /// Description of the underlying failure
        message: String,
    },
}

// ============================================================================
// Schema Errors
// ============================================================================

/// Failures while loading or compiling the JSON Schema document.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Schema file does not exist or cannot be read
    #[error("cannot read schema {}: {source}", path.display())]
    Read {
        /// Path to the schema file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Schema file is not valid JSON
    #[error("schema {} is not valid JSON: {message}", path.display())]
    Parse {
        /// Path to the schema file
        path: PathBuf,
        /// Error message from the JSON parser
        message: String,
    },

    /// Schema document is not a valid Draft-7 schema
    #[error("invalid Draft-7 schema: {message}")]
    Invalid {
        /// Error message from the schema compiler
        message: String,
    },
}

// ============================================================================
// Validation Types
// ============================================================================

/// A single finding produced while validating a configuration.
///
/// The message may embed a dotted path (`[contract.name] ...`) or an
/// attestor label (`Attestor 'kyc-1': ...`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    /// Human-readable description
    pub message: String,
    /// Severity level of the issue
    pub severity: Severity,
}

impl ValidationIssue {
    /// Creates an error-level issue.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Error,
        }
    }

    /// Creates a warning-level issue.
    #[must_use]
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Warning,
        }
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl From<ConfigError> for ValidationIssue {
    fn from(err: ConfigError) -> Self {
        Self::error(err.to_string())
    }
}

/// Severity level for validation issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Blocks deployment
    Error,
    /// Advisory only; never affects validity
    Warning,
}

// ============================================================================
// Result Type Alias
// ============================================================================

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, AnchorKitError>;

// ============================================================================
// Tests
// ============================================================================
