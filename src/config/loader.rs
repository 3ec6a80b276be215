//! Configuration loader
//!
//! Turns a `.toml` or `.json` file into an untyped `serde_json::Value` tree:
//! 1. Format detection from the file extension
//! 2. Size check and raw read
//! 3. BOM stripping
//! 4. Parsing (TOML values are converted into the JSON data model)

use std::path::Path;

use serde_json::{Map, Number, Value};

use crate::error::ConfigError;

// ============================================================================
// Public API
// ============================================================================

/// Supported configuration file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// `.toml`
    Toml,
    /// `.json`
    Json,
}

impl ConfigFormat {
    /// Detects the format from the file extension.
    ///
    /// Matching is exact and case-sensitive: `deploy.TOML` is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnsupportedFormat`] for any other extension.
    /// A missing extension is reported as an empty one.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(Self::Toml),
            Some("json") => Ok(Self::Json),
            Some(other) if !other.is_empty() => Err(ConfigError::UnsupportedFormat {
                extension: format!(".{other}"),
            }),
            _ => Err(ConfigError::UnsupportedFormat {
                extension: String::new(),
            }),
        }
    }
}

impl std::fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Toml => f.write_str("toml"),
            Self::Json => f.write_str("json"),
        }
    }
}

/// Options for the configuration loader.
#[derive(Debug, Clone)]
pub struct LoaderOptions {
    /// Maximum configuration file size in bytes.
    pub max_config_size: usize,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            max_config_size: env_or("ANCHORKIT_MAX_CONFIG_SIZE", 10 * 1024 * 1024),
        }
    }
}

/// Loads a configuration file into a tree.
///
/// # Errors
///
/// Returns an error if:
/// - The extension is not `.toml` or `.json`
/// - The file cannot be read or exceeds `options.max_config_size`
/// - Parsing fails
pub fn load_tree(path: &Path, options: &LoaderOptions) -> Result<Value, ConfigError> {
    let format = ConfigFormat::from_path(path)?;

    let metadata = std::fs::metadata(path).map_err(|e| ConfigError::Load {
        message: format!("{}: {e}", path.display()),
    })?;

    let file_size = usize::try_from(metadata.len()).unwrap_or(usize::MAX);
    if file_size > options.max_config_size {
        return Err(ConfigError::Load {
            message: format!(
                "{} is {file_size} bytes, limit is {} bytes",
                path.display(),
                options.max_config_size
            ),
        });
    }

    let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::Load {
        message: format!("{}: {e}", path.display()),
    })?;

    tracing::debug!(file = %path.display(), %format, bytes = raw.len(), "parsing configuration");
    parse_str(&raw, format)
}

/// Parses configuration text of a known format into a tree.
///
/// # Errors
///
/// Returns [`ConfigError::TomlParse`] or [`ConfigError::JsonParse`] on
/// malformed input.
pub fn parse_str(text: &str, format: ConfigFormat) -> Result<Value, ConfigError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    match format {
        ConfigFormat::Toml => {
            let table: toml::Table = toml::from_str(text).map_err(|e| ConfigError::TomlParse {
                message: match e.span() {
                    Some(span) => format!("{} (line {})", e.message(), line_of(text, span.start)),
                    None => e.message().to_string(),
                },
            })?;
            Ok(toml_to_json(toml::Value::Table(table)))
        }
        ConfigFormat::Json => serde_json::from_str(text).map_err(|e| ConfigError::JsonParse {
            message: e.to_string(),
        }),
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Converts a TOML value into the JSON data model.
///
/// Datetimes become their RFC 3339 string form. Non-finite floats have no
/// JSON representation and become `null`.
fn toml_to_json(value: toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::Number(i.into()),
        toml::Value::Float(f) => Number::from_f64(f).map_or(Value::Null, Value::Number),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(items) => Value::Array(items.into_iter().map(toml_to_json).collect()),
        toml::Value::Table(table) => Value::Object(
            table
                .into_iter()
                .map(|(k, v)| (k, toml_to_json(v)))
                .collect::<Map<String, Value>>(),
        ),
    }
}

/// 1-based line number of a byte offset.
fn line_of(text: &str, offset: usize) -> usize {
    text.as_bytes()
        .iter()
        .take(offset)
        .filter(|&&b| b == b'\n')
        .count()
        + 1
}

/// Reads an environment variable and parses it, falling back to `default`.
fn env_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

// ============================================================================
// Tests
// ============================================================================
