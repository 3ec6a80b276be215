//! Typed view of a deployment configuration
//!
//! Every field is optional and presence-preserving: a key that is missing,
//! `null`, or of the wrong type reads as `None`. Type mismatches are the
//! structural validator's business; the rule engine only sees values it can
//! interpret.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};

// ============================================================================
// Top-Level Configuration
// ============================================================================

/// Root of an AnchorKit deployment configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DeploymentConfig {
    /// Contract identity and target network
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub contract: Option<ContractSection>,

    /// Attestor registry
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub attestors: Option<AttestorsSection>,

    /// Session limits
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub sessions: Option<SessionsSection>,
}

impl DeploymentConfig {
    /// Builds the typed view of a parsed tree.
    ///
    /// Never fails: a tree that is not a mapping yields an empty config.
    #[must_use]
    pub fn from_tree(tree: &Value) -> Self {
        Self::deserialize(tree).unwrap_or_default()
    }
}

// ============================================================================
// Contract
// ============================================================================

/// `[contract]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractSection {
    /// Contract name (lowercase slug)
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Contract version (`MAJOR.MINOR.PATCH`)
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Target Stellar network
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
}

// ============================================================================
// Attestors
// ============================================================================

/// `[attestors]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttestorsSection {
    /// Registered attestors, in file order.
    ///
    /// Entries that are not mappings read as an empty record so that
    /// positional labels stay aligned with the file.
    #[serde(
        default,
        deserialize_with = "lenient_records",
        skip_serializing_if = "Option::is_none"
    )]
    pub registry: Option<Vec<AttestorRecord>>,
}

/// One `[[attestors.registry]]` entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttestorRecord {
    /// Attestor name (lowercase slug)
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Stellar public key (`G...`, 56 characters)
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// Attestation service URL
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// Attestor role
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    /// Whether the attestor is active (default `false`)
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

impl AttestorRecord {
    /// Returns `true` only when `enabled` is present and `true`.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled.unwrap_or(false)
    }

    /// Label used in findings: the record's own name when present (even an
    /// invalid one), otherwise `attestor-<index>`.
    #[must_use]
    pub fn label(&self, index: usize) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| format!("attestor-{index}"))
    }
}

// ============================================================================
// Sessions
// ============================================================================

/// Default session timeout applied when the key is absent.
pub const DEFAULT_SESSION_TIMEOUT_SECONDS: u32 = 3600;

/// Default operations budget applied when the key is absent.
pub const DEFAULT_OPERATIONS_PER_SESSION: u32 = 1000;

/// `[sessions]` section.
///
/// Limits are kept as raw numbers: `30.0` or a value beyond `i64` is still a
/// present limit and must reach the bounds checks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionsSection {
    /// Session timeout in seconds
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub session_timeout_seconds: Option<Number>,

    /// Maximum operations per session
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub operations_per_session: Option<Number>,
}

impl SessionsSection {
    /// Effective timeout, falling back to the default.
    #[must_use]
    pub fn timeout_seconds(&self) -> f64 {
        numeric_or(
            self.session_timeout_seconds.as_ref(),
            DEFAULT_SESSION_TIMEOUT_SECONDS,
        )
    }

    /// Effective operations budget, falling back to the default.
    #[must_use]
    pub fn operations(&self) -> f64 {
        numeric_or(
            self.operations_per_session.as_ref(),
            DEFAULT_OPERATIONS_PER_SESSION,
        )
    }
}

fn numeric_or(value: Option<&Number>, default: u32) -> f64 {
    value
        .and_then(Number::as_f64)
        .unwrap_or_else(|| f64::from(default))
}

// ============================================================================
// Lenient Deserialization
// ============================================================================

/// Reads any value and keeps it only if it has the expected shape.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}

/// Reads a sequence of records, keeping each position even when an entry is
/// malformed.
fn lenient_records<'de, D>(deserializer: D) -> Result<Option<Vec<AttestorRecord>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => Some(
            items
                .into_iter()
                .map(|item| serde_json::from_value(item).unwrap_or_default())
                .collect(),
        ),
        _ => None,
    })
}

// ============================================================================
// Tests
// ============================================================================
