//! Business rules for AnchorKit deployments
//!
//! Semantic checks the structural schema cannot express: name and address
//! formats, registry-wide uniqueness, endpoint shape, and session limits.
//!
//! Every rule runs independently. A missing section or field is skipped,
//! never reported.

use std::collections::HashMap;

use crate::config::patterns::{is_semver, is_slug, is_stellar_address, is_valid_url, suggest};
use crate::config::schema::{
    AttestorRecord, ContractSection, DeploymentConfig, SessionsSection,
};
use crate::error::ValidationIssue;

// ============================================================================
// Constants
// ============================================================================

/// Networks a contract may target.
pub const VALID_NETWORKS: &[&str] = &["stellar-testnet", "stellar-mainnet", "stellar-futurenet"];

/// Roles an attestor may hold.
pub const VALID_ROLES: &[&str] = &[
    "kyc-issuer",
    "transfer-verifier",
    "compliance-approver",
    "rate-provider",
    "attestor",
];

/// Shortest usable session timeout.
pub const MIN_SESSION_TIMEOUT_SECONDS: u32 = 60;

/// Session timeouts above this draw a warning (24 hours).
pub const MAX_ADVISED_SESSION_TIMEOUT_SECONDS: u32 = 86_400;

/// Operations budgets above this draw a warning.
pub const MAX_ADVISED_OPERATIONS_PER_SESSION: u32 = 5_000;

/// Accepted raw address length range, checked alongside the strict pattern.
pub const ADDRESS_LEN_RANGE: std::ops::RangeInclusive<usize> = 54..=56;

// ============================================================================
// Public API
// ============================================================================

/// Findings produced by one rule-engine pass.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RuleFindings {
    /// Blocking findings, in discovery order.
    pub errors: Vec<ValidationIssue>,

    /// Advisory findings, in discovery order.
    pub warnings: Vec<ValidationIssue>,
}

/// A semantic rule set applied after structural validation.
pub trait BusinessRules {
    /// Evaluates every rule against `config`.
    ///
    /// Must not fail: anything it cannot interpret is skipped.
    fn evaluate(&self, config: &DeploymentConfig) -> RuleFindings;
}

/// Rules for AnchorKit contracts on Stellar.
#[derive(Debug, Default, Clone, Copy)]
pub struct StellarRules;

impl BusinessRules for StellarRules {
    fn evaluate(&self, config: &DeploymentConfig) -> RuleFindings {
        let mut eval = Evaluation::default();

        if let Some(contract) = &config.contract {
            eval.check_contract(contract);
        }

        if let Some(registry) = config
            .attestors
            .as_ref()
            .and_then(|attestors| attestors.registry.as_deref())
        {
            eval.check_registry(registry);
        }

        if let Some(sessions) = &config.sessions {
            eval.check_sessions(sessions);
        }

        tracing::debug!(
            errors = eval.findings.errors.len(),
            warnings = eval.findings.warnings.len(),
            "business rules evaluated"
        );
        eval.findings
    }
}

// ============================================================================
// Evaluation
// ============================================================================

#[derive(Default)]
struct Evaluation {
    findings: RuleFindings,
}

impl Evaluation {
    fn check_contract(&mut self, contract: &ContractSection) {
        if let Some(name) = &contract.name {
            if !is_slug(name) {
                self.add_error(
                    "Contract name must contain only lowercase letters, numbers, and hyphens"
                        .to_string(),
                );
            }
        }

        if let Some(version) = &contract.version {
            if !is_semver(version) {
                self.add_error(
                    "Contract version must follow semantic versioning (e.g., 1.0.0)".to_string(),
                );
            }
        }

        if let Some(network) = &contract.network {
            if !VALID_NETWORKS.contains(&network.as_str()) {
                self.add_error(format!(
                    "Network must be one of: {}{}",
                    VALID_NETWORKS.join(", "),
                    did_you_mean(network, VALID_NETWORKS)
                ));
            }
        }
    }

    fn check_registry(&mut self, registry: &[AttestorRecord]) {
        let names = duplicates(registry.iter().filter_map(|a| a.name.as_deref()));
        if !names.is_empty() {
            self.add_error(format!(
                "Duplicate attestor names found: {}",
                names.join(", ")
            ));
        }

        let addresses = duplicates(registry.iter().filter_map(|a| a.address.as_deref()));
        if !addresses.is_empty() {
            self.add_error(format!(
                "Duplicate attestor addresses found: {}",
                addresses.join(", ")
            ));
        }

        if !registry.iter().any(AttestorRecord::is_enabled) {
            self.add_error("At least one attestor must be enabled".to_string());
        }

        for (idx, attestor) in registry.iter().enumerate() {
            self.check_attestor(idx, attestor);
        }
    }

    fn check_attestor(&mut self, idx: usize, attestor: &AttestorRecord) {
        let label = attestor.label(idx);

        if let Some(name) = &attestor.name {
            if !is_slug(name) {
                self.add_error(format!(
                    "Attestor '{label}': name must contain only lowercase letters, numbers, and hyphens"
                ));
            }
        }

        if let Some(address) = &attestor.address {
            if !is_stellar_address(address) {
                self.add_error(format!("Attestor '{label}': invalid Stellar address format"));
            }

            let len = address.chars().count();
            if !ADDRESS_LEN_RANGE.contains(&len) {
                self.add_error(format!(
                    "Attestor '{label}': address length must be {}-{} characters, got {len}",
                    ADDRESS_LEN_RANGE.start(),
                    ADDRESS_LEN_RANGE.end()
                ));
            }
        }

        if let Some(endpoint) = &attestor.endpoint {
            if !is_valid_url(endpoint) {
                self.add_error(format!("Attestor '{label}': invalid endpoint URL format"));
            }

            if !endpoint.starts_with("https://") {
                self.add_warning(format!(
                    "Attestor '{label}': endpoint should use HTTPS for security"
                ));
            }
        }

        if let Some(role) = &attestor.role {
            if !VALID_ROLES.contains(&role.as_str()) {
                self.add_error(format!(
                    "Attestor '{label}': invalid role. Must be one of: {}{}",
                    VALID_ROLES.join(", "),
                    did_you_mean(role, VALID_ROLES)
                ));
            }
        }
    }

    fn check_sessions(&mut self, sessions: &SessionsSection) {
        let timeout = sessions.timeout_seconds();
        if timeout < f64::from(MIN_SESSION_TIMEOUT_SECONDS) {
            self.add_error(format!(
                "Session timeout must be at least {MIN_SESSION_TIMEOUT_SECONDS} seconds"
            ));
        }

        if timeout > f64::from(MAX_ADVISED_SESSION_TIMEOUT_SECONDS) {
            self.add_warning(
                "Session timeout exceeds 24 hours - consider shorter timeouts for security"
                    .to_string(),
            );
        }

        if sessions.operations() > f64::from(MAX_ADVISED_OPERATIONS_PER_SESSION) {
            self.add_warning("High operations_per_session may impact performance".to_string());
        }
    }

    fn add_error(&mut self, message: String) {
        self.findings.errors.push(ValidationIssue::error(message));
    }

    fn add_warning(&mut self, message: String) {
        self.findings.warnings.push(ValidationIssue::warning(message));
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Values occurring more than once, each listed once in first-seen order.
fn duplicates<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order = Vec::new();
    for value in values {
        let count = counts.entry(value).or_insert(0);
        if *count == 0 {
            order.push(value);
        }
        *count += 1;
    }
    order.retain(|value| counts[value] > 1);
    order
}

fn did_you_mean(input: &str, candidates: &[&str]) -> String {
    suggest(input, candidates)
        .map(|candidate| format!(" (did you mean '{candidate}'?)"))
        .unwrap_or_default()
}

// ============================================================================
// Tests
// ============================================================================
