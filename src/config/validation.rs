//! Configuration validation pipeline
//!
//! Loader → structural (Draft-7) pass → business-rule pass.
//!
//! Validation collects ALL errors (doesn't stop at first) to provide
//! comprehensive feedback. Only a load failure short-circuits, and it is
//! reported as a single error rather than raised.

use std::path::Path;

use serde::Serialize;
use serde_json::Value;

use crate::config::loader::{self, ConfigFormat, LoaderOptions};
use crate::config::rules::{BusinessRules, StellarRules};
use crate::config::schema::DeploymentConfig;
use crate::config::structural::StructuralValidator;
use crate::error::{ConfigError, SchemaError, Severity, ValidationIssue};

// ============================================================================
// Public API
// ============================================================================

/// Result of one validation run.
///
/// Schema errors come first, then business-rule errors. Validity is derived
/// from the error list and never stored separately.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    /// Blocking findings.
    pub errors: Vec<ValidationIssue>,

    /// Advisory findings; never affect validity.
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationResult {
    /// Result for a run that failed before validation started.
    #[must_use]
    pub fn from_load_error(err: ConfigError) -> Self {
        Self {
            errors: vec![err.into()],
            warnings: Vec::new(),
        }
    }

    /// Returns `true` if validation passed (no errors).
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns `true` if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Number of errors.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Number of warnings.
    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    /// Aggregate counts for reporting.
    #[must_use]
    pub fn summary(&self) -> ValidationSummary {
        ValidationSummary {
            errors: self.error_count(),
            warnings: self.warning_count(),
        }
    }

    /// Strict mode: every warning becomes an error, appended after the
    /// existing errors.
    #[must_use]
    pub fn promote_warnings(mut self) -> Self {
        self.errors
            .extend(self.warnings.drain(..).map(|issue| ValidationIssue {
                severity: Severity::Error,
                ..issue
            }));
        self
    }
}

/// Error and warning counts of a [`ValidationResult`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ValidationSummary {
    /// Number of errors.
    pub errors: usize,
    /// Number of warnings.
    pub warnings: usize,
}

/// Configuration validator.
///
/// Holds a compiled schema and a rule set. Runs share nothing: the same
/// validator can check any number of files without findings leaking from
/// one run into the next.
#[derive(Debug)]
pub struct ConfigValidator<R = StellarRules> {
    schema: StructuralValidator,
    rules: R,
    options: LoaderOptions,
}

impl ConfigValidator<StellarRules> {
    /// Creates a validator for the AnchorKit rules from a schema document.
    ///
    /// # Errors
    ///
    /// Returns an error if the schema is not a valid Draft-7 schema.
    pub fn new(schema: &Value) -> Result<Self, SchemaError> {
        Ok(Self::with_rules(StructuralValidator::new(schema)?, StellarRules))
    }

    /// Creates a validator for the AnchorKit rules from a schema file.
    ///
    /// The schema is read once, here.
    ///
    /// # Errors
    ///
    /// Returns an error if the schema cannot be read or compiled.
    pub fn from_schema_file(path: &Path) -> Result<Self, SchemaError> {
        Ok(Self::with_rules(
            StructuralValidator::from_file(path)?,
            StellarRules,
        ))
    }
}

impl<R: BusinessRules> ConfigValidator<R> {
    /// Creates a validator with a custom rule set.
    #[must_use]
    pub fn with_rules(schema: StructuralValidator, rules: R) -> Self {
        Self {
            schema,
            rules,
            options: LoaderOptions::default(),
        }
    }

    /// Replaces the loader options.
    #[must_use]
    pub fn with_loader_options(mut self, options: LoaderOptions) -> Self {
        self.options = options;
        self
    }

    /// Loads and validates a configuration file.
    ///
    /// Load failures (unsupported extension, unreadable file, parse error)
    /// produce an invalid result with exactly one error and no warnings.
    pub fn validate_config(&self, path: &Path) -> ValidationResult {
        tracing::info!(file = %path.display(), "validating configuration");
        match loader::load_tree(path, &self.options) {
            Ok(tree) => self.validate_tree(&tree),
            Err(err) => {
                tracing::debug!(file = %path.display(), error = %err, "configuration not loaded");
                ValidationResult::from_load_error(err)
            }
        }
    }

    /// Parses and validates configuration text.
    pub fn validate_str(&self, text: &str, format: ConfigFormat) -> ValidationResult {
        match loader::parse_str(text, format) {
            Ok(tree) => self.validate_tree(&tree),
            Err(err) => ValidationResult::from_load_error(err),
        }
    }

    /// Validates an already-parsed tree.
    pub fn validate_tree(&self, tree: &Value) -> ValidationResult {
        let mut errors = self.schema.violations(tree);
        tracing::debug!(count = errors.len(), "schema validation finished");

        let findings = self.rules.evaluate(&DeploymentConfig::from_tree(tree));
        errors.extend(findings.errors);

        let result = ValidationResult {
            errors,
            warnings: findings.warnings,
        };
        tracing::info!(
            valid = result.is_valid(),
            errors = result.error_count(),
            warnings = result.warning_count(),
            "validation finished"
        );
        result
    }
}

/// Validates one configuration file against one schema file.
///
/// # Errors
///
/// Returns an error only if the schema cannot be read or compiled; every
/// problem with the configuration itself is reported in the result.
pub fn validate_config(
    config_path: &Path,
    schema_path: &Path,
) -> Result<ValidationResult, SchemaError> {
    Ok(ConfigValidator::from_schema_file(schema_path)?.validate_config(config_path))
}

// ============================================================================
// Tests
// ============================================================================
