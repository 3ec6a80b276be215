//! Configuration module
//!
//! Loading, typed access, structural validation, and business rules for
//! AnchorKit deployment configuration files.

pub mod loader;
pub mod patterns;
pub mod rules;
pub mod schema;
pub mod structural;
pub mod validation;

pub use loader::{ConfigFormat, LoaderOptions};
pub use rules::{BusinessRules, RuleFindings, StellarRules};
pub use schema::*;
pub use structural::StructuralValidator;
pub use validation::{ConfigValidator, ValidationResult, ValidationSummary, validate_config};
