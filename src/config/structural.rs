//! Structural validation against a Draft-7 JSON Schema
//!
//! Wraps the `jsonschema` validator and renders each violation as
//! `[dotted.path] message`, with `root` standing in for an empty path.

use std::path::Path;

use jsonschema::Validator;
use serde_json::Value;

use crate::error::{SchemaError, ValidationIssue};

/// Compiled Draft-7 schema.
pub struct StructuralValidator {
    validator: Validator,
}

impl std::fmt::Debug for StructuralValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StructuralValidator").finish_non_exhaustive()
    }
}

impl StructuralValidator {
    /// Compiles a schema document.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Invalid`] if the document is not a valid
    /// Draft-7 schema.
    pub fn new(schema: &Value) -> Result<Self, SchemaError> {
        let validator = jsonschema::draft7::new(schema).map_err(|e| SchemaError::Invalid {
            message: e.to_string(),
        })?;
        Ok(Self { validator })
    }

    /// Reads and compiles a schema file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not JSON, or is not a
    /// valid Draft-7 schema.
    pub fn from_file(path: &Path) -> Result<Self, SchemaError> {
        let raw = std::fs::read_to_string(path).map_err(|source| SchemaError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let schema: Value = serde_json::from_str(&raw).map_err(|e| SchemaError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let compiled = Self::new(&schema)?;
        tracing::debug!(schema = %path.display(), "compiled configuration schema");
        Ok(compiled)
    }

    /// Collects every structural violation in `instance`.
    #[must_use]
    pub fn violations(&self, instance: &Value) -> Vec<ValidationIssue> {
        self.validator
            .iter_errors(instance)
            .map(|error| {
                let path = dotted_path(&error.instance_path.to_string());
                ValidationIssue::error(format!("[{path}] {error}"))
            })
            .collect()
    }
}

/// Converts a JSON Pointer (`/attestors/registry/0/name`) into a dotted
/// path (`attestors.registry.0.name`), or `root` when it is empty.
fn dotted_path(pointer: &str) -> String {
    let segments: Vec<String> = pointer
        .split('/')
        .skip(1)
        .map(|segment| segment.replace("~1", "/").replace("~0", "~"))
        .collect();

    if segments.is_empty() {
        "root".to_string()
    } else {
        segments.join(".")
    }
}
