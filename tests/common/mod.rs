//! Shared integration-test helpers: fixture lookup and running the
//! `anchorkit-config` binary.

#![allow(dead_code)]

use std::path::PathBuf;
use std::process::{Command, Output};

/// Absolute path of a file under `tests/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

/// Absolute path of the schema shipped with the crate.
pub fn schema_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("config_schema.json")
}

/// Runs the binary with `args` and collects its output.
///
/// Logging is silenced and environment overrides are cleared so tests see
/// only the report.
#[allow(clippy::missing_panics_doc)]
pub fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_anchorkit-config"))
        .args(args)
        .env_remove("ANCHORKIT_OUTPUT_FORMAT")
        .env_remove("ANCHORKIT_LOG_LEVEL")
        .env("ANCHORKIT_COLOR", "never")
        .output()
        .expect("failed to run anchorkit-config")
}

/// Runs the binary against a fixture and the shipped schema.
#[allow(clippy::missing_panics_doc)]
pub fn validate_fixture(name: &str, extra: &[&str]) -> Output {
    let config = fixture_path(name);
    let schema = schema_path();
    let mut args: Vec<&str> = extra.to_vec();
    args.push(config.to_str().expect("non-UTF-8 fixture path"));
    args.push(schema.to_str().expect("non-UTF-8 schema path"));
    run_cli(&args)
}
