mod common;

use common::{fixture_path, run_cli, schema_path, validate_fixture};

#[test]
fn valid_config_exits_zero() {
    let output = validate_fixture("valid.toml", &[]);
    assert!(
        output.status.success(),
        "valid config should pass: {}",
        String::from_utf8_lossy(&output.stdout)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Configuration Validation: valid.toml"));
    assert!(stdout.contains("✅ Configuration is valid"));
    assert!(!stdout.contains("Warnings"));
}

#[test]
fn warnings_shown_on_valid_config() {
    let output = validate_fixture("warnings.toml", &[]);
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("⚠️  Warnings:"));
    assert!(stdout.contains("endpoint should use HTTPS for security"));
    assert!(stdout.contains("(3 warning(s) - review recommended)"));
}

#[test]
fn strict_mode_fails_on_warnings() {
    let output = validate_fixture("warnings.toml", &["--strict"]);
    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("❌ Configuration is invalid"));
    assert!(stdout.contains("Errors (3):"));
}

#[test]
fn invalid_config_exits_one_with_numbered_errors() {
    let output = validate_fixture("invalid.toml", &[]);
    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("❌ Configuration is invalid"));
    assert!(stdout.contains("Errors (10):"));
    assert!(stdout.contains("  • Duplicate attestor names found: dup"));
    // Warnings are shown even when the config is invalid.
    assert!(stdout.contains("⚠️  Warnings:"));
}

#[test]
fn malformed_toml_reports_single_parse_error() {
    let output = validate_fixture("malformed.toml", &[]);
    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Errors (1):"));
    assert!(stdout.contains("TOML parsing error: "));
}

#[test]
fn unsupported_format_reported() {
    let output = validate_fixture("deploy.yaml", &[]);
    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Unsupported file format: .yaml"));
}

#[test]
fn missing_config_file() {
    let schema = schema_path();
    let output = run_cli(&[
        "/tmp/nonexistent_anchorkit_config.toml",
        schema.to_str().unwrap(),
    ]);
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Config file not found"),
        "should name the missing file: {stderr}"
    );
    assert!(output.stdout.is_empty(), "no report before validation runs");
}

#[test]
fn missing_schema_file() {
    let config = fixture_path("valid.toml");
    let output = run_cli(&[
        config.to_str().unwrap(),
        "/tmp/nonexistent_anchorkit_schema.json",
    ]);
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Schema file not found"), "{stderr}");
}

#[test]
fn default_schema_path_is_relative_to_cwd() {
    let config = fixture_path("valid.json");
    let output = std::process::Command::new(env!("CARGO_BIN_EXE_anchorkit-config"))
        .arg(config.to_str().unwrap())
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .env_remove("ANCHORKIT_OUTPUT_FORMAT")
        .output()
        .expect("failed to run anchorkit-config");
    assert!(
        output.status.success(),
        "shipped config_schema.json should be picked up: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn json_output() {
    let output = validate_fixture("invalid.toml", &["--format", "json"]);
    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let parsed: serde_json::Value =
        serde_json::from_str(&stdout).expect("output should be valid JSON");

    assert_eq!(parsed["valid"], false);
    assert_eq!(parsed["summary"]["errors"], 10);
    assert_eq!(parsed["summary"]["warnings"], 1);
    assert_eq!(parsed["errors"].as_array().map(Vec::len), Some(10));
}

#[test]
fn binary_content_rejected() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let bin_path = dir.path().join("binary.toml");
    std::fs::write(&bin_path, b"\x00\x01\x02\x03\xff\xfe\xfd\xfc").unwrap();

    let schema = schema_path();
    let output = run_cli(&[bin_path.to_str().unwrap(), schema.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Failed to load config: "), "{stdout}");
}
