#![no_main]

use std::sync::LazyLock;

use anchorkit_config::config::loader::parse_str;
use anchorkit_config::config::{ConfigFormat, ConfigValidator};
use libfuzzer_sys::fuzz_target;

static VALIDATOR: LazyLock<Option<ConfigValidator>> = LazyLock::new(|| {
    let schema = serde_json::from_str(include_str!("../../config_schema.json")).ok()?;
    ConfigValidator::new(&schema).ok()
});

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    for format in [ConfigFormat::Toml, ConfigFormat::Json] {
        let parsed = parse_str(text, format);

        if let Some(validator) = VALIDATOR.as_ref() {
            let result = validator.validate_str(text, format);
            // A parse failure is exactly one error and nothing else
            if parsed.is_err() {
                assert_eq!(result.error_count(), 1);
                assert_eq!(result.warning_count(), 0);
            }
            assert_eq!(result.is_valid(), result.error_count() == 0);
        }
    }
});
