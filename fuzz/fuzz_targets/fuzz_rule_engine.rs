#![no_main]

use anchorkit_config::config::{BusinessRules, DeploymentConfig, StellarRules};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Any JSON shape must yield a typed view and a verdict without panicking
    if let Ok(tree) = serde_json::from_slice::<serde_json::Value>(data) {
        let config = DeploymentConfig::from_tree(&tree);
        let _ = StellarRules.evaluate(&config);
    }
});
