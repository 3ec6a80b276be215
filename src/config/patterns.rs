//! Anchored format matchers
//!
//! Each pattern is anchored with `^...$`, which in `regex` spans the whole
//! input: no partial match and no trailing newline is accepted. Digit and
//! letter classes are ASCII-only.

use std::sync::LazyLock;

use regex::Regex;

/// Minimum length accepted by [`is_valid_url`].
pub const URL_MIN_LEN: usize = 8;

/// Maximum length accepted by [`is_valid_url`].
pub const URL_MAX_LEN: usize = 256;

/// Maximum edit distance for a "did you mean" suggestion.
const MAX_SUGGESTION_DISTANCE: usize = 3;

static SLUG: LazyLock<Regex> = LazyLock::new(|| compile(r"^[a-z0-9-]+$"));

static SEMVER: LazyLock<Regex> = LazyLock::new(|| compile(r"^[0-9]+\.[0-9]+\.[0-9]+$"));

static STELLAR_ADDRESS: LazyLock<Regex> = LazyLock::new(|| compile(r"^G[A-Z0-9]{55}$"));

static URL: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^https?://[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}(/.*)?$"));

/// Compiles one of the literal patterns above.
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid built-in pattern {pattern}: {e}"))
}

/// `^[a-z0-9-]+$`
#[must_use]
pub fn is_slug(s: &str) -> bool {
    SLUG.is_match(s)
}

/// `^\d+\.\d+\.\d+$` with ASCII digits.
#[must_use]
pub fn is_semver(s: &str) -> bool {
    SEMVER.is_match(s)
}

/// `^G[A-Z0-9]{55}$`
#[must_use]
pub fn is_stellar_address(s: &str) -> bool {
    STELLAR_ADDRESS.is_match(s)
}

/// URL shape check: 8 to 256 characters matching
/// `^https?://[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}(/.*)?$`.
///
/// Plain `http://` is accepted here; transport security is a separate
/// advisory.
#[must_use]
pub fn is_valid_url(url: &str) -> bool {
    let len = url.chars().count();
    (URL_MIN_LEN..=URL_MAX_LEN).contains(&len) && URL.is_match(url)
}

/// Suggest the closest allowed value for a typo.
///
/// Returns the candidate with the smallest Damerau-Levenshtein distance if
/// that distance is at most 3.
#[must_use]
pub fn suggest<'a>(input: &str, candidates: &[&'a str]) -> Option<&'a str> {
    candidates
        .iter()
        .map(|c| (*c, strsim::damerau_levenshtein(input, c)))
        .filter(|(_, dist)| *dist <= MAX_SUGGESTION_DISTANCE)
        .min_by_key(|(_, dist)| *dist)
        .map(|(c, _)| c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_slug() {
        assert!(is_slug("anchorkit"));
        assert!(is_slug("kyc-issuer-2"));
        assert!(is_slug("-"));
        assert!(!is_slug(""));
        assert!(!is_slug("AnchorKit"));
        assert!(!is_slug("anchor_kit"));
        assert!(!is_slug("anchor kit"));
        assert!(!is_slug("anchorkit\n"));
        assert!(!is_slug("ünïcode"));
    }

    #[test]
    fn test_semver() {
        assert!(is_semver("1.0.0"));
        assert!(is_semver("10.20.300"));
        assert!(!is_semver("1.0"));
        assert!(!is_semver("1.0.0.0"));
        assert!(!is_semver("1..0"));
        assert!(!is_semver("v1.0.0"));
        assert!(!is_semver("1.0.0-beta"));
        assert!(!is_semver("1.0.0\n"));
        assert!(!is_semver("١.٢.٣"));
    }

    #[test]
    fn test_stellar_address() {
        let valid = format!("G{}", "A".repeat(55));
        assert!(is_stellar_address(&valid));
        assert!(is_stellar_address(&format!("G{}", "7".repeat(55))));

        assert!(!is_stellar_address(&format!("G{}", "A".repeat(50))));
        assert!(!is_stellar_address(&format!("G{}", "A".repeat(56))));
        assert!(!is_stellar_address(&format!("S{}", "A".repeat(55))));
        assert!(!is_stellar_address(&format!("G{}a", "A".repeat(54))));
        assert!(!is_stellar_address(""));
        assert!(!is_stellar_address(&format!("G{}\n", "A".repeat(55))));
    }

    #[test]
    fn test_url_accepts_http_and_https() {
        assert!(is_valid_url("https://example.com"));
        assert!(is_valid_url("http://example.com"));
        assert!(is_valid_url("https://kyc.anchor-1.example.org/v1/attest?x=1"));
        assert!(is_valid_url("https://example.com/"));
    }

    #[test]
    fn test_url_rejects_bad_shapes() {
        assert!(!is_valid_url("ftp://x"));
        assert!(!is_valid_url("ftp://example.com"));
        assert!(!is_valid_url("https://localhost"));
        assert!(!is_valid_url("https://10.0.0.1"));
        assert!(!is_valid_url("https://example.c"));
        assert!(!is_valid_url("https://example.c0m"));
        assert!(!is_valid_url("https://.com"));
        assert!(!is_valid_url("https://exa_mple.com"));
        assert!(!is_valid_url("https://example.com:8443/api"));
        assert!(!is_valid_url("https://example.com/a\nb"));
        assert!(!is_valid_url("https://example.com\n"));
        assert!(!is_valid_url(" https://example.com"));
        assert!(!is_valid_url("example.com/path"));
    }

    #[test]
    fn test_url_length_bounds() {
        assert!(!is_valid_url(""));
        assert!(!is_valid_url("http://"));

        let path = "a".repeat(URL_MAX_LEN - "https://example.com/".len());
        let at_limit = format!("https://example.com/{path}");
        assert_eq!(at_limit.len(), URL_MAX_LEN);
        assert!(is_valid_url(&at_limit));

        let over_limit = format!("{at_limit}a");
        assert!(!is_valid_url(&over_limit));
    }

    #[test]
    fn test_suggest_close() {
        let networks = ["stellar-testnet", "stellar-mainnet", "stellar-futurenet"];
        assert_eq!(suggest("stellar-tesnet", &networks), Some("stellar-testnet"));
        assert_eq!(suggest("stellar-mainet", &networks), Some("stellar-mainnet"));
    }

    #[test]
    fn test_suggest_far() {
        let networks = ["stellar-testnet", "stellar-mainnet", "stellar-futurenet"];
        assert_eq!(suggest("ethereum", &networks), None);
    }

    proptest! {
        #[test]
        fn prop_generated_addresses_match(body in "[A-Z0-9]{55}") {
            let address = format!("G{body}");
            prop_assert!(is_stellar_address(&address));
        }

        #[test]
        fn prop_wrong_length_addresses_fail(body in "[A-Z0-9]{0,54}|[A-Z0-9]{56,70}") {
            let address = format!("G{body}");
            prop_assert!(!is_stellar_address(&address));
        }

        #[test]
        fn prop_slugs_match(s in "[a-z0-9-]{1,40}") {
            prop_assert!(is_slug(&s));
        }

        #[test]
        fn prop_uppercase_breaks_slug(prefix in "[a-z0-9-]{0,10}", upper in "[A-Z]", suffix in "[a-z0-9-]{0,10}") {
            let s = format!("{prefix}{upper}{suffix}");
            prop_assert!(!is_slug(&s));
        }
    }
}
