//! API key normalization.
//!
//! Keys are often pasted with surrounding whitespace or wrapped in other
//! text (`export OPENAI_API_KEY=sk-...`, `key: sk-...`). The sanitizer pulls
//! the canonical `sk-` token out of such input.

use regex::Regex;
use std::sync::OnceLock;

/// Prefix every canonical API key starts with.
pub const API_KEY_PREFIX: &str = "sk-";

fn key_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"sk-[A-Za-z0-9]+").expect("static pattern is valid"))
}

fn canonical_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^sk-[A-Za-z0-9]+$").expect("static pattern is valid"))
}

/// Normalize a free-form credential string into a canonical token.
///
/// - Empty input yields an empty string.
/// - Input starting with `sk-` is trimmed and returned.
/// - Input containing `sk-` elsewhere yields the first `sk-` token found in it.
/// - Anything else is returned trimmed.
///
/// The function never fails.
///
/// # Example
///
/// ```rust
/// use agent_config::sanitize_api_key;
///
/// assert_eq!(sanitize_api_key("  sk-abc123  "), "sk-abc123");
/// assert_eq!(sanitize_api_key("prefix sk-XYZ789 suffix"), "sk-XYZ789");
/// assert_eq!(sanitize_api_key("no-key-here"), "no-key-here");
/// ```
pub fn sanitize_api_key(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    if input.starts_with(API_KEY_PREFIX) {
        return input.trim().to_string();
    }

    if input.contains(API_KEY_PREFIX) {
        if let Some(found) = key_pattern().find(input) {
            return found.as_str().to_string();
        }
    }

    input.trim().to_string()
}

/// Check whether `key` is already a canonical token (`sk-` plus alphanumerics,
/// nothing around it).
pub fn is_canonical_api_key(key: &str) -> bool {
    canonical_pattern().is_match(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(sanitize_api_key(""), "");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(sanitize_api_key("  sk-abc123  "), "sk-abc123");
        assert_eq!(sanitize_api_key("sk-abc123\n"), "sk-abc123");
    }

    #[test]
    fn extracts_embedded_key() {
        assert_eq!(sanitize_api_key("prefix sk-XYZ789 suffix"), "sk-XYZ789");
        assert_eq!(
            sanitize_api_key("export OPENAI_API_KEY=sk-proj42;"),
            "sk-proj42"
        );
    }

    #[test]
    fn takes_first_of_several_keys() {
        assert_eq!(sanitize_api_key("old sk-aaa new sk-bbb"), "sk-aaa");
    }

    #[test]
    fn stops_at_first_non_alphanumeric() {
        assert_eq!(sanitize_api_key("key=sk-abc_def"), "sk-abc");
    }

    #[test]
    fn passes_through_input_without_prefix() {
        assert_eq!(sanitize_api_key("no-key-here"), "no-key-here");
        assert_eq!(sanitize_api_key("  padded  "), "padded");
    }

    #[test]
    fn bare_prefix_without_token_is_trimmed() {
        assert_eq!(sanitize_api_key(" value sk- "), "value sk-");
    }

    #[test]
    fn leading_prefix_keeps_trailing_text() {
        // Prefix at position zero short-circuits extraction.
        assert_eq!(sanitize_api_key("sk-abc def "), "sk-abc def");
    }

    #[test]
    fn canonical_keys_are_fixed_points() {
        for key in ["sk-a", "sk-abc123", "sk-XYZ789", "sk-0"] {
            assert!(is_canonical_api_key(key));
            let once = sanitize_api_key(key);
            assert_eq!(once, key);
            assert_eq!(sanitize_api_key(&once), once);
        }
    }

    #[test]
    fn rejects_non_canonical_keys() {
        assert!(!is_canonical_api_key(""));
        assert!(!is_canonical_api_key("sk-"));
        assert!(!is_canonical_api_key(" sk-abc"));
        assert!(!is_canonical_api_key("sk-abc-def"));
        assert!(!is_canonical_api_key("no-key-here"));
    }
}
