//! Key masking for diagnostics.

/// Render an API key so it can appear in logs.
///
/// Keys of eight characters or fewer are fully hidden. Longer keys keep the
/// first three and last four characters.
///
/// # Example
///
/// ```rust
/// use agent_config::mask_api_key;
///
/// assert_eq!(mask_api_key("sk-abcdefghijkl"), "sk-...ijkl");
/// assert_eq!(mask_api_key("sk-short"), "****");
/// assert_eq!(mask_api_key(""), "");
/// ```
pub fn mask_api_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    match chars.len() {
        0 => String::new(),
        1..=8 => "****".to_string(),
        n => {
            let head: String = chars[..3].iter().collect();
            let tail: String = chars[n - 4..].iter().collect();
            format!("{head}...{tail}")
        }
    }
}
