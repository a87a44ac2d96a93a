// src/utils.rs

pub const TOKEN_PLACEHOLDER: &str = "<JWT>";

const MASK_KEEP: usize = 6;
const MASK_MIN_LEN: usize = 14;

/// Mask an access token for display. The request header always carries the full token.
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() < MASK_MIN_LEN {
        return TOKEN_PLACEHOLDER.to_string();
    }

    let head: String = chars[..MASK_KEEP].iter().collect();
    let tail: String = chars[chars.len() - MASK_KEEP..].iter().collect();
    format!("{}...{}", head, tail)
}

/// Parse a boolean flag the way system properties are read: only "true" counts
pub fn parse_flag(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("true")
}

/// Read a non-empty environment variable
pub fn env_value(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub fn trim_trailing_slash(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}
