//! Email address cleanup

use regex::Regex;
use std::sync::OnceLock;

fn address_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"\w+\.*\w+@\w+\.(\w+\.*)*\w+").ok())
        .as_ref()
}

/// The first plausible address in `email`, or `""` if there is none
pub fn repair_email(email: &str) -> String {
    address_pattern()
        .and_then(|pattern| pattern.find(email))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}
