//! Text normalization for catalog matching.

use regex::Regex;
use std::sync::LazyLock;

// Any run of whitespace and/or hyphens.
static RE_SEPARATORS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\s\-]+").unwrap());

/// Canonicalize a free-form string into a comparable token form.
///
/// Lowercases, collapses whitespace/hyphen runs into a single `_`, then
/// trims leading and trailing underscores. Idempotent.
pub fn normalize(s: &str) -> String {
    let lower = s.to_lowercase();
    RE_SEPARATORS
        .replace_all(&lower, "_")
        .trim_matches('_')
        .to_string()
}

/// [`normalize`] for optional fields; `None` becomes the empty string.
pub fn normalize_opt(s: Option<&str>) -> String {
    s.map(normalize).unwrap_or_default()
}
