//! Folding of free-text labels into lookup keys.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Lowercase, strip combining diacritics, trim surrounding whitespace.
///
/// `"  Flotación Zn "`, `"FLOTACION ZN"` and `"flotación zn"` all fold to
/// `"flotacion zn"`.
pub fn normalize(s: &str) -> String {
    s.trim()
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

/// Same as [`normalize`], with a missing value folding to `""`.
pub fn normalize_opt(s: Option<&str>) -> String {
    s.map(normalize).unwrap_or_default()
}
