//! Normalization for exact-match keys and gram extraction.
//!
//! Two deliberately different forms:
//!
//! - [`normalize`] lowercases only. It keys the exact set, so `"U.S.A."`
//!   and `"usa"` stay distinct entries.
//! - [`simplify`] lowercases and strips every character outside ASCII
//!   alphanumerics, the Latin-1 supplement, comma, and space. It feeds
//!   gram extraction only, so punctuation never influences n-gram scores.
//!
//! Exact lookup is strict about punctuation while fuzzy scoring ignores
//! it; the two must not be unified.

use once_cell::sync::Lazy;
use regex::Regex;

/// Characters that never contribute to gram space.
static NON_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9À-ÿ, ]+").unwrap());

/// Normalizes a string into its exact-match lookup key.
///
/// Case-insensitive and idempotent: `normalize(normalize(s)) == normalize(s)`.
pub fn normalize(value: &str) -> String {
    value.to_lowercase()
}

/// Normalizes a string into gram space.
///
/// Lowercases, then removes every character outside
/// `[a-z0-9\u{00C0}-\u{00FF}, ]`. May return an empty string.
pub fn simplify(value: &str) -> String {
    let lowered = value.to_lowercase();
    NON_WORD.replace_all(&lowered, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases() {
        assert_eq!(normalize("HeLLo"), "hello");
        assert_eq!(normalize("FRANCE"), "france");
    }

    #[test]
    fn test_normalize_keeps_punctuation() {
        assert_eq!(normalize("U.S.A.!"), "u.s.a.!");
    }

    #[test]
    fn test_normalize_idempotent() {
        let once = normalize("MiXeD Case, 42!");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn test_simplify_strips_punctuation() {
        assert_eq!(simplify("Hello, World!"), "hello, world");
        assert_eq!(simplify("a_b-c.d"), "abcd");
    }

    #[test]
    fn test_simplify_keeps_comma_space_digits() {
        assert_eq!(simplify("Route 66, exit 4"), "route 66, exit 4");
    }

    #[test]
    fn test_simplify_keeps_latin1_supplement() {
        assert_eq!(simplify("Café Noël"), "café noël");
    }

    #[test]
    fn test_simplify_empty() {
        assert_eq!(simplify(""), "");
        assert_eq!(simplify("!!!"), "");
    }

    #[test]
    fn test_asymmetry() {
        // The lookup key keeps what gram space drops.
        assert_eq!(normalize("don't"), "don't");
        assert_eq!(simplify("don't"), "dont");
    }
}
