//! Shared term-matching helpers for the rule tables.
//!
//! Two matching modes mirror the extraction rules: plain substring presence
//! over pre-lowercased markup, and case-insensitive word-boundary matching
//! over the original text via precompiled alternations.

use regex::Regex;
use std::collections::HashSet;

/// Compile a case-insensitive word-boundary alternation over `terms`.
///
/// Terms are fixed vocabulary (letters, digits, spaces), so no escaping is
/// required.
pub fn word_pattern(terms: &[&str]) -> Regex {
    Regex::new(&format!(r"(?i)\b(?:{})\b", terms.join("|"))).expect("valid term alternation")
}

/// Total number of word-boundary matches in `text`.
pub fn occurrences(pattern: &Regex, text: &str) -> usize {
    pattern.find_iter(text).count()
}

/// Number of distinct terms from the alternation that appear in `text`.
pub fn distinct_terms(pattern: &Regex, text: &str) -> usize {
    let mut seen = HashSet::new();
    for m in pattern.find_iter(text) {
        seen.insert(m.as_str().to_ascii_lowercase());
    }
    seen.len()
}

/// Whether the alternation matches anywhere in `text`.
pub fn word_present(pattern: &Regex, text: &str) -> bool {
    pattern.is_match(text)
}

/// Number of terms appearing at least once as a plain substring.
///
/// `text` must already be lowercased.
pub fn present_terms(text: &str, terms: &[&str]) -> usize {
    terms.iter().filter(|term| text.contains(*term)).count()
}

/// Whether any term appears as a plain substring. `text` must already be
/// lowercased.
pub fn contains_any(text: &str, terms: &[&str]) -> bool {
    terms.iter().any(|term| text.contains(term))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_pattern_respects_boundaries() {
        let pattern = word_pattern(&["api", "sql"]);
        assert_eq!(occurrences(&pattern, "the API uses SQL and more sql"), 3);
        // "rapid" contains "api" but not on a word boundary
        assert_eq!(occurrences(&pattern, "rapid growth"), 0);
    }

    #[test]
    fn distinct_terms_ignores_repeats_and_case() {
        let pattern = word_pattern(&["cart", "menu", "search"]);
        assert_eq!(distinct_terms(&pattern, "Cart cart CART menu"), 2);
    }

    #[test]
    fn multi_word_terms_match() {
        let pattern = word_pattern(&["sign in"]);
        assert!(word_present(&pattern, "Please Sign In here"));
        assert!(!word_present(&pattern, "signing involved"));
    }

    #[test]
    fn present_terms_counts_substrings() {
        assert_eq!(
            present_terms("loading the spinner overlay", &["loading", "spinner", "toast"]),
            2
        );
    }

    #[test]
    fn contains_any_is_substring_based() {
        assert!(contains_any("div class=\"notification\"", &["notification"]));
        assert!(!contains_any("plain text", &["notification"]));
    }
}
