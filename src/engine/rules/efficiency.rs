//! Heuristic 7: flexibility and efficiency of use.

use crate::engine::matcher;
use crate::engine::score::{RuleOutcome, ScoreSheet};
use crate::models::PageFacts;

const SHORTCUT_TERMS: &[&str] = &["accesskey=", "keyboard", "shortcut", "keydown", "keyup"];
const SEARCH_TERMS: &[&str] = &["search", "type=\"search\"", "query"];
const FILTER_TERMS: &[&str] = &["filter", "sort", "order"];
const PAGINATION_TERMS: &[&str] = &["pagination", "page=", "infinite scroll", "load more"];
const RESPONSIVE_TERMS: &[&str] = &["media", "@media", "responsive", "viewport"];

const FALLBACKS: &[&str] = &[
    "Provide accelerators for frequent actions",
    "Support search and filtering for faster access",
];

pub fn evaluate(facts: &PageFacts) -> RuleOutcome {
    let mut sheet = ScoreSheet::new();
    let html = facts.raw_html.to_lowercase();

    if matcher::contains_any(&html, SHORTCUT_TERMS) {
        sheet.credit(15, "Provides keyboard shortcuts for efficiency");
    } else {
        sheet.adjust(-5);
        sheet.recommend("Implement keyboard shortcuts for common actions");
    }

    if matcher::contains_any(&html, SEARCH_TERMS) {
        sheet.credit(10, "Offers search functionality for efficient access");
    } else if facts.text_content.len() > 2000 {
        sheet.debit(5, "Content-heavy page without apparent search functionality");
        sheet.recommend("Add search functionality for content-heavy pages");
    }

    if matcher::contains_any(&html, FILTER_TERMS) {
        sheet.credit(10, "Provides filtering or sorting options for efficiency");
    }

    if matcher::contains_any(&html, PAGINATION_TERMS) {
        sheet.credit(10, "Implements pagination or infinite scroll for large content sets");
    }

    if matcher::contains_any(&html, RESPONSIVE_TERMS) {
        sheet.credit(5, "Uses responsive design for different devices");
    } else {
        sheet.adjust(-5);
        sheet.recommend("Implement responsive design for different devices");
    }

    sheet.finish(FALLBACKS)
}
