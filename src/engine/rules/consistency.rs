//! Heuristic 4: consistency and standards.

use lazy_static::lazy_static;
use regex::Regex;

use crate::engine::matcher;
use crate::engine::score::{RuleOutcome, ScoreSheet};
use crate::models::PageFacts;

lazy_static! {
    // Pairs of synonyms that should not both appear in the same interface.
    static ref SYNONYM_PAIRS: Vec<(Regex, Regex)> = vec![
        (
            matcher::word_pattern(&["login"]),
            matcher::word_pattern(&["sign in"]),
        ),
        (
            matcher::word_pattern(&["signup"]),
            matcher::word_pattern(&["register"]),
        ),
        (
            matcher::word_pattern(&["delete"]),
            matcher::word_pattern(&["remove"]),
        ),
    ];
}

const FALLBACKS: &[&str] = &[
    "Follow platform conventions users already know",
    "Unify terminology and layout across pages",
];

pub fn evaluate(facts: &PageFacts) -> RuleOutcome {
    let mut sheet = ScoreSheet::new();
    let html = facts.raw_html.to_lowercase();

    if facts.has_navigation && facts.has_footer {
        sheet.credit(10, "Follows standard web layout patterns with header and footer");
    } else {
        sheet.debit(5, "May not follow standard web layout patterns");
        sheet.recommend("Implement standard layout with proper header and footer");
    }

    if facts.h1_count == 1 {
        sheet.credit(10, "Proper use of single H1 heading");
    } else if facts.h1_count > 1 {
        sheet.debit(
            5,
            format!(
                "Multiple H1 headings ({}) create inconsistent structure",
                facts.h1_count
            ),
        );
        sheet.recommend("Use only one H1 heading per page");
    } else if facts.text_content.len() > 500 {
        sheet.debit(10, "Missing main H1 heading on content page");
        sheet.recommend("Add a proper H1 heading");
    }

    if facts.form_count > 0 && facts.input_field_count > 0 {
        if html.contains("label") && html.contains("for=") {
            sheet.credit(10, "Form inputs have proper labels");
        } else {
            sheet.debit(10, "Form inputs may lack proper labels");
            sheet.recommend("Add labels to all form inputs");
        }
    }

    let inconsistencies = SYNONYM_PAIRS
        .iter()
        .filter(|(a, b)| {
            matcher::word_present(a, &facts.text_content)
                && matcher::word_present(b, &facts.text_content)
        })
        .count();

    if inconsistencies > 0 {
        sheet.debit(10, "Inconsistent terminology detected");
        sheet.recommend("Standardize terminology across the interface");
    } else {
        sheet.credit(10, "Consistent terminology throughout content");
    }

    sheet.finish(FALLBACKS)
}
