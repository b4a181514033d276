//! Heuristic 10: help and documentation.

use lazy_static::lazy_static;
use regex::Regex;

use crate::engine::matcher;
use crate::engine::score::{RuleOutcome, ScoreSheet};
use crate::models::PageFacts;

lazy_static! {
    static ref HELP_TERMS: Regex = matcher::word_pattern(&[
        "help",
        "faq",
        "support",
        "guide",
        "tutorial",
        "documentation",
        "instructions",
    ]);
}

const CONTEXTUAL_HELP_TERMS: &[&str] = &["tooltip", "title=", "aria-describedby"];
const CONTACT_TERMS: &[&str] = &["contact", "support", "email us"];

const FALLBACKS: &[&str] = &[
    "Create searchable help documentation",
    "Add contextual help for complex features",
];

pub fn evaluate(facts: &PageFacts) -> RuleOutcome {
    let mut sheet = ScoreSheet::new();
    let html = facts.raw_html.to_lowercase();

    let help_section_present = matcher::word_present(&HELP_TERMS, &facts.raw_html);
    if help_section_present {
        sheet.credit(15, "Help section or documentation detected");
    } else {
        sheet.debit(10, "No obvious help or documentation section");
        sheet.recommend("Add a help or FAQ section");
    }

    if matcher::contains_any(&html, CONTEXTUAL_HELP_TERMS) {
        sheet.credit(10, "Contextual help likely available via tooltips or descriptions");
    } else {
        sheet.adjust(-5);
        sheet.recommend("Add tooltips or contextual help for complex features");
    }

    if matcher::contains_any(&html, CONTACT_TERMS) {
        sheet.credit(10, "Contact or support options available");
    } else {
        sheet.debit(5, "Limited contact or support options");
        sheet.recommend("Add clear contact or support information");
    }

    if (html.contains("search") || html.contains("find")) && help_section_present {
        sheet.credit(10, "Search functionality for help content detected");
    }

    sheet.finish(FALLBACKS)
}
