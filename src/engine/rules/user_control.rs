//! Heuristic 3: user control and freedom.

use lazy_static::lazy_static;
use regex::Regex;

use crate::engine::matcher;
use crate::engine::score::{RuleOutcome, ScoreSheet};
use crate::models::PageFacts;

lazy_static! {
    static ref CONTROL_TERMS: Regex =
        matcher::word_pattern(&["back", "previous", "cancel", "return", "undo"]);
}

const FALLBACKS: &[&str] = &[
    "Add clear exit points for multi-step processes",
    "Implement back/cancel functionality",
];

pub fn evaluate(facts: &PageFacts) -> RuleOutcome {
    let mut sheet = ScoreSheet::new();
    let html = facts.raw_html.to_lowercase();

    if facts.has_navigation {
        sheet.credit(10, "Page has navigation menu for freedom of movement");
    } else if facts.link_count > 5 {
        sheet.debit(5, "Multiple links without clear navigation structure");
        sheet.recommend("Implement consistent navigation structure");
    }

    let control_count = matcher::distinct_terms(&CONTROL_TERMS, &facts.raw_html);
    if control_count >= 2 {
        sheet.credit(15, "Provides user control options (back, cancel, undo)");
    } else if facts.form_count > 0 {
        sheet.debit(10, "Forms may lack clear exit or cancel options");
        sheet.recommend("Add cancel/exit options for forms and processes");
    }

    if facts.form_count > 0 {
        if html.contains("type=\"reset\"") || html.contains("clear") {
            sheet.credit(10, "Forms provide reset options for user control");
        } else {
            sheet.debit(5, "Forms may lack reset functionality");
            sheet.recommend("Add reset options to forms");
        }
    }

    if html.contains("confirm") || html.contains("are you sure") {
        sheet.credit(10, "Uses confirmation dialogs for important actions");
    }

    sheet.finish(FALLBACKS)
}
