//! Heuristic 6: recognition rather than recall.

use crate::engine::score::{RuleOutcome, ScoreSheet};
use crate::models::PageFacts;

const FALLBACKS: &[&str] = &[
    "Make options visible instead of requiring recall",
    "Use recognition-based interface elements",
];

pub fn evaluate(facts: &PageFacts) -> RuleOutcome {
    let mut sheet = ScoreSheet::new();
    let html = facts.raw_html.to_lowercase();

    if facts.has_navigation {
        sheet.credit(10, "Navigation options are visible rather than hidden");
    }

    if facts.input_field_count > 0 {
        if html.contains("placeholder=") {
            sheet.credit(10, "Input fields use placeholders to reduce memory load");
        } else {
            sheet.debit(5, "Input fields may lack placeholders or hints");
            sheet.recommend("Add placeholders to input fields");
        }
    }

    if facts.form_count > 0 {
        if html.contains("<label") {
            sheet.credit(10, "Form elements have visible labels");
        } else {
            sheet.debit(10, "Form elements may lack visible labels");
            sheet.recommend("Add visible labels to all form elements");
        }
    }

    if facts.input_field_count > 0 {
        if html.contains("autocomplete=") || html.contains("<datalist") {
            sheet.credit(10, "Uses autocomplete to minimize recall");
        } else {
            sheet.adjust(-5);
            sheet.recommend("Add autocomplete functionality to common fields");
        }
    }

    if html.contains("icon") || html.contains("svg") {
        sheet.credit(5, "Uses icons to aid recognition");
    }

    sheet.finish(FALLBACKS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_inputs_accumulate_penalties() {
        let outcome = evaluate(&PageFacts {
            form_count: 1,
            input_field_count: 2,
            raw_html: "<form><input><input></form>".to_string(),
            ..Default::default()
        });
        // -5 placeholders, -10 labels, -5 autocomplete
        assert_eq!(outcome.score, 30);
        assert_eq!(outcome.recommendations.len(), 3);
    }

    #[test]
    fn well_annotated_form_is_rewarded() {
        let outcome = evaluate(&PageFacts {
            has_navigation: true,
            form_count: 1,
            input_field_count: 1,
            raw_html: "<form><label>Email</label>\
                       <input placeholder=\"you@example.com\" autocomplete=\"email\"></form>"
                .to_string(),
            ..Default::default()
        });
        assert_eq!(outcome.score, 90);
    }

    #[test]
    fn zero_inputs_skip_input_checks() {
        let outcome = evaluate(&PageFacts::default());
        assert_eq!(outcome.score, 50);
        assert!(outcome.findings.is_empty());
    }

    #[test]
    fn icons_aid_recognition() {
        let outcome = evaluate(&PageFacts {
            raw_html: "<svg viewBox=\"0 0 24 24\"></svg>".to_string(),
            ..Default::default()
        });
        assert!(outcome.findings.iter().any(|f| f.contains("icons")));
    }
}
