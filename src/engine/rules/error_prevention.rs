//! Heuristic 5: error prevention.

use crate::engine::matcher;
use crate::engine::score::{RuleOutcome, ScoreSheet};
use crate::models::PageFacts;

const VALIDATION_TERMS: &[&str] = &[
    "required",
    "pattern",
    "minlength",
    "maxlength",
    "min",
    "max",
    "validate",
    "validation",
];

const SPECIAL_INPUT_TYPES: &[&str] = &[
    "type=\"email\"",
    "type=\"date\"",
    "type=\"number\"",
    "type=\"tel\"",
    "type=\"url\"",
    "type=\"password\"",
    "type=\"search\"",
];

const DESTRUCTIVE_TERMS: &[&str] = &["delete", "remove", "clear", "reset", "cancel"];
const CONFIRMATION_TERMS: &[&str] = &["confirm", "sure", "warning", "caution", "verify"];

const FALLBACKS: &[&str] = &[
    "Constrain inputs to prevent invalid entries",
    "Require confirmation before high-cost actions",
];

pub fn evaluate(facts: &PageFacts) -> RuleOutcome {
    let mut sheet = ScoreSheet::new();
    let html = facts.raw_html.to_lowercase();

    if facts.form_count > 0 {
        let validation_count = matcher::present_terms(&html, VALIDATION_TERMS);
        if validation_count >= 3 {
            sheet.credit(15, "Strong form validation for error prevention");
        } else if validation_count > 0 {
            sheet.credit(5, "Some form validation detected");
            sheet.recommend("Enhance form validation for better error prevention");
        } else {
            sheet.debit(15, "Limited evidence of form validation");
            sheet.recommend("Implement form validation with real-time feedback");
        }
    }

    if facts.input_field_count > 0 {
        if matcher::contains_any(&html, SPECIAL_INPUT_TYPES) {
            sheet.credit(10, "Uses appropriate input types for data entry");
        } else {
            sheet.adjust(-5);
            sheet.recommend("Use specialized HTML5 input types");
        }
    }

    let has_destructive = matcher::contains_any(&html, DESTRUCTIVE_TERMS);
    let has_confirmation = matcher::contains_any(&html, CONFIRMATION_TERMS);

    if has_destructive && has_confirmation {
        sheet.credit(10, "Confirmation for destructive actions detected");
    } else if has_destructive {
        sheet.debit(15, "Destructive actions without confirmation dialogs");
        sheet.recommend("Add confirmation dialogs for irreversible actions");
    }

    sheet.finish(FALLBACKS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unvalidated_forms_score_below_baseline_with_recommendation() {
        // Scenario: one form, markup carrying no validation keyword at all.
        let outcome = evaluate(&PageFacts {
            form_count: 1,
            raw_html: "<form><input name=\"q\"></form>".to_string(),
            ..Default::default()
        });
        assert!(outcome.score < 50);
        assert!(outcome
            .recommendations
            .iter()
            .any(|r| r.contains("form validation")));
    }

    #[test]
    fn strong_validation_needs_three_keywords() {
        let strong = evaluate(&PageFacts {
            form_count: 1,
            raw_html: "<input required pattern=\"\\d+\" minlength=\"2\">".to_string(),
            ..Default::default()
        });
        assert!(strong
            .findings
            .iter()
            .any(|f| f.contains("Strong form validation")));

        let partial = evaluate(&PageFacts {
            form_count: 1,
            raw_html: "<input required>".to_string(),
            ..Default::default()
        });
        assert!(partial
            .findings
            .iter()
            .any(|f| f.contains("Some form validation")));
        assert!(strong.score > partial.score);
    }

    #[test]
    fn zero_forms_disables_validation_check() {
        let outcome = evaluate(&PageFacts::default());
        assert!(!outcome.findings.iter().any(|f| f.contains("validation")));
    }

    #[test]
    fn specialized_input_types_are_rewarded() {
        let typed = evaluate(&PageFacts {
            input_field_count: 1,
            raw_html: "<input type=\"email\">".to_string(),
            ..Default::default()
        });
        let untyped = evaluate(&PageFacts {
            input_field_count: 1,
            raw_html: "<input type=\"text\">".to_string(),
            ..Default::default()
        });
        assert!(typed.score > untyped.score);
    }

    #[test]
    fn destructive_without_confirmation_is_penalized() {
        let unguarded = evaluate(&PageFacts {
            raw_html: "<button>Delete account</button>".to_string(),
            ..Default::default()
        });
        assert!(unguarded
            .findings
            .iter()
            .any(|f| f.contains("without confirmation")));

        let guarded = evaluate(&PageFacts {
            raw_html: "<button>Delete</button><p>Are you sure?</p>".to_string(),
            ..Default::default()
        });
        assert!(guarded.score > unguarded.score);
    }
}
