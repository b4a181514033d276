//! Heuristic 9: help users recognize, diagnose, and recover from errors.

use lazy_static::lazy_static;
use regex::Regex;

use crate::engine::matcher;
use crate::engine::score::{RuleOutcome, ScoreSheet};
use crate::models::PageFacts;

lazy_static! {
    static ref ERROR_TERMS: Regex =
        matcher::word_pattern(&["error", "invalid", "failed", "wrong", "incorrect"]);
    static ref GUIDANCE_TERMS: Regex =
        matcher::word_pattern(&["try", "help", "suggestion", "recommend", "please", "fix"]);
}

const FALLBACKS: &[&str] = &[
    "Implement clear, human-readable error messages",
    "Add specific guidance on how to recover from errors",
];

pub fn evaluate(facts: &PageFacts) -> RuleOutcome {
    let mut sheet = ScoreSheet::new();
    let html = facts.raw_html.to_lowercase();

    let error_message_count = matcher::occurrences(&ERROR_TERMS, &facts.raw_html);
    if error_message_count > 0 {
        sheet.credit(5, "Error messaging detected in the interface");

        let helpful_count = matcher::distinct_terms(&GUIDANCE_TERMS, &facts.raw_html);
        if helpful_count >= 2 {
            sheet.credit(10, "Error messages appear to provide helpful guidance");
        } else {
            sheet.debit(5, "Error messages may not provide adequate recovery help");
            sheet.recommend("Enhance error messages with specific recovery instructions");
        }
    }

    if facts.form_count > 0 {
        if html.contains("invalid") || html.contains("valid") || html.contains("error") {
            sheet.credit(10, "Form validation with feedback detected");
        } else {
            sheet.debit(5, "Forms may lack clear validation feedback");
            sheet.recommend("Add clear validation feedback to forms");
        }
    }

    if html.contains("alert") || (html.contains("error") && html.contains("class")) {
        sheet.credit(10, "Visual error indicators likely present");
    }

    if facts.form_count > 0 && html.contains("aria-invalid") {
        sheet.credit(15, "Accessibility-focused form error handling detected");
    }

    sheet.finish(FALLBACKS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_terms_with_guidance_outscore_bare_errors() {
        let helpful = evaluate(&PageFacts {
            raw_html: "<p>Error: invalid email. Please try again.</p>".to_string(),
            ..Default::default()
        });
        let bare = evaluate(&PageFacts {
            raw_html: "<p>Error: invalid email.</p>".to_string(),
            ..Default::default()
        });
        assert!(helpful.score > bare.score);
        assert!(bare
            .recommendations
            .iter()
            .any(|r| r.contains("recovery instructions")));
    }

    #[test]
    fn no_error_terms_skips_the_guidance_subcheck() {
        let outcome = evaluate(&PageFacts {
            raw_html: "<p>All good here</p>".to_string(),
            ..Default::default()
        });
        assert!(!outcome
            .findings
            .iter()
            .any(|f| f.contains("Error messaging")));
    }

    #[test]
    fn forms_without_feedback_terms_get_recommendation() {
        let outcome = evaluate(&PageFacts {
            form_count: 1,
            raw_html: "<form><input></form>".to_string(),
            ..Default::default()
        });
        assert!(outcome
            .recommendations
            .iter()
            .any(|r| r.contains("validation feedback")));
    }

    #[test]
    fn aria_invalid_on_forms_is_rewarded() {
        let accessible = evaluate(&PageFacts {
            form_count: 1,
            raw_html: "<form><input aria-invalid=\"false\"></form>".to_string(),
            ..Default::default()
        });
        let plain = evaluate(&PageFacts {
            form_count: 1,
            raw_html: "<form><input></form>".to_string(),
            ..Default::default()
        });
        assert!(accessible.score > plain.score);
    }

    #[test]
    fn alert_markup_counts_as_visual_indicator() {
        let outcome = evaluate(&PageFacts {
            raw_html: "<div role=\"alert\"></div>".to_string(),
            ..Default::default()
        });
        assert!(outcome
            .findings
            .iter()
            .any(|f| f.contains("Visual error indicators")));
    }
}
