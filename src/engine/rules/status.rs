//! Heuristic 1: visibility of system status.

use crate::engine::matcher;
use crate::engine::score::{RuleOutcome, ScoreSheet};
use crate::models::PageFacts;

const FEEDBACK_INDICATORS: &[&str] = &[
    "loading",
    "progress",
    "spinner",
    "animation",
    "fade",
    "alert",
    "notification",
    "toast",
    "status",
    "success",
    "error",
    "warning",
    "info",
];

const FALLBACKS: &[&str] = &[
    "Add visible loading indicators for system operations",
    "Implement real-time status updates for user actions",
];

pub fn evaluate(facts: &PageFacts) -> RuleOutcome {
    let mut sheet = ScoreSheet::new();
    let html = facts.raw_html.to_lowercase();

    if facts.title.len() > 5 {
        sheet.credit(5, format!("Page has a clear title: \"{}\"", facts.title));
    } else {
        sheet.debit(5, "Page is missing a clear title");
        sheet.recommend("Add a descriptive page title");
    }

    if facts.form_count > 0 {
        if html.contains("required") || html.contains("aria-required") {
            sheet.credit(5, "Forms indicate required fields to users");
        } else {
            sheet.adjust(-3);
            sheet.recommend("Add clear indicators for required form fields");
        }

        if html.contains("placeholder") {
            sheet.credit(3, "Input fields use placeholders to guide users");
        }
    }

    let feedback_count = matcher::present_terms(&html, FEEDBACK_INDICATORS);
    if feedback_count >= 3 {
        sheet.credit(10, "Multiple feedback mechanisms detected for system status");
    } else if feedback_count > 0 {
        sheet.credit(5, "Some feedback mechanisms for system status detected");
    } else {
        sheet.debit(10, "Limited visual feedback for system status");
        sheet.recommend("Add loading indicators and status updates for user actions");
    }

    if facts.has_https_protocol {
        sheet.credit(5, "Uses HTTPS protocol for security status indication");
    } else {
        sheet.debit(5, "Not using HTTPS protocol");
        sheet.recommend("Implement HTTPS to improve security status visibility");
    }

    sheet.finish(FALLBACKS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shop_page(https: bool, feedback: bool) -> PageFacts {
        PageFacts {
            title: "Shop".to_string(),
            has_https_protocol: https,
            form_count: 1,
            raw_html: if feedback {
                "<form><input required placeholder=\"name\"></form>\
                 <div class=\"loading spinner toast\"></div>"
                    .to_string()
            } else {
                "<form><input required placeholder=\"name\"></form>".to_string()
            },
            ..Default::default()
        }
    }

    #[test]
    fn https_strictly_increases_score() {
        let secure = evaluate(&shop_page(true, false));
        let insecure = evaluate(&shop_page(false, false));
        assert!(secure.score > insecure.score);
    }

    #[test]
    fn feedback_signals_outscore_their_absence() {
        // Scenario: required + placeholder + three feedback terms + HTTPS
        // versus the same page stripped of HTTPS and feedback terms.
        let strong = evaluate(&shop_page(true, true));
        let weak = evaluate(&shop_page(false, false));
        assert!(strong.score > weak.score);
    }

    #[test]
    fn missing_title_yields_recommendation() {
        let outcome = evaluate(&PageFacts::default());
        assert!(outcome
            .recommendations
            .iter()
            .any(|r| r.contains("descriptive page title")));
    }

    #[test]
    fn feedback_tiers_are_ordered() {
        let none = evaluate(&PageFacts::default());
        let some = evaluate(&PageFacts {
            raw_html: "<div class=\"alert\"></div>".to_string(),
            ..Default::default()
        });
        let many = evaluate(&PageFacts {
            raw_html: "<div class=\"alert toast spinner\"></div>".to_string(),
            ..Default::default()
        });
        assert!(some.score > none.score);
        assert!(many.score > some.score);
    }
}
