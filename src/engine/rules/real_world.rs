//! Heuristic 2: match between the system and the real world.

use lazy_static::lazy_static;
use regex::Regex;

use crate::engine::matcher;
use crate::engine::score::{RuleOutcome, ScoreSheet};
use crate::models::PageFacts;

lazy_static! {
    static ref JARGON: Regex = matcher::word_pattern(&[
        "api",
        "backend",
        "frontend",
        "sql",
        "json",
        "xml",
        "http",
        "ftp",
        "sdk",
        "ajax",
        "algorithm",
        "runtime",
        "localhost",
        "compiler",
    ]);
    static ref METAPHORS: Regex = matcher::word_pattern(&[
        "cart",
        "shopping",
        "checkout",
        "profile",
        "dashboard",
        "inbox",
        "folder",
        "file",
        "trash",
        "home",
        "menu",
        "search",
    ]);
}

const FALLBACKS: &[&str] = &[
    "Use everyday language familiar to your audience",
    "Present information in a natural and logical order",
];

pub fn evaluate(facts: &PageFacts) -> RuleOutcome {
    let mut sheet = ScoreSheet::new();

    let jargon_count = matcher::occurrences(&JARGON, &facts.text_content);
    if jargon_count > 5 {
        sheet.debit(
            15,
            format!("High amount of technical jargon detected ({jargon_count} instances)"),
        );
        sheet.recommend("Replace technical terms with everyday language");
    } else if jargon_count > 0 {
        sheet.debit(
            5,
            format!("Some technical jargon detected ({jargon_count} instances)"),
        );
        sheet.recommend("Consider simplifying technical language for general users");
    } else {
        sheet.credit(10, "Content uses clear, non-technical language");
    }

    let metaphor_count = matcher::distinct_terms(&METAPHORS, &facts.text_content);
    if metaphor_count >= 3 {
        sheet.credit(15, "Uses familiar metaphors and concepts from the real world");
    } else if metaphor_count > 0 {
        sheet.credit(5, "Some use of familiar metaphors detected");
    } else {
        sheet.debit(5, "Limited use of familiar real-world metaphors");
        sheet.recommend("Incorporate familiar real-world metaphors for better understanding");
    }

    if facts.img_count > 0 {
        let alt_percent =
            ((facts.img_with_alt as f64 / facts.img_count as f64) * 100.0).round() as u32;

        if alt_percent >= 80 {
            sheet.credit(10, format!("Good use of alt text on images ({alt_percent}%)"));
        } else if alt_percent >= 50 {
            sheet.credit(
                0,
                format!("Moderate use of alt text on images ({alt_percent}%)"),
            );
            sheet.recommend("Improve alt text coverage on images");
        } else {
            sheet.debit(10, format!("Poor use of alt text on images ({alt_percent}%)"));
            sheet.recommend("Add descriptive alt text to all images");
        }
    }

    sheet.finish(FALLBACKS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn high_alt_coverage_outscores_low_coverage() {
        let covered = evaluate(&PageFacts {
            img_count: 10,
            img_with_alt: 9,
            ..Default::default()
        });
        let uncovered = evaluate(&PageFacts {
            img_count: 10,
            img_with_alt: 2,
            ..Default::default()
        });
        assert!(covered.score > uncovered.score);
        assert!(covered.findings.iter().any(|f| f.contains("90%")));
        assert!(uncovered.findings.iter().any(|f| f.contains("20%")));
    }

    #[test]
    fn alt_tier_boundary_at_fifty_percent() {
        let moderate = evaluate(&PageFacts {
            img_count: 10,
            img_with_alt: 5,
            ..Default::default()
        });
        assert!(moderate
            .findings
            .iter()
            .any(|f| f.contains("Moderate use of alt text")));
        assert!(moderate
            .recommendations
            .iter()
            .any(|r| r.contains("alt text coverage")));
    }

    #[test]
    fn heavy_jargon_is_penalized_with_instance_count() {
        let outcome = evaluate(&PageFacts {
            text_content: "Our API uses SQL and JSON over HTTP with an SDK and AJAX".to_string(),
            ..Default::default()
        });
        assert!(outcome
            .findings
            .iter()
            .any(|f| f.contains("High amount of technical jargon detected (6 instances)")));
    }

    #[test]
    fn familiar_metaphors_are_rewarded() {
        let outcome = evaluate(&PageFacts {
            text_content: "Add to cart, open your inbox, or use the menu".to_string(),
            ..Default::default()
        });
        assert!(outcome
            .findings
            .iter()
            .any(|f| f.contains("familiar metaphors and concepts")));
    }

    #[test]
    fn zero_images_skips_alt_check() {
        let outcome = evaluate(&PageFacts::default());
        assert!(!outcome.findings.iter().any(|f| f.contains("alt text")));
    }
}
