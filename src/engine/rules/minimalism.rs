//! Heuristic 8: aesthetic and minimalist design.

use lazy_static::lazy_static;
use regex::Regex;

use crate::engine::matcher;
use crate::engine::score::{RuleOutcome, ScoreSheet};
use crate::models::PageFacts;

lazy_static! {
    // Inline hex color declarations; a rough proxy for palette size.
    static ref HEX_COLOR: Regex =
        Regex::new(r"(?i)color:\s*#[0-9a-f]{3,6}").expect("valid color pattern");
}

const WHITESPACE_TERMS: &[&str] = &["space", "gap", "grid", "flex"];
const TYPOGRAPHY_TERMS: &[&str] = &["font-family", "typography", "text-"];

const FALLBACKS: &[&str] = &[
    "Simplify the interface by removing unnecessary elements",
    "Focus on essential content and functionality",
];

pub fn evaluate(facts: &PageFacts) -> RuleOutcome {
    let mut sheet = ScoreSheet::new();
    let html = facts.raw_html.to_lowercase();

    let text_length = facts.text_content.len();
    if text_length > 10000 {
        sheet.debit(10, "Large amount of text content may overwhelm users");
        sheet.recommend("Consider breaking content into smaller, focused sections");
    } else if text_length < 1000 && facts.link_count < 5 {
        sheet.credit(10, "Concise content approach");
    }

    if facts.img_count > 20 {
        sheet.debit(
            10,
            format!(
                "High number of images ({}) may create visual clutter",
                facts.img_count
            ),
        );
        sheet.recommend("Reduce the number of images to focus on essential content");
    }

    if html.contains("margin") && html.contains("padding") {
        sheet.credit(5, "Uses CSS spacing for visual organization");
    }

    if matcher::contains_any(&html, WHITESPACE_TERMS) {
        sheet.credit(10, "Layout suggests use of whitespace and modern layout techniques");
    }

    if matcher::contains_any(&html, TYPOGRAPHY_TERMS) {
        sheet.credit(5, "Attention to typography detected");
    }

    if html.contains("color:") || html.contains("background-color") {
        let color_count = HEX_COLOR.find_iter(&html).count();
        if color_count > 15 {
            sheet.debit(5, "Potentially too many different colors used");
            sheet.recommend("Reduce color palette for more cohesive design");
        } else {
            sheet.credit(5, "Appears to use a controlled color palette");
        }
    }

    sheet.finish(FALLBACKS)
}
