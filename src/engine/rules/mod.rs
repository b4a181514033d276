//! The ten per-heuristic rule tables.
//!
//! Each module owns one independently-authored table of signal checks and
//! exposes a single pure `evaluate` over `PageFacts`. No table reads another
//! table's output; evaluation order never affects results.

mod consistency;
mod documentation;
mod efficiency;
mod error_prevention;
mod error_recovery;
mod minimalism;
mod real_world;
mod recognition;
mod status;
mod user_control;

use crate::engine::score::{RuleOutcome, BASELINE};
use crate::models::PageFacts;

/// Dispatch one heuristic id to its rule table.
///
/// Ids outside 1..=10 cannot occur when iterating the catalog; they fall back
/// to a neutral result rather than failing.
pub fn evaluate(id: u8, facts: &PageFacts) -> RuleOutcome {
    match id {
        1 => status::evaluate(facts),
        2 => real_world::evaluate(facts),
        3 => user_control::evaluate(facts),
        4 => consistency::evaluate(facts),
        5 => error_prevention::evaluate(facts),
        6 => recognition::evaluate(facts),
        7 => efficiency::evaluate(facts),
        8 => minimalism::evaluate(facts),
        9 => error_recovery::evaluate(facts),
        10 => documentation::evaluate(facts),
        _ => RuleOutcome {
            score: BASELINE as u8,
            findings: vec!["Unable to analyze this heuristic with available data".to_string()],
            recommendations: vec!["Conduct manual evaluation for this heuristic".to_string()],
        },
    }
}
