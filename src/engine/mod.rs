//! Heuristic rule engine.
//!
//! Pure, deterministic scoring of one `PageFacts` record against Nielsen's
//! ten usability heuristics: ten independent rule tables, a shared
//! baseline-and-clamp fold, and an unweighted rounded-mean aggregate.

pub mod catalog;
pub mod matcher;
pub mod rules;
pub mod score;

use chrono::Utc;

use crate::models::{AnalysisResult, HeuristicScore, PageFacts};

/// Run all ten heuristic evaluations and aggregate.
///
/// Same facts in, byte-identical result out (modulo the timestamp). The ten
/// evaluations have no data dependency on each other; results are emitted in
/// ascending id order for output stability.
pub fn analyze(url: &str, facts: &PageFacts) -> AnalysisResult {
    let heuristic_results: Vec<HeuristicScore> = catalog::all()
        .iter()
        .map(|heuristic| {
            let outcome = rules::evaluate(heuristic.id, facts);
            HeuristicScore {
                id: heuristic.id,
                title: heuristic.title.to_string(),
                short_title: heuristic.short_title.to_string(),
                score: outcome.score,
                findings: outcome.findings,
                recommendations: outcome.recommendations,
            }
        })
        .collect();

    let overall_score = aggregate(&heuristic_results);

    AnalysisResult {
        url: url.to_string(),
        timestamp: Utc::now(),
        overall_score,
        heuristic_results,
    }
}

/// Unweighted arithmetic mean of the ten scores, rounded half away from
/// zero.
fn aggregate(results: &[HeuristicScore]) -> u8 {
    if results.is_empty() {
        return 0;
    }
    let sum: u32 = results.iter().map(|r| r.score as u32).sum();
    (sum as f64 / results.len() as f64).round() as u8
}
