use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Score and findings for one of the ten heuristics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeuristicScore {
    pub id: u8,
    pub title: String,
    pub short_title: String,
    pub score: u8,
    pub findings: Vec<String>,
    pub recommendations: Vec<String>,
}

impl HeuristicScore {
    pub fn band(&self) -> ScoreBand {
        ScoreBand::from_score(self.score)
    }
}

/// The terminal output of one analysis run: ten heuristic scores in id
/// order plus the rounded mean.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub url: String,
    pub timestamp: DateTime<Utc>,
    pub overall_score: u8,
    pub heuristic_results: Vec<HeuristicScore>,
}

/// Classification bands used uniformly for status display.
///
/// Boundaries are half-open: >= 70 is good, < 30 is critical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Good,
    Moderate,
    Critical,
}

impl ScoreBand {
    pub fn from_score(score: u8) -> Self {
        if score >= 70 {
            ScoreBand::Good
        } else if score >= 30 {
            ScoreBand::Moderate
        } else {
            ScoreBand::Critical
        }
    }
}

/// A stored assessment submission, keyed by requester email and site URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentRecord {
    pub id: Uuid,
    pub email: String,
    pub url: String,
    pub overall_score: u8,
    pub submitted_at: DateTime<Utc>,
    pub result: AnalysisResult,
}
