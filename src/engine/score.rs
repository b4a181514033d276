/// Every evaluator starts from the same neutral baseline.
pub const BASELINE: i32 = 50;

/// Scores below this band are critical and must carry at least one
/// recommendation.
pub const CRITICAL_THRESHOLD: u8 = 30;

/// The raw output of one heuristic evaluation before catalog metadata is
/// attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOutcome {
    pub score: u8,
    pub findings: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Local accumulator folded by each rule table.
///
/// Checks credit or debit fixed deltas and append findings as they fire;
/// deficiency checks also append recommendations. `finish` clamps the
/// accumulated score into `[1, 100]` and guarantees critical scores carry
/// fallback recommendations.
#[derive(Debug)]
pub struct ScoreSheet {
    score: i32,
    findings: Vec<String>,
    recommendations: Vec<String>,
}

impl ScoreSheet {
    pub fn new() -> Self {
        Self {
            score: BASELINE,
            findings: Vec::new(),
            recommendations: Vec::new(),
        }
    }

    /// A positive signal: add `delta` points and record the observation.
    pub fn credit(&mut self, delta: i32, finding: impl Into<String>) {
        self.score += delta;
        self.findings.push(finding.into());
    }

    /// A negative signal: subtract `delta` points and record the observation.
    pub fn debit(&mut self, delta: i32, finding: impl Into<String>) {
        self.score -= delta;
        self.findings.push(finding.into());
    }

    /// Apply a delta without a finding (some checks only leave a
    /// recommendation behind).
    pub fn adjust(&mut self, delta: i32) {
        self.score += delta;
    }

    pub fn recommend(&mut self, text: impl Into<String>) {
        self.recommendations.push(text.into());
    }

    /// Clamp into `[1, 100]`; if the result is critical and no check left a
    /// recommendation, fall back to the heuristic's generic ones.
    pub fn finish(mut self, fallbacks: &[&str]) -> RuleOutcome {
        let score = self.score.clamp(1, 100) as u8;
        if score < CRITICAL_THRESHOLD && self.recommendations.is_empty() {
            self.recommendations
                .extend(fallbacks.iter().map(|r| r.to_string()));
        }
        RuleOutcome {
            score,
            findings: self.findings,
            recommendations: self.recommendations,
        }
    }
}

impl Default for ScoreSheet {
    fn default() -> Self {
        Self::new()
    }
}
