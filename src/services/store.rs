use crate::models::{AnalysisResult, AssessmentRecord};
use chrono::Utc;
use dashmap::DashMap;
use tracing::debug;
use uuid::Uuid;

/// In-memory store of submitted assessments, keyed by requester email and
/// site URL. Resubmitting the same pair replaces the earlier record.
pub struct AssessmentStore {
    records: DashMap<(String, String), AssessmentRecord>,
}

impl AssessmentStore {
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
        }
    }

    pub fn submit(&self, email: &str, url: &str, result: AnalysisResult) -> AssessmentRecord {
        let record = AssessmentRecord {
            id: Uuid::new_v4(),
            email: email.to_string(),
            url: url.to_string(),
            overall_score: result.overall_score,
            submitted_at: Utc::now(),
            result,
        };

        debug!("Storing assessment for {} / {}", email, url);
        self.records
            .insert((email.to_string(), url.to_string()), record.clone());
        record
    }

    /// All records submitted under `email`, newest first.
    pub fn for_email(&self, email: &str) -> Vec<AssessmentRecord> {
        let mut records: Vec<AssessmentRecord> = self
            .records
            .iter()
            .filter(|entry| entry.key().0 == email)
            .map(|entry| entry.value().clone())
            .collect();
        records.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
        records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for AssessmentStore {
    fn default() -> Self {
        Self::new()
    }
}
