use serde::{Deserialize, Serialize};

use crate::models::PageFacts;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub url: String,
    #[serde(default)]
    pub options: AnalyzeOptions,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyzeOptions {
    #[serde(default)]
    pub no_cache: bool,
    pub cache_tolerance: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchAnalyzeRequest {
    pub urls: Vec<String>,
    #[serde(default)]
    pub options: AnalyzeOptions,
}

/// Run the engine directly on caller-supplied facts, no fetching involved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactsAnalyzeRequest {
    pub url: String,
    pub facts: PageFacts,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitAssessmentRequest {
    pub email: String,
    pub url: String,
    #[serde(default)]
    pub options: AnalyzeOptions,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListAssessmentsQuery {
    pub email: String,
}
