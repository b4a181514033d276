use serde::{Deserialize, Serialize};

use crate::models::{AnalysisResult, AssessmentRecord};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchAnalyzeResponse {
    pub results: Vec<BatchAnalyzeResult>,
    pub total_processing_time_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchAnalyzeResult {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<AnalysisResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub cached_results: usize,
    pub stored_assessments: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentListResponse {
    pub assessments: Vec<AssessmentRecord>,
}
