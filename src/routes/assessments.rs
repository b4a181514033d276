use axum::{
    extract::{Query, State},
    Json,
};
use tracing::info;

use crate::error::AppError;
use crate::models::{
    AssessmentListResponse, AssessmentRecord, ListAssessmentsQuery, SubmitAssessmentRequest,
};
use crate::routes::analyze::run_analysis;
use crate::AppState;

#[axum::debug_handler]
pub async fn submit_assessment_handler(
    State(state): State<AppState>,
    Json(request): Json<SubmitAssessmentRequest>,
) -> Result<Json<AssessmentRecord>, AppError> {
    info!(
        "Submitting assessment of {} for {}",
        request.url, request.email
    );

    let result = run_analysis(&state, &request.url, &request.options).await?;
    let record = state.store.submit(&request.email, &request.url, result);

    Ok(Json(record))
}

#[axum::debug_handler]
pub async fn list_assessments_handler(
    State(state): State<AppState>,
    Query(query): Query<ListAssessmentsQuery>,
) -> Result<Json<AssessmentListResponse>, AppError> {
    let assessments = state.store.for_email(&query.email);

    if assessments.is_empty() {
        return Err(AppError::AssessmentNotFound(query.email));
    }

    Ok(Json(AssessmentListResponse { assessments }))
}
