use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Authentication required")]
    Unauthorized,

    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Blocked URL: {0}")]
    BlockedUrl(String),

    #[error("Request timeout after {0} seconds")]
    Timeout(u64),

    #[error("Fetch error: {0}")]
    FetchError(String),

    #[error("Extraction error: {0}")]
    ExtractionError(String),

    #[error("Invalid page facts: {0}")]
    InvalidFacts(String),

    #[error("Rate limit exceeded for domain: {0}")]
    RateLimitExceeded(String),

    #[error("Circuit breaker open for domain: {0}")]
    CircuitBreakerOpen(String),

    #[error("Too many URLs requested: {0}")]
    TooManyUrls(usize),

    #[error("Assessment not found for email: {0}")]
    AssessmentNotFound(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, self.to_string()),
            AppError::InvalidApiKey => (StatusCode::UNAUTHORIZED, self.to_string()),
            AppError::InvalidUrl(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::BlockedUrl(_) => (StatusCode::FORBIDDEN, self.to_string()),
            AppError::Timeout(_) => (StatusCode::GATEWAY_TIMEOUT, self.to_string()),
            AppError::FetchError(_) => (StatusCode::BAD_GATEWAY, self.to_string()),
            AppError::ExtractionError(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
            AppError::InvalidFacts(_) => (StatusCode::UNPROCESSABLE_ENTITY, self.to_string()),
            AppError::RateLimitExceeded(_) => (StatusCode::TOO_MANY_REQUESTS, self.to_string()),
            AppError::CircuitBreakerOpen(_) => (StatusCode::SERVICE_UNAVAILABLE, self.to_string()),
            AppError::TooManyUrls(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::AssessmentNotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
            AppError::IoError(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        let body = Json(json!({
            "error": error_message,
            "code": status.as_u16()
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
