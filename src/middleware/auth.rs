use axum::{
    extract::Request,
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use tracing::warn;

/// Paths reachable without a key even when auth is configured.
const EXEMPT_PATHS: &[&str] = &["/health"];

#[derive(Clone)]
pub struct AuthLayer {
    api_key: Option<String>,
}

impl AuthLayer {
    pub fn new(api_key: Option<String>) -> Self {
        Self { api_key }
    }

    /// None means the request may proceed; Some carries the rejection.
    fn check(&self, path: &str, auth_header: Option<&str>) -> Option<(StatusCode, &'static str)> {
        if EXEMPT_PATHS.contains(&path) {
            return None;
        }

        let Some(expected_key) = self.api_key.as_deref() else {
            return None;
        };

        let Some(header_value) = auth_header else {
            return Some((StatusCode::UNAUTHORIZED, "Authorization header required"));
        };

        let provided_key = header_value
            .strip_prefix("Bearer ")
            .unwrap_or(header_value);

        if provided_key == expected_key {
            None
        } else {
            Some((StatusCode::UNAUTHORIZED, "Invalid API key"))
        }
    }
}

pub async fn auth_middleware(
    auth: axum::extract::Extension<Arc<AuthLayer>>,
    request: Request,
    next: Next,
) -> Response {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    match auth.check(request.uri().path(), auth_header) {
        None => next.run(request).await,
        Some((status, message)) => {
            warn!("Rejected request to {}: {}", request.uri().path(), message);
            (
                status,
                Json(json!({
                    "error": message,
                    "code": status.as_u16()
                })),
            )
                .into_response()
        }
    }
}
