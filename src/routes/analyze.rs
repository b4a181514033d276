use axum::{extract::State, Json};
use futures::future::join_all;
use std::time::Instant;
use tracing::info;

use crate::engine;
use crate::error::AppError;
use crate::models::{
    AnalysisResult, AnalyzeOptions, AnalyzeRequest, BatchAnalyzeRequest, BatchAnalyzeResponse,
    BatchAnalyzeResult, FactsAnalyzeRequest,
};
use crate::services::SecurityService;
use crate::AppState;

#[axum::debug_handler]
pub async fn analyze_handler(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisResult>, AppError> {
    let start = Instant::now();
    info!("Processing analyze request for URL: {}", request.url);

    let result = run_analysis(&state, &request.url, &request.options).await?;

    info!(
        "Analyzed {} (overall {}) in {}ms",
        request.url,
        result.overall_score,
        start.elapsed().as_millis(),
    );

    Ok(Json(result))
}

#[axum::debug_handler]
pub async fn batch_analyze_handler(
    State(state): State<AppState>,
    Json(request): Json<BatchAnalyzeRequest>,
) -> Result<Json<BatchAnalyzeResponse>, AppError> {
    let start = Instant::now();
    info!("Processing batch analyze request for {} URLs", request.urls.len());

    state.security.check_batch_size(&request.urls)?;

    let futures: Vec<_> = request
        .urls
        .iter()
        .map(|url| {
            let state = state.clone();
            let options = request.options.clone();
            let url = url.clone();

            async move {
                match run_analysis(&state, &url, &options).await {
                    Ok(result) => BatchAnalyzeResult {
                        url,
                        result: Some(result),
                        error: None,
                    },
                    Err(e) => BatchAnalyzeResult {
                        url,
                        result: None,
                        error: Some(e.to_string()),
                    },
                }
            }
        })
        .collect();

    let results = join_all(futures).await;

    let total_time = start.elapsed().as_millis() as u64;
    info!("Batch analyzed {} URLs in {}ms", request.urls.len(), total_time);

    Ok(Json(BatchAnalyzeResponse {
        results,
        total_processing_time_ms: total_time,
    }))
}

/// Score caller-supplied facts directly; the engine's input contract with no
/// fetching involved.
#[axum::debug_handler]
pub async fn facts_analyze_handler(
    State(_state): State<AppState>,
    Json(request): Json<FactsAnalyzeRequest>,
) -> Result<Json<AnalysisResult>, AppError> {
    if !request.facts.is_consistent() {
        return Err(AppError::InvalidFacts(
            "img_with_alt exceeds img_count".to_string(),
        ));
    }

    Ok(Json(engine::analyze(&request.url, &request.facts)))
}

/// The full pipeline for one URL: security checks, cache, fetch, extract,
/// score, cache store. Shared by the analyze, batch, and assessment routes.
pub(crate) async fn run_analysis(
    state: &AppState,
    url_str: &str,
    options: &AnalyzeOptions,
) -> Result<AnalysisResult, AppError> {
    let url = state.security.validate_url(url_str)?;
    let domain = SecurityService::extract_domain(&url);

    state.security.check_circuit_breaker(&domain)?;
    state.security.check_rate_limit(&domain)?;

    if !options.no_cache {
        if let Some(cached) = state
            .cache
            .get_with_tolerance(url_str, options.cache_tolerance)
        {
            info!("Returning cached analysis for {}", url_str);
            return Ok(cached);
        }
    }

    let html = match state.fetcher.fetch(&url).await {
        Ok(html) => {
            state.security.record_success(&domain);
            html
        }
        Err(e) => {
            state.security.record_failure(&domain);
            return Err(e);
        }
    };

    let facts = state.extractor.extract(url.as_str(), &html);
    let result = engine::analyze(url.as_str(), &facts);

    if !options.no_cache {
        state
            .cache
            .set(url_str.to_string(), result.clone(), options.cache_tolerance);
    }

    Ok(result)
}
