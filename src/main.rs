use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Extension, Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use usability_audit_engine::config::Config;
use usability_audit_engine::middleware::{auth_middleware, AuthLayer};
use usability_audit_engine::routes::{
    analyze_handler, batch_analyze_handler, facts_analyze_handler, health_handler,
    list_assessments_handler, submit_assessment_handler,
};
use usability_audit_engine::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    info!("Starting Usability Audit Engine v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env()?;
    info!("Configuration loaded");
    info!("  Port: {}", config.api_port);
    info!("  Request timeout: {}s", config.request_timeout);

    info!("Initializing services...");
    let state = AppState::new(config.clone())?;
    info!("Services initialized");

    let auth_layer = Arc::new(AuthLayer::new(config.api_key.clone()));

    let app = Router::new()
        .route("/health", get(health_handler))
        .route("/analyze", post(analyze_handler))
        .route("/analyze/batch", post(batch_analyze_handler))
        .route("/analyze/facts", post(facts_analyze_handler))
        .route(
            "/assessments",
            post(submit_assessment_handler).get(list_assessments_handler),
        )
        .with_state(state)
        .layer(axum_middleware::from_fn(auth_middleware))
        .layer(Extension(auth_layer))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.api_port));
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        },
        _ = terminate => {
            info!("Received terminate signal, initiating shutdown...");
        },
    }
}
