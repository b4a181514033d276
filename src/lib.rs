//! Usability audit engine: deterministic scoring of web pages against
//! Nielsen's ten usability heuristics, plus the fetch/extract/serve plumbing
//! around it.

pub mod config;
pub mod engine;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use config::Config;
use services::{AssessmentStore, CacheService, ExtractorService, FetcherService, SecurityService};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub fetcher: Arc<FetcherService>,
    pub extractor: Arc<ExtractorService>,
    pub cache: Arc<CacheService>,
    pub security: Arc<SecurityService>,
    pub store: Arc<AssessmentStore>,
}

impl AppState {
    pub fn new(config: Config) -> error::Result<Self> {
        Ok(Self {
            fetcher: Arc::new(FetcherService::new(&config)?),
            extractor: Arc::new(ExtractorService::new()),
            cache: Arc::new(CacheService::new(config.cache_ttl)),
            security: Arc::new(SecurityService::new(config.clone())),
            store: Arc::new(AssessmentStore::new()),
            config,
        })
    }
}
