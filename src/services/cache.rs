use crate::models::AnalysisResult;
use dashmap::DashMap;
use std::time::{Duration, Instant};
use tracing::debug;

struct CacheEntry {
    result: AnalysisResult,
    created_at: Instant,
    ttl: Duration,
}

/// TTL cache of analysis results keyed by URL.
pub struct CacheService {
    cache: DashMap<String, CacheEntry>,
    default_ttl: Duration,
}

impl CacheService {
    pub fn new(default_ttl_secs: u64) -> Self {
        Self {
            cache: DashMap::new(),
            default_ttl: Duration::from_secs(default_ttl_secs),
        }
    }

    pub fn get(&self, key: &str) -> Option<AnalysisResult> {
        if let Some(entry) = self.cache.get(key) {
            if entry.created_at.elapsed() < entry.ttl {
                debug!("Cache hit for {}", key);
                return Some(entry.result.clone());
            } else {
                debug!("Cache expired for {}", key);
                drop(entry);
                self.cache.remove(key);
            }
        }
        debug!("Cache miss for {}", key);
        None
    }

    /// Like `get`, but with a caller-supplied freshness bound tighter or
    /// looser than the entry's TTL.
    pub fn get_with_tolerance(&self, key: &str, tolerance_secs: Option<u64>) -> Option<AnalysisResult> {
        if let Some(entry) = self.cache.get(key) {
            let max_age = tolerance_secs
                .map(Duration::from_secs)
                .unwrap_or(entry.ttl);

            if entry.created_at.elapsed() < max_age {
                debug!("Cache hit for {} (tolerance: {:?})", key, tolerance_secs);
                return Some(entry.result.clone());
            }
        }
        None
    }

    pub fn set(&self, key: String, result: AnalysisResult, ttl_secs: Option<u64>) {
        let ttl = ttl_secs
            .map(Duration::from_secs)
            .unwrap_or(self.default_ttl);

        debug!("Caching result for {} (TTL: {:?})", key, ttl);

        self.cache.insert(key, CacheEntry {
            result,
            created_at: Instant::now(),
            ttl,
        });
    }

    pub fn invalidate(&self, key: &str) {
        self.cache.remove(key);
    }

    pub fn cleanup_expired(&self) -> usize {
        let mut removed = 0;
        self.cache.retain(|_, entry| {
            let keep = entry.created_at.elapsed() < entry.ttl;
            if !keep {
                removed += 1;
            }
            keep
        });
        debug!("Cache cleanup: removed {} expired entries", removed);
        removed
    }

    pub fn size(&self) -> usize {
        self.cache.len()
    }
}

impl Default for CacheService {
    fn default() -> Self {
        Self::new(3600)
    }
}
