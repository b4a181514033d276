use crate::config::Config;
use crate::error::{AppError, Result};
use dashmap::DashMap;
use std::net::IpAddr;
use std::time::{Duration, Instant};
use tracing::warn;
use url::Url;

const BREAKER_FAILURE_LIMIT: usize = 5;
const BREAKER_OPEN_SECS: u64 = 60;
const RATE_WINDOW_SECS: u64 = 60;

struct CircuitBreakerState {
    failures: usize,
    last_failure: Instant,
    open_until: Option<Instant>,
}

struct RateLimitState {
    requests: usize,
    window_start: Instant,
}

/// Guards outbound analysis traffic: URL validation, per-domain rate
/// limiting, and a per-domain circuit breaker for failing sites.
pub struct SecurityService {
    config: Config,
    circuit_breakers: DashMap<String, CircuitBreakerState>,
    rate_limits: DashMap<String, RateLimitState>,
    blocked_domains: Vec<String>,
}

impl SecurityService {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            circuit_breakers: DashMap::new(),
            rate_limits: DashMap::new(),
            blocked_domains: vec![
                "localhost".to_string(),
                "127.0.0.1".to_string(),
                "0.0.0.0".to_string(),
                "::1".to_string(),
            ],
        }
    }

    pub fn validate_url(&self, url_str: &str) -> Result<Url> {
        let url = Url::parse(url_str)
            .map_err(|e| AppError::InvalidUrl(format!("Invalid URL format: {e}")))?;

        if !["http", "https"].contains(&url.scheme()) {
            return Err(AppError::InvalidUrl(format!(
                "Invalid scheme: {}. Only http and https are allowed",
                url.scheme()
            )));
        }

        if let Some(host) = url.host_str() {
            if self.is_blocked_host(host) {
                return Err(AppError::BlockedUrl(format!(
                    "Access to {host} is not allowed"
                )));
            }

            if self.is_internal_ip(host) {
                return Err(AppError::BlockedUrl(
                    "Access to localhost/internal IPs is not allowed".to_string(),
                ));
            }

            if !host.contains('.') {
                return Err(AppError::InvalidUrl(
                    "URL must have a valid TLD".to_string(),
                ));
            }
        } else {
            return Err(AppError::InvalidUrl("URL must have a host".to_string()));
        }

        Ok(url)
    }

    fn is_blocked_host(&self, host: &str) -> bool {
        let host_lower = host.to_lowercase();
        self.blocked_domains.iter().any(|blocked| {
            host_lower == *blocked || host_lower.ends_with(&format!(".{blocked}"))
        })
    }

    fn is_internal_ip(&self, host: &str) -> bool {
        if let Ok(ip) = host.parse::<IpAddr>() {
            return match ip {
                IpAddr::V4(ipv4) => {
                    ipv4.is_loopback()
                        || ipv4.is_private()
                        || ipv4.is_link_local()
                        || ipv4.octets()[0] == 127
                }
                IpAddr::V6(ipv6) => ipv6.is_loopback(),
            };
        }

        let patterns = ["127.", "192.168.", "10.", "172.16.", "169.254."];
        patterns.iter().any(|p| host.starts_with(p))
    }

    pub fn check_circuit_breaker(&self, domain: &str) -> Result<()> {
        if let Some(state) = self.circuit_breakers.get(domain) {
            if let Some(open_until) = state.open_until {
                if Instant::now() < open_until {
                    warn!("Circuit breaker open for domain: {}", domain);
                    return Err(AppError::CircuitBreakerOpen(domain.to_string()));
                }
            }
        }
        Ok(())
    }

    pub fn record_failure(&self, domain: &str) {
        let mut entry = self
            .circuit_breakers
            .entry(domain.to_string())
            .or_insert(CircuitBreakerState {
                failures: 0,
                last_failure: Instant::now(),
                open_until: None,
            });

        entry.failures += 1;
        entry.last_failure = Instant::now();

        if entry.failures >= BREAKER_FAILURE_LIMIT {
            entry.open_until = Some(Instant::now() + Duration::from_secs(BREAKER_OPEN_SECS));
            warn!(
                "Circuit breaker opened for domain: {} (failures: {})",
                domain, entry.failures
            );
        }
    }

    pub fn record_success(&self, domain: &str) {
        if let Some(mut entry) = self.circuit_breakers.get_mut(domain) {
            entry.failures = 0;
            entry.open_until = None;
        }
    }

    pub fn check_rate_limit(&self, domain: &str) -> Result<()> {
        let now = Instant::now();
        let window = Duration::from_secs(RATE_WINDOW_SECS);
        let max_requests = self.config.max_requests_per_domain;

        let mut entry = self
            .rate_limits
            .entry(domain.to_string())
            .or_insert(RateLimitState {
                requests: 0,
                window_start: now,
            });

        if now.duration_since(entry.window_start) > window {
            entry.requests = 0;
            entry.window_start = now;
        }

        entry.requests += 1;

        if entry.requests > max_requests {
            warn!("Rate limit exceeded for domain: {}", domain);
            return Err(AppError::RateLimitExceeded(domain.to_string()));
        }

        Ok(())
    }

    pub fn check_batch_size(&self, urls: &[String]) -> Result<()> {
        if urls.len() > self.config.max_urls_per_batch {
            return Err(AppError::TooManyUrls(urls.len()));
        }
        Ok(())
    }

    pub fn extract_domain(url: &Url) -> String {
        url.host_str().unwrap_or("unknown").to_string()
    }
}

impl Default for SecurityService {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
