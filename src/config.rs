use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_api_port")]
    pub api_port: u16,

    pub api_key: Option<String>,

    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,

    #[serde(default = "default_cache_ttl")]
    pub cache_ttl: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    #[serde(default = "default_max_html_bytes")]
    pub max_html_bytes: usize,

    #[serde(default = "default_max_requests_per_domain")]
    pub max_requests_per_domain: usize,

    #[serde(default = "default_max_urls_per_batch")]
    pub max_urls_per_batch: usize,
}

fn default_api_port() -> u16 { 14790 }
fn default_request_timeout() -> u64 { 10 }
fn default_cache_ttl() -> u64 { 3600 }
fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) \
     Chrome/91.0.4472.124 Safari/537.36"
        .to_string()
}
fn default_max_html_bytes() -> usize { 1_048_576 }
fn default_max_requests_per_domain() -> usize { 60 }
fn default_max_urls_per_batch() -> usize { 10 }

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = Config {
            api_port: std::env::var("API_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(default_api_port),
            api_key: std::env::var("API_KEY").ok(),
            request_timeout: std::env::var("REQUEST_TIMEOUT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(default_request_timeout),
            cache_ttl: std::env::var("CACHE_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(default_cache_ttl),
            user_agent: std::env::var("USER_AGENT").unwrap_or_else(|_| default_user_agent()),
            max_html_bytes: std::env::var("MAX_HTML_BYTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(default_max_html_bytes),
            max_requests_per_domain: std::env::var("MAX_REQUESTS_PER_DOMAIN")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(default_max_requests_per_domain),
            max_urls_per_batch: std::env::var("MAX_URLS_PER_BATCH")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(default_max_urls_per_batch),
        };

        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_port: default_api_port(),
            api_key: None,
            request_timeout: default_request_timeout(),
            cache_ttl: default_cache_ttl(),
            user_agent: default_user_agent(),
            max_html_bytes: default_max_html_bytes(),
            max_requests_per_domain: default_max_requests_per_domain(),
            max_urls_per_batch: default_max_urls_per_batch(),
        }
    }
}
