use crate::config::Config;
use crate::error::{AppError, Result};
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Plain HTTP page fetcher.
///
/// One GET per analysis, custom User-Agent, configured timeout, body capped
/// at `max_html_bytes`. Pages are taken as served; no script execution.
pub struct FetcherService {
    client: reqwest::Client,
    timeout_secs: u64,
    max_html_bytes: usize,
}

impl FetcherService {
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.request_timeout))
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            timeout_secs: config.request_timeout,
            max_html_bytes: config.max_html_bytes,
        })
    }

    pub async fn fetch(&self, url: &Url) -> Result<String> {
        debug!("Fetching {}", url);

        let response = self.client.get(url.clone()).send().await.map_err(|e| {
            if e.is_timeout() {
                AppError::Timeout(self.timeout_secs)
            } else {
                AppError::FetchError(format!("Request to {url} failed: {e}"))
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Fetch of {} returned status {}", url, status);
            return Err(AppError::FetchError(format!(
                "{url} responded with status {status}"
            )));
        }

        let mut html = response.text().await.map_err(|e| {
            if e.is_timeout() {
                AppError::Timeout(self.timeout_secs)
            } else {
                AppError::FetchError(format!("Failed to read body from {url}: {e}"))
            }
        })?;

        if truncate_to_boundary(&mut html, self.max_html_bytes) {
            debug!("Truncated body of {} to {} bytes", url, html.len());
        }

        Ok(html)
    }
}

/// Cap `html` at `max` bytes without splitting a UTF-8 character. Returns
/// whether anything was cut.
fn truncate_to_boundary(html: &mut String, max: usize) -> bool {
    if html.len() <= max {
        return false;
    }
    let mut cut = max;
    while !html.is_char_boundary(cut) {
        cut -= 1;
    }
    html.truncate(cut);
    true
}
