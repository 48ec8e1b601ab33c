//! HTTP fetcher implementation
//!
//! One bounded-timeout GET per URL. Every failure mode at or below the HTTP
//! layer collapses into a single failure outcome; the crawl loop treats a DNS
//! error, a timeout, and a 404 identically. No retries.

use crate::config::FetcherConfig;
use reqwest::{Client, StatusCode};
use std::time::Duration;

/// Result of fetching one URL
///
/// There are no intermediate states: a page either yielded a body with HTTP
/// 200, or it is a failure.
#[derive(Debug)]
pub enum FetchOutcome {
    /// Status was exactly 200 and the body was read
    Success {
        /// Page body content
        body: String,
    },

    /// Anything else: non-200 status, network error, timeout
    Failure {
        /// Human-readable reason, for logging only
        reason: String,
    },
}

impl FetchOutcome {
    /// Returns true for the success variant
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// Builds the HTTP client used for the whole crawl run
///
/// # Example
///
/// ```no_run
/// use site_sweep::config::FetcherConfig;
/// use site_sweep::crawler::build_http_client;
///
/// let client = build_http_client(&FetcherConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &FetcherConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a single URL with a GET request
///
/// A success outcome carries the response body only when the status is
/// exactly 200; any other status is a failure even though the request
/// succeeded at the transport level. Transport errors (DNS, connection
/// refused, timeout) are reported as failures, never propagated.
pub async fn fetch_page(client: &Client, url: &str) -> FetchOutcome {
    match client.get(url).send().await {
        Ok(response) => {
            let status = response.status();

            if status != StatusCode::OK {
                return FetchOutcome::Failure {
                    reason: format!("HTTP {}", status.as_u16()),
                };
            }

            match response.text().await {
                Ok(body) => FetchOutcome::Success { body },
                Err(e) => FetchOutcome::Failure {
                    reason: format!("Failed to read body: {}", e),
                },
            }
        }
        Err(e) => {
            let reason = if e.is_timeout() {
                "Request timeout".to_string()
            } else if e.is_connect() {
                "Connection failed".to_string()
            } else {
                e.to_string()
            };
            FetchOutcome::Failure { reason }
        }
    }
}
