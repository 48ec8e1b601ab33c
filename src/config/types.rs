use serde::Deserialize;

/// Main configuration structure for Site-Sweep
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub crawl: CrawlConfig,
    #[serde(default)]
    pub fetcher: FetcherConfig,
}

/// Crawl behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlConfig {
    /// Seed URL the traversal starts from
    #[serde(rename = "seed-url")]
    pub seed_url: String,

    /// Domain substring matched against each URL's host
    #[serde(rename = "scope-domain")]
    pub scope_domain: String,

    /// Maximum number of pages recorded as discovered
    #[serde(rename = "page-cap")]
    pub page_cap: usize,
}

/// HTTP fetcher configuration
#[derive(Debug, Clone, Deserialize)]
pub struct FetcherConfig {
    /// Per-request timeout in seconds
    #[serde(rename = "request-timeout-secs", default = "default_timeout_secs")]
    pub request_timeout_secs: u64,

    /// User agent header sent with every request
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    format!("site-sweep/{}", env!("CARGO_PKG_VERSION"))
}
