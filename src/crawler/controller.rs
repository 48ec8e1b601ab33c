//! Crawl controller - the breadth-first traversal loop
//!
//! Drives the cycle: pop frontier, fetch, extract, enqueue, until the
//! frontier empties or the page cap is reached. Per-URL failures are
//! absorbed; the loop has no error terminal state.

use crate::config::Config;
use crate::crawler::extractor::extract_links;
use crate::crawler::fetcher::{build_http_client, fetch_page, FetchOutcome};
use crate::crawler::state::CrawlState;
use crate::url::{in_scope, normalize};
use crate::SweepError;
use reqwest::Client;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use url::Url;

/// Why a crawl run stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The frontier emptied before the cap was reached
    FrontierExhausted,

    /// The visited count reached the configured page cap
    PageCapReached,

    /// A caller flipped the stop handle between iterations
    Cancelled,
}

/// Outcome of a crawl run
#[derive(Debug)]
pub struct CrawlReport {
    /// Canonical URLs in discovery order, at most `page-cap` of them
    pub urls: Vec<String>,

    /// The condition that ended the loop
    pub termination: Termination,
}

/// Sequential breadth-first crawler for a single domain
///
/// Owns its `CrawlState` for the duration of one run, so multiple crawlers
/// (in tests, or over different domains) never interfere.
pub struct Crawler {
    config: Config,
    client: Client,
    stop: Arc<AtomicBool>,
}

impl Crawler {
    /// Creates a crawler from a validated configuration
    pub fn new(config: Config) -> Result<Self, SweepError> {
        let client = build_http_client(&config.fetcher)?;
        Ok(Self {
            config,
            client,
            stop: Arc::new(AtomicBool::new(false)),
        })
    }

    /// Returns a handle that aborts the run between iterations when set
    ///
    /// Cancellation is cooperative: a fetch already in flight still runs to
    /// completion or timeout before the flag is observed.
    pub fn stop_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.stop)
    }

    /// Runs the crawl to completion and returns the discovery list
    pub async fn run(&self) -> CrawlReport {
        let seed = normalize(&self.config.crawl.seed_url);
        let domain = &self.config.crawl.scope_domain;
        let page_cap = self.config.crawl.page_cap;

        let mut state = CrawlState::seeded(seed);

        let termination = loop {
            if self.stop.load(Ordering::Relaxed) {
                break Termination::Cancelled;
            }

            if state.visited_count() >= page_cap {
                break Termination::PageCapReached;
            }

            let Some(current) = state.dequeue() else {
                break Termination::FrontierExhausted;
            };

            // Defensive re-normalization; enqueued URLs are already canonical
            let current = normalize(&current);

            if state.is_visited(&current) {
                continue;
            }

            // Recorded as discovered before the fetch is attempted, so a URL
            // counts even if its fetch fails (reached-in-link-graph semantics)
            tracing::info!("fetching {}", current);
            state.record_visit(current.clone());

            let body = match fetch_page(&self.client, &current).await {
                FetchOutcome::Success { body } => body,
                FetchOutcome::Failure { reason } => {
                    tracing::warn!("fetch failed for {}: {}", current, reason);
                    continue;
                }
            };

            // The dequeued URL is the base for resolving relative hrefs
            let base = match Url::parse(&current) {
                Ok(base) => base,
                Err(e) => {
                    tracing::debug!("cannot use {} as a base URL: {}", current, e);
                    continue;
                }
            };

            for link in extract_links(&base, &body) {
                if in_scope(&link, domain) && state.enqueue(link.clone()) {
                    tracing::debug!("enqueued {}", link);
                }
            }
        };

        tracing::info!(
            "crawl done ({:?}): {} pages discovered, {} left in frontier",
            termination,
            state.visited_count(),
            state.frontier_len()
        );

        CrawlReport {
            urls: state.into_discovered(),
            termination,
        }
    }
}
