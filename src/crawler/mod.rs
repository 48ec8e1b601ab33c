//! Crawler module for web page fetching and traversal
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching with a bounded timeout
//! - HTML parsing and link extraction
//! - Frontier and visited-set bookkeeping
//! - The breadth-first crawl loop

mod controller;
mod extractor;
mod fetcher;
mod state;

pub use controller::{CrawlReport, Crawler, Termination};
pub use extractor::extract_links;
pub use fetcher::{build_http_client, fetch_page, FetchOutcome};
pub use state::CrawlState;
