//! Site-Sweep: a bounded single-domain URL collector
//!
//! This crate implements a sequential breadth-first crawler that starts from a
//! seed URL, stays within a configured domain, and collects canonical URLs in
//! discovery order until the frontier empties or a page cap is reached.

pub mod config;
pub mod crawler;
pub mod url;

use thiserror::Error;

/// Main error type for Site-Sweep operations
///
/// Per-URL failures (transport errors, non-200 responses, malformed markup)
/// are absorbed inside the crawl loop and never surface here; this type only
/// covers setup failures that prevent a run from starting at all.
#[derive(Debug, Error)]
pub enum SweepError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for Site-Sweep operations
pub type Result<T> = std::result::Result<T, SweepError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{CrawlReport, Crawler, Termination};
pub use crate::url::{in_scope, normalize};
