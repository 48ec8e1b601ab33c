//! Configuration module for Site-Sweep
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//!
//! # Example
//!
//! ```no_run
//! use site_sweep::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("config.toml")).unwrap();
//! println!("Crawl will stop after {} pages", config.crawl.page_cap);
//! ```

mod parser;
mod types;
mod validation;

pub use parser::load_config;
pub use types::{Config, CrawlConfig, FetcherConfig};
