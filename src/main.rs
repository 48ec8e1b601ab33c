//! Site-Sweep main entry point
//!
//! Command-line interface for the bounded single-domain URL collector.

use anyhow::Context;
use clap::Parser;
use site_sweep::config::load_config;
use site_sweep::crawler::Crawler;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Site-Sweep: a bounded single-domain URL collector
///
/// Starting from a seed URL, Site-Sweep walks a site breadth-first, collects
/// canonical in-scope URLs without revisiting, and prints the discovery list
/// once the frontier empties or the page cap is reached.
#[derive(Parser, Debug)]
#[command(name = "site-sweep")]
#[command(version)]
#[command(about = "A bounded single-domain URL collector", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be crawled without crawling
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    tracing::info!("Loading configuration from: {}", cli.config.display());
    let config = load_config(&cli.config)
        .with_context(|| format!("failed to load {}", cli.config.display()))?;

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    handle_crawl(config).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("site_sweep=info,warn"),
            1 => EnvFilter::new("site_sweep=debug,info"),
            2 => EnvFilter::new("site_sweep=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: validates config and shows what would be crawled
fn handle_dry_run(config: &site_sweep::config::Config) {
    println!("=== Site-Sweep Dry Run ===\n");

    println!("Crawl Configuration:");
    println!("  Seed URL: {}", config.crawl.seed_url);
    println!("  Scope domain: {}", config.crawl.scope_domain);
    println!("  Page cap: {}", config.crawl.page_cap);

    println!("\nFetcher:");
    println!("  Request timeout: {}s", config.fetcher.request_timeout_secs);
    println!("  User agent: {}", config.fetcher.user_agent);

    println!("\n✓ Configuration is valid");
}

/// Handles the main crawl operation
async fn handle_crawl(config: site_sweep::config::Config) -> anyhow::Result<()> {
    tracing::info!(
        "Starting crawl of {} (domain: {}, cap: {})",
        config.crawl.seed_url,
        config.crawl.scope_domain,
        config.crawl.page_cap
    );

    let crawler = Crawler::new(config)?;
    let report = crawler.run().await;

    for url in &report.urls {
        println!("{}", url);
    }
    println!("\nTotal URLs collected: {}", report.urls.len());

    Ok(())
}
