//! Site-Scribe main entry point
//!
//! Command-line interface for the Site-Scribe website mirroring pipeline.

use clap::Parser;
use site_scribe::config::load_config;
use site_scribe::crawler::crawl;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Site-Scribe: mirror a website as HTML, Markdown, and a sitemap
///
/// Crawls every same-origin page reachable from the configured seed URL,
/// stores raw HTML and converted Markdown in parallel directory trees, and
/// writes a sitemap document indexing the result.
#[derive(Parser, Debug)]
#[command(name = "site-scribe")]
#[command(version)]
#[command(about = "Mirror a website as HTML, Markdown, and a sitemap", long_about = None)]
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
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    tracing::info!("Loading configuration from: {}", cli.config.display());
    let config = match load_config(&cli.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    match crawl(config).await {
        Ok(sitemap) => {
            println!("Crawl complete: {} pages recorded", sitemap.len());
            Ok(())
        }
        Err(e) => {
            tracing::error!("Crawl failed: {}", e);
            Err(e.into())
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("site_scribe=info,warn"),
            1 => EnvFilter::new("site_scribe=debug,info"),
            2 => EnvFilter::new("site_scribe=trace,debug"),
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

/// Handles the --dry-run mode: validates config and shows the plan
fn handle_dry_run(config: &site_scribe::config::Config) {
    println!("=== Site-Scribe Dry Run ===\n");

    println!("Site:");
    println!("  Seed URL: {}", config.site.seed_url);

    println!("\nCrawler:");
    println!(
        "  Max concurrent fetches: {}",
        config.crawler.max_concurrent_fetches
    );
    println!(
        "  Request timeout: {}s",
        config.crawler.request_timeout_secs
    );
    println!("  User agent: {}", config.crawler.user_agent);
    match config.crawler.max_pages {
        Some(cap) => println!("  Max pages: {}", cap),
        None => println!("  Max pages: unlimited"),
    }

    println!("\nOutput:");
    println!("  HTML: {}", config.output.html_dir);
    println!("  Markdown: {}", config.output.markdown_dir);
    println!("  Sitemap: {}", config.output.sitemap_path);

    println!("\n✓ Configuration is valid");
}
