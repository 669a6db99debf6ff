//! Imagetrawl main entry point
//!
//! This is the command-line interface for the imagetrawl image crawler.

use clap::Parser;
use imagetrawl::config::{self, Config, FileConfig};
use imagetrawl::crawler::crawl;
use imagetrawl::url::is_absolute_http;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Imagetrawl: a breadth-first image harvester
///
/// Imagetrawl crawls the link graph outward from a start URL down to a
/// maximum depth, records every .jpg/.jpeg/.png image reference it finds
/// together with the referencing page, and writes the records to a JSON
/// file. Individual page failures are tolerated; the output is the
/// best-effort set from whatever pages did succeed.
#[derive(Parser, Debug)]
#[command(name = "imagetrawl")]
#[command(version)]
#[command(about = "A breadth-first image-harvesting web crawler", long_about = None)]
struct Cli {
    /// Starting URL to crawl from
    #[arg(value_name = "START_URL")]
    start_url: String,

    /// Maximum link-depth to crawl to
    #[arg(value_name = "DEPTH", allow_negative_numbers = true)]
    depth: i64,

    /// Output file path (default: results.json, or the settings file's
    /// results-path)
    #[arg(short, long, value_name = "FILE")]
    output: Option<String>,

    /// Path to an optional TOML settings file
    #[arg(long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate configuration and show what would be crawled without
    /// fetching anything
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load the optional settings file
    let file_config = match &cli.config {
        Some(path) => match config::load_file_config_with_hash(path) {
            Ok((cfg, hash)) => {
                tracing::info!("Settings loaded from {} (hash: {})", path.display(), hash);
                cfg
            }
            Err(e) => {
                tracing::error!("Failed to load settings file: {}", e);
                return Err(e.into());
            }
        },
        None => FileConfig::default(),
    };

    // Assemble and validate the effective configuration. A negative depth
    // stops here: nothing has been fetched and no output file is touched.
    let config = Config::assemble(cli.start_url, cli.depth, file_config, cli.output);
    if let Err(e) = config::validate(&config) {
        tracing::error!("Invalid configuration: {}", e);
        return Err(e.into());
    }

    if !is_absolute_http(&config.start_url) {
        tracing::warn!(
            "Start URL {:?} does not parse as an absolute http(s) URL; fetches will likely fail",
            config.start_url
        );
    }

    if cli.dry_run {
        handle_dry_run(&config);
        Ok(())
    } else {
        handle_crawl(config).await
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("imagetrawl=info,warn"),
            1 => EnvFilter::new("imagetrawl=debug,info"),
            2 => EnvFilter::new("imagetrawl=trace,debug"),
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

/// Handles the --dry-run mode: validates config and shows what would be
/// crawled
fn handle_dry_run(config: &Config) {
    println!("=== Imagetrawl Dry Run ===\n");

    println!("Crawl:");
    println!("  Start URL: {}", config.start_url);
    println!("  Max depth: {}", config.max_depth);

    println!("\nFetcher:");
    println!("  User agent: {}", config.fetcher.user_agent);
    println!("  Request timeout: {}s", config.fetcher.request_timeout_secs);
    println!("  Connect timeout: {}s", config.fetcher.connect_timeout_secs);

    println!("\nOutput:");
    println!("  Results file: {}", config.output.results_path);

    println!("\n✓ Configuration is valid");
    println!(
        "✓ Would crawl from {} down to depth {}",
        config.start_url, config.max_depth
    );
}

/// Handles the main crawl operation
async fn handle_crawl(config: Config) -> anyhow::Result<()> {
    tracing::info!(
        "Starting crawl from {} with max depth {}",
        config.start_url,
        config.max_depth
    );

    match crawl(&config).await {
        Ok(result) => {
            println!(
                "✓ {} image records written to {}",
                result.results.len(),
                config.output.results_path
            );
            Ok(())
        }
        Err(e) => {
            tracing::error!("Crawl failed: {}", e);
            Err(e.into())
        }
    }
}
