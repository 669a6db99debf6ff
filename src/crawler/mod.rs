//! Crawler module for page fetching and traversal
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching behind an injectable trait
//! - HTML parsing into an immutable parsed-page value
//! - The FIFO frontier queue
//! - The breadth-first traversal engine

mod engine;
mod fetcher;
mod frontier;
mod parser;

pub use engine::{CrawlResult, Engine, ImageRecord};
pub use fetcher::{build_http_client, FetchOutcome, HttpFetcher, PageFetcher};
pub use frontier::{Frontier, FrontierEntry};
pub use parser::{parse_page, ParsedPage};

use crate::config::Config;
use crate::output::{JsonFileSink, ResultSink};
use std::path::Path;

/// Runs a complete crawl operation
///
/// This is the main entry point for starting a crawl. It will:
/// 1. Build the HTTP client from the fetcher configuration
/// 2. Walk the link graph breadth-first from the start URL
/// 3. Persist the accumulated image records as JSON
/// 4. Report the persisted count and run statistics
///
/// A negative max depth aborts before any network activity and before the
/// output path is touched. Per-page fetch failures are soft; a persistence
/// failure is the run's terminal error.
pub async fn crawl(config: &Config) -> crate::Result<CrawlResult> {
    let fetcher = HttpFetcher::new(&config.fetcher)?;
    let mut engine = Engine::new(&config.start_url, config.max_depth, fetcher);

    let result = engine.run().await?;

    let sink = JsonFileSink;
    sink.persist(&result, Path::new(&config.output.results_path))?;

    tracing::info!(
        "Persisted {} image records to {}",
        result.results.len(),
        config.output.results_path
    );
    engine.stats().log_summary();

    Ok(result)
}
