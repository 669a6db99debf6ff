//! Crawl traversal engine - main crawl orchestration logic
//!
//! This module contains the breadth-first loop that ties the collaborators
//! together:
//! - Pull the next (URL, depth) entry from the FIFO frontier
//! - Skip already-visited URLs, mark the rest visited before fetching
//! - Fetch the page, tolerating per-page failures
//! - Record every accepted image reference with its source and depth
//! - Normalize discovered hrefs and enqueue unvisited ones at depth+1
//!
//! The engine is strictly sequential: one fetch at a time, fully processed
//! before the next. The frontier, visited set, and record accumulator are
//! exclusively owned by the engine for the lifetime of one run, so no
//! locking is involved. If concurrent fetch workers are ever added, the
//! visited check-and-mark must become atomic and record insertion order
//! must be made deterministic (sort by depth, then discovery sequence).

use crate::crawler::fetcher::{FetchOutcome, PageFetcher};
use crate::crawler::frontier::{Frontier, FrontierEntry};
use crate::crawler::parser::parse_page;
use crate::output::CrawlStats;
use crate::url::normalize;
use crate::ConfigError;
use serde::Serialize;
use std::collections::HashSet;

/// A discovered image reference
///
/// Created when an image is found on a successfully fetched page;
/// immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageRecord {
    /// The image reference exactly as it appeared in the page
    pub image_url: String,

    /// The page the image was found on
    pub source_url: String,

    /// Link-depth of the source page at the time the image was found
    pub depth: u32,
}

/// The ordered outcome of a crawl run
///
/// Record order is breadth-first discovery order; serializing this value
/// yields the output file's `{"results": [...]}` object directly.
#[derive(Debug, Default, Serialize)]
pub struct CrawlResult {
    pub results: Vec<ImageRecord>,
}

/// Crawl traversal engine
///
/// Owns the frontier queue, the visited set, and the record accumulator
/// for a single run. Generic over the fetcher so tests can drive the
/// traversal with a scripted one.
pub struct Engine<F> {
    fetcher: F,
    max_depth: i64,
    frontier: Frontier,
    visited: HashSet<String>,
    records: Vec<ImageRecord>,
    stats: CrawlStats,
}

impl<F: PageFetcher> Engine<F> {
    /// Creates an engine seeded with the start URL at depth 0
    pub fn new(start_url: &str, max_depth: i64, fetcher: F) -> Self {
        Self {
            fetcher,
            max_depth,
            frontier: Frontier::seeded(start_url),
            visited: HashSet::new(),
            records: Vec::new(),
            stats: CrawlStats::new(),
        }
    }

    /// Runs the crawl to completion and returns the accumulated records
    ///
    /// Validates `max_depth` before any network activity: a negative depth
    /// aborts with a configuration error and an empty engine, producing no
    /// partial output. Per-page fetch failures are soft and never surface
    /// here.
    pub async fn run(&mut self) -> crate::Result<CrawlResult> {
        if self.max_depth < 0 {
            tracing::error!(
                "Invalid configuration: max depth must be non-negative, got {}",
                self.max_depth
            );
            return Err(ConfigError::InvalidDepth(self.max_depth).into());
        }
        let max_depth = self.max_depth as u32;

        while let Some(entry) = self.frontier.dequeue() {
            // The first entry past the depth bound ends the whole crawl,
            // not just its branch. Entries enter the FIFO in nondecreasing
            // depth order, so nothing crawlable is left behind it.
            if entry.depth > max_depth {
                tracing::debug!(
                    "Reached depth {} past bound {}, stopping crawl",
                    entry.depth,
                    max_depth
                );
                break;
            }

            // Check-and-mark before fetching. Marking first means a URL
            // whose fetch fails is never retried.
            if !self.visited.insert(entry.url.clone()) {
                continue;
            }

            self.process_page(&entry).await;
        }

        Ok(CrawlResult {
            results: std::mem::take(&mut self.records),
        })
    }

    /// Fetches one page and folds its images and links into the run
    async fn process_page(&mut self, entry: &FrontierEntry) {
        tracing::debug!("Fetching {} (depth {})", entry.url, entry.depth);
        self.stats.pages_fetched += 1;

        let body = match self.fetcher.fetch(&entry.url).await {
            FetchOutcome::Success { status_code, body } => {
                tracing::trace!("Fetched {} with HTTP {}", entry.url, status_code);
                body
            }
            FetchOutcome::HttpStatus { status_code } => {
                tracing::warn!("Fetch of {} returned HTTP {}, skipping", entry.url, status_code);
                self.stats.fetch_failures += 1;
                return;
            }
            FetchOutcome::Transport { error } => {
                tracing::warn!("Fetch of {} failed: {}, skipping", entry.url, error);
                self.stats.fetch_failures += 1;
                return;
            }
        };

        let page = parse_page(&body);

        for image in page.images() {
            self.records.push(ImageRecord {
                image_url: image.clone(),
                source_url: entry.url.clone(),
                depth: entry.depth,
            });
        }
        self.stats.images_recorded += page.images().len() as u64;

        tracing::debug!("Found {} links on {}", page.links().len(), entry.url);

        for href in page.links() {
            match normalize(&entry.url, href) {
                Some(link) => {
                    if !self.visited.contains(&link) {
                        self.frontier.enqueue(link, entry.depth + 1);
                        self.stats.links_enqueued += 1;
                    }
                }
                None => {
                    tracing::trace!("Dropped href {:?} found on {}", href, entry.url);
                }
            }
        }
    }

    /// Run statistics accumulated so far
    pub fn stats(&self) -> &CrawlStats {
        &self.stats
    }
}
