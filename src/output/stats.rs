//! Run statistics
//!
//! Bookkeeping for a single crawl run, reported in the final summary log.
//! Purely observational; not part of the persisted data contract.

use chrono::{DateTime, Utc};

/// Counters accumulated over one crawl run
#[derive(Debug, Clone)]
pub struct CrawlStats {
    /// When the run started
    pub started_at: DateTime<Utc>,

    /// Fetch attempts issued (successful or not)
    pub pages_fetched: u64,

    /// Fetch attempts that failed at transport or status level
    pub fetch_failures: u64,

    /// Normalized links added to the frontier
    pub links_enqueued: u64,

    /// Image records accumulated
    pub images_recorded: u64,
}

impl CrawlStats {
    /// Creates zeroed counters stamped with the current time
    pub fn new() -> Self {
        Self {
            started_at: Utc::now(),
            pages_fetched: 0,
            fetch_failures: 0,
            links_enqueued: 0,
            images_recorded: 0,
        }
    }

    /// Seconds elapsed since the run started
    pub fn elapsed_seconds(&self) -> i64 {
        (Utc::now() - self.started_at).num_seconds()
    }

    /// Emits the end-of-run summary at info level
    pub fn log_summary(&self) {
        tracing::info!(
            "Crawl finished in {}s: {} pages fetched ({} failed), {} links enqueued, {} images recorded",
            self.elapsed_seconds(),
            self.pages_fetched,
            self.fetch_failures,
            self.links_enqueued,
            self.images_recorded
        );
    }
}

impl Default for CrawlStats {
    fn default() -> Self {
        Self::new()
    }
}
