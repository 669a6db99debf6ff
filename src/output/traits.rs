//! Result sink trait and error types
//!
//! A result sink turns the accumulated crawl records into durable output.
//! The trait keeps the traversal engine ignorant of the serialization
//! format and destination.

use crate::crawler::CrawlResult;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while persisting crawl results
///
/// All of these are fatal to the run's output guarantee and propagate to
/// the caller, unlike per-page fetch failures.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("Failed to write results: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize results: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type for sink operations
pub type SinkResult<T> = Result<T, SinkError>;

/// Trait for result sinks
pub trait ResultSink {
    /// Writes the ordered record sequence to the destination, replacing
    /// any existing content
    fn persist(&self, result: &CrawlResult, destination: &Path) -> SinkResult<()>;
}
