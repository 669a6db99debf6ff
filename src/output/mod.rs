//! Output module for persisting crawl results
//!
//! This module handles:
//! - The result sink trait boundary
//! - JSON serialization of the final record list
//! - Run statistics for the end-of-run summary

mod json;
mod stats;
mod traits;

pub use json::JsonFileSink;
pub use stats::CrawlStats;
pub use traits::{ResultSink, SinkError, SinkResult};
