//! JSON file sink
//!
//! Serializes the crawl result as a single JSON object with one `results`
//! field holding the record list, in breadth-first discovery order.

use crate::crawler::CrawlResult;
use crate::output::traits::{ResultSink, SinkResult};
use std::fs;
use std::path::Path;

/// Sink that writes the result object to a JSON file
///
/// The destination file is overwritten if it exists.
pub struct JsonFileSink;

impl ResultSink for JsonFileSink {
    fn persist(&self, result: &CrawlResult, destination: &Path) -> SinkResult<()> {
        let json = serde_json::to_string_pretty(result)?;
        fs::write(destination, json)?;
        Ok(())
    }
}
