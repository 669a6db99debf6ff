//! Imagetrawl: a breadth-first image-harvesting web crawler
//!
//! This crate implements a crawler that walks a link graph outward from a
//! start URL, bounded by a maximum link-depth, and records every image
//! reference it finds together with the page that referenced it.

pub mod config;
pub mod crawler;
pub mod output;
pub mod url;

use thiserror::Error;

/// Main error type for imagetrawl operations
#[derive(Debug, Error)]
pub enum TrawlError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Persistence error: {0}")]
    Sink(#[from] output::SinkError),

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
///
/// An invalid max depth is the crawl's only fatal precondition; it is
/// reported here, before any network activity, never as a crawl-time error.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Max depth must be non-negative, got {0}")]
    InvalidDepth(i64),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for imagetrawl operations
pub type Result<T> = std::result::Result<T, TrawlError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{CrawlResult, Engine, ImageRecord};
pub use crate::url::normalize;
