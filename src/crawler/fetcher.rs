//! HTTP fetcher implementation
//!
//! This module handles page retrieval for the crawler:
//! - Building the HTTP client with the configured user agent and timeouts
//! - A single GET per URL, no retries
//! - Classifying failures into the outcomes the engine treats as soft
//!
//! The engine talks to the fetcher through the [`PageFetcher`] trait so
//! that tests can drive the traversal with a scripted fetcher.

use crate::config::FetcherConfig;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Result of a single fetch attempt
///
/// Every arm other than `Success` is a soft failure: the engine logs it,
/// the URL contributes no images and no links, and the crawl continues.
#[derive(Debug, Clone)]
pub enum FetchOutcome {
    /// Transport succeeded with a success status
    Success {
        /// HTTP status code
        status_code: u16,
        /// Page body content
        body: String,
    },

    /// Transport succeeded but the server returned a non-success status
    HttpStatus {
        /// The HTTP status code
        status_code: u16,
    },

    /// Transport-level failure (name resolution, connection refused,
    /// timeout, body read)
    Transport {
        /// Error description
        error: String,
    },
}

/// Trait for page fetchers
///
/// A fetcher performs exactly one retrieval attempt per call. The crawl
/// engine never retries a URL; at-most-once fetching is enforced upstream
/// by the visited set.
#[async_trait]
pub trait PageFetcher {
    /// Fetches a URL and classifies the outcome
    async fn fetch(&self, url: &str) -> FetchOutcome;
}

/// Builds an HTTP client from the fetcher configuration
pub fn build_http_client(config: &FetcherConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Production fetcher backed by reqwest
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Creates a fetcher with a client built from the given configuration
    pub fn new(config: &FetcherConfig) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_http_client(config)?,
        })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> FetchOutcome {
        match self.client.get(url).send().await {
            Ok(response) => {
                let status = response.status();

                if !status.is_success() {
                    return FetchOutcome::HttpStatus {
                        status_code: status.as_u16(),
                    };
                }

                match response.text().await {
                    Ok(body) => FetchOutcome::Success {
                        status_code: status.as_u16(),
                        body,
                    },
                    Err(e) => FetchOutcome::Transport {
                        error: format!("Failed to read body: {}", e),
                    },
                }
            }
            Err(e) => {
                // Classify error
                if e.is_timeout() {
                    FetchOutcome::Transport {
                        error: "Request timeout".to_string(),
                    }
                } else if e.is_connect() {
                    FetchOutcome::Transport {
                        error: "Connection failed".to_string(),
                    }
                } else {
                    FetchOutcome::Transport {
                        error: e.to_string(),
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_http_client() {
        let config = FetcherConfig::default();
        let client = build_http_client(&config);
        assert!(client.is_ok());
    }

    #[test]
    fn test_http_fetcher_construction() {
        let config = FetcherConfig {
            user_agent: "test-agent/1.0".to_string(),
            request_timeout_secs: 5,
            connect_timeout_secs: 2,
        };
        assert!(HttpFetcher::new(&config).is_ok());
    }

    #[tokio::test]
    async fn test_transport_failure_on_unresolvable_host() {
        let fetcher = HttpFetcher::new(&FetcherConfig::default()).unwrap();
        let outcome = fetcher.fetch("http://nonexistent.invalid/").await;
        assert!(matches!(outcome, FetchOutcome::Transport { .. }));
    }
}
