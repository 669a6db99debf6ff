//! Configuration module
//!
//! The effective configuration for a run is assembled from the CLI's
//! positional arguments plus an optional TOML settings file, then
//! validated before the HTTP client or the engine exist. The depth bound
//! is carried signed until validation so a negative value is reported as a
//! configuration error rather than an argument-parse failure.

mod parser;
mod types;
mod validation;

pub use parser::{compute_config_hash, load_file_config, load_file_config_with_hash};
pub use types::{Config, FetcherConfig, FileConfig, OutputConfig};
pub use validation::validate;
