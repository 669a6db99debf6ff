use crate::config::types::{Config, FetcherConfig, OutputConfig};
use crate::ConfigError;

/// Validates the assembled configuration
///
/// The depth check is the crawl's one fatal precondition; it runs here,
/// before any network activity, so a bad depth never produces partial
/// output.
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_depth(config.max_depth)?;
    validate_fetcher_config(&config.fetcher)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates the depth bound
fn validate_depth(max_depth: i64) -> Result<(), ConfigError> {
    if max_depth < 0 {
        return Err(ConfigError::InvalidDepth(max_depth));
    }
    Ok(())
}

/// Validates fetcher configuration
fn validate_fetcher_config(config: &FetcherConfig) -> Result<(), ConfigError> {
    if config.user_agent.is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    if config.request_timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "request-timeout-secs must be >= 1".to_string(),
        ));
    }

    if config.connect_timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "connect-timeout-secs must be >= 1".to_string(),
        ));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.results_path.is_empty() {
        return Err(ConfigError::Validation(
            "results-path cannot be empty".to_string(),
        ));
    }

    Ok(())
}
