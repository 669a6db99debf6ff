use crate::config::types::FileConfig;
use crate::ConfigError;
use sha2::{Digest, Sha256};
use std::path::Path;

/// Loads and parses the optional settings file from the given path
pub fn load_file_config(path: &Path) -> Result<FileConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: FileConfig = toml::from_str(&content)?;
    Ok(config)
}

/// Computes a SHA-256 hash of the settings file content
///
/// Logged on load so a run can be tied back to the exact settings it ran
/// with.
pub fn compute_config_hash(path: &Path) -> Result<String, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    let result = hasher.finalize();
    Ok(hex::encode(result))
}

/// Loads the settings file and returns both the config and its hash
pub fn load_file_config_with_hash(path: &Path) -> Result<(FileConfig, String), ConfigError> {
    let config = load_file_config(path)?;
    let hash = compute_config_hash(path)?;
    Ok((config, hash))
}
