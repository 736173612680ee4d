use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the overlay configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file does not exist.
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),
    /// Configuration file is not valid TOML for this schema.
    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    /// Configuration parsed but holds unusable values.
    #[error("Validation failed: {0}")]
    ValidationFailed(String),
    /// Generic I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
