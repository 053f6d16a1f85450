//! Error types for loading static tables

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for config operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors raised while reading or validating the static tables
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Table file could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Table file is not valid TOML or misses a section
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Table parsed but holds values the extractors cannot use
    #[error("Invalid table: {0}")]
    Invalid(String),
}
