//! Error types for environment loading and configuration resolution.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Environment errors
    #[error("missing required environment variable: {key}")]
    MissingKey { key: String },

    #[error("invalid boolean for {key}: {value:?} (expected \"true\" or \"false\")")]
    InvalidBoolean { key: String, value: String },

    #[error("invalid mode: {0:?}")]
    InvalidMode(String),

    #[error("failed to parse env file {}: {message}", .path.display())]
    EnvFile { path: PathBuf, message: String },

    // Package metadata errors
    #[error("package metadata unavailable at {}: {reason}", .path.display())]
    MissingMetadata { path: PathBuf, reason: String },

    // Structural errors
    #[error("project root is not a readable directory: {}", .0.display())]
    InvalidRoot(PathBuf),

    #[error("duplicate proxy prefix: {0}")]
    DuplicateProxyPrefix(String),

    #[error("duplicate alias: {0}")]
    DuplicateAlias(String),
}

impl ConfigError {
    pub(crate) fn missing_key(key: &str) -> Self {
        Self::MissingKey {
            key: key.to_string(),
        }
    }

    pub(crate) fn missing_metadata(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::MissingMetadata {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
