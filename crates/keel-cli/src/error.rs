//! Error handling for the Keel CLI.
//!
//! `CliError` is the top-level error returned by every command. Resolver
//! failures arrive as [`keel_config::ConfigError`] and convert
//! automatically; [`ResultExt`] attaches context on the way up. `main`
//! turns the final error into a `miette` report.

mod miette;

use thiserror::Error;

pub use keel_config::ConfigError;

pub use self::miette::cli_error_to_miette;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration resolution errors (missing keys, bad flags, metadata)
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Tool settings could not be assembled from flags and `KEEL_*` variables
    #[error("Invalid settings: {0}\n\nHint: Check KEEL_MODE, KEEL_CWD and KEEL_ENV_DIR")]
    Settings(#[from] Box<figment::Error>),

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with custom messages
    #[error("{0}")]
    Custom(String),
}

impl From<figment::Error> for CliError {
    fn from(err: figment::Error) -> Self {
        CliError::Settings(Box::new(err))
    }
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Extension trait for adding context to `Result` types.
pub trait ResultExt<T> {
    /// Prefix the error message with `msg`.
    fn context(self, msg: impl std::fmt::Display) -> Result<T>;
}

impl<T, E: Into<CliError>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, msg: impl std::fmt::Display) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            CliError::Custom(format!("{}: {}", msg, err))
        })
    }
}

/// Hint shown beneath a resolver error.
pub fn config_hint(err: &ConfigError) -> Option<&'static str> {
    match err {
        ConfigError::MissingKey { .. } => {
            Some("Define it in .env, .env.<mode> or the process environment")
        }
        ConfigError::InvalidBoolean { .. } => Some("Flags accept exactly \"true\" or \"false\""),
        ConfigError::MissingMetadata { .. } => {
            Some("Run keel from the project root or pass --cwd <DIR>")
        }
        ConfigError::InvalidMode(_) => Some("Pick a mode such as development or production"),
        ConfigError::InvalidRoot(_) => Some("Pass an existing directory with --cwd"),
        _ => None,
    }
}
