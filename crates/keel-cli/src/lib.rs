//! Keel CLI - resolve and inspect front-end build configuration.
//!
//! This crate wraps [`keel_config`] in a command-line tool that an operator
//! or a build engine's bootstrap can call to obtain the resolved
//! configuration for a mode.
//!
//! # Architecture
//!
//! - [`cli`] - Argument definitions (clap derive)
//! - [`settings`] - Tool settings layered from defaults, `KEEL_*` variables and flags
//! - [`commands`] - `resolve`, `check`, `proxy` and `env` implementations
//! - [`error`] - Error types with actionable messages
//! - [`logger`] - Structured logging with tracing
//! - [`ui`] - Status lines on stderr
//!
//! # Example
//!
//! ```rust,no_run
//! use keel_cli::{error::Result, logger};
//!
//! fn main() -> Result<()> {
//!     logger::init_logger(false, false, false);
//!     // command dispatch...
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod settings;
pub mod ui;

pub use error::{CliError, Result, ResultExt};
