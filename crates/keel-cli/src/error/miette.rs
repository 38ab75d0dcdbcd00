//! Miette diagnostic conversion for CLI errors.

use ::miette::Report;

use super::{CliError, config_hint};

/// Convert a `CliError` into a `miette` report for rendering.
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Config(e) => match config_hint(&e) {
            Some(hint) => ::miette::miette!(help = hint, "Configuration error: {}", e),
            None => ::miette::miette!("Configuration error: {}", e),
        },
        _ => ::miette::miette!("{}", err),
    }
}
