//! Logging setup for the Keel CLI.
//!
//! Installs a `tracing` subscriber with an `EnvFilter` and a compact
//! formatter writing to stderr, so stdout stays free for JSON output.
//!
//! # Example
//!
//! ```rust,no_run
//! use keel_cli::logger::init_logger;
//! use tracing::info;
//!
//! init_logger(false, false, false);
//! info!("resolving configuration");
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::ui::color_enabled;

const VERBOSE_FILTER: &str = "keel_cli=debug,keel_config=debug";
const QUIET_FILTER: &str = "keel_cli=error,keel_config=error";
const DEFAULT_FILTER: &str = "keel_cli=info,keel_config=info";

/// Initialize the tracing subscriber.
///
/// The filter is chosen in this order:
/// 1. `--verbose`: debug for keel crates
/// 2. `--quiet`: errors only
/// 3. `RUST_LOG`, when set and valid
/// 4. info for keel crates
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    init_logger_with_filter(filter_for(verbose, quiet), no_color);
}

/// Initialize the subscriber with an explicit filter.
pub fn init_logger_with_filter(filter: EnvFilter, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(color_enabled(no_color))
        .compact();

    // A second initialization (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

fn filter_for(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filters_parse() {
        let _ = EnvFilter::new(VERBOSE_FILTER);
        let _ = EnvFilter::new(QUIET_FILTER);
        let _ = EnvFilter::new(DEFAULT_FILTER);
    }

    #[test]
    fn test_verbose_wins_over_quiet() {
        assert_eq!(filter_for(true, true).to_string(), EnvFilter::new(VERBOSE_FILTER).to_string());
    }
}
