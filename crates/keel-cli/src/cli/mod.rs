//! Command-line interface definition for Keel.
//!
//! # Command Structure
//!
//! - `keel resolve` - Print the resolved configuration as JSON
//! - `keel check` - Resolve and report a summary with warnings
//! - `keel proxy` - Show how the dev server would route a request path
//! - `keel env` - Print the merged environment overlay

mod commands;

use clap::Parser;

pub use commands::{CheckArgs, Command, EnvArgs, ProxyArgs, ResolveArgs, TargetArgs};

/// Keel - resolve front-end build configuration
#[derive(Parser, Debug)]
#[command(
    name = "keel",
    version,
    about = "Resolve front-end build configuration",
    long_about = "Keel reads the mode-specific .env overlay and package.json of a front-end\n\
                  project and produces the configuration a build engine consumes: plugins,\n\
                  path aliases, dev-server and proxy settings, dead-code directives and\n\
                  injected build metadata."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
