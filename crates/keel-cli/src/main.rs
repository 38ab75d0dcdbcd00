//! Keel CLI - resolve and inspect front-end build configuration.
//!
//! Parses arguments, initializes logging, takes the one snapshot of the
//! process environment the resolver sees, and dispatches the subcommand.

use clap::Parser;
use keel_cli::{cli, commands, error, logger, ui};
use keel_config::EnvSnapshot;
use miette::Result;

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    let ambient = EnvSnapshot::from_process();

    let result = match args.command {
        cli::Command::Resolve(resolve_args) => commands::resolve_execute(resolve_args, &ambient),
        cli::Command::Check(check_args) => commands::check_execute(check_args, &ambient),
        cli::Command::Proxy(proxy_args) => commands::proxy_execute(proxy_args, &ambient),
        cli::Command::Env(env_args) => commands::env_execute(env_args, &ambient),
    };

    result.map_err(error::cli_error_to_miette)
}
