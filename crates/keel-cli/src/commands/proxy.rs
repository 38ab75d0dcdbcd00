//! Proxy command implementation.
//!
//! Answers "where would the dev server send this request?" without
//! starting a server.

use std::io::Write;

use keel_config::{EnvSnapshot, ProxyTable};

use crate::cli::ProxyArgs;
use crate::error::Result;
use crate::settings::Settings;

/// Execute the proxy command.
pub fn execute(args: ProxyArgs, ambient: &EnvSnapshot) -> Result<()> {
    let settings = Settings::load(&args.target)?;
    let config = settings.resolver()?.resolve(ambient)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for line in describe_route(&config.server().proxy, &args.path) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Lines describing how `path` is routed.
pub fn describe_route(table: &ProxyTable, path: &str) -> Vec<String> {
    match table.route(path) {
        Some(route) => vec![
            format!("match:   {}", route.rule.match_prefix),
            format!("target:  {}", route.rule.target_origin),
            format!("path:    {}", route.rewritten_path),
            format!("url:     {}", route.url),
        ],
        None => vec![format!("{path} is served locally (no proxy rule matches)")],
    }
}
