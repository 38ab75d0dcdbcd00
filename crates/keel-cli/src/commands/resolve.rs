//! Resolve command implementation.

use std::io::Write;

use keel_config::{EnvSnapshot, ResolvedConfig};

use crate::cli::ResolveArgs;
use crate::error::Result;
use crate::settings::Settings;

/// Execute the resolve command, writing JSON to stdout.
pub fn execute(args: ResolveArgs, ambient: &EnvSnapshot) -> Result<()> {
    let settings = Settings::load(&args.target)?;
    let config = settings.resolver()?.resolve(ambient)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", render(&config, args.pretty)?)?;
    Ok(())
}

/// Serialize a resolved configuration.
pub fn render(config: &ResolvedConfig, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(config)?
    } else {
        serde_json::to_string(config)?
    };
    Ok(json)
}
