//! Env command implementation.

use std::io::Write;

use keel_config::EnvSnapshot;

use crate::cli::EnvArgs;
use crate::error::Result;
use crate::settings::Settings;
use crate::ui;

/// Execute the env command, printing `KEY=VALUE` lines sorted by key.
pub fn execute(args: EnvArgs, ambient: &EnvSnapshot) -> Result<()> {
    let settings = Settings::load(&args.target)?;
    let resolver = settings.resolver()?;
    let env = resolver.load_env(ambient)?;

    if env.is_empty() {
        ui::warning(&format!("No VITE_ variables found for mode '{}'", resolver.mode()));
        return Ok(());
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for line in render(&env) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

fn render(env: &EnvSnapshot) -> Vec<String> {
    env.iter().map(|(k, v)| format!("{k}={v}")).collect()
}
