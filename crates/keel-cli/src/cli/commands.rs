use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Available Keel subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the resolved configuration as JSON
    ///
    /// The output is the complete configuration handed to the build
    /// engine: plugins, root, base path, aliases, server and proxy
    /// settings, dead-code directives and injected constants.
    Resolve(ResolveArgs),

    /// Validate the configuration and report warnings
    ///
    /// Fails on anything that aborts resolution (missing variables,
    /// malformed flags, unreadable package.json). Suspicious but accepted
    /// values are reported as warnings.
    Check(CheckArgs),

    /// Show how the dev server routes a request path
    ///
    /// Prints the matching proxy rule and the forwarded URL, or reports
    /// that the path is served locally.
    Proxy(ProxyArgs),

    /// Print the merged environment overlay for a mode
    Env(EnvArgs),
}

/// Which project and mode to resolve against.
#[derive(Args, Debug, Clone, Default)]
pub struct TargetArgs {
    /// Build mode selecting the .env.<mode> overlay [default: development]
    ///
    /// Also read from KEEL_MODE.
    #[arg(short, long, value_name = "MODE")]
    pub mode: Option<String>,

    /// Project root containing package.json and src/
    ///
    /// Also read from KEEL_CWD. Defaults to the current directory.
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<PathBuf>,

    /// Directory holding .env files
    ///
    /// Also read from KEEL_ENV_DIR. Defaults to the project root.
    #[arg(long, value_name = "DIR")]
    pub env_dir: Option<PathBuf>,
}

/// Arguments for the resolve command
#[derive(Args, Debug)]
pub struct ResolveArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub target: TargetArgs,
}

/// Arguments for the proxy command
#[derive(Args, Debug)]
pub struct ProxyArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Request path to route, e.g. /api/users
    #[arg(value_name = "PATH", value_parser = parse_request_path)]
    pub path: String,
}

/// Arguments for the env command
#[derive(Args, Debug)]
pub struct EnvArgs {
    #[command(flatten)]
    pub target: TargetArgs,
}

/// Request paths must be absolute (start with `/`).
pub(crate) fn parse_request_path(s: &str) -> Result<String, String> {
    if s.starts_with('/') {
        Ok(s.to_string())
    } else {
        Err(format!("request path must start with '/': '{s}'"))
    }
}
