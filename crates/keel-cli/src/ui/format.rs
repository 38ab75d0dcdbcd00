//! Human-readable summaries of a resolved configuration.

use keel_config::ResolvedConfig;
use owo_colors::{OwoColorize, Stream::Stderr};

/// Render a flag as `on`/`off`.
pub fn format_bool(value: bool) -> &'static str {
    if value { "on" } else { "off" }
}

/// Summary lines for a resolved configuration, without styling.
pub(crate) fn summary_lines(config: &ResolvedConfig) -> Vec<(&'static str, String)> {
    let pkg = &config.app_info().pkg;
    let mut lines = vec![
        ("mode", config.mode().to_string()),
        ("package", format!("{}@{}", pkg.name, pkg.version)),
        ("built at", config.app_info().last_build_time.clone()),
        ("root", config.root().display().to_string()),
        ("base", config.base().to_string()),
        (
            "server",
            format!("{}:{}", config.server().host.ip(), config.server().port),
        ),
        ("open browser", format_bool(config.server().open).to_string()),
        (
            "drop console",
            format_bool(!config.dead_code().is_empty()).to_string(),
        ),
    ];

    for (token, target) in config.alias().iter() {
        lines.push(("alias", format!("{token} -> {}", target.display())));
    }
    for rule in config.server().proxy.iter() {
        lines.push((
            "proxy",
            format!("{} -> {}", rule.match_prefix, rule.target_origin),
        ));
    }
    for plugin in config.plugins() {
        lines.push(("plugin", plugin.name().to_string()));
    }

    lines
}

/// Print a configuration summary to stderr.
pub fn print_summary(config: &ResolvedConfig) {
    for (label, value) in summary_lines(config) {
        let label = format!("{label:>13}");
        eprintln!("  {}  {}", label.if_supports_color(Stderr, |t| t.dimmed()), value);
    }
}
