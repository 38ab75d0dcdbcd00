//! Check command implementation.
//!
//! Resolves the configuration and reports a summary. Anything that aborts
//! resolution fails the command; values the build engine may still reject
//! are reported as warnings only.

use keel_config::{EnvSnapshot, ResolvedConfig};

use crate::cli::CheckArgs;
use crate::error::Result;
use crate::settings::Settings;
use crate::ui;

/// Execute the check command.
///
/// # Validation Steps
///
/// 1. Load tool settings and build a resolver
/// 2. Resolve the configuration (fatal on error)
/// 3. Print a summary of the resolved values
/// 4. Report warnings for suspicious values
pub fn execute(args: CheckArgs, ambient: &EnvSnapshot) -> Result<()> {
    let settings = Settings::load(&args.target)?;
    let resolver = settings.resolver()?;
    ui::info(&format!("Checking configuration for mode '{}'...", resolver.mode()));

    let config = resolver.resolve(ambient)?;
    ui::success("Configuration resolved");
    ui::print_summary(&config);

    let warnings = collect_warnings(&config);
    if warnings.is_empty() {
        ui::success("No warnings found");
    } else {
        ui::warning(&format!("Found {} potential issues:", warnings.len()));
        for warning in &warnings {
            ui::warning(&format!("  - {}", warning));
        }
    }

    Ok(())
}

/// Suspicious values in a resolved configuration.
pub fn collect_warnings(config: &ResolvedConfig) -> Vec<String> {
    let mut warnings = Vec::new();

    if config.server().port_number().is_none() {
        warnings.push(format!(
            "VITE_PORT '{}' is not a valid TCP port (1-65535)",
            config.server().port
        ));
    }

    for rule in config.server().proxy.iter() {
        let target = rule.target_origin.as_str();
        if !(target.starts_with("http://") || target.starts_with("https://")) {
            warnings.push(format!(
                "Proxy target '{}' for '{}' is not an http(s) URL",
                target, rule.match_prefix
            ));
        }
    }

    if config.mode().is_production() && config.dead_code().is_empty() {
        warnings.push(
            "console.log and debugger statements are kept in production (VITE_DROP_CONSOLE=false)"
                .to_string(),
        );
    }

    for (token, target) in config.alias().iter() {
        if !target.is_dir() {
            warnings.push(format!(
                "Alias '{}' points to a missing directory: {}",
                token,
                target.display()
            ));
        }
    }

    for plugin in config.plugins() {
        for dir in plugin.directories() {
            if !dir.is_dir() {
                warnings.push(format!(
                    "Plugin '{}' directory is missing: {}",
                    plugin.name(),
                    dir.display()
                ));
            }
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::format::summary_lines;
    use keel_config::{ConfigResolver, Mode};
    use std::fs;
    use tempfile::TempDir;

    fn project(with_dirs: bool) -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("package.json"),
            r#"{ "name": "admin-web", "version": "1.0.0" }"#,
        )
        .unwrap();
        if with_dirs {
            fs::create_dir_all(dir.path().join("src/components/global")).unwrap();
            fs::create_dir_all(dir.path().join("src/assets/svg")).unwrap();
        }
        dir
    }

    fn resolve(dir: &TempDir, mode: &str, port: &str, target: &str, drop: &str) -> ResolvedConfig {
        let env = EnvSnapshot::from_pairs([
            ("VITE_PUBLIC_PATH", "/"),
            ("VITE_PORT", port),
            ("VITE_OPEN", "false"),
            ("VITE_PROXY_URL", target),
            ("VITE_BASE_URL", "/api"),
            ("VITE_DROP_CONSOLE", drop),
        ]);
        ConfigResolver::new(Mode::new(mode).unwrap(), dir.path())
            .resolve(&env)
            .unwrap()
    }

    #[test]
    fn test_clean_project_has_no_warnings() {
        let dir = project(true);
        let config = resolve(&dir, "development", "5173", "http://localhost:8080", "false");
        assert!(collect_warnings(&config).is_empty());
    }

    #[test]
    fn test_bad_port_and_target_warn() {
        let dir = project(true);
        let config = resolve(&dir, "development", "99999", "localhost:8080", "false");
        let warnings = collect_warnings(&config);
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("99999"));
        assert!(warnings[1].contains("localhost:8080"));
    }

    #[test]
    fn test_production_without_console_drop_warns() {
        let dir = project(true);
        let config = resolve(&dir, "production", "80", "https://api.example.com", "false");
        let warnings = collect_warnings(&config);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("production"));

        let config = resolve(&dir, "production", "80", "https://api.example.com", "true");
        assert!(collect_warnings(&config).is_empty());
    }

    #[test]
    fn test_missing_directories_warn() {
        let dir = project(false);
        let config = resolve(&dir, "development", "5173", "http://localhost:8080", "false");
        let warnings = collect_warnings(&config);
        assert_eq!(warnings.len(), 3);
        assert!(warnings[0].starts_with("Alias '@'"));
        assert!(warnings[1].contains("unplugin-vue-components"));
        assert!(warnings[2].contains("vite-plugin-svg-icons"));
    }

    #[test]
    fn test_summary_lists_proxy_and_plugins() {
        let dir = project(true);
        let config = resolve(&dir, "development", "5173", "http://localhost:8080", "true");
        let lines = summary_lines(&config);
        assert!(lines.contains(&("server", "0.0.0.0:5173".to_string())));
        assert!(lines.contains(&("drop console", "on".to_string())));
        assert!(lines.contains(&("proxy", "/api -> http://localhost:8080".to_string())));
        assert_eq!(lines.iter().filter(|(label, _)| *label == "plugin").count(), 3);
    }
}
