//! Configuration resolution.
//!
//! [`ConfigResolver`] turns a mode, a project root, an environment snapshot
//! and the project's `package.json` into one [`ResolvedConfig`]. Resolution
//! is all-or-nothing: the first missing or malformed input aborts it and no
//! partially built configuration escapes.

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::alias::{AliasTable, SRC_ALIAS};
use crate::app_info::{APP_INFO_CONSTANT, AppInfo, Clock, SystemClock};
use crate::env::{self, EnvSnapshot, Mode, keys};
use crate::error::{ConfigError, Result};
use crate::flags::parse_bool;
use crate::package::PackageMetadata;
use crate::plugins::{PluginSpec, app_plugins};
use crate::proxy::{ProxyRule, ProxyTable};
use crate::server::{HostBinding, ServerSettings};

/// Source directory the `@` alias points at.
pub const SRC_DIR: &str = "src";

/// Calls and statements stripped from output when console dropping is on.
pub const DROP_CONSOLE_DIRECTIVES: [&str; 2] = ["console.log", "debugger"];

/// Final configuration handed to the build engine.
///
/// Fields are read-only once resolution returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedConfig {
    #[serde(serialize_with = "serialize_mode")]
    mode: Mode,
    plugins: Vec<PluginSpec>,
    root: PathBuf,
    base: String,
    alias: AliasTable,
    server: ServerSettings,
    dead_code: Vec<String>,
    define: IndexMap<String, String>,
    #[serde(skip)]
    app_info: AppInfo,
}

impl ResolvedConfig {
    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// Plugins, applied by the engine in this order.
    pub fn plugins(&self) -> &[PluginSpec] {
        &self.plugins
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Public base path for served assets.
    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn alias(&self) -> &AliasTable {
        &self.alias
    }

    pub fn server(&self) -> &ServerSettings {
        &self.server
    }

    /// Dead-code directives (pure calls to drop).
    pub fn dead_code(&self) -> &[String] {
        &self.dead_code
    }

    /// Compile-time constants, name to replacement source text.
    pub fn define(&self) -> &IndexMap<String, String> {
        &self.define
    }

    pub fn app_info(&self) -> &AppInfo {
        &self.app_info
    }
}

fn serialize_mode<S: serde::Serializer>(mode: &Mode, s: S) -> std::result::Result<S::Ok, S::Error> {
    s.serialize_str(mode.as_str())
}

/// Raw values pulled from the merged environment.
struct RequiredVars<'a> {
    public_path: &'a str,
    port: &'a str,
    open: &'a str,
    proxy_url: &'a str,
    base_url: &'a str,
    drop_console: &'a str,
}

impl<'a> RequiredVars<'a> {
    fn extract(env: &'a EnvSnapshot) -> Result<Self> {
        Ok(Self {
            public_path: env.require(keys::PUBLIC_PATH)?,
            port: env.require(keys::PORT)?,
            open: env.require(keys::OPEN)?,
            proxy_url: env.require(keys::PROXY_URL)?,
            base_url: env.require(keys::BASE_URL)?,
            drop_console: env.require(keys::DROP_CONSOLE)?,
        })
    }
}

/// Resolver for one mode and project root.
///
/// # Example
///
/// ```no_run
/// use keel_config::{ConfigResolver, EnvSnapshot, Mode};
///
/// let mode = Mode::new("development").unwrap();
/// let config = ConfigResolver::new(mode, "/srv/admin-web")
///     .resolve(&EnvSnapshot::from_process())
///     .unwrap();
/// println!("serving on port {}", config.server().port);
/// ```
pub struct ConfigResolver<'c> {
    mode: Mode,
    root: PathBuf,
    env_dir: Option<PathBuf>,
    clock: &'c dyn Clock,
}

impl ConfigResolver<'static> {
    pub fn new(mode: Mode, root: impl Into<PathBuf>) -> Self {
        Self {
            mode,
            root: root.into(),
            env_dir: None,
            clock: &SystemClock,
        }
    }
}

impl<'c> ConfigResolver<'c> {
    /// Read overlay files from `dir` instead of the project root.
    pub fn env_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.env_dir = Some(dir.into());
        self
    }

    /// Use `clock` for the build timestamp.
    pub fn clock<'n>(self, clock: &'n dyn Clock) -> ConfigResolver<'n> {
        ConfigResolver {
            mode: self.mode,
            root: self.root,
            env_dir: self.env_dir,
            clock,
        }
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// Load the merged environment for this resolver's mode.
    pub fn load_env(&self, ambient: &EnvSnapshot) -> Result<EnvSnapshot> {
        let root = validate_root(&self.root)?;
        let env_dir = self.env_dir.clone().unwrap_or(root);
        env::load_env(&self.mode, &env_dir, ambient)
    }

    /// Resolve the full configuration against an ambient environment.
    pub fn resolve(&self, ambient: &EnvSnapshot) -> Result<ResolvedConfig> {
        let root = validate_root(&self.root)?;
        let env_dir = self.env_dir.clone().unwrap_or_else(|| root.clone());

        let env = env::load_env(&self.mode, &env_dir, ambient)?;
        debug!(mode = %self.mode, vars = env.len(), "merged environment");

        let vars = RequiredVars::extract(&env)?;
        let open = parse_bool(keys::OPEN, vars.open)?;
        let drop_console = parse_bool(keys::DROP_CONSOLE, vars.drop_console)?;

        let pkg = PackageMetadata::from_dir(&root)?;
        let app_info = AppInfo::capture(pkg, self.clock);

        let mut alias = AliasTable::new();
        alias.insert(SRC_ALIAS, root.join(SRC_DIR))?;

        let plugins = app_plugins(&root);

        let mut proxy = ProxyTable::new();
        proxy.insert(ProxyRule::new(vars.base_url, vars.proxy_url))?;

        let server = ServerSettings {
            host: HostBinding::AllInterfaces,
            port: vars.port.to_string(),
            open,
            proxy,
        };
        if server.port_number().is_none() {
            warn!(port = %server.port, "port is not a valid TCP port; passing it through unchanged");
        }

        let dead_code = if drop_console {
            DROP_CONSOLE_DIRECTIVES.iter().map(|s| s.to_string()).collect()
        } else {
            Vec::new()
        };

        let define_value = app_info.to_define_value().map_err(|e| {
            ConfigError::missing_metadata(root.join(crate::package::PACKAGE_JSON), e.to_string())
        })?;
        let define = IndexMap::from([(APP_INFO_CONSTANT.to_string(), define_value)]);

        info!(
            mode = %self.mode,
            root = %root.display(),
            package = %app_info.pkg.name,
            version = %app_info.pkg.version,
            "resolved configuration"
        );

        Ok(ResolvedConfig {
            mode: self.mode.clone(),
            plugins,
            root,
            base: vars.public_path.to_string(),
            alias,
            server,
            dead_code,
            define,
            app_info,
        })
    }
}

/// Resolve with the system clock and overlay files read from `root`.
pub fn resolve(mode: &Mode, root: &Path, ambient: &EnvSnapshot) -> Result<ResolvedConfig> {
    ConfigResolver::new(mode.clone(), root).resolve(ambient)
}

/// Make `root` absolute and confirm it is a readable directory.
fn validate_root(root: &Path) -> Result<PathBuf> {
    let root = std::path::absolute(root).map_err(|_| ConfigError::InvalidRoot(root.to_path_buf()))?;
    if !root.is_dir() || fs::read_dir(&root).is_err() {
        return Err(ConfigError::InvalidRoot(root));
    }
    Ok(root)
}
