//! Tool settings with multi-source loading.
//!
//! Selects which mode, project root and env directory a command resolves
//! against. Priority: CLI flags > `KEEL_*` environment variables > defaults.

use std::path::PathBuf;

use figment::{
    Figment,
    providers::{Env, Serialized},
};
use keel_config::{ConfigResolver, Mode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cli::TargetArgs;
use crate::error::{Result, ResultExt};

/// Prefix for environment variables that configure the tool itself.
pub const SETTINGS_ENV_PREFIX: &str = "KEEL_";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Build mode selecting the env overlay
    pub mode: String,

    /// Project root; the current directory when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cwd: Option<PathBuf>,

    /// Directory holding `.env*` files; the project root when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub env_dir: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mode: Mode::DEVELOPMENT.to_string(),
            cwd: None,
            env_dir: None,
        }
    }
}

/// Only flags the user actually passed; unset ones leave lower layers alone.
#[derive(Debug, Default, Serialize)]
struct FlagOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cwd: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    env_dir: Option<PathBuf>,
}

impl Settings {
    /// Load settings for a command invocation.
    pub fn load(args: &TargetArgs) -> Result<Self> {
        Self::figment(args).extract().map_err(Into::into)
    }

    fn figment(args: &TargetArgs) -> Figment {
        let flags = FlagOverrides {
            mode: args.mode.clone(),
            cwd: args.cwd.clone(),
            env_dir: args.env_dir.clone(),
        };

        Figment::new()
            .merge(Serialized::defaults(Settings::default()))
            .merge(Env::prefixed(SETTINGS_ENV_PREFIX))
            .merge(Serialized::defaults(flags))
    }

    /// Project root, falling back to the current directory.
    pub fn root(&self) -> Result<PathBuf> {
        match &self.cwd {
            Some(cwd) => Ok(cwd.clone()),
            None => std::env::current_dir().context("Failed to get current directory"),
        }
    }

    /// Build a resolver for these settings.
    pub fn resolver(&self) -> Result<ConfigResolver<'static>> {
        let mode = Mode::new(self.mode.clone())?;
        let root = self.root()?;
        debug!(mode = %mode, root = %root.display(), "tool settings");

        let resolver = ConfigResolver::new(mode, root);
        Ok(match &self.env_dir {
            Some(dir) => resolver.env_dir(dir.clone()),
            None => resolver,
        })
    }
}
