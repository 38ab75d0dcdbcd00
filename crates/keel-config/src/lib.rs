//! Mode-aware configuration resolution for front-end build engines.
//!
//! The crate reads a mode-specific environment overlay and the project's
//! `package.json`, then assembles a single [`ResolvedConfig`] describing
//! plugins, path aliases, dev-server settings, proxy rules, dead-code
//! directives and injected build constants. Bundling, transforms and the
//! dev server itself belong to the engine that consumes the result.
//!
//! The ambient process environment is never read implicitly: callers pass
//! an [`EnvSnapshot`], typically [`EnvSnapshot::from_process`] at the
//! program boundary.

pub mod alias;
pub mod app_info;
pub mod env;
pub mod error;
pub mod flags;
pub mod package;
pub mod plugins;
pub mod proxy;
pub mod resolve;
pub mod server;

// Re-export main types
pub use alias::AliasTable;
pub use app_info::{AppInfo, Clock, FixedClock, SystemClock};
pub use env::{EnvSnapshot, Mode, load_env};
pub use error::{ConfigError, Result};
pub use package::PackageMetadata;
pub use plugins::PluginSpec;
pub use proxy::{ProxyRoute, ProxyRule, ProxyTable};
pub use resolve::{ConfigResolver, ResolvedConfig, resolve};
pub use server::{HostBinding, ServerSettings};
