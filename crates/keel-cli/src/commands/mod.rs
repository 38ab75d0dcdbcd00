//! Command implementations for the Keel CLI.
//!
//! - [`resolve`] - Print the resolved configuration as JSON
//! - [`check`] - Validate configuration and report warnings
//! - [`proxy`] - Route a request path through the proxy table
//! - [`env`] - Print the merged environment overlay
//!
//! Each command takes its parsed arguments plus the ambient environment
//! snapshot captured once in `main`.

pub mod check;
pub mod env;
pub mod proxy;
pub mod resolve;

pub use check::execute as check_execute;
pub use env::execute as env_execute;
pub use proxy::execute as proxy_execute;
pub use resolve::execute as resolve_execute;
