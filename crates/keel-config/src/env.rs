//! Mode-specific environment overlays.
//!
//! An overlay is assembled from up to four dotenv files in the env
//! directory, read in increasing priority:
//!
//! 1. `.env`
//! 2. `.env.local`
//! 3. `.env.<mode>`
//! 4. `.env.<mode>.local`
//!
//! Only variables carrying the [`ENV_PREFIX`] survive. The overlay is then
//! merged over an explicit [`EnvSnapshot`] of the ambient environment, with
//! overlay values winning on collision. Nothing in this module reads the
//! process environment except [`EnvSnapshot::from_process`], which callers
//! invoke at their outer boundary.
//!
//! Values may reference other variables as `$NAME` or `${NAME}`. A
//! reference resolves to the latest overlay entry of that name from this or
//! an earlier file, then to the ambient snapshot, and otherwise to the
//! empty string. Single-quoted text and `\$` stay literal.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ConfigError, Result};

/// Prefix a variable must carry to be visible to the resolver.
pub const ENV_PREFIX: &str = "VITE_";

/// Variable names consumed by the resolver.
pub mod keys {
    pub const PUBLIC_PATH: &str = "VITE_PUBLIC_PATH";
    pub const PORT: &str = "VITE_PORT";
    pub const OPEN: &str = "VITE_OPEN";
    pub const PROXY_URL: &str = "VITE_PROXY_URL";
    pub const BASE_URL: &str = "VITE_BASE_URL";
    pub const DROP_CONSOLE: &str = "VITE_DROP_CONSOLE";

    /// Every key the resolver requires, in extraction order.
    pub const REQUIRED: [&str; 6] = [PUBLIC_PATH, PORT, OPEN, PROXY_URL, BASE_URL, DROP_CONSOLE];
}

/// Build mode selecting which overlay files apply.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Mode(String);

impl Mode {
    pub const DEVELOPMENT: &'static str = "development";
    pub const PRODUCTION: &'static str = "production";

    /// Validate a mode name.
    ///
    /// Empty names and the reserved name `local` are rejected; the latter
    /// would make `.env.local` ambiguous between "mode overlay" and "local
    /// override".
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() || name == "local" {
            return Err(ConfigError::InvalidMode(name));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_production(&self) -> bool {
        self.0 == Self::PRODUCTION
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Immutable snapshot of environment variables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    vars: BTreeMap<String, String>,
}

impl EnvSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture the current process environment.
    ///
    /// Variables whose name or value is not valid Unicode are skipped.
    pub fn from_process() -> Self {
        Self::from_pairs(std::env::vars_os().filter_map(|(k, v)| {
            Some((k.into_string().ok()?, v.into_string().ok()?))
        }))
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Look up a variable that must be present.
    pub fn require(&self, key: &str) -> Result<&str> {
        self.get(key).ok_or_else(|| ConfigError::missing_key(key))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.vars.contains_key(key)
    }

    /// Iterate variables in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    fn with_prefix(&self, prefix: &str) -> Self {
        Self {
            vars: self
                .vars
                .iter()
                .filter(|(k, _)| k.starts_with(prefix))
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        }
    }

    fn overlay(&mut self, other: BTreeMap<String, String>) {
        self.vars.extend(other);
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for EnvSnapshot {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}

/// Overlay files for `mode` under `env_dir`, lowest priority first.
pub fn env_files(env_dir: &Path, mode: &Mode) -> Vec<PathBuf> {
    vec![
        env_dir.join(".env"),
        env_dir.join(".env.local"),
        env_dir.join(format!(".env.{mode}")),
        env_dir.join(format!(".env.{mode}.local")),
    ]
}

/// Load the overlay for `mode` and merge it over `ambient`.
///
/// Missing overlay files are skipped; an empty overlay is valid and leaves
/// the prefixed ambient variables as the only source.
pub fn load_env(mode: &Mode, env_dir: &Path, ambient: &EnvSnapshot) -> Result<EnvSnapshot> {
    let mut merged = ambient.with_prefix(ENV_PREFIX);
    // Every file entry, prefixed or not, is visible to later references.
    let mut scope = BTreeMap::new();

    for path in env_files(env_dir, mode) {
        if !path.is_file() {
            continue;
        }
        let count = read_env_file(&path, &mut scope, ambient)?;
        debug!(path = %path.display(), count, "loaded env file");
    }

    merged.overlay(
        scope
            .into_iter()
            .filter(|(k, _)| k.starts_with(ENV_PREFIX))
            .collect(),
    );
    Ok(merged)
}

/// Parse one dotenv file into `scope`, returning the number of entries.
fn read_env_file(
    path: &Path,
    scope: &mut BTreeMap<String, String>,
    ambient: &EnvSnapshot,
) -> Result<usize> {
    let content = fs::read_to_string(path).map_err(|e| env_file_error(path, e))?;
    let marked = mark_references(&content);

    let mut count = 0;
    for item in dotenvy::from_read_iter(marked.as_bytes()) {
        let (key, raw) = item.map_err(|e| env_file_error(path, e))?;
        let value = expand_references(&raw, scope, ambient);
        scope.insert(key, value);
        count += 1;
    }
    Ok(count)
}

fn env_file_error(path: &Path, err: impl fmt::Display) -> ConfigError {
    ConfigError::EnvFile {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}

/// Marks a `$` that starts a reference.
const REFERENCE: char = '\u{E000}';
/// Marks a `$` that is literal text.
const LITERAL_DOLLAR: char = '\u{E001}';

#[derive(Clone, Copy, PartialEq, Eq)]
enum Quote {
    None,
    Single,
    Double,
}

/// Replace every `$` in raw dotenv text with a marker.
///
/// The dotenv parser then sees no references and never consults the
/// process environment. Quote and escape tracking follows dotenv rules:
/// `$` inside single quotes or escaped as `\$` is literal, any other `$`
/// starts a reference. Comments are copied untouched.
fn mark_references(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    let mut quote = Quote::None;
    let mut in_comment = false;
    let mut prev = '\n';
    let mut chars = content.chars();

    while let Some(c) = chars.next() {
        if in_comment {
            in_comment = c != '\n';
            out.push(c);
            prev = c;
            continue;
        }
        match (quote, c) {
            (Quote::Single, '\'') => quote = Quote::None,
            (Quote::Single, '$') => {
                out.push(LITERAL_DOLLAR);
                prev = c;
                continue;
            }
            (Quote::Single, _) => {}
            (_, '\\') => match chars.next() {
                Some('$') => {
                    out.push(LITERAL_DOLLAR);
                    prev = '$';
                    continue;
                }
                Some(next) => {
                    out.push(c);
                    out.push(next);
                    prev = next;
                    continue;
                }
                None => {}
            },
            (_, '$') => {
                out.push(REFERENCE);
                prev = c;
                continue;
            }
            (Quote::Double, '"') => quote = Quote::None,
            (Quote::None, '"') => quote = Quote::Double,
            (Quote::None, '\'') => quote = Quote::Single,
            (Quote::None, '#') if prev.is_whitespace() => in_comment = true,
            _ => {}
        }
        out.push(c);
        prev = c;
    }
    out
}

/// Expand marked references in a parsed value.
fn expand_references(raw: &str, scope: &BTreeMap<String, String>, ambient: &EnvSnapshot) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            LITERAL_DOLLAR => out.push('$'),
            REFERENCE if chars.peek() == Some(&'{') => {
                chars.next();
                let name: String = chars.by_ref().take_while(|&n| n != '}').collect();
                out.push_str(lookup(&name, scope, ambient));
            }
            REFERENCE => {
                let mut name = String::new();
                while let Some(&n) = chars.peek() {
                    if !(n.is_alphanumeric() || n == '_') {
                        break;
                    }
                    name.push(n);
                    chars.next();
                }
                if name.is_empty() {
                    out.push('$');
                } else {
                    out.push_str(lookup(&name, scope, ambient));
                }
            }
            other => out.push(other),
        }
    }
    out
}

fn lookup<'a>(name: &str, scope: &'a BTreeMap<String, String>, ambient: &'a EnvSnapshot) -> &'a str {
    scope
        .get(name)
        .map(String::as_str)
        .or_else(|| ambient.get(name))
        .unwrap_or("")
}
