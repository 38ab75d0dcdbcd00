//! Import-path alias table.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::{ConfigError, Result};

/// Alias token for the source root.
pub const SRC_ALIAS: &str = "@";

/// Mapping from short import tokens to absolute directories.
///
/// Keys are unique and so are target paths, so lookups never depend on
/// insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AliasTable {
    entries: IndexMap<String, PathBuf>,
}

impl AliasTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `token` for `target`.
    pub fn insert(&mut self, token: impl Into<String>, target: impl Into<PathBuf>) -> Result<()> {
        let token = token.into();
        let target = target.into();

        if self.entries.contains_key(&token) {
            return Err(ConfigError::DuplicateAlias(token));
        }
        if self.entries.values().any(|existing| *existing == target) {
            return Err(ConfigError::DuplicateAlias(format!(
                "{token} -> {}",
                target.display()
            )));
        }

        self.entries.insert(token, target);
        Ok(())
    }

    pub fn get(&self, token: &str) -> Option<&Path> {
        self.entries.get(token).map(PathBuf::as_path)
    }

    /// Expand an import specifier such as `@/views/Home.vue`.
    ///
    /// A token matches the whole specifier or a prefix followed by `/`;
    /// `@scope/pkg` therefore does not match the `@` alias.
    pub fn resolve(&self, specifier: &str) -> Option<PathBuf> {
        self.entries.iter().find_map(|(token, target)| {
            if specifier == token {
                return Some(target.clone());
            }
            let rest = specifier.strip_prefix(token.as_str())?.strip_prefix('/')?;
            Some(target.join(rest))
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_path()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> AliasTable {
        let mut t = AliasTable::new();
        t.insert(SRC_ALIAS, "/app/src").unwrap();
        t
    }

    #[test]
    fn resolves_alias_prefixed_specifiers() {
        let t = table();
        assert_eq!(
            t.resolve("@/views/Home.vue"),
            Some(PathBuf::from("/app/src/views/Home.vue"))
        );
        assert_eq!(t.resolve("@"), Some(PathBuf::from("/app/src")));
    }

    #[test]
    fn scoped_packages_are_not_aliases() {
        let t = table();
        assert_eq!(t.resolve("@vitejs/plugin-vue"), None);
        assert_eq!(t.resolve("vue"), None);
    }

    #[test]
    fn rejects_duplicate_token() {
        let mut t = table();
        let err = t.insert(SRC_ALIAS, "/other").unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateAlias(ref k) if k == "@"));
    }

    #[test]
    fn rejects_duplicate_target() {
        let mut t = table();
        assert!(t.insert("~", "/app/src").is_err());
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn serializes_as_plain_map() {
        let json = serde_json::to_string(&table()).unwrap();
        assert_eq!(json, r#"{"@":"/app/src"}"#);
    }
}
