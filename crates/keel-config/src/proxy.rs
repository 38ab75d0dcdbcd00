//! Dev-server proxy rules.
//!
//! A rule forwards every request whose path starts with its prefix to a
//! target origin, stripping the prefix first. Prefixes are literal strings;
//! characters such as `.` or `*` carry no pattern meaning.

use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};

use crate::error::{ConfigError, Result};

/// Name reported for the prefix-stripping rewrite in serialized output.
pub const STRIP_PREFIX_REWRITE: &str = "strip-prefix";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyRule {
    pub match_prefix: String,
    pub target_origin: String,
    /// Rewrite the `Host` header to the target's.
    pub change_origin: bool,
}

impl ProxyRule {
    pub fn new(match_prefix: impl Into<String>, target_origin: impl Into<String>) -> Self {
        Self {
            match_prefix: match_prefix.into(),
            target_origin: target_origin.into(),
            change_origin: true,
        }
    }

    pub fn matches(&self, path: &str) -> bool {
        path.starts_with(&self.match_prefix)
    }

    /// Remove the prefix from the start of `path`, once.
    ///
    /// Paths that do not start with the prefix come back unchanged.
    pub fn rewrite<'a>(&self, path: &'a str) -> &'a str {
        path.strip_prefix(self.match_prefix.as_str()).unwrap_or(path)
    }

    /// Absolute URL a matching request is forwarded to.
    pub fn forward_url(&self, path: &str) -> String {
        let rewritten = self.rewrite(path);
        let origin = self.target_origin.trim_end_matches('/');
        if rewritten.is_empty() {
            format!("{origin}/")
        } else if rewritten.starts_with('/') {
            format!("{origin}{rewritten}")
        } else {
            format!("{origin}/{rewritten}")
        }
    }
}

impl Serialize for ProxyRule {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("ProxyRule", 3)?;
        s.serialize_field("target", &self.target_origin)?;
        s.serialize_field("changeOrigin", &self.change_origin)?;
        s.serialize_field("rewrite", STRIP_PREFIX_REWRITE)?;
        s.end()
    }
}

/// Result of routing a request path through a [`ProxyTable`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyRoute<'a> {
    pub rule: &'a ProxyRule,
    pub rewritten_path: String,
    pub url: String,
}

/// Proxy rules in registration order, keyed by unique prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProxyTable {
    rules: Vec<ProxyRule>,
}

impl ProxyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a rule. A second rule for an existing prefix is rejected.
    pub fn insert(&mut self, rule: ProxyRule) -> Result<()> {
        if self.get(&rule.match_prefix).is_some() {
            return Err(ConfigError::DuplicateProxyPrefix(rule.match_prefix));
        }
        self.rules.push(rule);
        Ok(())
    }

    pub fn get(&self, prefix: &str) -> Option<&ProxyRule> {
        self.rules.iter().find(|r| r.match_prefix == prefix)
    }

    /// First rule, in registration order, whose prefix `path` starts with.
    ///
    /// `None` means the dev server handles the request itself.
    pub fn route(&self, path: &str) -> Option<ProxyRoute<'_>> {
        let rule = self.rules.iter().find(|r| r.matches(path))?;
        Some(ProxyRoute {
            rule,
            rewritten_path: rule.rewrite(path).to_string(),
            url: rule.forward_url(path),
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProxyRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Serialize for ProxyTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.rules.len()))?;
        for rule in &self.rules {
            map.serialize_entry(&rule.match_prefix, rule)?;
        }
        map.end()
    }
}
