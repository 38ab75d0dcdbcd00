//! Strict parsing of flag-typed environment values.

use crate::error::{ConfigError, Result};

/// Parse a flag value that must be exactly `"true"` or `"false"`.
///
/// No trimming, case folding or numeric truthiness is applied: `"1"`,
/// `"yes"`, `"TRUE"`, `" true"` and the empty string are all rejected.
pub fn parse_bool(key: &str, raw: &str) -> Result<bool> {
    match raw {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(ConfigError::InvalidBoolean {
            key: key.to_string(),
            value: other.to_string(),
        }),
    }
}
