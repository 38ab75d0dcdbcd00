//! Package descriptor (`package.json`) metadata.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::{ConfigError, Result};

pub const PACKAGE_JSON: &str = "package.json";

/// The subset of `package.json` embedded into build output.
///
/// Dependency maps keep the order they have in the descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageMetadata {
    #[serde(default)]
    pub dependencies: IndexMap<String, String>,
    #[serde(default)]
    pub dev_dependencies: IndexMap<String, String>,
    pub name: String,
    pub version: String,
}

impl PackageMetadata {
    /// Read `package.json` from a project root.
    pub fn from_dir(root: &Path) -> Result<Self> {
        Self::from_path(&root.join(PACKAGE_JSON))
    }

    /// Read and validate a package descriptor.
    ///
    /// `name` and `version` must be strings. Absent dependency tables are
    /// treated as empty.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| ConfigError::missing_metadata(path, e.to_string()))?;

        let parsed: Value = serde_json::from_str(&content)
            .map_err(|e| ConfigError::missing_metadata(path, format!("invalid JSON: {e}")))?;

        let meta = Self::from_value(path, parsed)?;
        debug!(
            name = %meta.name,
            version = %meta.version,
            dependencies = meta.dependencies.len(),
            dev_dependencies = meta.dev_dependencies.len(),
            "read package metadata"
        );
        Ok(meta)
    }

    fn from_value(path: &Path, value: Value) -> Result<Self> {
        let obj = value
            .as_object()
            .ok_or_else(|| ConfigError::missing_metadata(path, "descriptor is not an object"))?;

        for field in ["name", "version"] {
            match obj.get(field) {
                Some(Value::String(_)) => {}
                Some(_) => {
                    return Err(ConfigError::missing_metadata(
                        path,
                        format!("'{field}' must be a string"),
                    ));
                }
                None => {
                    return Err(ConfigError::missing_metadata(
                        path,
                        format!("missing '{field}' field"),
                    ));
                }
            }
        }

        serde_json::from_value(value).map_err(|e| ConfigError::missing_metadata(path, e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_pkg(dir: &TempDir, content: &str) {
        fs::write(dir.path().join(PACKAGE_JSON), content).unwrap();
    }

    #[test]
    fn reads_fields_and_preserves_dependency_order() {
        let dir = TempDir::new().unwrap();
        write_pkg(
            &dir,
            r#"{
                "name": "admin-web",
                "version": "1.2.3",
                "private": true,
                "dependencies": { "vue": "^3.4.0", "axios": "^1.6.0", "dayjs": "^1.11.0" },
                "devDependencies": { "vite": "^5.0.0" }
            }"#,
        );

        let meta = PackageMetadata::from_dir(dir.path()).unwrap();
        assert_eq!(meta.name, "admin-web");
        assert_eq!(meta.version, "1.2.3");
        let deps: Vec<_> = meta.dependencies.keys().map(String::as_str).collect();
        assert_eq!(deps, ["vue", "axios", "dayjs"]);
        assert_eq!(meta.dev_dependencies["vite"], "^5.0.0");
    }

    #[test]
    fn missing_dependency_tables_default_to_empty() {
        let dir = TempDir::new().unwrap();
        write_pkg(&dir, r#"{ "name": "bare", "version": "0.0.1" }"#);

        let meta = PackageMetadata::from_dir(dir.path()).unwrap();
        assert!(meta.dependencies.is_empty());
        assert!(meta.dev_dependencies.is_empty());
    }

    #[test]
    fn missing_file_is_missing_metadata() {
        let dir = TempDir::new().unwrap();
        let err = PackageMetadata::from_dir(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::MissingMetadata { .. }));
    }

    #[test]
    fn invalid_json_is_missing_metadata() {
        let dir = TempDir::new().unwrap();
        write_pkg(&dir, "{ not json");
        let err = PackageMetadata::from_dir(dir.path()).unwrap_err();
        assert!(err.to_string().contains("invalid JSON"));
    }

    #[test]
    fn missing_version_is_missing_metadata() {
        let dir = TempDir::new().unwrap();
        write_pkg(&dir, r#"{ "name": "no-version" }"#);
        let err = PackageMetadata::from_dir(dir.path()).unwrap_err();
        assert!(err.to_string().contains("missing 'version' field"));
    }

    #[test]
    fn non_string_name_is_missing_metadata() {
        let dir = TempDir::new().unwrap();
        write_pkg(&dir, r#"{ "name": 42, "version": "1.0.0" }"#);
        let err = PackageMetadata::from_dir(dir.path()).unwrap_err();
        assert!(err.to_string().contains("'name' must be a string"));
    }
}
