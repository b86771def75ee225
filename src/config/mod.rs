//! Configuration management for studykit
//!
//! This module handles loading and serializing studykit configuration from
//! an optional YAML file in the working directory. Every field has a
//! default, so running without a config file is the common case.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default configuration filename looked up in the working directory
pub const CONFIG_FILE: &str = "studykit.yml";

/// Main configuration structure for studykit
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StudykitConfig {
    /// Problem catalog configuration
    pub catalog: CatalogConfig,

    /// Git hooks configuration
    pub hooks: HooksConfig,
}

/// Problem catalog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Directory scanned for solution documents
    pub dir: String,

    /// README filename inside the catalog directory
    pub readme: String,

    /// Prefix for rendered links to solution documents
    pub link_prefix: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            dir: ".".to_string(),
            readme: "README.md".to_string(),
            link_prefix: ".".to_string(),
        }
    }
}

/// Git hooks configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HooksConfig {
    /// Directory holding hook script sources, relative to the work tree
    pub source_dir: String,

    /// Hook scripts to manage
    pub names: Vec<String>,
}

impl Default for HooksConfig {
    fn default() -> Self {
        Self {
            source_dir: "hooks".to_string(),
            names: vec!["pre-commit".to_string()],
        }
    }
}

impl StudykitConfig {
    /// Load configuration, preferring an explicit path over the default
    /// lookup. A missing default file yields the built-in defaults; a
    /// missing explicit path is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from_file(path),
            None => {
                let path = Path::new(CONFIG_FILE);
                if path.exists() {
                    Self::load_from_file(path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load configuration from a specific YAML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        serde_yml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Serialize the configuration to YAML
    pub fn to_yaml(&self) -> Result<String> {
        serde_yml::to_string(self).context("Failed to serialize configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StudykitConfig::default();
        assert_eq!(config.catalog.dir, ".");
        assert_eq!(config.catalog.readme, "README.md");
        assert_eq!(config.hooks.names, vec!["pre-commit"]);
    }

    #[test]
    fn test_load_partial_file() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("studykit.yml");
        std::fs::write(&path, "catalog:\n  dir: leetcode\n").unwrap();

        let config = StudykitConfig::load_from_file(&path).unwrap();
        assert_eq!(config.catalog.dir, "leetcode");
        // Unspecified sections fall back to defaults
        assert_eq!(config.catalog.readme, "README.md");
        assert_eq!(config.hooks.source_dir, "hooks");
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = StudykitConfig::default();
        let yaml = config.to_yaml().unwrap();
        let parsed: StudykitConfig = serde_yml::from_str(&yaml).unwrap();
        assert_eq!(parsed.catalog.link_prefix, config.catalog.link_prefix);
        assert_eq!(parsed.hooks.names, config.hooks.names);
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let temp = tempfile::tempdir().unwrap();
        let missing = temp.path().join("nope.yml");
        assert!(StudykitConfig::load(Some(&missing)).is_err());
    }
}
