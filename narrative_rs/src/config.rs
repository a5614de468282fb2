//! Configuration file support.
//!
//! Loads `narrative.toml`, which maps logical artifact names to files on
//! disk:
//!
//! ```toml
//! title = "Effects of Medicaid Expansion"
//! base_dir = "data"
//!
//! [artifacts]
//! dis_rate = "main/dis_rate_agg.csv"
//! did_results = "img/dd_modsf.jpg"
//! ```
//!
//! Relative artifact paths resolve against `base_dir`, which itself
//! resolves against the directory holding the config file.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::{ReportError, Result};

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "narrative.toml";

/// Root configuration structure
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NarrativeConfig {
    /// Overrides the document title
    pub title: Option<String>,
    /// Directory artifact paths are relative to
    pub base_dir: Option<PathBuf>,
    /// Logical artifact name -> path
    pub artifacts: BTreeMap<String, PathBuf>,
}

impl NarrativeConfig {
    /// Load config from a specific path. Unlike optional tool configs, a
    /// missing file is an error: without it no artifact resolves.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ReportError::Config {
                path: path.to_path_buf(),
                reason: "file not found".into(),
            });
        }
        let content = std::fs::read_to_string(path).map_err(|e| ReportError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::parse(&content, path)
    }

    /// Parse TOML content; `origin` is only used in error messages.
    pub fn parse(content: &str, origin: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| ReportError::Config {
            path: origin.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Build the artifact catalog, resolving paths against `config_dir`.
    pub fn catalog(&self, config_dir: &Path) -> ArtifactCatalog {
        let base = match &self.base_dir {
            Some(dir) if dir.is_absolute() => dir.clone(),
            Some(dir) => config_dir.join(dir),
            None => config_dir.to_path_buf(),
        };
        let mut catalog = ArtifactCatalog::default();
        for (name, path) in &self.artifacts {
            let resolved = if path.is_absolute() {
                path.clone()
            } else {
                base.join(path)
            };
            debug!(artifact = %name, path = %resolved.display(), "catalog entry");
            catalog.insert(name.clone(), resolved);
        }
        catalog
    }
}

/// Resolved mapping from logical artifact names to paths.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ArtifactCatalog {
    entries: BTreeMap<String, PathBuf>,
}

impl ArtifactCatalog {
    pub fn insert(&mut self, name: impl Into<String>, path: impl Into<PathBuf>) {
        self.entries.insert(name.into(), path.into());
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        self.insert(name, path);
        self
    }

    pub fn resolve(&self, name: &str) -> Option<&Path> {
        self.entries.get(name).map(PathBuf::as_path)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
