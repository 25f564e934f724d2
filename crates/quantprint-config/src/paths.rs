//! Repository layout: where configuration is read from and reports are
//! written to.

use std::path::{Path, PathBuf};

/// Paths relative to a repository root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoLayout {
    root: PathBuf,
}

impl RepoLayout {
    /// Creates a layout rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Repository root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `config/`.
    #[must_use]
    pub fn config_dir(&self) -> PathBuf {
        self.root.join("config")
    }

    /// `config/consumer/blueprint.yaml`.
    #[must_use]
    pub fn consumer_blueprint(&self) -> PathBuf {
        self.config_dir().join("consumer").join("blueprint.yaml")
    }

    /// `config/snowflake/schema.yaml`.
    #[must_use]
    pub fn warehouse_schema(&self) -> PathBuf {
        self.config_dir().join("snowflake").join("schema.yaml")
    }

    /// `config/datasources.yaml`.
    #[must_use]
    pub fn datasources(&self) -> PathBuf {
        self.config_dir().join("datasources.yaml")
    }

    /// `config/models.yaml`.
    #[must_use]
    pub fn models(&self) -> PathBuf {
        self.config_dir().join("models.yaml")
    }

    /// `config/dashboards.yaml`.
    #[must_use]
    pub fn dashboards(&self) -> PathBuf {
        self.config_dir().join("dashboards.yaml")
    }

    /// `reports/{kind}/`.
    #[must_use]
    pub fn reports_dir(&self, kind: &str) -> PathBuf {
        self.root.join("reports").join(kind)
    }

    /// Resolves a path from configuration. Absolute paths are kept as-is.
    #[must_use]
    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        let path = path.as_ref();
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}

impl Default for RepoLayout {
    fn default() -> Self {
        Self::new(".")
    }
}
