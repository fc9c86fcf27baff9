//! Where catalog files live on disk.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ExoError, Result};

/// Data directory used when none is configured, relative to the home directory.
const DEFAULT_DATA_DIR: &str = "Data/exoplanet_database";

/// Catalog file locations.
///
/// ```json
/// {
///   "data_dir": "~/Data/exoplanet_database",
///   "paths": { "sweetcat": "/mnt/archive/sweetcat.tsv" }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Base directory for relative source paths.
    pub data_dir: PathBuf,
    /// Per-source path overrides.
    pub paths: IndexMap<String, PathBuf>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        let data_dir = dirs::home_dir()
            .map(|home| home.join(DEFAULT_DATA_DIR))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));
        Self {
            data_dir,
            paths: IndexMap::new(),
        }
    }
}

impl CatalogConfig {
    /// Config rooted at `data_dir`, without overrides.
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            paths: IndexMap::new(),
        }
    }

    /// Override the path of one source.
    pub fn with_path(mut self, source: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        self.paths.insert(source.into(), path.into());
        self
    }

    /// Read a JSON config file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| ExoError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        serde_json::from_reader(BufReader::new(file)).map_err(|e| {
            ExoError::Config(format!("Failed to parse config '{}': {}", path.display(), e))
        })
    }

    /// Write this config as pretty JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| ExoError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        serde_json::to_writer_pretty(BufWriter::new(file), self)?;
        Ok(())
    }

    /// File of `source`: its override if any, else `default_path`.
    ///
    /// A leading `~` is expanded to the home directory; relative paths are
    /// taken relative to the data directory.
    pub fn resolve_path(&self, source: &str, default_path: &str) -> PathBuf {
        let path = self
            .paths
            .get(source)
            .cloned()
            .unwrap_or_else(|| PathBuf::from(default_path));
        let path = expand_home(&path);
        if path.is_absolute() {
            path
        } else {
            expand_home(&self.data_dir).join(path)
        }
    }
}

fn expand_home(path: &Path) -> PathBuf {
    match (path.strip_prefix("~"), dirs::home_dir()) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_relative_paths_use_data_dir() {
        let config = CatalogConfig::with_data_dir("/data/exo");
        assert_eq!(
            config.resolve_path("sweetcat", "sweetcat/sweetcat.tsv"),
            PathBuf::from("/data/exo/sweetcat/sweetcat.tsv")
        );
    }

    #[test]
    fn test_override_wins() {
        let config = CatalogConfig::with_data_dir("/data/exo")
            .with_path("sweetcat", "/elsewhere/sc.tsv")
            .with_path("exoplaneteu", "eu.csv");

        assert_eq!(
            config.resolve_path("sweetcat", "sweetcat/sweetcat.tsv"),
            PathBuf::from("/elsewhere/sc.tsv")
        );
        assert_eq!(
            config.resolve_path("exoplaneteu", "exoplanet_eu/catalog.csv"),
            PathBuf::from("/data/exo/eu.csv")
        );
    }

    #[test]
    fn test_tilde_expansion() {
        let Some(home) = dirs::home_dir() else {
            return;
        };
        let config = CatalogConfig::with_data_dir("~/exo");
        assert_eq!(config.resolve_path("x", "a.csv"), home.join("exo").join("a.csv"));
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.json");
        let config = CatalogConfig::with_data_dir("/data/exo").with_path("sweetcat", "sc.tsv");

        config.save(&path).unwrap();
        assert_eq!(CatalogConfig::from_file(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, r#"{"paths": {"sweetcat": "/x.tsv"}}"#).unwrap();

        let config = CatalogConfig::from_file(&path).unwrap();
        assert_eq!(config.data_dir, CatalogConfig::default().data_dir);
        assert_eq!(config.paths.len(), 1);
    }

    #[test]
    fn test_invalid_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(matches!(CatalogConfig::from_file(&path), Err(ExoError::Config(_))));
    }
}
