// src/config.rs
//
// Journal configuration
//
// Storage locations are injected through this struct; nothing else in the
// crate knows where the journal lives on disk.

use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "media_journal";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub storage: StorageConfig,
}

/// Where the four journal documents are stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding the JSON documents
    pub data_dir: PathBuf,

    pub books_file: String,

    pub movies_file: String,

    /// Series document, seasons inlined
    pub series_file: String,

    /// Year usage index document
    pub years_file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            books_file: "books.json".to_string(),
            movies_file: "movies.json".to_string(),
            series_file: "series.json".to_string(),
            years_file: "years.json".to_string(),
        }
    }
}

impl StorageConfig {
    /// Storage rooted at `data_dir` with the default file names
    pub fn in_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    pub fn books_path(&self) -> PathBuf {
        self.data_dir.join(&self.books_file)
    }

    pub fn movies_path(&self) -> PathBuf {
        self.data_dir.join(&self.movies_file)
    }

    pub fn series_path(&self) -> PathBuf {
        self.data_dir.join(&self.series_file)
    }

    pub fn years_path(&self) -> PathBuf {
        self.data_dir.join(&self.years_file)
    }
}

impl Config {
    /// Loads the first config file found, or the defaults
    pub fn load() -> Result<Self> {
        for path in Self::config_paths() {
            if path.exists() {
                info!("Loading config from: {}", path.display());
                return Self::load_from_path(&path);
            }
        }

        info!("No config file found, using defaults");
        Ok(Self::default())
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        info!("Config saved to: {}", path.display());
        Ok(())
    }

    fn config_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from("media_journal.toml")];

        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join(APP_DIR).join("config.toml"));
        }

        paths
    }
}

/// {DATA_DIR}/media_journal, or ./media_journal when the platform has none
fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join(APP_DIR))
        .unwrap_or_else(|| PathBuf::from(APP_DIR))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths_share_data_dir() {
        let storage = StorageConfig::in_dir("/tmp/journal");
        assert_eq!(storage.books_path(), PathBuf::from("/tmp/journal/books.json"));
        assert_eq!(storage.years_path(), PathBuf::from("/tmp/journal/years.json"));
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let toml_str = r#"
            [storage]
            data_dir = "/srv/journal"
            books_file = "libros.json"
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.storage.data_dir, PathBuf::from("/srv/journal"));
        assert_eq!(config.storage.books_file, "libros.json");
        assert_eq!(config.storage.movies_file, "movies.json");
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config {
            storage: StorageConfig::in_dir(dir.path()),
        };
        config.save_to_path(&path).unwrap();

        let loaded = Config::load_from_path(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_from_missing_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::load_from_path(&dir.path().join("absent.toml")).is_err());
    }
}
