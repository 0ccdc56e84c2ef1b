use crate::error::{Result, SiftError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_EXPORT_FILE: &str = "journal.txt";

/// Keys accepted by [`SiftConfig::get`] and [`SiftConfig::set`].
pub const CONFIG_KEYS: &[&str] = &["export-file", "catalog"];

/// Configuration for sift, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SiftConfig {
    /// Default destination for `journal export`
    #[serde(default = "default_export_file")]
    pub export_file: String,

    /// Product catalog used when no `--catalog` flag is given
    #[serde(default)]
    pub catalog: Option<PathBuf>,
}

fn default_export_file() -> String {
    DEFAULT_EXPORT_FILE.to_string()
}

impl Default for SiftConfig {
    fn default() -> Self {
        Self {
            export_file: default_export_file(),
            catalog: None,
        }
    }
}

impl SiftConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(SiftError::Io)?;
        let config: SiftConfig =
            serde_json::from_str(&content).map_err(SiftError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(SiftError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(SiftError::Serialization)?;
        fs::write(config_path, content).map_err(SiftError::Io)?;
        Ok(())
    }

    /// The configured catalog, with relative paths taken from `config_dir`.
    pub fn catalog_path<P: AsRef<Path>>(&self, config_dir: P) -> Option<PathBuf> {
        self.catalog.as_ref().map(|path| {
            if path.is_relative() {
                config_dir.as_ref().join(path)
            } else {
                path.clone()
            }
        })
    }

    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "export-file" => Ok(self.export_file.clone()),
            "catalog" => Ok(self
                .catalog
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default()),
            other => Err(unknown_key(other)),
        }
    }

    /// Set a value by key. An empty catalog value clears it.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "export-file" => {
                if value.trim().is_empty() {
                    return Err(SiftError::invalid("export-file cannot be empty"));
                }
                self.export_file = value.to_string();
            }
            "catalog" => {
                self.catalog = if value.trim().is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }
}

fn unknown_key(key: &str) -> SiftError {
    SiftError::invalid(format!(
        "unknown config key '{}' (known: {})",
        key,
        CONFIG_KEYS.join(", ")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = SiftConfig::default();
        assert_eq!(config.export_file, "journal.txt");
        assert_eq!(config.catalog, None);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = SiftConfig::load(dir.path()).unwrap();
        assert_eq!(config, SiftConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let config_dir = dir.path().join("sift");

        let mut config = SiftConfig::default();
        config.set("export-file", "notes.txt").unwrap();
        config.set("catalog", "/tmp/catalog.json").unwrap();
        config.save(&config_dir).unwrap();

        let loaded = SiftConfig::load(&config_dir).unwrap();
        assert_eq!(loaded.export_file, "notes.txt");
        assert_eq!(loaded.catalog, Some(PathBuf::from("/tmp/catalog.json")));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "{}").unwrap();

        let loaded = SiftConfig::load(dir.path()).unwrap();
        assert_eq!(loaded, SiftConfig::default());
    }

    #[test]
    fn test_empty_catalog_clears() {
        let mut config = SiftConfig::default();
        config.set("catalog", "products.json").unwrap();
        config.set("catalog", "").unwrap();
        assert_eq!(config.get("catalog").unwrap(), "");
    }

    #[test]
    fn test_relative_catalog_resolves_against_config_dir() {
        let mut config = SiftConfig::default();
        assert_eq!(config.catalog_path("/data/sift"), None);

        config.set("catalog", "products.json").unwrap();
        assert_eq!(
            config.catalog_path("/data/sift"),
            Some(PathBuf::from("/data/sift/products.json"))
        );

        config.set("catalog", "/srv/products.json").unwrap();
        assert_eq!(
            config.catalog_path("/data/sift"),
            Some(PathBuf::from("/srv/products.json"))
        );
    }

    #[test]
    fn test_unknown_key_is_invalid() {
        let mut config = SiftConfig::default();
        assert!(matches!(
            config.set("colour", "x"),
            Err(SiftError::InvalidArgument(_))
        ));
        assert!(config.get("colour").is_err());
    }
}
