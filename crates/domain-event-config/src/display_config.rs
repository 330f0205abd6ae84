//! Display configuration
//!
//! Preferences of the domain event panel, loaded from the first config file
//! found (see [`crate::load_config_file`]) and saved back to that file, or to
//! the global config path when no file was found.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Display preferences of the domain event panel
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Maximum number of lines kept in the panel
    #[serde(default = "default_capacity")]
    pub capacity: usize,

    /// Panel font as `Family-STYLE-size`
    #[serde(default = "default_font")]
    pub font: String,

    /// strftime format of the line timestamp
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,

    /// Whether the panel starts out visible
    #[serde(default = "default_visible")]
    pub visible: bool,

    /// File this config was loaded from
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

fn default_capacity() -> usize {
    2000
}

fn default_font() -> String {
    "Monospaced-PLAIN-12".to_string()
}

fn default_timestamp_format() -> String {
    "%a %b %d %H:%M:%S %Y".to_string()
}

fn default_visible() -> bool {
    true
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
            font: default_font(),
            timestamp_format: default_timestamp_format(),
            visible: default_visible(),
            source: None,
        }
    }
}

impl DisplayConfig {
    /// Load config from the first config file found, or use defaults
    pub fn load() -> Self {
        if let Some((path, content)) = crate::load_config_file() {
            match Self::parse(&content) {
                Ok(config) => {
                    log::info!("Loaded display config from {:?}", path);
                    return Self {
                        source: Some(path),
                        ..config
                    };
                }
                Err(e) => {
                    log::warn!("Failed to parse config file {:?}: {:#}", path, e);
                }
            }
        }

        log::debug!("Using default display config");
        Self::default()
    }

    fn parse(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content).context("Invalid display config")?;
        if config.capacity == 0 {
            log::warn!("Display capacity 0 is not allowed, using 1");
            config.capacity = 1;
        }
        Ok(config)
    }

    /// Load config from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config = Self::parse(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;
        Ok(Self {
            source: Some(path.to_path_buf()),
            ..config
        })
    }

    /// Save config to the file it was loaded from, or the global config path
    pub fn save(&self) -> Result<()> {
        match &self.source {
            Some(path) => self.save_to_path(path),
            None => self.save_to_path(&crate::paths::display_config_path()?),
        }
    }

    /// Save config to a specific path
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize display config")?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {:?}", path))?;

        log::info!("Saved display config to {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DisplayConfig::default();
        assert_eq!(config.capacity, 2000);
        assert_eq!(config.font, "Monospaced-PLAIN-12");
        assert_eq!(config.timestamp_format, "%a %b %d %H:%M:%S %Y");
        assert!(config.visible);
    }

    #[test]
    fn test_config_deserialize() {
        let toml = r#"
            capacity = 500
            font = "Courier-BOLD-14"
            visible = false
        "#;
        let config = DisplayConfig::parse(toml).unwrap();
        assert_eq!(config.capacity, 500);
        assert_eq!(config.font, "Courier-BOLD-14");
        assert!(!config.visible);
        // timestamp_format should use default
        assert_eq!(config.timestamp_format, "%a %b %d %H:%M:%S %Y");
    }

    #[test]
    fn test_config_deserialize_partial() {
        let toml = r#"
            timestamp_format = "%H:%M:%S"
        "#;
        let config = DisplayConfig::parse(toml).unwrap();
        assert_eq!(config.timestamp_format, "%H:%M:%S");
        assert_eq!(config.capacity, 2000);
        assert!(config.visible);
    }

    #[test]
    fn test_zero_capacity_is_raised() {
        let config = DisplayConfig::parse("capacity = 0").unwrap();
        assert_eq!(config.capacity, 1);
    }

    #[test]
    fn test_invalid_toml() {
        assert!(DisplayConfig::parse("capacity = \"lots\"").is_err());
    }

    #[test]
    fn test_save_and_load_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = DisplayConfig {
            capacity: 42,
            font: "Fira Code-ITALIC-11".to_string(),
            timestamp_format: "%T".to_string(),
            visible: false,
            source: None,
        };

        config.save_to_path(&path).unwrap();
        let loaded = DisplayConfig::load_from_path(&path).unwrap();

        assert_eq!(loaded.source.as_deref(), Some(path.as_path()));
        assert_eq!(
            DisplayConfig {
                source: None,
                ..loaded
            },
            config
        );
        assert!(!std::fs::read_to_string(&path).unwrap().contains("source"));
    }

    #[test]
    fn test_save_writes_back_to_loaded_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".domain-event-console.toml");
        std::fs::write(&path, "capacity = 7\nvisible = false\n").unwrap();

        let mut config = DisplayConfig::load_from_path(&path).unwrap();
        config.font = "Courier-BOLD-16".to_string();
        config.save().unwrap();

        let saved = DisplayConfig::load_from_path(&path).unwrap();
        assert_eq!(saved.font, "Courier-BOLD-16");
        assert_eq!(saved.capacity, 7);
        assert!(!saved.visible);
    }

    #[test]
    fn test_save_reports_unusable_directory() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();

        let err = DisplayConfig::default()
            .save_to_path(&blocker.join("config.toml"))
            .unwrap_err();

        assert!(err.to_string().contains("Failed to create config directory"));
    }

    #[test]
    fn test_load_from_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        assert!(DisplayConfig::load_from_path(&dir.path().join("missing.toml")).is_err());
    }
}
