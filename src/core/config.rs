//! User configuration stored at `~/.rust_dice/config.json`.

use super::constants::{CONFIG_FILE_NAME, DATA_DIR_NAME};
use crate::combat::DEFAULT_DIFFICULTY_ID;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Get the `~/.rust_dice/` directory path, creating it if needed.
pub fn data_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    let dir = home_dir.join(DATA_DIR_NAME);
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_difficulty() -> String {
    DEFAULT_DIFFICULTY_ID.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// `tracing` filter directive used when `RUST_DICE_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Difficulty preselected during character creation.
    #[serde(default = "default_difficulty")]
    pub default_difficulty: String,
    /// Overrides `~/.rust_dice/characters`.
    #[serde(default)]
    pub save_dir: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            default_difficulty: default_difficulty(),
            save_dir: None,
        }
    }
}

impl GameConfig {
    /// Reads the config file, writing defaults first if it does not exist.
    /// An unreadable file yields defaults.
    pub fn load() -> io::Result<Self> {
        let path = data_dir()?.join(CONFIG_FILE_NAME);
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> io::Result<Self> {
        if !path.exists() {
            let config = Self::default();
            config.save_to(path)?;
            return Ok(config);
        }
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json).unwrap_or_default())
    }

    pub fn save_to(&self, path: &Path) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(path, json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_writes_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        let config = GameConfig::load_from(&path).unwrap();
        assert_eq!(config, GameConfig::default());
        assert!(path.exists());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "log_level": "debug" }"#).unwrap();
        let config = GameConfig::load_from(&path).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.default_difficulty, "fair_challenge");
        assert!(config.save_dir.is_none());
    }

    #[test]
    fn test_invalid_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "not json").unwrap();
        assert_eq!(GameConfig::load_from(&path).unwrap(), GameConfig::default());
    }
}
