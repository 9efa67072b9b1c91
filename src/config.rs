//! Application configuration management.
//!
//! This module handles loading and saving the client configuration: the
//! backend base URL and the last used username.
//!
//! Configuration is stored at `~/.config/feedapp/config.json`; the directory
//! is injectable so embedders and tests can relocate it.

use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Application name used for config/cache directory paths
const APP_NAME: &str = "feedapp";

/// Config file name
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    pub base_url: Option<String>,
    pub last_username: Option<String>,
}

impl Config {
    /// Load from the platform config directory
    pub fn load() -> Result<Self> {
        Self::load_from(Self::default_dir()?)
    }

    /// Load from a specific config directory. A missing file is not an
    /// error; it loads as the default config.
    pub fn load_from(config_dir: impl AsRef<Path>) -> Result<Self> {
        let path = config_dir.as_ref().join(CONFIG_FILE);
        if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            Ok(serde_json::from_str(&contents)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Save to the platform config directory
    pub fn save(&self) -> Result<()> {
        self.save_to(Self::default_dir()?)
    }

    /// Save to a specific config directory, creating it if needed
    pub fn save_to(&self, config_dir: impl AsRef<Path>) -> Result<()> {
        let config_dir = config_dir.as_ref();
        std::fs::create_dir_all(config_dir)?;
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(config_dir.join(CONFIG_FILE), contents)?;
        Ok(())
    }

    fn default_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME))
    }

    /// Directory for the persisted session record
    pub fn cache_dir(&self) -> Result<PathBuf> {
        let cache_dir = dirs::cache_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find cache directory"))?;
        Ok(cache_dir.join(APP_NAME))
    }
}
