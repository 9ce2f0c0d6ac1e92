use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Account-level configuration shared by every invocation. Environment
/// variables take precedence over the file, see [`GlobalConfig::apply_env`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    #[serde(default)]
    pub account_id: String,
    #[serde(default)]
    pub access_token: String,
    #[serde(default)]
    pub user_id: i64,
}

impl GlobalConfig {
    pub fn config_path() -> Result<PathBuf> {
        Ok(dirs::config_dir()
            .context("Cannot determine config directory")?
            .join("harv")
            .join("config.toml"))
    }

    pub fn log_path() -> Result<PathBuf> {
        Ok(dirs::config_dir()
            .context("Cannot determine config directory")?
            .join("harv")
            .join("debug.log"))
    }

    /// Load config from disk. Returns default config if the file doesn't
    /// exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        let config: Self = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;
        Ok(config)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = toml::to_string_pretty(self)?;
        std::fs::write(&path, raw)?;
        Ok(())
    }

    /// `HARVEST_ACCOUNT_ID`, `HARVEST_ACCESS_TOKEN` and `HARVEST_USER_ID`
    /// override whatever the config file holds.
    pub fn apply_env(&mut self) {
        if let Ok(value) = std::env::var("HARVEST_ACCOUNT_ID") {
            self.account_id = value;
        }
        if let Ok(value) = std::env::var("HARVEST_ACCESS_TOKEN") {
            self.access_token = value;
        }
        if let Ok(value) = std::env::var("HARVEST_USER_ID") {
            if let Ok(user_id) = value.parse() {
                self.user_id = user_id;
            }
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.account_id.is_empty() && !self.access_token.is_empty() && self.user_id != 0
    }
}

/// Last-used project and task, stored next to the directory the command ran
/// in so each repository can keep its own defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Defaults {
    #[serde(default)]
    pub project_id: i64,
    #[serde(default)]
    pub task_id: i64,
}

impl Defaults {
    /// Load defaults from `path`. A missing file yields empty defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read defaults at {}", path.display()))?;
        let defaults: Self = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse defaults at {}", path.display()))?;
        Ok(defaults)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let raw = toml::to_string_pretty(self)?;
        std::fs::write(path, raw)
            .with_context(|| format!("Failed to write defaults at {}", path.display()))?;
        Ok(())
    }
}
