//! User configuration management

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::board::seed::DEFAULT_TODAY;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Pinned board date (YYYY-MM-DD). Defaults to the date the sample data
    /// is written against so the board renders the same way every run.
    #[serde(default = "default_today")]
    pub today: NaiveDate,

    /// Undo window in seconds.
    #[serde(default = "default_undo_seconds")]
    pub undo_seconds: u64,

    #[serde(default)]
    pub theme: ThemeConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            today: default_today(),
            undo_seconds: default_undo_seconds(),
            theme: ThemeConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Theme name; empty means the default ("paper").
    #[serde(default)]
    pub name: String,
}

fn default_today() -> NaiveDate {
    NaiveDate::parse_from_str(DEFAULT_TODAY, "%Y-%m-%d").expect("valid default date")
}

fn default_undo_seconds() -> u64 {
    3
}

fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("focus").join("config.toml"))
}

impl Config {
    /// Load from the user config file, or defaults if it doesn't exist.
    pub fn load() -> Result<Self> {
        match config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Config::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("invalid config at {}", path.display()))?;
        Ok(config)
    }

    pub fn undo_ttl(&self) -> Duration {
        Duration::from_secs(self.undo_seconds)
    }
}
