//! Configuration handling for the sign-up form

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const DEFAULT_SUBMIT_DELAY_MS: u64 = 2000;
const DEFAULT_SUCCESS_DISMISS_MS: u64 = 3000;
const DEFAULT_BANNER_TIMEOUT_MS: u64 = 5000;

/// User configuration; every key is optional
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Simulated account creation delay
    pub submit_delay_ms: Option<u64>,
    /// Auto-dismiss delay for the success dialog; 0 disables it
    pub success_dismiss_ms: Option<u64>,
    /// How long the error banner stays up
    pub banner_timeout_ms: Option<u64>,
    /// Hide password input by default
    pub mask_passwords: Option<bool>,
    /// tracing filter directive, overrides RUST_LOG
    pub log_filter: Option<String>,
}

impl AppConfig {
    pub fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("io", "signup", "signup-tui")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the platform config file
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load from `path`; a missing file means defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let config = Self::from_json(&fs::read_to_string(path)?)?;
        tracing::info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Save configuration to the platform config file
    pub fn save(&self) -> Result<()> {
        match Self::config_path() {
            Some(path) => self.save_to(&path),
            None => Ok(()),
        }
    }

    /// Write pretty JSON to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms.unwrap_or(DEFAULT_SUBMIT_DELAY_MS))
    }

    /// `None` when auto-dismiss is turned off
    pub fn success_dismiss(&self) -> Option<Duration> {
        match self.success_dismiss_ms.unwrap_or(DEFAULT_SUCCESS_DISMISS_MS) {
            0 => None,
            ms => Some(Duration::from_millis(ms)),
        }
    }

    pub fn banner_timeout(&self) -> Duration {
        Duration::from_millis(self.banner_timeout_ms.unwrap_or(DEFAULT_BANNER_TIMEOUT_MS))
    }

    pub fn mask_passwords(&self) -> bool {
        self.mask_passwords.unwrap_or(true)
    }
}
