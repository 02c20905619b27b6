//! TOML-based application configuration.
//!
//! Stores user preferences:
//! - Default timer duration in minutes
//! - Rendering preferences for the stats bars
//!
//! Configuration is stored at `~/.config/devtracker/config.toml`. This is
//! a preference file only -- timer and task state never persist across
//! sessions.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::timer::{MAX_MINUTES, MIN_MINUTES};

/// Timer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerConfig {
    /// Duration the timer starts with, in minutes. Clamped on load.
    #[serde(default = "default_minutes")]
    pub default_minutes: u32,
}

/// UI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Draw the stats bars with unicode blocks instead of '#'.
    #[serde(default = "default_true")]
    pub unicode_bars: bool,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/devtracker/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub timer: TimerConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

fn default_minutes() -> u32 {
    25
}
fn default_true() -> bool {
    true
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            default_minutes: default_minutes(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { unicode_bars: true }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timer: TimerConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

impl Config {
    fn path() -> Result<PathBuf, ConfigError> {
        let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(dir.join("devtracker").join("config.toml"))
    }

    /// Load from disk, or defaults when no file exists yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::path()?)
    }

    /// Load from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let mut config: Config =
            toml::from_str(&content).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        config.timer.default_minutes = config.timer.default_minutes.clamp(MIN_MINUTES, MAX_MINUTES);
        Ok(config)
    }

    /// Persist to disk, creating the config directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path()?)
    }

    /// Persist to an explicit path.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::SaveFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        }
        std::fs::write(path, content).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "timer.default_minutes" => Some(self.timer.default_minutes.to_string()),
            "ui.unicode_bars" => Some(self.ui.unicode_bars.to_string()),
            _ => None,
        }
    }

    /// Set a config value by dot-separated key.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value cannot be
    /// parsed into the key's type.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "timer.default_minutes" => {
                let minutes: u32 =
                    value.parse().map_err(|_| ConfigError::InvalidValue {
                        key: key.to_string(),
                        message: format!("cannot parse '{value}' as minutes"),
                    })?;
                if !(MIN_MINUTES..=MAX_MINUTES).contains(&minutes) {
                    return Err(ConfigError::InvalidValue {
                        key: key.to_string(),
                        message: format!(
                            "minutes must be between {MIN_MINUTES} and {MAX_MINUTES}"
                        ),
                    });
                }
                self.timer.default_minutes = minutes;
            }
            "ui.unicode_bars" => {
                self.ui.unicode_bars =
                    value.parse().map_err(|_| ConfigError::InvalidValue {
                        key: key.to_string(),
                        message: format!("cannot parse '{value}' as bool"),
                    })?;
            }
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }
}
