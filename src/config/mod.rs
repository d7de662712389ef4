// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Theme mode of the admin app and the managed site directory
//! - `[notifications]` - Toast behavior
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable
//! deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. Pass `--config-dir` / set the `BRANDBOARD_CONFIG_DIR` environment variable
//! 3. Falls back to the platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use brandboard::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.general.theme_mode = brandboard::ui::theming::ThemeMode::Dark;
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// Theme mode of the admin app chrome (light, dark, or system).
    #[serde(default = "default_theme_mode")]
    pub theme_mode: ThemeMode,

    /// Site directory managed by default when none is passed on the CLI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_dir: Option<PathBuf>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            theme_mode: default_theme_mode(),
            site_dir: None,
        }
    }
}

/// Toast notification settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationConfig {
    /// Auto-dismiss lifetime for toasts in milliseconds; 0 keeps toasts
    /// on screen until dismissed.
    #[serde(
        default = "default_toast_lifetime_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub toast_lifetime_ms: Option<u64>,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            toast_lifetime_ms: default_toast_lifetime_ms(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub notifications: NotificationConfig,
}

fn default_config_path() -> Option<PathBuf> {
    paths::config_dir().map(|dir| dir.join(CONFIG_FILE))
}

/// Loads the configuration from the default location.
///
/// Never fails: a missing file yields defaults, and a malformed file yields
/// defaults plus a warning string the caller can surface to the user.
pub fn load() -> (Config, Option<String>) {
    let Some(path) = default_config_path() else {
        return (Config::default(), None);
    };
    if !path.exists() {
        return (Config::default(), None);
    }
    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(error) => (
            Config::default(),
            Some(format!("Could not read {}: {}", path.display(), error)),
        ),
    }
}

/// Saves the configuration to the default location.
pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config = toml::from_str(&content)?;
    Ok(config)
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
