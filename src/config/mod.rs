// SPDX-License-Identifier: MPL-2.0
//! This module handles the crate's configuration, loading and saving toast
//! preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[toast]` - Display delay, hover grace period and placement
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass a directory to `load_with_override()`/`save_with_override()`
//!    (the demo binary forwards `--config-dir` here)
//! 3. Set `ICED_TOAST_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_toast::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.toast.visible_millis = Some(5000);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::{Error, Result};
use crate::toast::{Placement, ToastTiming};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Application name used for directory naming.
const APP_NAME: &str = "IcedToast";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_TOAST_CONFIG_DIR";

// =============================================================================
// Section Structs
// =============================================================================

/// Toast settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToastConfig {
    /// Delay before a new toast fades, in milliseconds.
    #[serde(
        default = "default_visible_millis",
        skip_serializing_if = "Option::is_none"
    )]
    pub visible_millis: Option<u32>,

    /// Delay before fading once the pointer has left a toast, in milliseconds.
    #[serde(
        default = "default_hover_grace_millis",
        skip_serializing_if = "Option::is_none"
    )]
    pub hover_grace_millis: Option<u32>,

    /// Where toasts stack in the window.
    #[serde(default)]
    pub placement: Placement,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            visible_millis: default_visible_millis(),
            hover_grace_millis: default_hover_grace_millis(),
            placement: Placement::default(),
        }
    }
}

impl ToastConfig {
    /// Timing for new toasts. Missing values fall back to defaults and
    /// out-of-range values are clamped.
    #[must_use]
    pub fn timing(&self) -> ToastTiming {
        ToastTiming::from_millis(
            self.visible_millis.unwrap_or(DEFAULT_VISIBLE_MILLIS),
            self.hover_grace_millis.unwrap_or(DEFAULT_HOVER_GRACE_MILLIS),
        )
    }
}

// =============================================================================
// Main Config Struct
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub toast: ToastConfig,
}

// =============================================================================
// Default Value Functions (for serde)
// =============================================================================

fn default_visible_millis() -> Option<u32> {
    Some(DEFAULT_VISIBLE_MILLIS)
}

fn default_hover_grace_millis() -> Option<u32> {
    Some(DEFAULT_HOVER_GRACE_MILLIS)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config directory, honoring the explicit override first, then
/// the environment variable, then the platform default.
fn get_config_dir_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(dir) = base_dir {
        return Some(dir);
    }
    if let Some(dir) = std::env::var_os(ENV_CONFIG_DIR) {
        return Some(PathBuf::from(dir));
    }
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    get_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "falling back to default config");
                    return (
                        Config::default(),
                        Some(format!("could not load {}: {}", path.display(), err)),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
