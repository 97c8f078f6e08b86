// SPDX-License-Identifier: MPL-2.0
//! This module handles the crate's configuration: the default toast
//! lifetime and the route banner table overrides, stored in a
//! `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use dorm_notices::config::{self, Config};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.notifications.default_ttl_ms = Some(8_000);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_dir = PathBuf::from("./temp_config_dir");
//! std::fs::create_dir_all(&temp_dir).unwrap();
//! let temp_file = temp_dir.join("test_settings.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded_config = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded_config.notifications.default_ttl_ms, Some(8_000));
//! std::fs::remove_dir_all(&temp_dir).unwrap();
//! ```

mod defaults;

pub use defaults::*;

use crate::error::Result;
use crate::ui::banner::BannerEntry;
use crate::ui::notifications::Ttl;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "DormNotices";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub notifications: NotificationsConfig,
    #[serde(default)]
    pub banner: BannerConfig,
}

/// `[notifications]` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NotificationsConfig {
    /// Lifetime applied when an emitter does not pass one. `0` disables expiry.
    #[serde(default)]
    pub default_ttl_ms: Option<u64>,
}

impl NotificationsConfig {
    /// Resolves the configured default lifetime, clamped to the accepted range.
    #[must_use]
    pub fn default_ttl(&self) -> Ttl {
        match self.default_ttl_ms {
            Some(ms) => Ttl::from_millis(ms.min(MAX_NOTIFICATION_TTL_MS)),
            None => Ttl::default(),
        }
    }
}

/// `[banner]` section.
///
/// `routes` entries are merged over the built-in route table (same path
/// replaces, new path extends). `roles` keys are role names; unknown names
/// and empty messages are ignored when applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BannerConfig {
    #[serde(default)]
    pub routes: BTreeMap<String, BannerEntry>,
    #[serde(default)]
    pub roles: BTreeMap<String, String>,
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Reads a config file.
///
/// Missing sections and fields take their defaults; malformed TOML is an
/// [`Error::InvalidSettings`](crate::error::Error::InvalidSettings).
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
