// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use iced_lightbox::config::{self, Config};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Point the viewer at a portfolio
//! config.portfolio_dir = Some(PathBuf::from("/srv/portfolio"));
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

mod defaults;

pub use defaults::*;

use crate::error::Result;
use crate::lightbox::{SwipeThreshold, SwipeThresholds, WheelInterval};
use crate::media::prefetch::PrefetchConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedLightbox";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory whose sub-directories are shown as projects.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portfolio_dir: Option<PathBuf>,
    pub gestures: GestureConfig,
    pub prefetch: PrefetchSettings,
}

/// `[gestures]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    pub swipe_horizontal_px: f32,
    pub swipe_vertical_px: f32,
    pub wheel_interval_ms: u64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            swipe_horizontal_px: DEFAULT_SWIPE_HORIZONTAL_PX,
            swipe_vertical_px: DEFAULT_SWIPE_VERTICAL_PX,
            wheel_interval_ms: DEFAULT_WHEEL_INTERVAL_MS,
        }
    }
}

/// `[prefetch]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrefetchSettings {
    pub enabled: bool,
    pub max_bytes: usize,
    pub max_images: usize,
}

impl Default for PrefetchSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            max_bytes: DEFAULT_PREFETCH_CACHE_BYTES,
            max_images: DEFAULT_PREFETCH_MAX_IMAGES,
        }
    }
}

impl Config {
    /// Swipe thresholds, clamped to the supported range.
    #[must_use]
    pub fn swipe_thresholds(&self) -> SwipeThresholds {
        SwipeThresholds {
            horizontal: SwipeThreshold::new(self.gestures.swipe_horizontal_px),
            vertical: SwipeThreshold::new(self.gestures.swipe_vertical_px),
        }
    }

    /// Wheel navigation gate interval, clamped to the supported range.
    #[must_use]
    pub fn wheel_interval(&self) -> WheelInterval {
        WheelInterval::from_millis(self.gestures.wheel_interval_ms)
    }

    #[must_use]
    pub fn prefetch_config(&self) -> PrefetchConfig {
        if self.prefetch.enabled {
            PrefetchConfig::new(self.prefetch.max_bytes, self.prefetch.max_images)
        } else {
            PrefetchConfig::disabled()
        }
    }
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

/// Reads a config file. Malformed TOML yields the defaults instead of an error.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "invalid settings file, using defaults");
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

/// Loads from `explicit` when given, otherwise from the user config directory.
/// Any failure is logged and the defaults are returned.
#[must_use]
pub fn resolve(explicit: Option<&Path>) -> Config {
    let loaded = match explicit {
        Some(path) => load_from_path(path),
        None => load(),
    };
    loaded.unwrap_or_else(|err| {
        tracing::warn!(error = %err, "could not read settings, using defaults");
        Config::default()
    })
}
