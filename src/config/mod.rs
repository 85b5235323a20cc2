// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! The picker is tolerant of missing or malformed configuration: every field
//! is optional and an unreadable file falls back to defaults.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedPicker";

/// Default number of grid columns in the picker popup.
pub const DEFAULT_GRID_COLUMNS: usize = 4;
/// Grid column bounds; values outside are clamped on read.
pub const MIN_GRID_COLUMNS: usize = 2;
pub const MAX_GRID_COLUMNS: usize = 8;

/// Default bounding box (in pixels) for grid thumbnails.
pub const DEFAULT_THUMBNAIL_PX: u32 = 100;
pub const MIN_THUMBNAIL_PX: u32 = 50;
pub const MAX_THUMBNAIL_PX: u32 = 400;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub language: Option<String>,
    /// Photo library directory to scan; falls back to the platform pictures
    /// directory when unset.
    #[serde(default)]
    pub library_dir: Option<PathBuf>,
    #[serde(default)]
    pub grid_columns: Option<usize>,
    #[serde(default)]
    pub thumbnail_px: Option<u32>,
    #[serde(default)]
    pub theme_mode: Option<crate::ui::theming::ThemeMode>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            library_dir: None,
            grid_columns: Some(DEFAULT_GRID_COLUMNS),
            thumbnail_px: Some(DEFAULT_THUMBNAIL_PX),
            theme_mode: None,
        }
    }
}

impl Config {
    /// Effective grid column count, clamped to the supported range so a
    /// hand-edited file cannot request a degenerate grid.
    #[must_use]
    pub fn grid_columns(&self) -> usize {
        self.grid_columns
            .unwrap_or(DEFAULT_GRID_COLUMNS)
            .clamp(MIN_GRID_COLUMNS, MAX_GRID_COLUMNS)
    }

    /// Effective thumbnail pixel target, clamped to the supported range.
    #[must_use]
    pub fn thumbnail_px(&self) -> u32 {
        self.thumbnail_px
            .unwrap_or(DEFAULT_THUMBNAIL_PX)
            .clamp(MIN_THUMBNAIL_PX, MAX_THUMBNAIL_PX)
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

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content =
        toml::to_string_pretty(config).map_err(|e| crate::error::Error::Config(e.to_string()))?;
    fs::write(path, content)?;
    Ok(())
}
