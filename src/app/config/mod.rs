// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Font size and theme mode
//! - `[library]` - Directory sort order and tag separator
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable
//! deployments:
//! 1. Use `load_with_override()`/`save_with_override()` with an explicit path
//! 2. Set `TAGVIEW_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Enums (shared between sections)
// =============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    #[default]
    Alphabetical,
    ModifiedDate,
    CreatedDate,
}

impl SortOrder {
    /// All sort orders, for settings pickers.
    pub const ALL: &'static [SortOrder] = &[
        SortOrder::Alphabetical,
        SortOrder::ModifiedDate,
        SortOrder::CreatedDate,
    ];
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            SortOrder::Alphabetical => "Alphabetical",
            SortOrder::ModifiedDate => "Modified date",
            SortOrder::CreatedDate => "Created date",
        };
        write!(f, "{}", label)
    }
}

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI font size in points.
    #[serde(default = "default_font_size", skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u16>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            font_size: default_font_size(),
            theme_mode: ThemeMode::default(),
        }
    }
}

/// Image library settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LibraryConfig {
    /// Image file sorting order in directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,

    /// Separator written between tags in sidecar files.
    #[serde(
        default = "default_tag_separator",
        skip_serializing_if = "Option::is_none"
    )]
    pub tag_separator: Option<String>,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            sort_order: Some(SortOrder::default()),
            tag_separator: default_tag_separator(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Image library settings.
    #[serde(default)]
    pub library: LibraryConfig,
}

impl Config {
    /// Effective font size, clamped into the supported range so a hand-edited
    /// config cannot request unreadable text.
    #[must_use]
    pub fn font_size(&self) -> u16 {
        self.general
            .font_size
            .unwrap_or(DEFAULT_FONT_SIZE)
            .clamp(MIN_FONT_SIZE, MAX_FONT_SIZE)
    }

    /// Effective sort order.
    #[must_use]
    pub fn sort_order(&self) -> SortOrder {
        self.library.sort_order.unwrap_or_default()
    }

    /// Effective tag separator. An empty or whitespace-only value falls back
    /// to the default; splitting on it would be meaningless.
    #[must_use]
    pub fn tag_separator(&self) -> String {
        match &self.library.tag_separator {
            Some(sep) if !sep.trim().is_empty() => sep.clone(),
            _ => DEFAULT_TAG_SEPARATOR.to_string(),
        }
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_font_size() -> Option<u16> {
    Some(DEFAULT_FONT_SIZE)
}

fn default_tag_separator() -> Option<String> {
    Some(DEFAULT_TAG_SEPARATOR.to_string())
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
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
                Err(_) => {
                    return (
                        Config::default(),
                        Some("Could not read settings.toml; using defaults".to_string()),
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
