// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Theme mode
//! - `[animation]` - Entrance/filter staggering, fades, parallax
//! - `[loading]` - Lazy image loading behavior
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `ICED_GALLERY_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory

pub mod defaults;

// Re-export all default constants so call sites don't need the extra path segment.
pub use defaults::*;

use crate::error::{Error, Result};
use crate::ui::theme::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const CONFIG_DIR_ENV: &str = "ICED_GALLERY_CONFIG_DIR";
const APP_DIR_NAME: &str = "iced_gallery";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            theme_mode: default_theme_mode(),
        }
    }
}

/// Animation timing settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnimationConfig {
    /// Per-item entrance reveal delay in milliseconds.
    #[serde(
        default = "default_entrance_stagger_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub entrance_stagger_ms: Option<u64>,

    /// Per-item fade-in delay when a filter change reveals items.
    #[serde(
        default = "default_filter_stagger_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub filter_stagger_ms: Option<u64>,

    /// How long filtered-out items linger before leaving the layout.
    #[serde(
        default = "default_hide_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub hide_delay_ms: Option<u64>,

    /// Item fade/translate tween duration.
    #[serde(default = "default_fade_ms", skip_serializing_if = "Option::is_none")]
    pub fade_ms: Option<u64>,

    /// Lightbox open/close fade duration.
    #[serde(
        default = "default_modal_fade_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub modal_fade_ms: Option<u64>,

    /// Lightbox content crossfade duration on next/previous.
    #[serde(
        default = "default_crossfade_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub crossfade_ms: Option<u64>,

    /// Fraction of the scroll offset applied to the header (0.0 disables).
    #[serde(
        default = "default_parallax_factor",
        skip_serializing_if = "Option::is_none"
    )]
    pub parallax_factor: Option<f32>,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            entrance_stagger_ms: default_entrance_stagger_ms(),
            filter_stagger_ms: default_filter_stagger_ms(),
            hide_delay_ms: default_hide_delay_ms(),
            fade_ms: default_fade_ms(),
            modal_fade_ms: default_modal_fade_ms(),
            crossfade_ms: default_crossfade_ms(),
            parallax_factor: default_parallax_factor(),
        }
    }
}

/// Lazy image loading settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoadingConfig {
    /// Whether images load lazily as their rows scroll into view.
    /// When disabled, every image is requested at startup.
    #[serde(default = "default_lazy", skip_serializing_if = "Option::is_none")]
    pub lazy: Option<bool>,

    /// Number of off-screen rows to preload below the viewport.
    #[serde(
        default = "default_preload_rows",
        skip_serializing_if = "Option::is_none"
    )]
    pub preload_rows: Option<u32>,
}

impl Default for LoadingConfig {
    fn default() -> Self {
        Self {
            lazy: default_lazy(),
            preload_rows: default_preload_rows(),
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

    /// Animation timing settings.
    #[serde(default)]
    pub animation: AnimationConfig,

    /// Lazy loading settings.
    #[serde(default)]
    pub loading: LoadingConfig,
}

// =============================================================================
// Resolved Timings
// =============================================================================

/// Animation timings resolved from the config, clamped to sane ranges.
///
/// The raw config keeps `Option` fields so absent keys round-trip cleanly;
/// the rest of the crate only ever sees this resolved form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timings {
    pub entrance_stagger: Duration,
    pub filter_stagger: Duration,
    pub hide_delay: Duration,
    pub fade: Duration,
    pub modal_fade: Duration,
    pub crossfade: Duration,
    pub parallax_factor: f32,
}

impl Default for Timings {
    fn default() -> Self {
        Config::default().timings()
    }
}

impl Config {
    /// Resolves the animation section into concrete durations.
    #[must_use]
    pub fn timings(&self) -> Timings {
        let ms = |value: Option<u64>, fallback: u64, max: u64| {
            Duration::from_millis(value.unwrap_or(fallback).min(max))
        };
        Timings {
            entrance_stagger: ms(
                self.animation.entrance_stagger_ms,
                DEFAULT_ENTRANCE_STAGGER_MS,
                MAX_STAGGER_MS,
            ),
            filter_stagger: ms(
                self.animation.filter_stagger_ms,
                DEFAULT_FILTER_STAGGER_MS,
                MAX_STAGGER_MS,
            ),
            hide_delay: ms(self.animation.hide_delay_ms, DEFAULT_HIDE_DELAY_MS, MAX_FADE_MS),
            fade: ms(self.animation.fade_ms, DEFAULT_FADE_MS, MAX_FADE_MS),
            modal_fade: ms(
                self.animation.modal_fade_ms,
                DEFAULT_MODAL_FADE_MS,
                MAX_FADE_MS,
            ),
            crossfade: ms(self.animation.crossfade_ms, DEFAULT_CROSSFADE_MS, MAX_FADE_MS),
            parallax_factor: self
                .animation
                .parallax_factor
                .unwrap_or(DEFAULT_PARALLAX_FACTOR)
                .clamp(MIN_PARALLAX_FACTOR, MAX_PARALLAX_FACTOR),
        }
    }

    /// Whether lazy loading is enabled.
    #[must_use]
    pub fn lazy_loading(&self) -> bool {
        self.loading.lazy.unwrap_or(DEFAULT_LAZY_LOADING)
    }

    /// Number of off-screen rows to preload.
    #[must_use]
    pub fn preload_rows(&self) -> u32 {
        self.loading.preload_rows.unwrap_or(DEFAULT_PRELOAD_ROWS)
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_entrance_stagger_ms() -> Option<u64> {
    Some(DEFAULT_ENTRANCE_STAGGER_MS)
}

fn default_filter_stagger_ms() -> Option<u64> {
    Some(DEFAULT_FILTER_STAGGER_MS)
}

fn default_hide_delay_ms() -> Option<u64> {
    Some(DEFAULT_HIDE_DELAY_MS)
}

fn default_fade_ms() -> Option<u64> {
    Some(DEFAULT_FADE_MS)
}

fn default_modal_fade_ms() -> Option<u64> {
    Some(DEFAULT_MODAL_FADE_MS)
}

fn default_crossfade_ms() -> Option<u64> {
    Some(DEFAULT_CROSSFADE_MS)
}

fn default_parallax_factor() -> Option<f32> {
    Some(DEFAULT_PARALLAX_FACTOR)
}

fn default_lazy() -> Option<bool> {
    Some(DEFAULT_LAZY_LOADING)
}

fn default_preload_rows() -> Option<u32> {
    Some(DEFAULT_PRELOAD_ROWS)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the application config directory, honoring the override chain:
/// explicit base dir, then `ICED_GALLERY_CONFIG_DIR`, then the platform dir.
fn config_dir_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(dir) = base_dir {
        return Some(dir);
    }
    if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
        if !dir.is_empty() {
            return Some(PathBuf::from(dir));
        }
    }
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME))
}

/// Returns the config file path with an optional override.
fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    config_dir_with_override(base_dir).map(|mut path| {
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
    if let Some(path) = config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    return (
                        Config::default(),
                        Some(format!("failed to read {}: {}", path.display(), err)),
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
    if let Some(path) = config_path_with_override(base_dir) {
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

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_config_round_trips() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join(CONFIG_FILE);

        let config = Config::default();
        save_to_path(&config, &path).expect("save failed");

        let loaded = load_from_path(&path).expect("load failed");
        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[general]\ntheme_mode = \"dark\"\n").expect("write failed");

        let config = load_from_path(&path).expect("load failed");
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
        assert_eq!(config.animation, AnimationConfig::default());
        assert_eq!(config.loading, LoadingConfig::default());
    }

    #[test]
    fn invalid_toml_degrades_to_defaults_with_warning() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "not valid toml [[[").expect("write failed");

        let (config, warning) = load_with_override(Some(dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }

    #[test]
    fn invalid_theme_mode_is_rejected() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[general]\ntheme_mode = \"sepia\"\n").expect("write failed");

        assert!(load_from_path(&path).is_err());
    }

    #[test]
    fn timings_resolve_defaults() {
        let timings = Config::default().timings();
        assert_eq!(
            timings.entrance_stagger,
            Duration::from_millis(DEFAULT_ENTRANCE_STAGGER_MS)
        );
        assert_eq!(
            timings.filter_stagger,
            Duration::from_millis(DEFAULT_FILTER_STAGGER_MS)
        );
        assert_eq!(timings.hide_delay, Duration::from_millis(DEFAULT_HIDE_DELAY_MS));
    }

    #[test]
    fn timings_clamp_excessive_values() {
        let mut config = Config::default();
        config.animation.filter_stagger_ms = Some(60_000);
        config.animation.parallax_factor = Some(7.5);

        let timings = config.timings();
        assert_eq!(timings.filter_stagger, Duration::from_millis(MAX_STAGGER_MS));
        assert_eq!(timings.parallax_factor, MAX_PARALLAX_FACTOR);
    }

    #[test]
    fn load_missing_file_returns_defaults_without_warning() {
        let dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }
}
