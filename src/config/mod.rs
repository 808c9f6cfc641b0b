// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, read from a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[notifications]` - Toast timing (entrance delay, transition, display)
//! - `[carousel]` - Testimonial rotation interval
//! - `[logging]` - Log filter
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with an explicit path
//! 2. CLI `--config-dir`, then `KUTU_LANDING_CONFIG_DIR`
//! 3. Falls back to the platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use kutu_landing::config;
//!
//! let (config, warning) = config::load();
//! if let Some(key) = warning {
//!     eprintln!("using defaults: {key}");
//! }
//! println!("log filter: {}", config.log_level());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// Toast timing settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct NotificationsConfig {
    /// Delay before the toast slides in (milliseconds).
    #[serde(default = "default_enter_delay_ms")]
    pub enter_delay_ms: Option<u64>,

    /// Slide transition duration (milliseconds).
    #[serde(default = "default_transition_ms")]
    pub transition_ms: Option<u64>,

    /// Time before the toast dismisses itself (milliseconds).
    #[serde(default = "default_display_ms")]
    pub display_ms: Option<u64>,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            enter_delay_ms: default_enter_delay_ms(),
            transition_ms: default_transition_ms(),
            display_ms: default_display_ms(),
        }
    }
}

/// Testimonial carousel settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CarouselConfig {
    /// Interval between automatic advances (milliseconds).
    #[serde(default = "default_carousel_interval_ms")]
    pub interval_ms: Option<u64>,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_carousel_interval_ms(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// `tracing` filter directive (e.g. "info", "kutu_landing=debug").
    #[serde(default)]
    pub level: Option<String>,
}

/// Application configuration with logical sections.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub notifications: NotificationsConfig,

    #[serde(default)]
    pub carousel: CarouselConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Returns the configured log filter or the default one.
    #[must_use]
    pub fn log_level(&self) -> &str {
        self.logging.level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_enter_delay_ms() -> Option<u64> {
    Some(DEFAULT_ENTER_DELAY_MS)
}

fn default_transition_ms() -> Option<u64> {
    Some(DEFAULT_TRANSITION_MS)
}

fn default_display_ms() -> Option<u64> {
    Some(DEFAULT_DISPLAY_MS)
}

fn default_carousel_interval_ms() -> Option<u64> {
    Some(DEFAULT_CAROUSEL_INTERVAL_MS)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

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
/// default config with a warning key explaining what went wrong.
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
                    tracing::warn!(path = %path.display(), error = %err, "failed to load config");
                    return (
                        Config::default(),
                        Some("config-load-error".to_string()),
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
