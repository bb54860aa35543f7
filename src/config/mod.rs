// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[notifications]` - Auto-dismiss delays, stacking pitch, reconnect prompt delay
//! - `[contact]` - Address quoted by the contact form
//! - `[api]` - Backend base URL and reconnect entry point
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` or set `POSTIFY_CONFIG_DIR`
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use postify::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.general.language = Some("fr".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::error::{Error, Result};
use crate::ui::notifications::Timings;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Toast notification settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NotificationsConfig {
    /// Auto-dismiss delay for every kind except session-expired (ms).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_duration_ms: Option<u64>,

    /// Auto-dismiss delay for session-expired notifications (ms).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_expired_duration_ms: Option<u64>,

    /// Vertical distance between stacked notifications (px).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack_pitch: Option<f32>,

    /// Delay before a session-expired notification offers to reconnect (ms).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reconnect_prompt_delay_ms: Option<u64>,
}

impl NotificationsConfig {
    /// Resolves the manager timings, clamping out-of-range values.
    #[must_use]
    pub fn timings(&self) -> Timings {
        let clamp_ms = |value: Option<u64>, default: u64| {
            value
                .unwrap_or(default)
                .clamp(MIN_NOTIFICATION_DURATION_MS, MAX_NOTIFICATION_DURATION_MS)
        };

        let default_duration =
            clamp_ms(self.default_duration_ms, DEFAULT_NOTIFICATION_DURATION_MS);
        // Session-expired notices never leave before ordinary ones
        let session_duration = clamp_ms(
            self.session_expired_duration_ms,
            DEFAULT_SESSION_EXPIRED_DURATION_MS,
        )
        .max(default_duration);
        // The prompt is useless once the notification is gone
        let prompt_delay = self
            .reconnect_prompt_delay_ms
            .unwrap_or(DEFAULT_RECONNECT_PROMPT_DELAY_MS)
            .min(session_duration.saturating_sub(EXIT_ANIMATION_MS));

        Timings {
            default_duration: Duration::from_millis(default_duration),
            session_expired_duration: Duration::from_millis(session_duration),
            enter_animation: Duration::from_millis(ENTER_ANIMATION_MS),
            exit_animation: Duration::from_millis(EXIT_ANIMATION_MS),
            reconnect_prompt_delay: Duration::from_millis(prompt_delay),
            pitch: self
                .stack_pitch
                .filter(|pitch| pitch.is_finite())
                .unwrap_or(DEFAULT_STACK_PITCH)
                .clamp(MIN_STACK_PITCH, MAX_STACK_PITCH),
        }
    }
}

/// Contact form settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ContactConfig {
    /// Address quoted in the thank-you notification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl ContactConfig {
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_deref().unwrap_or(DEFAULT_CONTACT_EMAIL)
    }
}

/// Backend settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    /// Base URL of the Postify backend. The connection check is hidden when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Reconnect entry point, relative to `base_url`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reconnect_path: Option<String>,
}

impl ApiConfig {
    /// Returns the trimmed base URL, or `None` when unset or blank.
    #[must_use]
    pub fn base_url(&self) -> Option<&str> {
        self.base_url
            .as_deref()
            .map(|url| url.trim().trim_end_matches('/'))
            .filter(|url| !url.is_empty())
    }

    /// Returns the absolute reconnect URL when a base URL is configured,
    /// otherwise the bare reconnect path.
    #[must_use]
    pub fn reconnect_url(&self) -> String {
        let path = self
            .reconnect_path
            .as_deref()
            .unwrap_or(DEFAULT_RECONNECT_PATH);
        match self.base_url() {
            Some(base) if path.starts_with('/') => format!("{base}{path}"),
            Some(base) => format!("{base}/{path}"),
            None => path.to_string(),
        }
    }
}

// =============================================================================
// Main Config Struct
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub notifications: NotificationsConfig,

    #[serde(default)]
    pub contact: ContactConfig,

    #[serde(default)]
    pub api: ApiConfig,
}

// =============================================================================
// Load Functions
// =============================================================================

fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Never fails: a missing file yields defaults, an unreadable one yields
/// defaults plus the i18n key of a warning to show the user.
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
                    tracing::warn!(path = %path.display(), error = %err, "falling back to default config");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
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
