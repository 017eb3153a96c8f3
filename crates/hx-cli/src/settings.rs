//! Persistent settings and client configuration resolution.
//!
//! The service URL comes from, in order: the `--api-url` flag, the
//! `HX_API_URL` environment variable, `settings.toml` in the platform config
//! directory, and finally [`DEFAULT_BASE_URL`].

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use hx_client::{ClientConfig, DEFAULT_BASE_URL};
use serde::{Deserialize, Serialize};

/// Environment variable holding the service base URL.
pub const API_URL_ENV: &str = "HX_API_URL";

/// Settings file name inside the config directory.
pub const SETTINGS_FILE: &str = "settings.toml";

/// Contents of `settings.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Extraction service connection.
    pub service: ServiceSettings,
}

/// `[service]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    /// Base URL of the extraction service.
    pub base_url: Option<String>,
}

impl Settings {
    /// Load settings from the default location.
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load settings from a specific path.
    ///
    /// A missing file gives the defaults. A file that does not parse is
    /// reported and ignored.
    pub fn load_from(path: &Path) -> Self {
        let Ok(content) = std::fs::read_to_string(path) else {
            tracing::debug!(path = %path.display(), "No settings file");
            return Self::default();
        };
        match toml::from_str(&content) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Ignoring malformed settings file");
                Self::default()
            }
        }
    }

    /// Save settings to a specific path, creating the parent directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create config directory {}", parent.display()))?;
        }

        let content = toml::to_string_pretty(self).context("serialize settings")?;
        std::fs::write(path, content).with_context(|| format!("write {}", path.display()))
    }

    /// Get the default config file path.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "HeadingExtractor", "hx")
            .map(|dirs| dirs.config_dir().join(SETTINGS_FILE))
            .unwrap_or_else(|| PathBuf::from(SETTINGS_FILE))
    }
}

/// Where the effective base URL came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    /// `--api-url` flag.
    Flag,
    /// `HX_API_URL` environment variable.
    Environment,
    /// `settings.toml`.
    SettingsFile,
    /// Built-in default.
    Default,
}

impl ConfigSource {
    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Flag => "--api-url",
            Self::Environment => API_URL_ENV,
            Self::SettingsFile => SETTINGS_FILE,
            Self::Default => "default",
        }
    }
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Client configuration together with its origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Configuration to hand to the client.
    pub client: ClientConfig,
    /// Which layer supplied the base URL.
    pub source: ConfigSource,
}

/// Pick the base URL from the highest-precedence layer that sets one.
///
/// Blank values are treated as unset.
#[must_use]
pub fn resolve_client_config(
    flag: Option<&str>,
    env: Option<&str>,
    settings: &Settings,
) -> ResolvedConfig {
    fn non_blank(value: Option<&str>) -> Option<&str> {
        value.map(str::trim).filter(|v| !v.is_empty())
    }

    let (base_url, source) = if let Some(url) = non_blank(flag) {
        (url, ConfigSource::Flag)
    } else if let Some(url) = non_blank(env) {
        (url, ConfigSource::Environment)
    } else if let Some(url) = non_blank(settings.service.base_url.as_deref()) {
        (url, ConfigSource::SettingsFile)
    } else {
        (DEFAULT_BASE_URL, ConfigSource::Default)
    };

    tracing::debug!(base_url, %source, "Resolved service URL");
    ResolvedConfig {
        client: ClientConfig::new(base_url),
        source,
    }
}
