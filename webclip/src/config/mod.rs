//! Configuration management for webclip
//!
//! Configuration is loaded from multiple sources with clear precedence:
//!
//! 1. Environment variables (highest priority, `WEBCLIP_` prefix, `__` between sections)
//! 2. An explicit file passed with `--config`
//! 3. `./webclip.toml`
//! 4. `~/.config/webclip/config.toml` (user config, XDG)
//! 5. Hardcoded defaults (fallback)
//!
//! # Example Configuration
//!
//! ```toml
//! # webclip.toml
//! [output]
//! aggregate = false
//!
//! [prompt]
//! assume_yes = true
//!
//! [logging]
//! level = "info"
//! json = false
//! ```
//!
//! The same keys can be set from the environment, e.g.
//! `WEBCLIP_OUTPUT__AGGREGATE=false`.

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Result, WebclipError};

/// File name looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "webclip.toml";

/// Environment variable prefix
pub const ENV_PREFIX: &str = "WEBCLIP_";

/// Output settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct OutputSettings {
    /// Copy every generated template into `Clippings/TEMPLATES`
    pub aggregate: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self { aggregate: true }
    }
}

/// Prompt settings
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PromptSettings {
    /// Create a missing root without asking
    pub assume_yes: bool,
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default filter directive when `RUST_LOG` is unset
    pub level: String,

    /// Emit JSON log lines instead of human-readable ones
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            json: false,
        }
    }
}

/// Complete webclip configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct WebclipConfig {
    /// Output settings
    #[serde(default)]
    pub output: OutputSettings,

    /// Prompt settings
    #[serde(default)]
    pub prompt: PromptSettings,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingSettings,
}

impl WebclipConfig {
    /// Load configuration from every source, optionally including an explicit file
    ///
    /// # Errors
    ///
    /// Returns [`WebclipError::InvalidInput`] if `explicit` does not exist and
    /// [`WebclipError::Config`] if any source is malformed.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.is_file() {
                return Err(WebclipError::InvalidInput(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
        }

        let config = Self::figment(Self::user_config_path().as_deref(), explicit).extract()?;
        tracing::debug!(?config, "configuration loaded");
        Ok(config)
    }

    /// Build the layered provider. Missing files contribute nothing.
    fn figment(user: Option<&Path>, explicit: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(user) = user {
            figment = figment.merge(Toml::file(user));
        }
        figment = figment.merge(Toml::file(LOCAL_CONFIG_FILE));
        if let Some(explicit) = explicit {
            figment = figment.merge(Toml::file(explicit));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Get the XDG config path: `$XDG_CONFIG_HOME/webclip/config.toml`
    /// or `~/.config/webclip/config.toml`
    #[must_use]
    pub fn user_config_path() -> Option<PathBuf> {
        let base = if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            PathBuf::from(xdg)
        } else {
            PathBuf::from(std::env::var("HOME").ok()?).join(".config")
        };
        Some(base.join("webclip").join("config.toml"))
    }
}
