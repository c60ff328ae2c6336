//! # Configuration Persistence
//!
//! Manages user configuration stored in `~/.config/evilcorp/config.json`.
//!
//! ## Overview
//!
//! The [`Config`] struct is serialized to / deserialized from a JSON file in
//! the user's XDG config directory. It holds the selected theme and the
//! origins of the backend and the item API. Every field has a default, so a
//! partial file is fine.
//!
//! ## File Location
//!
//! ```text
//! ~/.config/evilcorp/config.json
//! ```
//!
//! The `directories` crate is used to resolve the platform-appropriate config
//! directory.
//!
//! A file that exists but does not parse is left alone: [`ConfigStore`]
//! falls back to defaults for the session and refuses to write them back.

use crate::remote::{Endpoints, DEFAULT_BACKEND_URL, DEFAULT_ITEM_API_URL};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Persisted user configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// The name of the selected theme (must match a built-in theme name).
    #[serde(default = "default_theme_name")]
    pub theme: String,

    /// Origin of the local backend serving `/sql/` and `/chat/memory-chat`.
    #[serde(default = "default_backend_url")]
    pub backend_url: String,

    /// Base URL of the item API; minion ids are appended to it.
    #[serde(default = "default_item_api_url")]
    pub item_api_url: String,
}

fn default_theme_name() -> String {
    "Catppuccin Mocha".to_string()
}

fn default_backend_url() -> String {
    DEFAULT_BACKEND_URL.to_string()
}

fn default_item_api_url() -> String {
    DEFAULT_ITEM_API_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme_name(),
            backend_url: default_backend_url(),
            item_api_url: default_item_api_url(),
        }
    }
}

impl Config {
    /// Load configuration from a specific path. Returns `Config::default()` if
    /// the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Save the current configuration to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// The service origins this configuration points at.
    pub fn endpoints(&self) -> Endpoints {
        Endpoints {
            backend_url: self.backend_url.clone(),
            item_api_url: self.item_api_url.clone(),
        }
    }

    /// Return the path to the config file.
    fn config_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("", "", "evilcorp")
            .context("Could not determine config directory")?;
        Ok(dirs.config_dir().join("config.json"))
    }
}

/// The configuration a session started with, and where it came from.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    config: Config,
    path: Option<PathBuf>,
    load_error: Option<String>,
}

impl ConfigStore {
    /// Open the config file in the user's config directory.
    pub fn open() -> Self {
        match Config::config_path() {
            Ok(path) => Self::open_at(path),
            Err(e) => {
                warn!("Config file unavailable: {:#}", e);
                Self {
                    config: Config::default(),
                    path: None,
                    load_error: None,
                }
            }
        }
    }

    /// Open the config file at `path`. A missing file gives defaults; an
    /// unreadable or invalid one gives defaults and marks the store read-only.
    pub fn open_at(path: PathBuf) -> Self {
        match Config::load_from(&path) {
            Ok(config) => Self {
                config,
                path: Some(path),
                load_error: None,
            },
            Err(e) => {
                let message = format!("{:#}", e);
                warn!("{}; using defaults, settings will not be saved", message);
                Self {
                    config: Config::default(),
                    path: Some(path),
                    load_error: Some(message),
                }
            }
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Why the file on disk was not used, if it wasn't.
    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    /// Record `name` as the theme and write the file. Returns `Ok(false)`
    /// without touching disk when the file failed to load or has no location.
    pub fn save_theme(&mut self, name: &str) -> Result<bool> {
        self.config.theme = name.to_string();
        if self.load_error.is_some() {
            return Ok(false);
        }
        match &self.path {
            Some(path) => {
                self.config.save_to(path)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
