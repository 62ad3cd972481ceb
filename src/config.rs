//! Application configuration
//!
//! Settings are read from config.toml in the user's config directory.
//! A missing, unreadable, or malformed file falls back to defaults;
//! configuration problems are logged, never fatal.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Default cap on stored snippets
pub const DEFAULT_MAX_ITEMS: usize = 50;

/// User settings loaded from config.toml
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Settings {
    /// Maximum number of snippets kept in history
    #[serde(default = "default_max_items")]
    pub max_items: usize,

    /// Override for the history file location
    #[serde(default)]
    pub history_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_items: default_max_items(),
            history_file: None,
        }
    }
}

fn default_max_items() -> usize {
    DEFAULT_MAX_ITEMS
}

impl Settings {
    /// Find config.toml in the standard location
    pub fn find_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("clipstash").join("config.toml"))
    }

    /// Load settings from the standard location
    pub fn load() -> Self {
        match Self::find_config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load settings from a specific file
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                crate::log!("Could not read config {:?}: {}, using defaults", path, e);
                return Self::default();
            }
        };

        match toml::from_str(&content) {
            Ok(settings) => settings,
            Err(e) => {
                crate::log!("Malformed config {:?}: {}, using defaults", path, e);
                Self::default()
            }
        }
    }

    /// Resolve the backing-file path: explicit override, or a
    /// dot-prefixed file in the user's home directory
    pub fn history_path(&self) -> PathBuf {
        if let Some(path) = &self.history_file {
            return path.clone();
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".clipstash.json")
    }
}
