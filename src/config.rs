//! Editor configuration persistence.
//!
//! User preferences live in `~/.config/dira/config.yaml`; missing or
//! unparseable files fall back to defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Editor configuration that persists across sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Spaces inserted by the Tab key.
    #[serde(default = "default_tab_stop")]
    pub tab_stop: usize,

    /// Whether to colorize syntax and line numbers.
    #[serde(default = "default_true")]
    pub colors: bool,

    /// Show the welcome splash when started without a file.
    #[serde(default = "default_true")]
    pub show_welcome: bool,
}

fn default_tab_stop() -> usize {
    4
}

fn default_true() -> bool {
    true
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            tab_stop: default_tab_stop(),
            colors: true,
            show_welcome: true,
        }
    }
}

impl EditorConfig {
    /// Load config from `path` if given, else from the default config
    /// file. Returns defaults if nothing usable is found.
    pub fn load(path: Option<&Path>) -> Self {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match crate::config_paths::config_file() {
                Some(p) => p,
                None => {
                    tracing::debug!("no config directory available, using defaults");
                    return Self::default();
                }
            },
        };

        if !path.exists() {
            tracing::debug!("config file {} not found, using defaults", path.display());
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}
