//! Application configuration module
//!
//! Settings are stored with `confy` in the OS-specific config directory. A missing
//! or unreadable file falls back to defaults.

use crate::constant::{APP_NAME, APP_ORGANIZATION, APP_QUALIFIER, DEFAULT_FONT_SIZE, MAX_RECENT_FILES};
use crate::diff::{DiffAlgorithm, DiffOptions};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Confy(#[from] confy::ConfyError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub struct Config {
    pub settings: Settings,
}

impl Config {
    /// Load configuration from disk, creating default if it doesn't exist
    pub fn load() -> Result<Self, ConfigError> {
        let settings: Settings = confy::load(APP_NAME, None)?;
        info!("Load config from {:?}", Self::config_path()?);
        Ok(Self { settings })
    }

    /// Save current configuration to disk
    pub fn save(&self) -> Result<(), ConfigError> {
        confy::store(APP_NAME, None, &self.settings)?;
        info!("Save config to {:?}", Self::config_path()?);
        Ok(())
    }

    /// Directory file dialogs start in.
    /// Falls back to a local "data" directory if platform dirs are unavailable
    pub fn data_dir(&self) -> PathBuf {
        if let Some(proj_dirs) = ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME) {
            proj_dirs.data_dir().to_path_buf()
        } else {
            PathBuf::from("data")
        }
    }

    pub fn config_path() -> Result<PathBuf, ConfigError> {
        Ok(confy::get_configuration_file_path(APP_NAME, None)?)
    }

    /// Add a file to the recent files list and persist it
    pub fn add_recent_file(&mut self, path: PathBuf) {
        self.settings.push_recent_file(path);

        // Save changes in background since it's synchronous IO
        let settings = self.settings.clone();
        std::thread::spawn(move || {
            if let Err(e) = confy::store(APP_NAME, None, &settings) {
                tracing::error!("Failed to save recent files: {}", e);
            }
        });
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::warn!("Falling back to default settings: {}", e);
            Self {
                settings: Settings::default(),
            }
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Line diff algorithm
    #[serde(default)]
    pub diff_algorithm: DiffAlgorithm,

    /// Highlight changed words inside modified lines
    #[serde(default = "default_true")]
    pub inline_highlight: bool,

    #[serde(default = "default_font_size")]
    pub font_size: f32,

    #[serde(default)]
    pub theme: Theme,

    /// Recently opened documents, newest first
    #[serde(default)]
    pub recent_files: Vec<PathBuf>,
}

fn default_true() -> bool {
    true
}

fn default_font_size() -> f32 {
    DEFAULT_FONT_SIZE
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            diff_algorithm: DiffAlgorithm::default(),
            inline_highlight: true,
            font_size: DEFAULT_FONT_SIZE,
            theme: Theme::default(),
            recent_files: Vec::new(),
        }
    }
}

impl Settings {
    pub fn diff_options(&self) -> DiffOptions {
        DiffOptions {
            algorithm: self.diff_algorithm,
            inline_highlight: self.inline_highlight,
        }
    }

    /// Move the path to the front, keeping at most `MAX_RECENT_FILES`
    pub fn push_recent_file(&mut self, path: PathBuf) {
        self.recent_files.retain(|p| p != &path);
        self.recent_files.insert(0, path);
        self.recent_files.truncate(MAX_RECENT_FILES);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_map_to_diff_options() {
        let settings = Settings {
            diff_algorithm: DiffAlgorithm::Patience,
            inline_highlight: false,
            ..Settings::default()
        };
        assert_eq!(
            settings.diff_options(),
            DiffOptions {
                algorithm: DiffAlgorithm::Patience,
                inline_highlight: false,
            }
        );
    }

    #[test]
    fn recent_files_are_deduplicated_and_bounded() {
        let mut settings = Settings::default();
        for i in 0..(MAX_RECENT_FILES + 3) {
            settings.push_recent_file(PathBuf::from(format!("doc{i}.json")));
        }
        settings.push_recent_file(PathBuf::from("doc5.json"));

        assert_eq!(settings.recent_files.len(), MAX_RECENT_FILES);
        assert_eq!(settings.recent_files[0], PathBuf::from("doc5.json"));
        assert_eq!(
            settings
                .recent_files
                .iter()
                .filter(|p| **p == PathBuf::from("doc5.json"))
                .count(),
            1
        );
    }

    #[test]
    fn partial_settings_fill_in_defaults() {
        let settings: Settings = serde_json::from_str(r#"{ "diff_algorithm": "patience" }"#).unwrap();
        assert_eq!(settings.diff_algorithm, DiffAlgorithm::Patience);
        assert!(settings.inline_highlight);
        assert_eq!(settings.font_size, DEFAULT_FONT_SIZE);
        assert_eq!(settings.theme, Theme::Light);
    }
}
