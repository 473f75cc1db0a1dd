//! Persistent user settings.
//!
//! Two scalar preferences back every search: the OpenAI API key forwarded to
//! the service and the default number of questions to request. Stored as
//! TOML under the user config directory, read on demand, written on explicit
//! save.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Hard upper bound on the per-search question count.
pub const MAX_QUESTIONS_LIMIT: usize = 50;

/// Default question count when nothing has been saved yet.
pub const DEFAULT_MAX_QUESTIONS: usize = 20;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserSettings {
    /// OpenAI API key forwarded verbatim in each request body.
    pub api_key: String,
    /// Default number of questions to request, 1 to [`MAX_QUESTIONS_LIMIT`].
    pub max_questions: usize,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            max_questions: DEFAULT_MAX_QUESTIONS,
        }
    }
}

/// Settings persistence manager.
pub struct SettingsManager {
    config_path: PathBuf,
}

impl SettingsManager {
    /// Create a settings manager with the default config path.
    pub fn new() -> Result<Self> {
        let config_dir = Self::config_dir()?;
        let config_path = config_dir.join("settings.toml");
        Ok(Self { config_path })
    }

    /// Create a settings manager with a custom config path (for testing).
    pub fn with_path(path: PathBuf) -> Self {
        Self { config_path: path }
    }

    /// Load settings from disk, falling back to defaults if not found.
    pub fn load(&self) -> Result<UserSettings> {
        if self.config_path.exists() {
            let contents = fs::read_to_string(&self.config_path)
                .context("Failed to read settings file")?;
            let settings = toml::from_str(&contents).context("Failed to parse settings file")?;
            Ok(settings)
        } else {
            Ok(UserSettings::default())
        }
    }

    /// Save settings to disk.
    pub fn save(&self, settings: &UserSettings) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let toml_string =
            toml::to_string_pretty(settings).context("Failed to serialize settings")?;
        fs::write(&self.config_path, toml_string).context("Failed to write settings file")?;

        Ok(())
    }

    /// Apply a partial update and persist the result.
    pub fn update<F>(&self, updater: F) -> Result<UserSettings>
    where
        F: FnOnce(&mut UserSettings),
    {
        let mut settings = self.load()?;
        updater(&mut settings);
        self.save(&settings)?;
        Ok(settings)
    }

    fn config_dir() -> Result<PathBuf> {
        if let Some(config_dir) = dirs::config_dir() {
            Ok(config_dir.join("leetquery"))
        } else if let Ok(home) = std::env::var("HOME") {
            Ok(PathBuf::from(home).join(".config").join("leetquery"))
        } else {
            Ok(PathBuf::from(".leetquery"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn manager_in(dir: &TempDir) -> SettingsManager {
        SettingsManager::with_path(dir.path().join("settings.toml"))
    }

    #[test]
    fn test_default_settings() {
        let settings = UserSettings::default();
        assert_eq!(settings.api_key, "");
        assert_eq!(settings.max_questions, 20);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let settings = manager_in(&dir).load().unwrap();
        assert_eq!(settings, UserSettings::default());
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let manager = manager_in(&dir);

        let modified = UserSettings {
            api_key: "sk-stored".to_string(),
            max_questions: 35,
        };
        manager.save(&modified).unwrap();

        let loaded = manager.load().unwrap();
        assert_eq!(loaded, modified);
    }

    #[test]
    fn test_update_persists_changed_fields() {
        let dir = TempDir::new().unwrap();
        let manager = manager_in(&dir);

        let updated = manager
            .update(|s| {
                s.max_questions = 10;
            })
            .unwrap();
        assert_eq!(updated.max_questions, 10);
        assert_eq!(updated.api_key, "");

        let loaded = manager.load().unwrap();
        assert_eq!(loaded.max_questions, 10);
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "max_questions = \"twenty\"").unwrap();

        assert!(SettingsManager::with_path(path).load().is_err());
    }
}
