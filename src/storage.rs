use crate::constants::{CONFIG_DIR_NAME, DEFAULT_API_URL, SETTINGS_FILE};
use crate::models::Theme;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Contents of `settings.yaml`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub theme: Theme,
    /// Overrides the data source base URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
}

/// Persists the theme preference and reads runtime settings
pub struct Storage {
    settings: Settings,
    config_dir: PathBuf,
}

impl Storage {
    /// Storage rooted at `config_dir`; missing or unreadable settings fall back to defaults
    pub fn with_dir(config_dir: impl Into<PathBuf>) -> Self {
        let config_dir = config_dir.into();
        let settings = match load_settings(&config_dir.join(SETTINGS_FILE)) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring unreadable settings");
                Settings::default()
            }
        };
        Storage {
            settings,
            config_dir,
        }
    }

    pub fn settings_path(&self) -> PathBuf {
        self.config_dir.join(SETTINGS_FILE)
    }

    pub fn api_url(&self) -> &str {
        self.settings.api_url.as_deref().unwrap_or(DEFAULT_API_URL)
    }

    /// Current theme preference
    pub fn theme(&self) -> Theme {
        self.settings.theme
    }

    /// Flip the theme and persist it. On failure the current theme is kept.
    pub fn toggle_theme(&mut self) -> Result<Theme> {
        let next = Settings {
            theme: self.settings.theme.toggled(),
            ..self.settings.clone()
        };
        self.save(&next)?;
        self.settings = next;
        tracing::info!(theme = self.settings.theme.as_str(), "Theme changed");
        Ok(self.settings.theme)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.config_dir.exists() {
            fs::create_dir_all(&self.config_dir)?;
        }
        Ok(())
    }

    fn save(&self, settings: &Settings) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_yaml::to_string(settings)?;
        fs::write(self.settings_path(), content)?;
        Ok(())
    }
}

/// `~/.atlas`, or `./.atlas` without a home directory
pub fn default_config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR_NAME)
}

/// Where the log file goes: `config_dir` when it can be created, otherwise the
/// system temp dir along with the reason
pub fn log_dir(config_dir: &Path) -> (PathBuf, Option<std::io::Error>) {
    match fs::create_dir_all(config_dir) {
        Ok(()) => (config_dir.to_path_buf(), None),
        Err(e) => (std::env::temp_dir(), Some(e)),
    }
}

fn load_settings(path: &Path) -> Result<Settings> {
    if !path.exists() {
        return Ok(Settings::default());
    }
    let content = fs::read_to_string(path)?;
    Ok(serde_yaml::from_str::<Option<Settings>>(&content)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn persisted_theme(storage: &Storage) -> Theme {
        load_settings(&storage.settings_path()).unwrap().theme
    }

    #[test]
    fn test_defaults_to_light_when_unset() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::with_dir(dir.path().join("atlas"));
        assert_eq!(storage.theme(), Theme::Light);
        assert_eq!(storage.api_url(), DEFAULT_API_URL);
    }

    #[test]
    fn test_toggle_twice_round_trips_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = Storage::with_dir(dir.path());

        let first = storage.toggle_theme().unwrap();
        assert_eq!(first, Theme::Dark);
        assert_eq!(persisted_theme(&storage), first);

        let second = storage.toggle_theme().unwrap();
        assert_eq!(second, Theme::Light);
        assert_eq!(persisted_theme(&storage), second);
    }

    #[test]
    fn test_reads_saved_preference_and_override() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(SETTINGS_FILE),
            "theme: dark\napi_url: http://localhost:9000/v3.1\n",
        )
        .unwrap();
        let mut storage = Storage::with_dir(dir.path());
        assert_eq!(storage.theme(), Theme::Dark);
        assert_eq!(storage.api_url(), "http://localhost:9000/v3.1");

        storage.toggle_theme().unwrap();
        let reloaded = Storage::with_dir(dir.path());
        assert_eq!(reloaded.theme(), Theme::Light);
        assert_eq!(reloaded.api_url(), "http://localhost:9000/v3.1");
    }

    #[test]
    fn test_failed_save_keeps_theme() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        fs::write(&blocker, "file").unwrap();
        let mut storage = Storage::with_dir(blocker.join("atlas"));

        assert!(storage.toggle_theme().is_err());
        assert_eq!(storage.theme(), Theme::Light);
    }

    #[test]
    fn test_unusable_config_dir_still_starts() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join(".atlas");
        fs::write(&blocker, "file").unwrap();

        let (logs, reason) = log_dir(&blocker);
        assert_eq!(logs, std::env::temp_dir());
        assert!(reason.is_some());

        let mut storage = Storage::with_dir(&blocker);
        assert_eq!(storage.theme(), Theme::Light);
        assert!(storage.toggle_theme().is_err());
        assert_eq!(storage.theme(), Theme::Light);
    }

    #[test]
    fn test_log_dir_created_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let config_dir = dir.path().join("nested").join(".atlas");
        let (logs, reason) = log_dir(&config_dir);
        assert_eq!(logs, config_dir);
        assert!(reason.is_none());
        assert!(config_dir.is_dir());
    }

    #[test]
    fn test_garbage_settings_fall_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(SETTINGS_FILE), "theme: [not, a, theme]").unwrap();
        let storage = Storage::with_dir(dir.path());
        assert_eq!(storage.theme(), Theme::Light);
    }
}
