//! Application settings and paths.
//!
//! Manages XDG-compliant paths for configuration and the optional settings
//! file controlling HTTP behavior.

use crate::error::{ConfigError, ConfigResult};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Global paths singleton.
static PATHS: OnceLock<Paths> = OnceLock::new();

/// Application directory paths following XDG Base Directory Specification.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Configuration directory (~/.config/cloudhound)
    pub config_dir: PathBuf,
}

impl Paths {
    /// Get the global paths instance.
    pub fn get() -> &'static Paths {
        PATHS.get_or_init(|| Self::new().expect("Failed to initialize paths"))
    }

    /// Initialize paths using XDG directories.
    fn new() -> ConfigResult<Self> {
        let project = ProjectDirs::from("com", "cloudhound", "cloudhound")
            .ok_or(ConfigError::DirectoryNotFound)?;

        let paths = Self {
            config_dir: project.config_dir().to_path_buf(),
        };

        fs::create_dir_all(&paths.config_dir)?;

        Ok(paths)
    }

    /// Get the path to the settings file.
    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join("settings.json")
    }
}

/// Application-wide settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// HTTP request timeout in milliseconds.
    pub request_timeout_ms: u64,
    /// User-Agent header sent with feed requests.
    pub user_agent: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            request_timeout_ms: 30_000,
            user_agent: concat!("cloudhound/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl AppSettings {
    /// Load settings from the default location.
    ///
    /// Missing file means defaults; a present but malformed file is an error.
    pub fn load() -> ConfigResult<Self> {
        let paths = Paths::get();
        let file = paths.settings_file();

        if !file.exists() {
            return Ok(Self::default());
        }

        Self::load_from(&file)
    }

    /// Load settings from a specific file.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        serde_json::from_str(&content).map_err(|e| ConfigError::InvalidFormat(e.to_string()))
    }

    /// Save settings to the default location.
    pub fn save(&self) -> ConfigResult<()> {
        let paths = Paths::get();
        let file = paths.settings_file();

        let content = serde_json::to_string_pretty(self)?;
        fs::write(&file, content).map_err(|e| ConfigError::WriteFailed {
            path: file,
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert_eq!(settings.request_timeout_ms, 30_000);
        assert!(settings.user_agent.starts_with("cloudhound/"));
    }

    #[test]
    fn test_settings_serialization() {
        let settings = AppSettings::default();
        let json = serde_json::to_string(&settings).unwrap();
        let parsed: AppSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.request_timeout_ms, settings.request_timeout_ms);
    }

    #[test]
    fn test_partial_settings_file() {
        let parsed: AppSettings = serde_json::from_str(r#"{"request_timeout_ms": 5000}"#).unwrap();
        assert_eq!(parsed.request_timeout_ms, 5000);
        assert!(parsed.user_agent.starts_with("cloudhound/"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("settings.json");
        std::fs::write(&file, r#"{"user_agent": "custom/1.0"}"#).unwrap();

        let settings = AppSettings::load_from(&file).unwrap();
        assert_eq!(settings.user_agent, "custom/1.0");
    }
}
