//! Configuration file handling for ~/.placemark/config.ini.
//!
//! Loads and saves user configuration with sensible defaults.
//! Settings structs live in [`super::settings`], defaults in
//! [`super::defaults`], parsing in [`super::parser`], and serialization in
//! [`super::writer`].

use ini::Ini;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::keys::ConfigKey;
use super::settings::ConfigFile;

/// Configuration file errors.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] ini::Error),

    /// Failed to write config file
    #[error("Failed to write config file: {0}")]
    WriteError(String),

    /// Invalid configuration value
    #[error("Invalid configuration: {section}.{key} = '{value}' - {reason}")]
    InvalidValue {
        section: String,
        key: String,
        value: String,
        reason: String,
    },

    /// Failed to create config directory
    #[error("Failed to create config directory: {0}")]
    DirectoryError(std::io::Error),
}

impl ConfigFile {
    /// Load configuration from the default path (~/.placemark/config.ini).
    ///
    /// If the file doesn't exist, returns defaults.
    pub fn load() -> Result<Self, ConfigFileError> {
        Self::load_from(&config_file_path())
    }

    /// Load configuration from a specific path.
    ///
    /// If the file doesn't exist, returns defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigFileError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let ini = Ini::load_from_file(path)?;
        super::parser::parse_ini(&ini)
    }

    /// Save configuration to the default path (~/.placemark/config.ini).
    pub fn save(&self) -> Result<(), ConfigFileError> {
        self.save_to(&config_file_path())
    }

    /// Save configuration to a specific path, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigFileError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigFileError::DirectoryError)?;
        }

        let content = super::writer::to_config_string(self);
        std::fs::write(path, content).map_err(|e| ConfigFileError::WriteError(e.to_string()))
    }

    /// Create the config file at `path` with defaults if it doesn't exist.
    ///
    /// Returns `true` when a new file was written.
    pub fn ensure_exists_at(path: &Path) -> Result<bool, ConfigFileError> {
        if path.exists() {
            return Ok(false);
        }
        Self::default().save_to(path)?;
        Ok(true)
    }

    /// Set one key in the file at `path`, leaving every other entry as written.
    ///
    /// Only `value` is validated, so a file holding a bad value elsewhere can
    /// still be repaired key by key. Returns the value as stored.
    pub fn update_key_at(
        path: &Path,
        key: ConfigKey,
        value: &str,
    ) -> Result<String, ConfigFileError> {
        let mut scratch = Self::default();
        key.set(&mut scratch, value)
            .map_err(|e| ConfigFileError::InvalidValue {
                section: key.section().to_string(),
                key: key.key_name().to_string(),
                value: value.to_string(),
                reason: e.to_string(),
            })?;
        let stored = key.get(&scratch);

        let mut ini = if path.exists() {
            Ini::load_from_file(path)?
        } else {
            Ini::new()
        };
        ini.with_section(Some(key.section()))
            .set(key.key_name(), stored.as_str());

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigFileError::DirectoryError)?;
        }
        ini.write_to_file(path)
            .map_err(|e| ConfigFileError::WriteError(e.to_string()))?;
        Ok(stored)
    }
}

/// Get the path to the config directory (~/.placemark).
pub fn config_directory() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".placemark")
}

/// Get the path to the config file (~/.placemark/config.ini).
pub fn config_file_path() -> PathBuf {
    config_directory().join("config.ini")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::MatchPolicy;
    use crate::log::LogLevel;

    #[test]
    fn test_default_config() {
        let config = ConfigFile::default();

        assert_eq!(config.extract.policy, MatchPolicy::FirstPattern);
        assert!(!config.logging.diagnostics);
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn test_load_nonexistent_returns_defaults() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nonexistent.ini");

        let config = ConfigFile::load_from(&config_path).unwrap();
        assert_eq!(config, ConfigFile::default());
    }

    #[test]
    fn test_save_and_reload() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.ini");

        let mut config = ConfigFile::default();
        config.extract.policy = MatchPolicy::FirstValid;
        config.logging.level = LogLevel::Trace;
        config.save_to(&config_path).unwrap();

        let loaded = ConfigFile::load_from(&config_path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_ensure_exists_only_writes_once() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.ini");

        assert!(ConfigFile::ensure_exists_at(&config_path).unwrap());
        std::fs::write(&config_path, "[logging]\nlevel = error\n").unwrap();
        assert!(!ConfigFile::ensure_exists_at(&config_path).unwrap());

        let loaded = ConfigFile::load_from(&config_path).unwrap();
        assert_eq!(loaded.logging.level, LogLevel::Error);
    }

    #[test]
    fn test_invalid_file_reports_key() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.ini");
        std::fs::write(&config_path, "[logging]\nlevel = loud\n").unwrap();

        let err = ConfigFile::load_from(&config_path).unwrap_err();
        assert!(err.to_string().contains("logging.level = 'loud'"));
    }

    #[test]
    fn test_update_key_keeps_other_settings_in_broken_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.ini");
        std::fs::write(
            &config_path,
            "[extract]\npolicy = first-valid\n\n[logging]\nlevel = loud\n",
        )
        .unwrap();

        let stored =
            ConfigFile::update_key_at(&config_path, ConfigKey::LoggingLevel, "INFO").unwrap();
        assert_eq!(stored, "info");

        let loaded = ConfigFile::load_from(&config_path).unwrap();
        assert_eq!(loaded.extract.policy, MatchPolicy::FirstValid);
        assert_eq!(loaded.logging.level, LogLevel::Info);
    }

    #[test]
    fn test_update_key_rejects_invalid_value_without_writing() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.ini");

        let err = ConfigFile::update_key_at(&config_path, ConfigKey::ExtractPolicy, "nearest")
            .unwrap_err();
        assert!(err.to_string().contains("extract.policy = 'nearest'"));
        assert!(!config_path.exists());
    }

    #[test]
    fn test_update_key_creates_missing_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.ini");

        ConfigFile::update_key_at(&config_path, ConfigKey::LoggingDiagnostics, "yes").unwrap();

        let loaded = ConfigFile::load_from(&config_path).unwrap();
        assert!(loaded.logging.diagnostics);
        assert_eq!(loaded.extract.policy, MatchPolicy::FirstPattern);
    }

    #[test]
    fn test_config_file_path_under_placemark_dir() {
        let path = config_file_path();
        assert!(path.ends_with(".placemark/config.ini"));
    }
}
