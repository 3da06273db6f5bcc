//! Configuration key access and validation.
//!
//! Type-safe get/set of configuration values by `section.key` name, used by
//! the `config` CLI commands.

use std::str::FromStr;
use thiserror::Error;

use super::parser::parse_bool;
use super::settings::ConfigFile;
use crate::extract::MatchPolicy;
use crate::log::LogLevel;

/// Errors that can occur when getting or setting configuration values.
#[derive(Debug, Error)]
pub enum ConfigKeyError {
    /// Unknown configuration key.
    #[error("Unknown configuration key '{0}'")]
    UnknownKey(String),

    /// Validation failed for the value.
    #[error("Invalid value for {key}: {reason}")]
    ValidationFailed { key: String, reason: String },
}

/// Supported configuration keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    ExtractPolicy,
    LoggingDiagnostics,
    LoggingLevel,
}

impl FromStr for ConfigKey {
    type Err = ConfigKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "extract.policy" => Ok(ConfigKey::ExtractPolicy),
            "logging.diagnostics" => Ok(ConfigKey::LoggingDiagnostics),
            "logging.level" => Ok(ConfigKey::LoggingLevel),
            _ => Err(ConfigKeyError::UnknownKey(s.to_string())),
        }
    }
}

impl ConfigKey {
    /// Full key name in `section.key` form.
    pub fn name(&self) -> &'static str {
        match self {
            ConfigKey::ExtractPolicy => "extract.policy",
            ConfigKey::LoggingDiagnostics => "logging.diagnostics",
            ConfigKey::LoggingLevel => "logging.level",
        }
    }

    /// Get the section name (e.g., "logging").
    pub fn section(&self) -> &'static str {
        self.name().split('.').next().unwrap_or("")
    }

    /// Get the key name within the section (e.g., "level").
    pub fn key_name(&self) -> &'static str {
        self.name().split('.').nth(1).unwrap_or(self.name())
    }

    /// Get the value from a config file as a string.
    pub fn get(&self, config: &ConfigFile) -> String {
        match self {
            ConfigKey::ExtractPolicy => config.extract.policy.to_string(),
            ConfigKey::LoggingDiagnostics => config.logging.diagnostics.to_string(),
            ConfigKey::LoggingLevel => config.logging.level.to_string(),
        }
    }

    /// Set the value in a config file, validating it first.
    pub fn set(&self, config: &mut ConfigFile, value: &str) -> Result<(), ConfigKeyError> {
        let invalid = |reason: String| ConfigKeyError::ValidationFailed {
            key: self.name().to_string(),
            reason,
        };

        match self {
            ConfigKey::ExtractPolicy => {
                config.extract.policy = value.parse::<MatchPolicy>().map_err(invalid)?;
            }
            ConfigKey::LoggingDiagnostics => {
                config.logging.diagnostics =
                    parse_bool(value).ok_or_else(|| invalid("must be true or false".into()))?;
            }
            ConfigKey::LoggingLevel => {
                config.logging.level = value.parse::<LogLevel>().map_err(invalid)?;
            }
        }
        Ok(())
    }

    /// Validate a value without applying it.
    pub fn validate(&self, value: &str) -> Result<(), ConfigKeyError> {
        let mut scratch = ConfigFile::default();
        self.set(&mut scratch, value)
    }

    /// Get all supported configuration keys, in file order.
    pub fn all() -> &'static [ConfigKey] {
        &[
            ConfigKey::ExtractPolicy,
            ConfigKey::LoggingDiagnostics,
            ConfigKey::LoggingLevel,
        ]
    }
}
