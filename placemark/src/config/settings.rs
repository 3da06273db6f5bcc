//! Settings structs for all configuration sections.
//!
//! Each struct represents one `[section]` of the INI config file.

use crate::extract::MatchPolicy;
use crate::log::LogLevel;

/// Complete application configuration loaded from config.ini.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigFile {
    /// Coordinate extraction settings
    pub extract: ExtractSettings,
    /// Logging settings
    pub logging: LoggingSettings,
}

/// Coordinate extraction configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractSettings {
    /// Behavior when a dialect matches but its values are out of range
    pub policy: MatchPolicy,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingSettings {
    /// Development mode: report extractor diagnostics to the log
    pub diagnostics: bool,
    /// Minimum level written by the subscriber (overridden by RUST_LOG)
    pub level: LogLevel,
}
