//! Default values for all configuration settings.

use super::settings::*;
use crate::extract::MatchPolicy;
use crate::log::LogLevel;

/// Default extraction policy: the first dialect whose pattern matches decides.
pub const DEFAULT_MATCH_POLICY: MatchPolicy = MatchPolicy::FirstPattern;

/// Extractor diagnostics are off unless running in development mode.
pub const DEFAULT_DIAGNOSTICS: bool = false;

/// Default subscriber level.
pub const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            extract: ExtractSettings::default(),
            logging: LoggingSettings::default(),
        }
    }
}

impl Default for ExtractSettings {
    fn default() -> Self {
        Self {
            policy: DEFAULT_MATCH_POLICY,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            diagnostics: DEFAULT_DIAGNOSTICS,
            level: DEFAULT_LOG_LEVEL,
        }
    }
}
