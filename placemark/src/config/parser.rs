//! INI parsing logic for converting `Ini` → `ConfigFile`.
//!
//! This is the single place where INI key names are mapped to struct fields.

use ini::Ini;

use super::file::ConfigFileError;
use super::settings::ConfigFile;

/// Parse an `Ini` object into a `ConfigFile`.
///
/// Starts from `ConfigFile::default()` and overlays any values found in the
/// INI. Unknown sections and keys are ignored.
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    // [extract] section
    if let Some(section) = ini.section(Some("extract")) {
        if let Some(v) = section.get("policy") {
            config.extract.policy = v.parse().map_err(|_| ConfigFileError::InvalidValue {
                section: "extract".to_string(),
                key: "policy".to_string(),
                value: v.to_string(),
                reason: "must be 'first-pattern' or 'first-valid'".to_string(),
            })?;
        }
    }

    // [logging] section
    if let Some(section) = ini.section(Some("logging")) {
        if let Some(v) = section.get("diagnostics") {
            config.logging.diagnostics =
                parse_bool(v).ok_or_else(|| ConfigFileError::InvalidValue {
                    section: "logging".to_string(),
                    key: "diagnostics".to_string(),
                    value: v.to_string(),
                    reason: "must be true or false".to_string(),
                })?;
        }
        if let Some(v) = section.get("level") {
            config.logging.level = v.parse().map_err(|_| ConfigFileError::InvalidValue {
                section: "logging".to_string(),
                key: "level".to_string(),
                value: v.to_string(),
                reason: "must be one of: trace, debug, info, warn, error".to_string(),
            })?;
        }
    }

    Ok(config)
}

/// Accepts the usual spellings: true/false, yes/no, on/off, 1/0.
pub(super) fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}
