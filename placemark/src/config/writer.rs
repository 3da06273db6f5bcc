//! INI serialization logic for converting `ConfigFile` → INI string.

use super::settings::ConfigFile;

/// Convert a `ConfigFile` to a commented INI string for saving.
pub(super) fn to_config_string(config: &ConfigFile) -> String {
    format!(
        r#"[extract]
; What happens when a URL matches a dialect but the values are out of range:
;   first-pattern - stop and report no match (default)
;   first-valid   - keep trying lower-priority dialects
policy = {}

[logging]
; Report extractor diagnostics (contained parse failures, rejected values)
; Enable while developing; off by default
diagnostics = {}
; Log level: trace, debug, info, warn, error (RUST_LOG takes precedence)
level = {}
"#,
        config.extract.policy, config.logging.diagnostics, config.logging.level,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::MatchPolicy;
    use ini::Ini;

    #[test]
    fn test_written_config_parses_back() {
        let mut config = ConfigFile::default();
        config.extract.policy = MatchPolicy::FirstValid;
        config.logging.diagnostics = true;

        let text = to_config_string(&config);
        let ini = Ini::load_from_str(&text).unwrap();
        let parsed = super::super::parser::parse_ini(&ini).unwrap();

        assert_eq!(parsed, config);
    }

    #[test]
    fn test_default_config_text() {
        let text = to_config_string(&ConfigFile::default());
        assert!(text.contains("policy = first-pattern"));
        assert!(text.contains("diagnostics = false"));
        assert!(text.contains("level = info"));
    }
}
