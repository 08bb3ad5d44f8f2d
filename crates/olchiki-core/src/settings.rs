//! Ingest settings: which category bulk glossary entries land in, how
//! duplicates are compared, and how many search hits to return.
//!
//! Install a replacement with [`init_custom`] before anything calls
//! [`settings()`]; afterwards the values are fixed for the process.

use std::sync::OnceLock;

use serde::Deserialize;

use crate::vocab::KeyPolicy;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();
static INSTANCE: OnceLock<Settings> = OnceLock::new();

/// Validate and install replacement settings. Fails with
/// `AlreadyInitialized` after a previous install or once `settings()` has run.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    if INSTANCE.get().is_some() {
        return Err(SettingsError::AlreadyInitialized);
    }
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Whether `init_custom` would be refused.
pub fn is_initialized() -> bool {
    INSTANCE.get().is_some() || CUSTOM_TOML.get().is_some()
}

pub fn settings() -> &'static Settings {
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// The embedded `default_settings.toml`, for export.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub glossary: GlossarySettings,
    pub dedup: DedupSettings,
    pub search: SearchSettings,
}

impl Settings {
    /// Identity-key policy selected by `dedup.case_insensitive`.
    pub fn key_policy(&self) -> KeyPolicy {
        if self.dedup.case_insensitive {
            KeyPolicy::CaseInsensitive
        } else {
            KeyPolicy::Exact
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        parse_settings_toml(DEFAULT_SETTINGS_TOML).expect("settings TOML must be valid")
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GlossarySettings {
    pub category: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DedupSettings {
    pub case_insensitive: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchSettings {
    pub max_results: usize,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    if s.glossary.category.trim().is_empty() {
        return Err(SettingsError::InvalidValue {
            field: "glossary.category".to_string(),
            reason: "must not be empty".to_string(),
        });
    }
    if s.search.max_results == 0 {
        return Err(SettingsError::InvalidValue {
            field: "search.max_results".to_string(),
            reason: "must be positive".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_parse() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        assert_eq!(s.glossary.category, "Glossary");
        assert!(s.dedup.case_insensitive);
        assert_eq!(s.search.max_results, 20);
        assert_eq!(s.key_policy(), KeyPolicy::CaseInsensitive);
    }

    #[test]
    fn exact_key_policy() {
        let toml = DEFAULT_SETTINGS_TOML.replace("case_insensitive = true", "case_insensitive = false");
        let s = parse_settings_toml(&toml).unwrap();
        assert_eq!(s.key_policy(), KeyPolicy::Exact);
    }

    #[test]
    fn empty_category_rejected() {
        let toml = DEFAULT_SETTINGS_TOML.replace("category = \"Glossary\"", "category = \"  \"");
        let err = parse_settings_toml(&toml).unwrap_err();
        assert!(
            matches!(err, SettingsError::InvalidValue { ref field, .. } if field == "glossary.category")
        );
    }

    #[test]
    fn zero_max_results_rejected() {
        let toml = DEFAULT_SETTINGS_TOML.replace("max_results = 20", "max_results = 0");
        let err = parse_settings_toml(&toml).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidValue { .. }));
    }

    #[test]
    fn missing_section_is_parse_error() {
        let err = parse_settings_toml("[glossary]\ncategory = \"X\"\n").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn global_settings_use_defaults() {
        assert_eq!(settings().glossary.category, "Glossary");
        assert!(default_toml().contains("[dedup]"));
    }

    #[test]
    fn init_custom_refused_after_settings_read() {
        settings();
        assert!(is_initialized());
        let err = init_custom(DEFAULT_SETTINGS_TOML.replace("Glossary", "Bulk")).unwrap_err();
        assert!(matches!(err, SettingsError::AlreadyInitialized));
        assert_eq!(settings().glossary.category, "Glossary");
    }
}
