use serde::Deserialize;

#[derive(Deserialize)]
struct MappingConfig {
    mappings: Vec<(String, String)>,
}

#[derive(Debug, thiserror::Error)]
pub enum MappingConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("mappings array is empty")]
    Empty,
    #[error("empty pattern at index {0}")]
    EmptyPattern(usize),
    #[error("empty glyph for pattern: {0}")]
    EmptyGlyph(String),
    #[error("character mapper already initialized")]
    AlreadyInitialized,
}

/// Parse TOML text into `(pattern, glyph)` pairs in declared order.
///
/// Declared order matters: it breaks ties between equal-length patterns.
pub fn parse_mapping_toml(toml_str: &str) -> Result<Vec<(String, String)>, MappingConfigError> {
    let config: MappingConfig =
        toml::from_str(toml_str).map_err(|e| MappingConfigError::Parse(e.to_string()))?;

    if config.mappings.is_empty() {
        return Err(MappingConfigError::Empty);
    }

    for (i, (pattern, glyph)) in config.mappings.iter().enumerate() {
        if pattern.is_empty() {
            return Err(MappingConfigError::EmptyPattern(i));
        }
        if glyph.is_empty() {
            return Err(MappingConfigError::EmptyGlyph(pattern.clone()));
        }
    }

    Ok(config.mappings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_toml() {
        let toml = r#"
mappings = [
    ["ng", "ᱝ"],
    ["n", "ᱱ"],
]
"#;
        let pairs = parse_mapping_toml(toml).unwrap();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0], ("ng".to_string(), "ᱝ".to_string()));
        assert_eq!(pairs[1], ("n".to_string(), "ᱱ".to_string()));
    }

    #[test]
    fn parse_keeps_declared_order() {
        let toml = r#"mappings = [["b", "ᱵ"], ["a", "ᱟ"], ["b", "x"]]"#;
        let pairs = parse_mapping_toml(toml).unwrap();
        let patterns: Vec<&str> = pairs.iter().map(|(p, _)| p.as_str()).collect();
        assert_eq!(patterns, vec!["b", "a", "b"]);
    }

    #[test]
    fn parse_default_toml() {
        let pairs = parse_mapping_toml(super::super::DEFAULT_TOML).unwrap();
        assert!(pairs.len() > 80, "expected 80+ mappings, got {}", pairs.len());
    }

    #[test]
    fn error_empty_mappings() {
        let err = parse_mapping_toml("mappings = []\n").unwrap_err();
        assert!(matches!(err, MappingConfigError::Empty));
    }

    #[test]
    fn error_empty_pattern() {
        let err = parse_mapping_toml(r#"mappings = [["a", "ᱟ"], ["", "ᱵ"]]"#).unwrap_err();
        assert!(matches!(err, MappingConfigError::EmptyPattern(1)));
    }

    #[test]
    fn error_empty_glyph() {
        let err = parse_mapping_toml(r#"mappings = [["a", ""]]"#).unwrap_err();
        assert!(matches!(err, MappingConfigError::EmptyGlyph(ref p) if p == "a"));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_mapping_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, MappingConfigError::Parse(_)));
    }

    #[test]
    fn error_missing_table() {
        let err = parse_mapping_toml("[other]\nx = 1\n").unwrap_err();
        assert!(matches!(err, MappingConfigError::Parse(_)));
    }
}
