use serde::Deserialize;
use tracing::debug_span;

use super::{merge_vocabulary, KeyPolicy, MergeReport, Vocabulary, VocabularyEntry};
use crate::translit::CharacterMapper;

/// Embedded hand-curated vocabulary.
pub const DEFAULT_VOCABULARY_TOML: &str = include_str!("default_vocabulary.toml");

#[derive(Deserialize)]
struct CuratedConfig {
    #[serde(default)]
    category: Vec<CuratedCategory>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CuratedCategory {
    pub name: String,
    #[serde(default)]
    pub entries: Vec<CuratedEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CuratedEntry {
    pub english: String,
    pub romanization: String,
    /// Hand-written script; derived through the mapper when absent.
    #[serde(default)]
    pub script: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum VocabularyError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("category #{0} has an empty name")]
    EmptyCategoryName(usize),
    #[error("empty {field} in category {category}")]
    EmptyField {
        category: String,
        field: &'static str,
    },
    #[error("vocabulary already initialized")]
    AlreadyInitialized,
}

/// Parse curated vocabulary TOML (`[[category]]` with `[[category.entries]]`).
pub fn parse_curated_toml(toml_str: &str) -> Result<Vec<CuratedCategory>, VocabularyError> {
    let config: CuratedConfig =
        toml::from_str(toml_str).map_err(|e| VocabularyError::Parse(e.to_string()))?;

    for (i, cat) in config.category.iter().enumerate() {
        if cat.name.trim().is_empty() {
            return Err(VocabularyError::EmptyCategoryName(i));
        }
        for entry in &cat.entries {
            let fields = [
                ("english", Some(&entry.english)),
                ("romanization", Some(&entry.romanization)),
                ("script", entry.script.as_ref()),
            ];
            for (field, value) in fields {
                if value.is_some_and(|v| v.trim().is_empty()) {
                    return Err(VocabularyError::EmptyField {
                        category: cat.name.clone(),
                        field,
                    });
                }
            }
        }
    }

    Ok(config.category)
}

/// Fold curated categories into a fresh vocabulary, one merge per category.
///
/// Running curated data through the same merge as glossary data keeps the
/// no-duplicate invariant for hand-authored entries too.
pub fn curated_vocabulary(
    categories: &[CuratedCategory],
    mapper: &CharacterMapper,
    policy: KeyPolicy,
) -> (Vocabulary, MergeReport) {
    let _span = debug_span!("curated_vocabulary", categories = categories.len()).entered();

    let mut vocab = Vocabulary::new(policy);
    let mut report = MergeReport::default();
    for cat in categories {
        let name = cat.name.trim();
        let incoming = cat
            .entries
            .iter()
            .map(|e| {
                let english = e.english.trim().to_string();
                let romanization = e.romanization.trim().to_string();
                let script = match &e.script {
                    Some(s) => s.trim().to_string(),
                    None => mapper.transliterate(&romanization),
                };
                VocabularyEntry {
                    english,
                    romanization,
                    script,
                    category: name.to_string(),
                    pos: Vec::new(),
                }
            })
            .collect();
        let (merged, r) = merge_vocabulary(vocab, name, incoming);
        vocab = merged;
        report.absorb(r);
    }
    (vocab, report)
}
