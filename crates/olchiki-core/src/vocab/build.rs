use std::sync::OnceLock;

use tracing::{debug, debug_span};

use super::curated::{curated_vocabulary, parse_curated_toml, CuratedCategory, VocabularyError};
use super::curated::DEFAULT_VOCABULARY_TOML;
use super::merge::{merge_vocabulary, MergeReport};
use super::Vocabulary;
use crate::glossary::{map_to_script, parse_glossary, ParseReport, DEFAULT_GLOSSARY};
use crate::settings::{settings, Settings};
use crate::translit::CharacterMapper;
use crate::unicode::{is_latin, is_script_char};

/// Replacement inputs for the global vocabulary. `None` keeps the embedded default.
#[derive(Debug, Clone, Default)]
pub struct CustomSources {
    pub curated_toml: Option<String>,
    pub glossary: Option<String>,
}

static CUSTOM_SOURCES: OnceLock<CustomSources> = OnceLock::new();
static INSTANCE: OnceLock<(Vocabulary, IngestReport)> = OnceLock::new();

/// Set custom sources before the first `Vocabulary::global()` call.
///
/// Fails with `AlreadyInitialized` once sources are set or the global
/// vocabulary has been built.
pub fn init_custom(sources: CustomSources) -> Result<(), VocabularyError> {
    if let Some(toml) = &sources.curated_toml {
        parse_curated_toml(toml)?;
    }
    if INSTANCE.get().is_some() {
        return Err(VocabularyError::AlreadyInitialized);
    }
    CUSTOM_SOURCES
        .set(sources)
        .map_err(|_| VocabularyError::AlreadyInitialized)
}

/// An entry whose script still carries characters the mapper left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnmappedEntry {
    pub category: String,
    pub english: String,
    pub romanization: String,
    pub chars: Vec<char>,
}

impl UnmappedEntry {
    /// Leftover Latin letters usually mean a gap in the mapping table rather
    /// than stray punctuation in the source.
    pub fn has_latin(&self) -> bool {
        self.chars.iter().any(|&c| is_latin(c))
    }
}

/// Everything the ingest pipeline counted on its way through.
#[derive(Debug, Clone, Default)]
pub struct IngestReport {
    pub curated: MergeReport,
    pub parse: ParseReport,
    pub merge: MergeReport,
    pub unmapped: Vec<UnmappedEntry>,
}

/// List entries whose script contains anything besides Ol Chiki and whitespace.
pub fn audit_script(vocab: &Vocabulary) -> Vec<UnmappedEntry> {
    vocab
        .entries()
        .filter_map(|e| {
            let chars: Vec<char> = e.script.chars().filter(|&c| !is_script_char(c)).collect();
            (!chars.is_empty()).then(|| UnmappedEntry {
                category: e.category.clone(),
                english: e.english.clone(),
                romanization: e.romanization.clone(),
                chars,
            })
        })
        .collect()
}

/// Parse, map and merge: curated categories first, then the glossary into
/// `settings.glossary.category`.
pub fn build_vocabulary(
    curated: &[CuratedCategory],
    glossary_text: &str,
    mapper: &CharacterMapper,
    settings: &Settings,
) -> (Vocabulary, IngestReport) {
    let _span = debug_span!("build_vocabulary").entered();

    let category = settings.glossary.category.as_str();
    let (vocab, curated_report) = curated_vocabulary(curated, mapper, settings.key_policy());
    let (parsed, parse_report) = parse_glossary(glossary_text);
    let mapped = map_to_script(parsed, mapper, category);
    let (vocab, merge_report) = merge_vocabulary(vocab, category, mapped);
    let unmapped = audit_script(&vocab);

    debug!(
        entries = vocab.len(),
        categories = vocab.categories().len(),
        unmapped = unmapped.len()
    );
    let report = IngestReport {
        curated: curated_report,
        parse: parse_report,
        merge: merge_report,
        unmapped,
    };
    (vocab, report)
}

/// Whether `init_custom` would be refused.
pub fn is_initialized() -> bool {
    INSTANCE.get().is_some() || CUSTOM_SOURCES.get().is_some()
}

fn global_state() -> &'static (Vocabulary, IngestReport) {
    INSTANCE.get_or_init(|| {
        let custom = CUSTOM_SOURCES.get();
        let curated_toml = custom
            .and_then(|c| c.curated_toml.as_deref())
            .unwrap_or(DEFAULT_VOCABULARY_TOML);
        let glossary = custom
            .and_then(|c| c.glossary.as_deref())
            .unwrap_or(DEFAULT_GLOSSARY);
        let curated = parse_curated_toml(curated_toml).expect("vocabulary TOML must be valid");
        build_vocabulary(&curated, glossary, CharacterMapper::global(), settings())
    })
}

pub(super) fn global_instance() -> &'static Vocabulary {
    &global_state().0
}

/// Report from building the global vocabulary (forces initialization).
pub fn ingest_report() -> &'static IngestReport {
    &global_state().1
}
