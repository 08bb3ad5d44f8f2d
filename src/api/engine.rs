use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info_span};

use olchiki_core::settings::{self, settings, SettingsError};
use olchiki_core::translit::{parse_mapping_toml, CharacterMapper, MappingConfigError};
use olchiki_core::vocab::{
    self, CustomSources, IngestReport, Vocabulary, VocabularyEntry, VocabularyError,
};

use super::{EngineError, VocabularySummary};

/// Optional replacement sources, read from disk at startup.
#[derive(Debug, Clone, Default)]
pub struct StartupConfig {
    pub mapping: Option<PathBuf>,
    pub settings: Option<PathBuf>,
    pub vocabulary: Option<PathBuf>,
    pub glossary: Option<PathBuf>,
}

impl StartupConfig {
    fn is_default(&self) -> bool {
        self.mapping.is_none()
            && self.settings.is_none()
            && self.vocabulary.is_none()
            && self.glossary.is_none()
    }
}

fn read(path: &Path) -> Result<String, EngineError> {
    fs::read_to_string(path).map_err(|e| EngineError::io(path, e))
}

/// Custom sources read from disk and validated, not yet installed.
struct LoadedSources {
    mapping: Option<String>,
    settings: Option<String>,
    vocabulary: CustomSources,
}

impl LoadedSources {
    fn load(config: &StartupConfig) -> Result<Self, EngineError> {
        let loaded = Self {
            mapping: config.mapping.as_deref().map(read).transpose()?,
            settings: config.settings.as_deref().map(read).transpose()?,
            vocabulary: CustomSources {
                curated_toml: config.vocabulary.as_deref().map(read).transpose()?,
                glossary: config.glossary.as_deref().map(read).transpose()?,
            },
        };
        if let Some(toml) = &loaded.mapping {
            parse_mapping_toml(toml).map_err(EngineError::invalid)?;
        }
        if let Some(toml) = &loaded.settings {
            settings::parse_settings_toml(toml).map_err(EngineError::invalid)?;
        }
        if let Some(toml) = &loaded.vocabulary.curated_toml {
            vocab::parse_curated_toml(toml).map_err(EngineError::invalid)?;
        }
        Ok(loaded)
    }

    fn has_vocabulary(&self) -> bool {
        self.vocabulary.curated_toml.is_some() || self.vocabulary.glossary.is_some()
    }

    /// All-or-nothing: refuse before installing if any target is taken.
    fn install(self) -> Result<(), EngineError> {
        if self.mapping.is_some() && CharacterMapper::is_initialized() {
            return Err(EngineError::invalid(MappingConfigError::AlreadyInitialized));
        }
        if self.settings.is_some() && settings::is_initialized() {
            return Err(EngineError::invalid(SettingsError::AlreadyInitialized));
        }
        if self.has_vocabulary() && vocab::is_initialized() {
            return Err(EngineError::invalid(VocabularyError::AlreadyInitialized));
        }

        let has_vocabulary = self.has_vocabulary();
        if let Some(toml) = self.mapping {
            CharacterMapper::init_custom(toml).map_err(EngineError::invalid)?;
        }
        if let Some(toml) = self.settings {
            settings::init_custom(toml).map_err(EngineError::invalid)?;
        }
        if has_vocabulary {
            vocab::init_custom(self.vocabulary).map_err(EngineError::invalid)?;
        }
        Ok(())
    }
}

/// Read-only handle to the initialized vocabulary and mapper.
#[derive(Debug, Clone, Copy)]
pub struct Engine {
    vocab: &'static Vocabulary,
    mapper: &'static CharacterMapper,
    report: &'static IngestReport,
}

impl Engine {
    /// Install custom sources (if any) and build the vocabulary.
    ///
    /// Every file is read and validated before anything is installed, so a
    /// failed startup leaves the globals untouched and can be retried. A
    /// custom startup after the globals are in use (or a second custom
    /// startup) fails with `InvalidData`.
    pub fn startup(config: StartupConfig) -> Result<Self, EngineError> {
        let _span = info_span!("startup").entered();

        if !config.is_default() {
            LoadedSources::load(&config)?.install()?;
        }

        let engine = Self::current();
        debug!(
            entries = engine.vocab.len(),
            malformed = engine.report.parse.malformed_count(),
            duplicates = engine.report.merge.duplicate_count()
        );
        Ok(engine)
    }

    /// Handle over the global state, initializing it from defaults if needed.
    pub fn current() -> Self {
        Self {
            vocab: Vocabulary::global(),
            mapper: CharacterMapper::global(),
            report: vocab::ingest_report(),
        }
    }

    pub fn vocabulary(&self) -> &'static Vocabulary {
        self.vocab
    }

    pub fn report(&self) -> &'static IngestReport {
        self.report
    }

    pub fn summary(&self) -> VocabularySummary {
        VocabularySummary::new(self.vocab, self.report)
    }

    pub fn transliterate(&self, text: &str) -> String {
        self.mapper.transliterate(text)
    }

    /// Exact English lookup, ignoring case.
    pub fn lookup(&self, english: &str) -> Vec<&'static VocabularyEntry> {
        self.vocab.find_english(english)
    }

    /// Prefix search capped at `search.max_results`.
    pub fn search(&self, query: &str) -> Vec<&'static VocabularyEntry> {
        self.vocab.search(query, settings().search.max_results)
    }

    /// Entries of one category, empty for an unknown name.
    pub fn category(&self, name: &str) -> &'static [VocabularyEntry] {
        self.vocab
            .category(name)
            .map(|c| c.entries.as_slice())
            .unwrap_or(&[])
    }
}
