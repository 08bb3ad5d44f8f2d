//! Application-facing API: startup, read accessors and config helpers.

mod engine;
mod types;

pub use engine::{Engine, StartupConfig};
pub use types::{CategorySummary, EngineError, VocabularySummary};

use olchiki_core::glossary::DEFAULT_GLOSSARY;
use olchiki_core::translit::{CharacterMapper, DEFAULT_TOML};
use olchiki_core::vocab::DEFAULT_VOCABULARY_TOML;

// ---------------------------------------------------------------------------
// Top-level functions
// ---------------------------------------------------------------------------

pub fn engine_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Transliterate with the global mapper, without building the vocabulary.
pub fn transliterate(text: &str) -> String {
    CharacterMapper::global().transliterate(text)
}

pub fn mapping_default_config() -> &'static str {
    DEFAULT_TOML
}

pub fn settings_default_config() -> &'static str {
    olchiki_core::settings::default_toml()
}

pub fn vocabulary_default_config() -> &'static str {
    DEFAULT_VOCABULARY_TOML
}

pub fn glossary_default_text() -> &'static str {
    DEFAULT_GLOSSARY
}
