//! Canonical learner vocabulary.
//!
//! `Vocabulary` is an ordered list of categories, each an ordered list of
//! entries. No two entries anywhere share an [`IdentityKey`]; the only way to
//! add entries is [`merge_vocabulary`], which enforces that.

mod build;
mod curated;
mod merge;

pub use build::{
    audit_script, build_vocabulary, ingest_report, init_custom, is_initialized, CustomSources,
    IngestReport, UnmappedEntry,
};
pub use curated::{
    curated_vocabulary, parse_curated_toml, CuratedCategory, CuratedEntry, VocabularyError,
    DEFAULT_VOCABULARY_TOML,
};
pub use merge::{merge_vocabulary, MergeReport};

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::glossary::PartOfSpeech;

/// How english/romanization are normalized before comparing entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyPolicy {
    /// Lower-case both fields, so `SETA` and `seta` are the same entry.
    #[default]
    CaseInsensitive,
    Exact,
}

/// Deduplication identity of an entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IdentityKey {
    pub english: String,
    pub romanization: String,
}

impl IdentityKey {
    pub fn new(english: &str, romanization: &str, policy: KeyPolicy) -> Self {
        match policy {
            KeyPolicy::CaseInsensitive => Self {
                english: english.to_lowercase(),
                romanization: romanization.to_lowercase(),
            },
            KeyPolicy::Exact => Self {
                english: english.to_string(),
                romanization: romanization.to_string(),
            },
        }
    }
}

impl std::fmt::Display for IdentityKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} / {}", self.english, self.romanization)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    pub english: String,
    pub romanization: String,
    /// Ol Chiki rendering of `romanization`.
    pub script: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pos: Vec<PartOfSpeech>,
}

impl VocabularyEntry {
    pub fn key(&self, policy: KeyPolicy) -> IdentityKey {
        IdentityKey::new(&self.english, &self.romanization, policy)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub name: String,
    pub entries: Vec<VocabularyEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Vocabulary {
    categories: Vec<Category>,
    #[serde(skip)]
    policy: KeyPolicy,
}

impl Vocabulary {
    pub fn new(policy: KeyPolicy) -> Self {
        Self {
            categories: Vec::new(),
            policy,
        }
    }

    /// The init-once vocabulary built from embedded (or `init_custom`) sources.
    pub fn global() -> &'static Vocabulary {
        build::global_instance()
    }

    pub fn policy(&self) -> KeyPolicy {
        self.policy
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name.as_str())
    }

    /// All entries, category by category, in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = &VocabularyEntry> {
        self.categories.iter().flat_map(|c| c.entries.iter())
    }

    pub fn len(&self) -> usize {
        self.categories.iter().map(|c| c.entries.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, english: &str, romanization: &str) -> bool {
        let key = IdentityKey::new(english, romanization, self.policy);
        self.entries().any(|e| e.key(self.policy) == key)
    }

    /// Entries whose English gloss equals `query`, ignoring case and outer whitespace.
    pub fn find_english(&self, query: &str) -> Vec<&VocabularyEntry> {
        let query = query.trim().to_lowercase();
        self.entries()
            .filter(|e| e.english.to_lowercase() == query)
            .collect()
    }

    /// Entries rendered exactly as `script`.
    pub fn find_script(&self, script: &str) -> Vec<&VocabularyEntry> {
        let script = script.trim();
        self.entries().filter(|e| e.script == script).collect()
    }

    /// Case-insensitive prefix search: English matches first, then
    /// romanization matches, each in vocabulary order.
    pub fn search(&self, query: &str, max_results: usize) -> Vec<&VocabularyEntry> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }
        let by_english = self
            .entries()
            .filter(|e| e.english.to_lowercase().starts_with(&query));
        let by_roman = self.entries().filter(|e| {
            !e.english.to_lowercase().starts_with(&query)
                && e.romanization.to_lowercase().starts_with(&query)
        });
        by_english.chain(by_roman).take(max_results).collect()
    }

    pub(crate) fn key_set(&self) -> HashSet<IdentityKey> {
        self.entries().map(|e| e.key(self.policy)).collect()
    }

    /// Append to `name`, creating the category at the end on first use.
    pub(crate) fn push(&mut self, name: &str, entry: VocabularyEntry) {
        match self.categories.iter_mut().find(|c| c.name == name) {
            Some(cat) => cat.entries.push(entry),
            None => self.categories.push(Category {
                name: name.to_string(),
                entries: vec![entry],
            }),
        }
    }
}
