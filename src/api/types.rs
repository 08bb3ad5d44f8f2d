use serde::Serialize;

use olchiki_core::vocab::{IngestReport, Vocabulary};

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("IO error: {msg}")]
    Io { msg: String },
    #[error("invalid data: {msg}")]
    InvalidData { msg: String },
}

impl EngineError {
    pub(crate) fn io(path: &std::path::Path, e: std::io::Error) -> Self {
        Self::Io {
            msg: format!("{}: {e}", path.display()),
        }
    }

    pub(crate) fn invalid(e: impl std::fmt::Display) -> Self {
        Self::InvalidData { msg: e.to_string() }
    }
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    pub name: String,
    pub entries: usize,
}

/// Counts a UI can show without walking the vocabulary itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VocabularySummary {
    pub categories: Vec<CategorySummary>,
    pub entries: usize,
    pub curated: usize,
    pub glossary_lines: usize,
    pub glossary_accepted: usize,
    pub duplicates: usize,
    pub malformed: usize,
    pub unmapped: usize,
}

impl VocabularySummary {
    pub fn new(vocab: &Vocabulary, report: &IngestReport) -> Self {
        Self {
            categories: vocab
                .categories()
                .iter()
                .map(|c| CategorySummary {
                    name: c.name.clone(),
                    entries: c.entries.len(),
                })
                .collect(),
            entries: vocab.len(),
            curated: report.curated.accepted,
            glossary_lines: report.parse.total_lines,
            glossary_accepted: report.merge.accepted,
            duplicates: report.curated.duplicate_count() + report.merge.duplicate_count(),
            malformed: report.parse.malformed_count(),
            unmapped: report.unmapped.len(),
        }
    }
}
