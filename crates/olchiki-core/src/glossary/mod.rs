//! Flat-text glossary ingestion.
//!
//! One entry per line, alphabetical section headers, `" – "` between the
//! English gloss and its Romanized translations. Lines that do not fit the
//! grammar are skipped and counted in a [`ParseReport`]; they never fail the
//! parse.

mod line;
mod pos;

pub use line::{
    classify_line, normalize_whitespace, parse_line, strip_leading_pos, strip_parenthetical,
    take_first_alternative, LineKind, MalformedReason, ParsedEntry, SEPARATOR,
};
pub use pos::PartOfSpeech;

use tracing::{debug, debug_span};

use crate::translit::CharacterMapper;
use crate::vocab::VocabularyEntry;

/// Embedded default glossary text.
pub const DEFAULT_GLOSSARY: &str = include_str!("default_glossary.txt");

/// Line-level statistics from one [`parse_glossary`] run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    pub total_lines: usize,
    pub blank: usize,
    pub headers: usize,
    pub entries: usize,
    /// `(line_no, reason)` for every skipped entry line, in input order.
    pub malformed: Vec<(usize, MalformedReason)>,
}

impl ParseReport {
    pub fn malformed_count(&self) -> usize {
        self.malformed.len()
    }

    pub fn count(&self, reason: MalformedReason) -> usize {
        self.malformed.iter().filter(|(_, r)| *r == reason).count()
    }
}

/// Parse every line of `text` into entries, in input order.
pub fn parse_glossary(text: &str) -> (Vec<ParsedEntry>, ParseReport) {
    let _span = debug_span!("parse_glossary", bytes = text.len()).entered();

    let mut entries = Vec::new();
    let mut report = ParseReport::default();

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        report.total_lines += 1;
        match classify_line(raw, line_no) {
            LineKind::Blank => report.blank += 1,
            LineKind::SectionHeader(_) => report.headers += 1,
            LineKind::Entry(entry) => {
                report.entries += 1;
                entries.push(entry);
            }
            LineKind::Malformed(reason) => {
                debug!(line_no, reason = reason.as_str(), line = raw, "skipped glossary line");
                report.malformed.push((line_no, reason));
            }
        }
    }

    debug!(
        total = report.total_lines,
        entries = report.entries,
        malformed = report.malformed_count()
    );
    (entries, report)
}

/// Render each parsed entry's romanization to Ol Chiki, tagging it with `category`.
pub fn map_to_script(
    entries: Vec<ParsedEntry>,
    mapper: &CharacterMapper,
    category: &str,
) -> Vec<VocabularyEntry> {
    let _span = debug_span!("map_to_script", count = entries.len()).entered();
    entries
        .into_iter()
        .map(|e| VocabularyEntry {
            script: mapper.transliterate(&e.romanization),
            english: e.english,
            romanization: e.romanization,
            category: category.to_string(),
            pos: e.pos,
        })
        .collect()
}
