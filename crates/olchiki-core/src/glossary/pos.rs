use serde::{Deserialize, Serialize};

/// Part-of-speech abbreviations recognized at the start of a glossary entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartOfSpeech {
    Noun,
    Adjective,
    TransitiveVerb,
    IntransitiveVerb,
    Adverb,
}

const TOKENS: [(&str, PartOfSpeech); 5] = [
    ("n.", PartOfSpeech::Noun),
    ("adj.", PartOfSpeech::Adjective),
    ("vt.", PartOfSpeech::TransitiveVerb),
    ("vi.", PartOfSpeech::IntransitiveVerb),
    ("adv.", PartOfSpeech::Adverb),
];

impl PartOfSpeech {
    /// Glossary abbreviation, e.g. `"adj."`.
    pub fn abbrev(self) -> &'static str {
        TOKENS
            .iter()
            .find(|(_, pos)| *pos == self)
            .map(|(token, _)| *token)
            .unwrap_or("")
    }

    pub fn from_abbrev(token: &str) -> Option<Self> {
        TOKENS
            .iter()
            .find(|(t, _)| *t == token)
            .map(|(_, pos)| *pos)
    }

    /// Split a leading abbreviation off `s`, returning it and the remainder.
    pub(crate) fn split_prefix(s: &str) -> Option<(Self, &str)> {
        TOKENS
            .iter()
            .find_map(|(token, pos)| s.strip_prefix(token).map(|rest| (*pos, rest)))
    }
}

impl std::fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.abbrev())
    }
}
