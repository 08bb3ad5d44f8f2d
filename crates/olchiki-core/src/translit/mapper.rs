use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use tracing::{debug, debug_span};

use super::config::{parse_mapping_toml, MappingConfigError};
use super::table::DEFAULT_TOML;

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();
static INSTANCE: OnceLock<CharacterMapper> = OnceLock::new();

struct Pattern {
    chars: Vec<char>,
    glyph: String,
}

/// Longest-match substitution table from Romanized text to Ol Chiki.
///
/// Patterns are kept sorted by descending length in chars. The sort is stable,
/// so equal-length patterns stay in declared order and the first one wins.
pub struct CharacterMapper {
    patterns: Vec<Pattern>,
    /// First char → indices into `patterns`, in match-priority order.
    by_first: HashMap<char, Vec<usize>>,
}

impl CharacterMapper {
    /// Build a mapper from `(pattern, glyph)` pairs in declared order.
    ///
    /// Empty patterns are ignored. A pattern declared twice keeps its first glyph.
    pub fn new<I, P, G>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (P, G)>,
        P: Into<String>,
        G: Into<String>,
    {
        let mut patterns: Vec<Pattern> = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();
        for (pattern, glyph) in pairs {
            let pattern = pattern.into();
            if pattern.is_empty() {
                continue;
            }
            if !seen.insert(pattern.clone()) {
                debug!(pattern = %pattern, "shadowed duplicate pattern dropped");
                continue;
            }
            patterns.push(Pattern {
                chars: pattern.chars().collect(),
                glyph: glyph.into(),
            });
        }
        patterns.sort_by(|a, b| b.chars.len().cmp(&a.chars.len()));

        let mut by_first: HashMap<char, Vec<usize>> = HashMap::new();
        for (idx, p) in patterns.iter().enumerate() {
            by_first.entry(p.chars[0]).or_default().push(idx);
        }

        Self { patterns, by_first }
    }

    /// Parse a TOML mapping table and build a mapper from it.
    pub fn from_toml(toml_str: &str) -> Result<Self, MappingConfigError> {
        Ok(Self::new(parse_mapping_toml(toml_str)?))
    }

    /// Set a custom TOML table before the first `global()` call.
    ///
    /// Fails with `AlreadyInitialized` once a custom table is set or the
    /// global mapper has been built.
    pub fn init_custom(toml_content: String) -> Result<(), MappingConfigError> {
        parse_mapping_toml(&toml_content)?;
        if INSTANCE.get().is_some() {
            return Err(MappingConfigError::AlreadyInitialized);
        }
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| MappingConfigError::AlreadyInitialized)
    }

    /// Whether `init_custom` would be refused.
    pub fn is_initialized() -> bool {
        INSTANCE.get().is_some() || CUSTOM_TOML.get().is_some()
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static CharacterMapper {
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_TOML);
            CharacterMapper::from_toml(toml_str).expect("mapping TOML must be valid")
        })
    }

    /// Number of distinct patterns.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Patterns in match-priority order (longest first).
    pub fn patterns(&self) -> impl Iterator<Item = (String, &str)> + '_ {
        self.patterns
            .iter()
            .map(|p| (p.chars.iter().collect(), p.glyph.as_str()))
    }

    /// Longest match at char position `pos`, as `(glyph, matched_len_in_chars)`.
    ///
    /// Collects `input` on every call; scans should use [`Self::lookup_chars`].
    pub fn lookup_at(&self, input: &str, pos: usize) -> Option<(&str, usize)> {
        let chars: Vec<char> = input.chars().collect();
        self.lookup_chars(&chars, pos)
    }

    /// Same as [`Self::lookup_at`] over pre-split chars.
    pub fn lookup_chars(&self, chars: &[char], pos: usize) -> Option<(&str, usize)> {
        let first = chars.get(pos)?;
        let candidates = self.by_first.get(first)?;
        let rest = &chars[pos..];
        candidates.iter().find_map(|&idx| {
            let p = &self.patterns[idx];
            rest.starts_with(&p.chars)
                .then(|| (p.glyph.as_str(), p.chars.len()))
        })
    }

    /// Transliterate `input`, copying characters without a mapping verbatim.
    pub fn transliterate(&self, input: &str) -> String {
        let chars: Vec<char> = input.chars().collect();
        let mut out = String::with_capacity(input.len() * 2);
        let mut pos = 0;
        while pos < chars.len() {
            match self.lookup_chars(&chars, pos) {
                Some((glyph, len)) => {
                    out.push_str(glyph);
                    pos += len;
                }
                None => {
                    out.push(chars[pos]);
                    pos += 1;
                }
            }
        }
        out
    }

    /// Characters of `input` that `transliterate` would copy through unchanged.
    pub fn unmapped(&self, input: &str) -> Vec<char> {
        let _span = debug_span!("unmapped", input).entered();
        let chars: Vec<char> = input.chars().collect();
        let mut missing = Vec::new();
        let mut pos = 0;
        while pos < chars.len() {
            match self.lookup_chars(&chars, pos) {
                Some((_, len)) => pos += len,
                None => {
                    missing.push(chars[pos]);
                    pos += 1;
                }
            }
        }
        missing
    }
}

impl std::fmt::Debug for CharacterMapper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CharacterMapper")
            .field("patterns", &self.patterns.len())
            .finish()
    }
}
