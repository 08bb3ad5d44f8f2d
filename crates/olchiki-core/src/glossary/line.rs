//! Single-line glossary grammar:
//!
//! `english[ (aside)] – pos. roman1[; roman2[, roman3]];`
//!
//! Each cleanup rule is its own function so the order they run in stays
//! visible at the call site in [`classify_line`].

use super::pos::PartOfSpeech;

/// Separator between the English gloss and the details (spaced en dash).
pub const SEPARATOR: &str = " – ";

/// A glossary entry before transliteration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedEntry {
    /// 1-based line number in the source text.
    pub line_no: usize,
    pub english: String,
    pub romanization: String,
    pub pos: Vec<PartOfSpeech>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MalformedReason {
    MissingSeparator,
    EmptyEnglish,
    EmptyRomanization,
}

impl MalformedReason {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MissingSeparator => "missing separator",
            Self::EmptyEnglish => "empty english",
            Self::EmptyRomanization => "empty romanization",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    SectionHeader(char),
    Entry(ParsedEntry),
    Malformed(MalformedReason),
}

/// Remove `(...)` asides, nested ones included.
///
/// An unclosed `(` drops the rest of the text; a stray `)` is kept.
pub fn strip_parenthetical(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut depth = 0usize;
    for c in s.chars() {
        match c {
            '(' => depth += 1,
            ')' if depth > 0 => depth -= 1,
            _ if depth == 0 => out.push(c),
            _ => {}
        }
    }
    out
}

/// Strip a leading run of part-of-speech abbreviations such as `"n., adj. "`.
///
/// Every abbreviation must be followed by whitespace (optionally after a
/// comma) to count; otherwise the text is returned as-is from that point.
pub fn strip_leading_pos(details: &str) -> (Vec<PartOfSpeech>, &str) {
    let mut found = Vec::new();
    let mut rest = details.trim_start();
    while let Some((pos, after)) = PartOfSpeech::split_prefix(rest) {
        let after = after.strip_prefix(',').unwrap_or(after);
        let trimmed = after.trim_start();
        if trimmed.len() == after.len() {
            break;
        }
        found.push(pos);
        rest = trimmed;
    }
    (found, rest)
}

/// First `;`- or `,`-delimited candidate.
pub fn take_first_alternative(s: &str) -> &str {
    s.split([';', ',']).next().unwrap_or(s)
}

/// Trim and collapse internal whitespace runs to a single space.
pub fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// A lone ASCII letter marks the start of an alphabetical section.
fn section_header(trimmed: &str) -> Option<char> {
    let mut chars = trimmed.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => Some(c),
        _ => None,
    }
}

/// Classify one raw line. `line_no` is carried into the parsed entry.
pub fn classify_line(line: &str, line_no: usize) -> LineKind {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return LineKind::Blank;
    }
    if let Some(letter) = section_header(trimmed) {
        return LineKind::SectionHeader(letter);
    }

    let mut segments = trimmed.split(SEPARATOR);
    let english_raw = segments.next().unwrap_or_default();
    let details: Vec<&str> = segments.collect();
    if details.is_empty() {
        return LineKind::Malformed(MalformedReason::MissingSeparator);
    }
    // A romanization may itself contain the separator; keep it intact.
    let details = details.join(SEPARATOR);

    let english = normalize_whitespace(&strip_parenthetical(english_raw));
    if english.is_empty() {
        return LineKind::Malformed(MalformedReason::EmptyEnglish);
    }

    let (pos, details) = strip_leading_pos(&details);
    let candidate = take_first_alternative(details);
    let romanization = normalize_whitespace(&strip_parenthetical(candidate));
    if romanization.is_empty() {
        return LineKind::Malformed(MalformedReason::EmptyRomanization);
    }

    LineKind::Entry(ParsedEntry {
        line_no,
        english,
        romanization,
        pos,
    })
}

/// Parse a single line, discarding anything that is not an entry.
pub fn parse_line(line: &str) -> Option<ParsedEntry> {
    match classify_line(line, 1) {
        LineKind::Entry(entry) => Some(entry),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(line: &str) -> Option<(String, String)> {
        parse_line(line).map(|e| (e.english, e.romanization))
    }

    #[test]
    fn strip_parenthetical_cases() {
        assert_eq!(strip_parenthetical("kind (type)"), "kind ");
        assert_eq!(strip_parenthetical("a (b (c)) d"), "a  d");
        assert_eq!(strip_parenthetical("no asides"), "no asides");
        assert_eq!(strip_parenthetical("ToRon (a"), "ToRon ");
        assert_eq!(strip_parenthetical("x) y"), "x) y");
    }

    #[test]
    fn strip_leading_pos_single() {
        let (pos, rest) = strip_leading_pos("vt. SELED;");
        assert_eq!(pos, vec![PartOfSpeech::TransitiveVerb]);
        assert_eq!(rest, "SELED;");
    }

    #[test]
    fn strip_leading_pos_run() {
        let (pos, rest) = strip_leading_pos("n., adj. moME; moME GotEJ;");
        assert_eq!(pos, vec![PartOfSpeech::Noun, PartOfSpeech::Adjective]);
        assert_eq!(rest, "moME; moME GotEJ;");
    }

    #[test]
    fn strip_leading_pos_needs_whitespace() {
        let (pos, rest) = strip_leading_pos("adj.moME");
        assert!(pos.is_empty());
        assert_eq!(rest, "adj.moME");
    }

    #[test]
    fn strip_leading_pos_absent() {
        let (pos, rest) = strip_leading_pos("  nani;");
        assert!(pos.is_empty());
        assert_eq!(rest, "nani;");
    }

    #[test]
    fn take_first_alternative_cases() {
        assert_eq!(take_first_alternative("moME; moME GotEJ;"), "moME");
        assert_eq!(take_first_alternative("a, b; c"), "a");
        assert_eq!(take_first_alternative("single"), "single");
        assert_eq!(take_first_alternative(";x"), "");
    }

    #[test]
    fn normalize_whitespace_collapses() {
        assert_eq!(normalize_whitespace("  give   up "), "give up");
        assert_eq!(normalize_whitespace("   "), "");
    }

    #[test]
    fn parenthetical_stripped_from_english() {
        assert_eq!(
            pair("kind (type) – n. ToRon;"),
            Some(("kind".into(), "ToRon".into()))
        );
    }

    #[test]
    fn first_alternative_selected() {
        assert_eq!(pair("add – vt. SELED;"), Some(("add".into(), "SELED".into())));
        assert_eq!(
            pair("five – n., adj. moME; moME GotEJ;"),
            Some(("five".into(), "moME".into()))
        );
    }

    #[test]
    fn comma_alternative_selected() {
        assert_eq!(
            pair("slowly – adv. dhiri, dhire;"),
            Some(("slowly".into(), "dhiri".into()))
        );
    }

    #[test]
    fn parenthetical_stripped_from_romanization() {
        assert_eq!(
            pair("eat – vt. jOm (food); nU;"),
            Some(("eat".into(), "jOm".into()))
        );
    }

    #[test]
    fn section_header_rejected() {
        assert_eq!(classify_line("a", 3), LineKind::SectionHeader('a'));
        assert_eq!(classify_line(" B ", 3), LineKind::SectionHeader('B'));
        assert_eq!(parse_line("b"), None);
    }

    #[test]
    fn blank_line() {
        assert_eq!(classify_line("", 1), LineKind::Blank);
        assert_eq!(classify_line("  \t ", 1), LineKind::Blank);
    }

    #[test]
    fn missing_separator_rejected() {
        assert_eq!(
            classify_line("dog n. SETA;", 1),
            LineKind::Malformed(MalformedReason::MissingSeparator)
        );
        // hyphen instead of en dash
        assert_eq!(parse_line("dog - n. SETA;"), None);
        // en dash without surrounding spaces
        assert_eq!(parse_line("dog–n. SETA;"), None);
    }

    #[test]
    fn empty_english_rejected() {
        assert_eq!(
            classify_line("(aside) – n. SETA;", 1),
            LineKind::Malformed(MalformedReason::EmptyEnglish)
        );
    }

    #[test]
    fn empty_romanization_rejected() {
        assert_eq!(
            classify_line("dog – n. ;", 1),
            LineKind::Malformed(MalformedReason::EmptyRomanization)
        );
        assert_eq!(
            classify_line("dog – n. (unknown);", 1),
            LineKind::Malformed(MalformedReason::EmptyRomanization)
        );
    }

    #[test]
    fn separator_inside_details_rejoined() {
        let entry = parse_line("road – n. hOr – hOr;").unwrap();
        assert_eq!(entry.romanization, "hOr – hOr");
    }

    #[test]
    fn pos_recorded() {
        let entry = parse_line("five – n., adj. moME;").unwrap();
        assert_eq!(entry.pos, vec![PartOfSpeech::Noun, PartOfSpeech::Adjective]);
        let entry = parse_line("water – dak';").unwrap();
        assert!(entry.pos.is_empty());
        assert_eq!(entry.romanization, "dak'");
    }

    #[test]
    fn single_non_letter_is_not_header() {
        assert_eq!(
            classify_line("7", 1),
            LineKind::Malformed(MalformedReason::MissingSeparator)
        );
    }

    #[test]
    fn line_no_is_kept() {
        match classify_line("dog – n. seta;", 42) {
            LineKind::Entry(e) => assert_eq!(e.line_no, 42),
            other => panic!("expected entry, got {other:?}"),
        }
    }

    #[test]
    fn alternative_split_runs_before_aside_removal() {
        // The comma inside the aside ends the first candidate; the unclosed
        // `(` then drops the tail.
        assert_eq!(
            pair("eat – vt. jOm (food, drink); nU"),
            Some(("eat".to_string(), "jOm".to_string()))
        );
        // A leading aside with a comma leaves nothing behind.
        assert_eq!(
            classify_line("eat – (food, drink) jOm;", 1),
            LineKind::Malformed(MalformedReason::EmptyRomanization)
        );
    }
}
