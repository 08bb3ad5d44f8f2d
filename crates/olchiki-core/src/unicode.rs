//! Character-level Unicode classification for Ol Chiki text.

/// Check the full Ol Chiki block (U+1C50..U+1C7F): digits, letters, modifiers
/// and the two mucaad punctuation marks.
pub fn is_ol_chiki(c: char) -> bool {
    ('\u{1C50}'..='\u{1C7F}').contains(&c)
}

/// Ol Chiki digits ᱐..᱙ (U+1C50..U+1C59).
pub fn is_ol_chiki_digit(c: char) -> bool {
    ('\u{1C50}'..='\u{1C59}').contains(&c)
}

/// Ol Chiki letters ᱚ..ᱯ (U+1C5A..U+1C77), excluding modifiers and punctuation.
pub fn is_ol_chiki_letter(c: char) -> bool {
    ('\u{1C5A}'..='\u{1C77}').contains(&c)
}

pub fn is_latin(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Characters allowed in rendered script: Ol Chiki plus the whitespace that
/// separates multi-word romanizations.
pub fn is_script_char(c: char) -> bool {
    is_ol_chiki(c) || c.is_whitespace()
}

/// Check whether rendered script is fully Ol Chiki.
pub fn is_ol_chiki_text(s: &str) -> bool {
    s.chars().any(is_ol_chiki) && s.chars().all(is_script_char)
}

/// Convert an Ol Chiki numeral string to ASCII digits.
/// Non-digit characters are passed through unchanged.
pub fn ol_chiki_digits_to_ascii(s: &str) -> String {
    s.chars()
        .map(|c| {
            if is_ol_chiki_digit(c) {
                char::from_u32(c as u32 - 0x1C50 + '0' as u32).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}
