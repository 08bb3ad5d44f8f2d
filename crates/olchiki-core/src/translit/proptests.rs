//! Property tests for the longest-match mapper.

use proptest::prelude::*;

use super::CharacterMapper;

fn small_table() -> CharacterMapper {
    CharacterMapper::new([
        ("NG", "ᱝ"),
        ("N", "ᱬ"),
        ("G", "ᱜ"),
        ("a", "ᱟ"),
        ("ny", "ᱧ"),
        ("n", "ᱱ"),
    ])
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Same input, same output.
    #[test]
    fn transliterate_is_pure(input in "\\PC{0,24}") {
        let m = CharacterMapper::global();
        prop_assert_eq!(m.transliterate(&input), m.transliterate(&input));
    }

    /// Text with no mapped characters comes back untouched.
    #[test]
    fn unmapped_text_passes_through(input in "[xzq!?.\\- ]{0,24}") {
        let m = small_table();
        prop_assert_eq!(m.transliterate(&input), input.clone());
        prop_assert_eq!(m.unmapped(&input).len(), input.chars().count());
    }

    /// Every `NG` in the input becomes one ᱝ, never ᱬᱜ.
    #[test]
    fn digraph_never_split(parts in prop::collection::vec("(NG|N|G|a|x)", 0..16)) {
        let input: String = parts.concat();
        let out = small_table().transliterate(&input);
        prop_assert!(!out.contains("ᱬᱜ"));
        prop_assert_eq!(out.matches('ᱝ').count(), input.matches("NG").count());
    }

    /// Output is the concatenation of per-token output when tokens cannot
    /// combine across their boundaries.
    #[test]
    fn mapping_is_compositional(a in "[ax ]{0,8}", b in "[ax ]{0,8}") {
        let m = small_table();
        let joined = format!("{a}{b}");
        prop_assert_eq!(m.transliterate(&joined), m.transliterate(&a) + &m.transliterate(&b));
    }
}
