use olchiki_core::translit::CharacterMapper;
use olchiki_engine::Engine;

/// One step of the longest-match scan.
#[derive(Debug, PartialEq, Eq)]
pub struct Segment {
    pub source: String,
    /// `None` when the character passed through unmapped.
    pub glyph: Option<String>,
}

/// Replay the mapper's scan, recording what each step consumed.
pub fn explain(mapper: &CharacterMapper, text: &str) -> Vec<Segment> {
    let chars: Vec<char> = text.chars().collect();
    let mut segments = Vec::new();
    let mut pos = 0;
    while pos < chars.len() {
        match mapper.lookup_chars(&chars, pos) {
            Some((glyph, len)) => {
                segments.push(Segment {
                    source: chars[pos..pos + len].iter().collect(),
                    glyph: Some(glyph.to_string()),
                });
                pos += len;
            }
            None => {
                segments.push(Segment {
                    source: chars[pos].to_string(),
                    glyph: None,
                });
                pos += 1;
            }
        }
    }
    segments
}

pub fn format_explain(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(|s| match &s.glyph {
            Some(g) => format!("{} → {}\n", s.source, g),
            None => format!("{} (unmapped)\n", s.source),
        })
        .collect()
}

pub fn translit(engine: &Engine, text: &str, show_steps: bool) {
    println!("{}", engine.transliterate(text));
    if show_steps {
        print!("{}", format_explain(&explain(CharacterMapper::global(), text)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explain_splits_longest_first() {
        let mapper = CharacterMapper::new([("NG", "ᱝ"), ("N", "ᱬ"), ("a", "ᱟ")]);
        let segs = explain(&mapper, "aNGx");
        assert_eq!(
            segs,
            vec![
                Segment { source: "a".into(), glyph: Some("ᱟ".into()) },
                Segment { source: "NG".into(), glyph: Some("ᱝ".into()) },
                Segment { source: "x".into(), glyph: None },
            ]
        );
        let concat: String = segs
            .iter()
            .map(|s| s.glyph.clone().unwrap_or_else(|| s.source.clone()))
            .collect();
        assert_eq!(concat, mapper.transliterate("aNGx"));
    }

    #[test]
    fn explain_long_input() {
        let mapper = CharacterMapper::new([("NG", "ᱝ"), ("a", "ᱟ")]);
        let text = "aNG".repeat(2_000);
        let segs = explain(&mapper, &text);
        assert_eq!(segs.len(), 4_000);
        assert!(segs.iter().all(|s| s.glyph.is_some()));
    }

    #[test]
    fn format_marks_unmapped() {
        let segs = vec![
            Segment { source: "k'".into(), glyph: Some("ᱜ".into()) },
            Segment { source: "?".into(), glyph: None },
        ];
        assert_eq!(format_explain(&segs), "k' → ᱜ\n? (unmapped)\n");
    }
}
