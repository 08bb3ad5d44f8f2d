use olchiki_core::vocab::{Vocabulary, VocabularyEntry};
use olchiki_engine::{Engine, VocabularySummary};

use super::{table, CliError};

pub fn format_summary(summary: &VocabularySummary) -> String {
    let mut out = String::new();
    for c in &summary.categories {
        out.push_str(&format!("{}\t{}\n", c.name, c.entries));
    }
    out.push_str("---\n");
    out.push_str(&format!(
        "{} entries ({} curated, {} from {} glossary lines)\n",
        summary.entries, summary.curated, summary.glossary_accepted, summary.glossary_lines
    ));
    out.push_str(&format!(
        "{} duplicates, {} malformed, {} unmapped\n",
        summary.duplicates, summary.malformed, summary.unmapped
    ));
    out
}

/// Full vocabulary as pretty JSON, categories in order.
pub fn export_json(vocab: &Vocabulary) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(vocab)?)
}

pub fn build(engine: &Engine, json: bool) {
    if json {
        println!("{}", die!(export_json(engine.vocabulary()), "Error: {}"));
    } else {
        print!("{}", format_summary(&engine.summary()));
    }
}

pub fn format_entries(entries: &[&VocabularyEntry]) -> String {
    if entries.is_empty() {
        return "(no matches)\n".to_string();
    }
    let rows: Vec<Vec<String>> = entries
        .iter()
        .map(|e| {
            vec![
                e.english.clone(),
                e.romanization.clone(),
                e.script.clone(),
                e.category.clone(),
            ]
        })
        .collect();
    table::render(&["english", "romanization", "script", "category"], &rows)
}

/// Exact English matches first, then prefix hits not already shown.
pub fn lookup_entries(engine: &Engine, query: &str, n: usize) -> Vec<&'static VocabularyEntry> {
    let mut hits = engine.lookup(query);
    for e in engine.search(query) {
        if !hits.iter().any(|h| std::ptr::eq(*h, e)) {
            hits.push(e);
        }
    }
    hits.truncate(n);
    hits
}

pub fn lookup(engine: &Engine, query: &str, n: usize) {
    print!("{}", format_entries(&lookup_entries(engine, query, n)));
}

pub fn categories(engine: &Engine, name: Option<&str>) {
    match name {
        Some(name) => {
            let entries: Vec<&VocabularyEntry> = engine.category(name).iter().collect();
            if entries.is_empty() {
                eprintln!("Unknown category: {name}");
                std::process::exit(1);
            }
            print!("{}", format_entries(&entries));
        }
        None => {
            for c in engine.vocabulary().categories() {
                println!("{}\t{}", c.name, c.entries.len());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_of_default_vocabulary() {
        let out = format_summary(&Engine::current().summary());
        assert!(out.starts_with("Greetings\t"));
        assert!(out.contains("Glossary\t44\n"));
        assert!(out.contains("78 entries (34 curated, 44 from 96 glossary lines)\n"));
        assert!(out.ends_with("17 duplicates, 0 malformed, 1 unmapped\n"));
    }

    #[test]
    fn json_export_keeps_category_order() {
        let json = export_json(Engine::current().vocabulary()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let cats = value["categories"].as_array().unwrap();
        assert_eq!(cats.len(), 7);
        assert_eq!(cats[0]["name"], "Greetings");
        assert_eq!(cats[6]["name"], "Glossary");
        assert!(value.get("policy").is_none());
    }

    #[test]
    fn lookup_exact_before_prefix() {
        let engine = Engine::current();
        let hits = lookup_entries(&engine, "bird", 10);
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|e| e.english == "bird"));

        let hits = lookup_entries(&engine, "bi", 2);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].english, "bird");
    }

    #[test]
    fn format_no_matches() {
        assert_eq!(format_entries(&[]), "(no matches)\n");
    }

    #[test]
    fn format_table_has_header() {
        let engine = Engine::current();
        let out = format_entries(&engine.lookup("dog"));
        let mut lines = out.lines();
        assert!(lines.next().unwrap().starts_with("english"));
        assert!(out.contains("ᱥᱮᱛᱟ"));
    }
}
