use std::path::Path;

use olchiki_core::settings::{self, parse_settings_toml, Settings};
use olchiki_core::translit::{CharacterMapper, DEFAULT_TOML};
use olchiki_core::vocab::{parse_curated_toml, CuratedCategory, DEFAULT_VOCABULARY_TOML};

use super::read_file;

pub fn mapping_export() {
    print!("{DEFAULT_TOML}");
}

pub fn mapping_validate(file: &Path) {
    let content = die!(read_file(file), "Error: {}");
    let mapper = die!(CharacterMapper::from_toml(&content), "Error: {}");
    println!("OK: {} mappings", mapper.len());
}

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

pub fn format_settings(s: &Settings) -> String {
    format!(
        "OK: glossary.category={}, dedup.case_insensitive={}, search.max_results={}",
        s.glossary.category, s.dedup.case_insensitive, s.search.max_results
    )
}

pub fn settings_validate(file: &Path) {
    let content = die!(read_file(file), "Error: {}");
    let s = die!(parse_settings_toml(&content), "Error: {}");
    println!("{}", format_settings(&s));
}

pub fn vocab_export() {
    print!("{DEFAULT_VOCABULARY_TOML}");
}

pub fn format_curated(categories: &[CuratedCategory]) -> String {
    let entries: usize = categories.iter().map(|c| c.entries.len()).sum();
    format!("OK: {} categories, {entries} entries", categories.len())
}

pub fn vocab_validate(file: &Path) {
    let content = die!(read_file(file), "Error: {}");
    let categories = die!(parse_curated_toml(&content), "Error: {}");
    println!("{}", format_curated(&categories));
}
