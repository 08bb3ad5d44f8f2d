use std::path::Path;

use olchiki_core::glossary::{parse_glossary, ParseReport, ParsedEntry};
use olchiki_core::vocab::UnmappedEntry;
use olchiki_engine::Engine;

use super::{read_file, CliError};

pub fn parse_file(path: &Path) -> Result<(Vec<ParsedEntry>, ParseReport), CliError> {
    let text = read_file(path)?;
    Ok(parse_glossary(&text))
}

/// One TSV row per entry: line number, English, romanization, POS tags.
pub fn format_entries(entries: &[ParsedEntry]) -> String {
    let mut out = String::new();
    for e in entries {
        let pos: Vec<&str> = e.pos.iter().map(|p| p.abbrev()).collect();
        out.push_str(&format!(
            "{}\t{}\t{}\t{}\n",
            e.line_no,
            e.english,
            e.romanization,
            pos.join(" ")
        ));
    }
    out
}

pub fn format_report(report: &ParseReport, show_malformed: bool) -> String {
    let mut out = format!(
        "{} lines: {} entries, {} headers, {} blank, {} malformed\n",
        report.total_lines,
        report.entries,
        report.headers,
        report.blank,
        report.malformed_count()
    );
    if show_malformed {
        for (line_no, reason) in &report.malformed {
            out.push_str(&format!("  line {line_no}: {}\n", reason.as_str()));
        }
    }
    out
}

pub fn parse(file: &Path, show_malformed: bool) {
    let (entries, report) = die!(parse_file(file), "Error: {}");
    print!("{}", format_entries(&entries));
    println!("---");
    print!("{}", format_report(&report, show_malformed));
}

pub fn format_audit(unmapped: &[UnmappedEntry]) -> String {
    if unmapped.is_empty() {
        return "OK: every script is pure Ol Chiki\n".to_string();
    }
    let mut out = String::new();
    for u in unmapped {
        let chars: String = u.chars.iter().map(|c| format!("{c:?} ")).collect();
        let kind = if u.has_latin() { "latin" } else { "other" };
        out.push_str(&format!(
            "[{}] {} / {}: {}({kind})\n",
            u.category, u.english, u.romanization, chars
        ));
    }
    out.push_str(&format!("{} entries with unmapped characters\n", unmapped.len()));
    out
}

pub fn audit(engine: &Engine) {
    let unmapped = &engine.report().unmapped;
    print!("{}", format_audit(unmapped));
    if unmapped.iter().any(UnmappedEntry::has_latin) {
        std::process::exit(2);
    }
}
