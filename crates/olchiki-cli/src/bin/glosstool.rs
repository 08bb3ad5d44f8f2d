use std::path::PathBuf;

use clap::{Parser, Subcommand};

use olchiki_cli::commands::{config_ops, glossary_ops, translit_ops, vocab_ops};
use olchiki_engine::{init_tracing, Engine, StartupConfig};

#[derive(Parser)]
#[command(name = "glosstool", about = "Ol Chiki glossary and vocabulary tool")]
struct Cli {
    /// Custom mapping TOML (replaces the built-in table)
    #[arg(long, global = true)]
    mapping: Option<PathBuf>,
    /// Custom settings TOML
    #[arg(long, global = true)]
    settings: Option<PathBuf>,
    /// Custom curated vocabulary TOML
    #[arg(long, global = true)]
    vocab: Option<PathBuf>,
    /// Custom glossary text file
    #[arg(long, global = true)]
    glossary: Option<PathBuf>,
    /// Write JSON trace events to this directory (requires --features trace)
    #[arg(long, global = true)]
    trace: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Transliterate Romanized text to Ol Chiki
    Translit {
        /// Romanized input
        text: String,
        /// Show each matched pattern
        #[arg(long)]
        explain: bool,
    },
    /// Parse a glossary file and print its entries as TSV
    Parse {
        /// Glossary text file
        file: PathBuf,
        /// List skipped lines with their reason
        #[arg(long)]
        malformed: bool,
    },
    /// Build the vocabulary and print a summary
    Build {
        /// Print the whole vocabulary as JSON instead
        #[arg(long)]
        json: bool,
    },
    /// Look up an English word (exact matches, then prefix matches)
    Lookup {
        query: String,
        /// Maximum rows
        #[arg(short, long, default_value = "10")]
        n: usize,
    },
    /// List categories, or the entries of one category
    Categories {
        name: Option<String>,
    },
    /// Report entries whose script is not pure Ol Chiki (exit 2 on leftover Latin)
    Audit,
    /// Export the default mapping table as TOML
    MappingExport,
    /// Validate a custom mapping TOML file
    MappingValidate {
        /// Path to the TOML file
        file: PathBuf,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: PathBuf,
    },
    /// Export the default curated vocabulary as TOML
    VocabExport,
    /// Validate a custom curated vocabulary TOML file
    VocabValidate {
        /// Path to the TOML file
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Some(dir) = &cli.trace {
        init_tracing(dir);
    }

    let config = StartupConfig {
        mapping: cli.mapping,
        settings: cli.settings,
        vocabulary: cli.vocab,
        glossary: cli.glossary,
    };
    let engine = || {
        Engine::startup(config.clone()).unwrap_or_else(|e| {
            eprintln!("Error: {e}");
            std::process::exit(1);
        })
    };

    match cli.command {
        Command::Translit { text, explain } => translit_ops::translit(&engine(), &text, explain),
        Command::Parse { file, malformed } => glossary_ops::parse(&file, malformed),
        Command::Build { json } => vocab_ops::build(&engine(), json),
        Command::Lookup { query, n } => vocab_ops::lookup(&engine(), &query, n),
        Command::Categories { name } => vocab_ops::categories(&engine(), name.as_deref()),
        Command::Audit => glossary_ops::audit(&engine()),
        Command::MappingExport => config_ops::mapping_export(),
        Command::MappingValidate { file } => config_ops::mapping_validate(&file),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
        Command::VocabExport => config_ops::vocab_export(),
        Command::VocabValidate { file } => config_ops::vocab_validate(&file),
    }
}
