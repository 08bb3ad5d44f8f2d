//! Subcommand bodies for `glosstool`.
//!
//! Formatting lives in pure `format_*` functions so output can be tested
//! without capturing stdout; the command functions print and exit on error.

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            std::process::exit(1);
        })
    };
}

pub mod config_ops;
pub mod glossary_ops;
mod table;
pub mod translit_ops;
pub mod vocab_ops;

use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub(crate) fn read_file(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })
}
