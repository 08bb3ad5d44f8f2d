//! Romanized-Santali-to-Ol-Chiki transliteration.
//!
//! A fixed, case-sensitive substitution table is scanned longest-pattern-first,
//! so digraphs such as `ng` always win over their one-letter components.
//! Characters without a mapping pass through unchanged.

mod config;
mod mapper;
#[cfg(test)]
mod proptests;
mod table;

pub use config::{parse_mapping_toml, MappingConfigError};
pub use mapper::CharacterMapper;
pub use table::DEFAULT_TOML;
