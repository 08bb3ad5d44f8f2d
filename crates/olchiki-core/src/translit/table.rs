/// Embedded default Romanization table.
pub const DEFAULT_TOML: &str = include_str!("default_mapping.toml");
