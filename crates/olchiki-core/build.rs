/// Embedded data files and the top-level key each must carry.
const EMBEDDED: &[(&str, &str, &str)] = &[
    (
        "src/default_settings.toml",
        include_str!("src/default_settings.toml"),
        "glossary",
    ),
    (
        "src/translit/default_mapping.toml",
        include_str!("src/translit/default_mapping.toml"),
        "mappings",
    ),
    (
        "src/vocab/default_vocabulary.toml",
        include_str!("src/vocab/default_vocabulary.toml"),
        "category",
    ),
];

fn main() {
    for (path, content, key) in EMBEDDED {
        println!("cargo:rerun-if-changed={path}");
        match content.parse::<toml::Table>() {
            Ok(table) if table.contains_key(*key) => {}
            Ok(_) => panic!("{path} has no `{key}` entry"),
            Err(e) => panic!("{path} is not valid TOML: {e}"),
        }
    }
}
