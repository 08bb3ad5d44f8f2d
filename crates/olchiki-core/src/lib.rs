pub mod glossary;
pub mod settings;
pub mod translit;
pub mod unicode;
pub mod vocab;
