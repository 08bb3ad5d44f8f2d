//! Ol Chiki learner-vocabulary engine.
//!
//! The application start path calls [`Engine::startup`] once; after that the
//! vocabulary is frozen and every accessor is a shared read.

pub mod api;
mod trace_init;

pub use api::{Engine, EngineError, StartupConfig, VocabularySummary};
pub use olchiki_core::{glossary, settings, translit, unicode, vocab};
pub use trace_init::init_tracing;
