//! Cyrillic-to-Latin transliteration.
//!
//! [`standard`] holds the named mapping tables, [`engine`] applies one of them
//! to text, and [`filter`] plugs the engine into an output pipeline.

pub mod engine;
pub mod filter;
pub mod settings;
pub mod standard;

pub use engine::{transliterate, TransliterateError, Transliterator};
pub use filter::{FilterChain, OutputFilter};
pub use standard::{MappingTable, Registry, RegistryBuilder, GOST_779A, GOST_779B};
