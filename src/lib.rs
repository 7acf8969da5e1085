//! Cyrillic-to-Latin transliteration engine.
//!
//! Re-exports [`translit_core`] and adds the host-facing [`api`] layer and
//! optional tracing setup.

pub mod api;
pub mod trace_init;

pub use translit_core::{
    engine, filter, settings, standard, transliterate, FilterChain, MappingTable, OutputFilter,
    Registry, RegistryBuilder, TransliterateError, Transliterator, GOST_779A, GOST_779B,
};
