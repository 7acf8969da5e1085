//! Cyrillic-to-Latin substitution and standard selection.

use tracing::{debug, debug_span, warn};

use crate::settings::Settings;
use crate::standard::{MappingTable, Registry, DEFAULT_STANDARD};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransliterateError {
    #[error("invalid transliterator standard {0}")]
    InvalidStandard(String),
}

/// Apply `table` to `text` in a single left-to-right pass.
///
/// Each character that is a key is replaced by its value; all other
/// characters are copied unchanged. Replacement output is never scanned
/// again, so the result is the same as substituting every key at once.
pub fn transliterate(text: &str, table: &MappingTable) -> String {
    if !table.has_ascii_keys() && text.is_ascii() {
        return text.to_string();
    }

    // Digraph tables grow Cyrillic text; UTF-8 Cyrillic is already two bytes
    // per letter, so the input length is a close estimate.
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match table.get(ch) {
            Some(value) => out.push_str(value),
            None => out.push(ch),
        }
    }
    out
}

/// Transliterator bound to a registry, with one selected standard.
///
/// The registry is borrowed, never mutated. Selection is owned by this value;
/// share it across threads behind a lock (or give each worker its own).
#[derive(Debug, Clone)]
pub struct Transliterator<'r> {
    registry: &'r Registry,
    standard: &'r str,
    table: &'r MappingTable,
}

impl Transliterator<'static> {
    /// Transliterator over the global registry, using the configured default.
    pub fn global() -> Result<Self, TransliterateError> {
        Transliterator::from_settings(Registry::global(), crate::settings::settings())
    }
}

impl<'r> Transliterator<'r> {
    /// Create a transliterator using the digraph standard.
    pub fn new(registry: &'r Registry) -> Result<Self, TransliterateError> {
        Self::with_standard(registry, DEFAULT_STANDARD)
    }

    pub fn with_standard(registry: &'r Registry, id: &str) -> Result<Self, TransliterateError> {
        let (standard, table) = registry
            .resolve(id)
            .ok_or_else(|| TransliterateError::InvalidStandard(id.to_string()))?;
        Ok(Self {
            registry,
            standard,
            table,
        })
    }

    /// Create a transliterator using `settings.transliterator.default_standard`.
    pub fn from_settings(
        registry: &'r Registry,
        settings: &Settings,
    ) -> Result<Self, TransliterateError> {
        Self::with_standard(registry, &settings.transliterator.default_standard)
    }

    /// Select another standard. On error the current selection is kept.
    pub fn set_standard(&mut self, id: &str) -> Result<(), TransliterateError> {
        match self.registry.resolve(id) {
            Some((standard, table)) => {
                debug!(from = self.standard, to = standard, "standard selected");
                self.standard = standard;
                self.table = table;
                Ok(())
            }
            None => {
                warn!(standard = id, kept = self.standard, "rejected unknown standard");
                Err(TransliterateError::InvalidStandard(id.to_string()))
            }
        }
    }

    pub fn standard(&self) -> &'r str {
        self.standard
    }

    pub fn active_table(&self) -> &'r MappingTable {
        self.table
    }

    pub fn registry(&self) -> &'r Registry {
        self.registry
    }

    pub fn transliterate(&self, text: &str) -> String {
        let _span = debug_span!("transliterate", standard = self.standard, len = text.len())
            .entered();
        transliterate(text, self.table)
    }
}
