//! Host-facing API for embedding the transliterator in an output pipeline.
//!
//! Hosts load optional config files once at startup, then either create a
//! [`TranslitEngine`] or call [`transliterate_with`] directly.

mod engine;
mod types;

pub use engine::TranslitEngine;
pub use types::{ApiError, StandardInfo};

use std::path::Path;

use tracing::debug;
use translit_core::{Registry, Transliterator};

// ---------------------------------------------------------------------------
// Top-level functions
// ---------------------------------------------------------------------------

pub fn engine_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// All registered standards, sorted by id.
pub fn list_standards() -> Vec<StandardInfo> {
    let registry = Registry::global();
    registry
        .list_standards()
        .into_iter()
        .map(|id| StandardInfo {
            id: id.to_string(),
            description: registry.description(id).unwrap_or_default().to_string(),
            mappings: registry.get_table(id).map_or(0, |t| t.len()),
        })
        .collect()
}

pub fn transliterate_with(standard: &str, text: &str) -> Result<String, ApiError> {
    let t = Transliterator::with_standard(Registry::global(), standard)?;
    Ok(t.transliterate(text))
}

/// Register extra standards from a TOML file before the registry is first used.
pub fn standards_load_config(path: &str) -> Result<(), ApiError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApiError::Io {
        msg: format!("{path}: {e}"),
    })?;
    translit_core::standard::init_custom(&content)
        .map_err(|e| ApiError::InvalidData { msg: e.to_string() })?;
    debug!(path, "custom standards installed");
    Ok(())
}

pub fn settings_load_config(path: &str) -> Result<(), ApiError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApiError::Io {
        msg: format!("{path}: {e}"),
    })?;
    translit_core::settings::init_custom(content)
        .map_err(|e| ApiError::InvalidData { msg: e.to_string() })?;
    debug!(path, "custom settings installed");
    Ok(())
}

pub fn standards_default_config() -> String {
    translit_core::standard::default_toml().to_string()
}

pub fn settings_default_config() -> String {
    translit_core::settings::default_toml().to_string()
}

pub fn trace_init(log_dir: &str) {
    crate::trace_init::init_tracing(Path::new(log_dir));
}
