//! Transliteration standards and the registry that holds them.
//!
//! A standard is a named, immutable table from one source character to a
//! replacement string. The built-in tables ship as embedded TOML and are
//! parsed once into a [`Registry`]; extra standards are registered at
//! initialization time and never change afterwards.

mod config;
mod registry;
mod table;

pub use config::{parse_standards_toml, StandardDef, StandardsConfigError};
pub use registry::{init_custom, Registry, RegistryBuilder};
pub use table::MappingTable;

/// System A of GOST 7.79-2000 (with diacritics).
pub const GOST_779A: &str = "GOST 7.79.A";

/// System B of GOST 7.79-2000 (using combinations of letters).
pub const GOST_779B: &str = "GOST 7.79.B";

/// Standard selected when none is chosen explicitly.
pub const DEFAULT_STANDARD: &str = GOST_779B;

pub const DEFAULT_STANDARDS_TOML: &str = include_str!("default_standards.toml");

/// Returns the embedded built-in standards TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_STANDARDS_TOML
}
