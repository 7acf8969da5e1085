use std::collections::{BTreeMap, BTreeSet};
use std::sync::OnceLock;

use tracing::debug;

use super::config::{parse_standards_toml, StandardDef, StandardsConfigError};
use super::table::MappingTable;
use super::DEFAULT_STANDARDS_TOML;

static INSTANCE: OnceLock<Registry> = OnceLock::new();

/// Register extra standards for the global registry.
///
/// The extra standards are added next to the built-ins and may not reuse
/// their ids. The complete registry is installed in one step, so a racing
/// `Registry::global()` either sees it or makes this call fail with
/// `AlreadyInitialized`.
pub fn init_custom(toml_content: &str) -> Result<(), StandardsConfigError> {
    let registry = RegistryBuilder::with_defaults()
        .extend_from_toml(toml_content)?
        .build();
    INSTANCE
        .set(registry)
        .map_err(|_| StandardsConfigError::AlreadyInitialized)
}

#[derive(Debug, Clone)]
struct Entry {
    description: String,
    table: MappingTable,
}

/// Immutable set of named standards.
///
/// Built once through [`RegistryBuilder`] and only read afterwards, so a
/// shared `&Registry` needs no locking.
#[derive(Debug, Clone)]
pub struct Registry {
    standards: BTreeMap<String, Entry>,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Registry holding only the built-in standards.
    pub fn with_defaults() -> Self {
        RegistryBuilder::with_defaults().build()
    }

    /// Get or initialize the global registry (built-ins plus any custom
    /// standards installed by `init_custom`).
    pub fn global() -> &'static Registry {
        INSTANCE.get_or_init(Registry::with_defaults)
    }

    pub fn get_table(&self, id: &str) -> Option<&MappingTable> {
        self.standards.get(id).map(|e| &e.table)
    }

    pub fn has_standard(&self, id: &str) -> bool {
        self.standards.contains_key(id)
    }

    pub fn list_standards(&self) -> BTreeSet<&str> {
        self.standards.keys().map(String::as_str).collect()
    }

    pub fn description(&self, id: &str) -> Option<&str> {
        self.standards.get(id).map(|e| e.description.as_str())
    }

    /// Look up a table together with the registry's own copy of its id.
    pub(crate) fn resolve(&self, id: &str) -> Option<(&str, &MappingTable)> {
        self.standards
            .get_key_value(id)
            .map(|(k, e)| (k.as_str(), &e.table))
    }

    pub fn len(&self) -> usize {
        self.standards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.standards.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Collects standards before freezing them into a [`Registry`].
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    standards: BTreeMap<String, Entry>,
}

impl RegistryBuilder {
    /// Empty builder with no standards.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder pre-populated with the built-in standards.
    pub fn with_defaults() -> Self {
        let defs =
            parse_standards_toml(DEFAULT_STANDARDS_TOML).expect("built-in standards must be valid");
        let mut builder = Self::new();
        for def in defs {
            builder.standards.insert(
                def.id,
                Entry {
                    description: def.description,
                    table: def.table,
                },
            );
        }
        builder
    }

    pub fn register(
        mut self,
        id: impl Into<String>,
        description: impl Into<String>,
        table: MappingTable,
    ) -> Result<Self, StandardsConfigError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(StandardsConfigError::EmptyId);
        }
        if self.standards.contains_key(&id) {
            return Err(StandardsConfigError::DuplicateStandard(id));
        }
        self.standards.insert(
            id,
            Entry {
                description: description.into(),
                table,
            },
        );
        Ok(self)
    }

    pub fn register_def(self, def: StandardDef) -> Result<Self, StandardsConfigError> {
        self.register(def.id, def.description, def.table)
    }

    /// Register every standard found in `toml_str`.
    pub fn extend_from_toml(self, toml_str: &str) -> Result<Self, StandardsConfigError> {
        parse_standards_toml(toml_str)?
            .into_iter()
            .try_fold(self, RegistryBuilder::register_def)
    }

    pub fn build(self) -> Registry {
        debug!(standards = self.standards.len(), "standard registry built");
        Registry {
            standards: self.standards,
        }
    }
}
