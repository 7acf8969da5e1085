use std::collections::{BTreeMap, HashSet};

use serde::Deserialize;

use super::table::MappingTable;

#[derive(Deserialize)]
struct StandardsConfig {
    #[serde(default)]
    standard: Vec<RawStandard>,
}

#[derive(Deserialize)]
struct RawStandard {
    id: String,
    #[serde(default)]
    description: String,
    mappings: BTreeMap<String, String>,
}

/// One parsed `[[standard]]` entry.
#[derive(Debug, Clone)]
pub struct StandardDef {
    pub id: String,
    pub description: String,
    pub table: MappingTable,
}

#[derive(Debug, thiserror::Error)]
pub enum StandardsConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("no [[standard]] entries")]
    Empty,
    #[error("standard id must not be empty")]
    EmptyId,
    #[error("[mappings] table is empty for standard {0}")]
    EmptyTable(String),
    #[error("key {key:?} in standard {standard} is not a single character")]
    KeyNotSingleChar { standard: String, key: String },
    #[error("duplicate standard: {0}")]
    DuplicateStandard(String),
    #[error("standard registry already initialized")]
    AlreadyInitialized,
}

/// Parse TOML text into standard definitions, in file order.
pub fn parse_standards_toml(toml_str: &str) -> Result<Vec<StandardDef>, StandardsConfigError> {
    let config: StandardsConfig =
        toml::from_str(toml_str).map_err(|e| StandardsConfigError::Parse(e.to_string()))?;

    if config.standard.is_empty() {
        return Err(StandardsConfigError::Empty);
    }

    let mut seen = HashSet::new();
    let mut defs = Vec::with_capacity(config.standard.len());
    for raw in config.standard {
        if raw.id.trim().is_empty() {
            return Err(StandardsConfigError::EmptyId);
        }
        if !seen.insert(raw.id.clone()) {
            return Err(StandardsConfigError::DuplicateStandard(raw.id));
        }
        if raw.mappings.is_empty() {
            return Err(StandardsConfigError::EmptyTable(raw.id));
        }

        let mut table = Vec::with_capacity(raw.mappings.len());
        for (key, value) in raw.mappings {
            let ch = single_char(&key).ok_or_else(|| StandardsConfigError::KeyNotSingleChar {
                standard: raw.id.clone(),
                key: key.clone(),
            })?;
            table.push((ch, value));
        }

        defs.push(StandardDef {
            id: raw.id,
            description: raw.description,
            table: table.into_iter().collect(),
        });
    }

    Ok(defs)
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Some(ch),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_toml() {
        let toml = r#"
[[standard]]
id = "UA"
description = "Ukrainian extras"

[standard.mappings]
"Ї" = "Yi"
"ї" = "yi"
"ь" = ""
"#;
        let defs = parse_standards_toml(toml).unwrap();
        assert_eq!(defs.len(), 1);
        assert_eq!(defs[0].id, "UA");
        assert_eq!(defs[0].description, "Ukrainian extras");
        assert_eq!(defs[0].table.get('Ї'), Some("Yi"));
        assert_eq!(defs[0].table.get('ь'), Some(""));
    }

    #[test]
    fn parse_default_toml() {
        let defs = parse_standards_toml(super::super::DEFAULT_STANDARDS_TOML).unwrap();
        let ids: Vec<&str> = defs.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec![super::super::GOST_779A, super::super::GOST_779B]);
        for def in &defs {
            assert_eq!(def.table.len(), 70, "table size for {}", def.id);
        }
    }

    #[test]
    fn description_is_optional() {
        let toml = r#"
[[standard]]
id = "X"
[standard.mappings]
"а" = "a"
"#;
        let defs = parse_standards_toml(toml).unwrap();
        assert_eq!(defs[0].description, "");
    }

    #[test]
    fn error_no_standards() {
        let err = parse_standards_toml("").unwrap_err();
        assert!(matches!(err, StandardsConfigError::Empty));
    }

    #[test]
    fn error_empty_id() {
        let toml = r#"
[[standard]]
id = " "
[standard.mappings]
"а" = "a"
"#;
        let err = parse_standards_toml(toml).unwrap_err();
        assert!(matches!(err, StandardsConfigError::EmptyId));
    }

    #[test]
    fn error_empty_mappings() {
        let toml = r#"
[[standard]]
id = "X"
[standard.mappings]
"#;
        let err = parse_standards_toml(toml).unwrap_err();
        assert!(matches!(err, StandardsConfigError::EmptyTable(ref id) if id == "X"));
    }

    #[test]
    fn error_multi_char_key() {
        let toml = r#"
[[standard]]
id = "X"
[standard.mappings]
"шч" = "shch"
"#;
        let err = parse_standards_toml(toml).unwrap_err();
        assert!(matches!(err, StandardsConfigError::KeyNotSingleChar { .. }));
        assert!(err.to_string().contains("шч"));
    }

    #[test]
    fn error_empty_key() {
        let toml = r#"
[[standard]]
id = "X"
[standard.mappings]
"" = "x"
"#;
        let err = parse_standards_toml(toml).unwrap_err();
        assert!(matches!(err, StandardsConfigError::KeyNotSingleChar { .. }));
    }

    #[test]
    fn error_duplicate_standard() {
        let toml = r#"
[[standard]]
id = "X"
[standard.mappings]
"а" = "a"

[[standard]]
id = "X"
[standard.mappings]
"б" = "b"
"#;
        let err = parse_standards_toml(toml).unwrap_err();
        assert!(matches!(err, StandardsConfigError::DuplicateStandard(ref id) if id == "X"));
    }

    #[test]
    fn error_duplicate_key_is_parse_error() {
        let toml = r#"
[[standard]]
id = "X"
[standard.mappings]
"а" = "a"
"а" = "b"
"#;
        let err = parse_standards_toml(toml).unwrap_err();
        assert!(matches!(err, StandardsConfigError::Parse(_)));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_standards_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, StandardsConfigError::Parse(_)));
    }
}
