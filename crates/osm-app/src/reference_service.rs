//! Loading reference tables from disk.

use std::path::Path;

use osm_core::Real;
use osm_engine::{ReferenceSolution, ReferenceTable};
use serde::Deserialize;

use crate::error::{AppError, AppResult};

/// On-disk entry. Osmolality defaults to osmolarity when omitted.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct ReferenceEntryDef {
    key: String,
    name: String,
    osmolarity: Real,
    #[serde(default)]
    osmolality: Option<Real>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct SolutionsDef {
    solutions: Vec<ReferenceEntryDef>,
}

/// A file is either `solutions: [...]` or a bare list of entries.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum ReferenceFileDef {
    Wrapped(SolutionsDef),
    List(Vec<ReferenceEntryDef>),
}

impl ReferenceFileDef {
    fn into_entries(self) -> Vec<ReferenceEntryDef> {
        match self {
            Self::Wrapped(def) => def.solutions,
            Self::List(entries) => entries,
        }
    }
}

impl From<ReferenceEntryDef> for ReferenceSolution {
    fn from(def: ReferenceEntryDef) -> Self {
        ReferenceSolution {
            osmolality: def.osmolality.unwrap_or(def.osmolarity),
            key: def.key,
            name: def.name,
            osmolarity: def.osmolarity,
        }
    }
}

fn into_table(file: ReferenceFileDef) -> AppResult<ReferenceTable> {
    let entries = file.into_entries().into_iter().map(Into::into).collect();
    Ok(ReferenceTable::from_entries(entries)?)
}

pub fn parse_reference_yaml(content: &str) -> AppResult<ReferenceTable> {
    let file: ReferenceFileDef = serde_yaml::from_str(content)
        .map_err(|e| AppError::Reference(format!("Failed to parse reference YAML: {}", e)))?;
    into_table(file)
}

pub fn parse_reference_json(content: &str) -> AppResult<ReferenceTable> {
    let file: ReferenceFileDef = serde_json::from_str(content)?;
    into_table(file)
}

/// Load a reference table; `.json` files are read as JSON, anything else as YAML.
pub fn load_reference_table(path: &Path) -> AppResult<ReferenceTable> {
    let content = std::fs::read_to_string(path).map_err(|e| AppError::ReferenceRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        parse_reference_json(&content)
    } else {
        parse_reference_yaml(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use osm_engine::EngineError;

    const YAML: &str = r#"
solutions:
  - key: plasma-lyte
    name: Plasma-Lyte A
    osmolarity: 294
  - key: hypertonic-saline-3
    name: 3% Saline
    osmolarity: 1027
    osmolality: 1000
"#;

    #[test]
    fn yaml_table_loads_with_defaults() {
        let table = parse_reference_yaml(YAML).unwrap();
        assert_eq!(table.len(), 2);

        let lyte = table.lookup("plasma-lyte").unwrap();
        assert_eq!(lyte.osmolality, 294.0);

        let saline = table.lookup("hypertonic-saline-3").unwrap();
        assert_eq!(saline.osmolarity, 1027.0);
        assert_eq!(saline.osmolality, 1000.0);
    }

    #[test]
    fn json_table_loads() {
        let json = r#"{"solutions":[{"key":"d5w","name":"5% Dextrose in Water","osmolarity":278}]}"#;
        let table = parse_reference_json(json).unwrap();
        assert_eq!(table.lookup("d5w").unwrap().osmolarity, 278.0);
    }

    #[test]
    fn bare_list_yaml_loads() {
        let table = parse_reference_yaml("- key: a\n  name: A\n  osmolarity: 300\n").unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.lookup("a").map(|e| e.osmolality), Some(300.0));
    }

    #[test]
    fn bare_list_json_loads() {
        let json = r#"[{"key":"d5w","name":"5% Dextrose in Water","osmolarity":278,"osmolality":252}]"#;
        let table = parse_reference_json(json).unwrap();
        assert_eq!(table.lookup("d5w").map(|e| e.osmolality), Some(252.0));
    }

    #[test]
    fn duplicate_keys_surface_engine_error() {
        let yaml = "solutions:\n  - {key: a, name: A, osmolarity: 1}\n  - {key: a, name: B, osmolarity: 2}\n";
        let err = parse_reference_yaml(yaml).unwrap_err();
        assert!(matches!(
            err,
            AppError::Engine(EngineError::InvalidTable { .. })
        ));
    }

    #[test]
    fn malformed_yaml_is_reference_error() {
        let err = parse_reference_yaml("solutions: 12").unwrap_err();
        assert!(matches!(err, AppError::Reference(_)));
    }

    #[test]
    fn file_extension_selects_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reference_table.json");
        std::fs::write(
            &path,
            r#"{"solutions":[{"key":"x","name":"X","osmolarity":300}]}"#,
        )
        .unwrap();
        let table = load_reference_table(&path).unwrap();
        assert_eq!(table.entries()[0].key, "x");
    }
}
