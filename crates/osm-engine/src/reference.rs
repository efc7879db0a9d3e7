//! Reference solutions.
//!
//! A [`ReferenceTable`] maps stable keys (`"normal-saline"`, `"d5w"`, ...) to
//! precomputed osmolarity/osmolality pairs. The table is plain data: the
//! built-in one reproduces the common IV fluids, and callers may build or load
//! their own and hand it to whatever needs lookups.

use crate::error::{EngineError, EngineResult};
use osm_core::{Real, ensure_positive};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceSolution {
    pub key: String,
    pub name: String,
    /// mOsm/L
    pub osmolarity: Real,
    /// mOsm/kg
    pub osmolality: Real,
}

impl ReferenceSolution {
    /// Entry whose osmolality equals its osmolarity.
    pub fn new(key: impl Into<String>, name: impl Into<String>, osmolarity: Real) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            osmolarity,
            osmolality: osmolarity,
        }
    }

    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_ascii_lowercase();
        if query.is_empty() {
            return true;
        }

        self.key.to_ascii_lowercase().contains(&query)
            || self.name.to_ascii_lowercase().contains(&query)
    }
}

struct BuiltinEntry {
    key: &'static str,
    name: &'static str,
    osmolarity: Real,
}

const BUILTIN_SOLUTIONS: [BuiltinEntry; 7] = [
    BuiltinEntry {
        key: "normal-saline",
        name: "Normal Saline (0.9% NaCl)",
        osmolarity: 308.0,
    },
    BuiltinEntry {
        key: "half-saline",
        name: "Half Normal Saline (0.45% NaCl)",
        osmolarity: 154.0,
    },
    BuiltinEntry {
        key: "d5w",
        name: "5% Dextrose in Water",
        osmolarity: 278.0,
    },
    BuiltinEntry {
        key: "lactated-ringers",
        name: "Lactated Ringer's",
        osmolarity: 273.0,
    },
    BuiltinEntry {
        key: "d5-normal-saline",
        name: "5% Dextrose in Normal Saline",
        osmolarity: 586.0,
    },
    BuiltinEntry {
        key: "mannitol-20",
        name: "20% Mannitol",
        osmolarity: 1098.0,
    },
    BuiltinEntry {
        key: "sodium-bicarbonate",
        name: "8.4% Sodium Bicarbonate",
        osmolarity: 2000.0,
    },
];

/// Immutable, ordered set of reference solutions with unique keys.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReferenceTable {
    entries: Vec<ReferenceSolution>,
}

impl ReferenceTable {
    /// Validate and wrap entries. Order is preserved for listing.
    pub fn from_entries(entries: Vec<ReferenceSolution>) -> EngineResult<Self> {
        if entries.is_empty() {
            return Err(EngineError::InvalidTable {
                what: "table has no entries".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for entry in &entries {
            if entry.key.trim().is_empty() {
                return Err(EngineError::InvalidTable {
                    what: format!("entry '{}' has an empty key", entry.name),
                });
            }
            if !seen.insert(entry.key.as_str()) {
                return Err(EngineError::InvalidTable {
                    what: format!("duplicate key '{}'", entry.key),
                });
            }
            for (what, value) in [
                ("osmolarity", entry.osmolarity),
                ("osmolality", entry.osmolality),
            ] {
                ensure_positive(value, what).map_err(|err| EngineError::InvalidTable {
                    what: format!("'{}': {}", entry.key, err),
                })?;
            }
        }

        Ok(Self { entries })
    }

    /// Exact key match. `None` means the caller should produce no result.
    pub fn lookup(&self, key: &str) -> Option<&ReferenceSolution> {
        self.entries.iter().find(|entry| entry.key == key)
    }

    pub fn entries(&self) -> &[ReferenceSolution] {
        &self.entries
    }

    pub fn search(&self, query: &str) -> Vec<&ReferenceSolution> {
        self.entries
            .iter()
            .filter(|entry| entry.matches_query(query))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ReferenceTable {
    fn default() -> Self {
        builtin_reference_table()
    }
}

/// The seven common IV fluids.
pub fn builtin_reference_table() -> ReferenceTable {
    ReferenceTable {
        entries: BUILTIN_SOLUTIONS
            .iter()
            .map(|e| ReferenceSolution::new(e.key, e.name, e.osmolarity))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_is_valid() {
        let table = builtin_reference_table();
        assert_eq!(table.len(), 7);
        ReferenceTable::from_entries(table.entries().to_vec())
            .expect("builtin entries should validate");
    }

    #[test]
    fn builtin_values_are_exact() {
        let table = builtin_reference_table();
        let expected = [
            ("normal-saline", 308.0),
            ("half-saline", 154.0),
            ("d5w", 278.0),
            ("lactated-ringers", 273.0),
            ("d5-normal-saline", 586.0),
            ("mannitol-20", 1098.0),
            ("sodium-bicarbonate", 2000.0),
        ];
        for (key, osm) in expected {
            let entry = table.lookup(key).expect("builtin key should resolve");
            assert_eq!(entry.osmolarity, osm, "{key}");
            assert_eq!(entry.osmolality, osm, "{key}");
        }
    }

    #[test]
    fn lookup_is_exact() {
        let table = builtin_reference_table();
        assert!(table.lookup("unknown-key").is_none());
        assert!(table.lookup("Normal-Saline").is_none());
        assert!(table.lookup("normal-saline ").is_none());
        assert!(table.lookup("").is_none());
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let table = builtin_reference_table();
        let hits: Vec<&str> = table.search("SALINE").iter().map(|e| e.key.as_str()).collect();
        assert_eq!(hits, ["normal-saline", "half-saline", "d5-normal-saline"]);
        assert_eq!(table.search("").len(), 7);
        assert!(table.search("plasma-lyte").is_empty());
    }

    #[test]
    fn duplicate_keys_are_rejected() {
        let entries = vec![
            ReferenceSolution::new("a", "A", 300.0),
            ReferenceSolution::new("a", "A again", 310.0),
        ];
        assert!(matches!(
            ReferenceTable::from_entries(entries),
            Err(EngineError::InvalidTable { .. })
        ));
    }

    #[test]
    fn empty_and_non_positive_tables_are_rejected() {
        assert!(ReferenceTable::from_entries(vec![]).is_err());
        assert!(ReferenceTable::from_entries(vec![ReferenceSolution::new("x", "X", 0.0)]).is_err());
        assert!(ReferenceTable::from_entries(vec![ReferenceSolution::new(" ", "X", 10.0)]).is_err());
    }

    #[test]
    fn custom_table_is_injectable() {
        let table = ReferenceTable::from_entries(vec![ReferenceSolution::new(
            "plasma-lyte",
            "Plasma-Lyte A",
            294.0,
        )])
        .unwrap();
        assert_eq!(table.lookup("plasma-lyte").map(|e| e.osmolarity), Some(294.0));
        assert!(table.lookup("normal-saline").is_none());
    }
}
