//! Solute descriptors.
//!
//! [`SoluteInput`] is the typed form the engine computes with. [`SoluteRow`]
//! is what a form holds while it is being edited: raw text per field, which
//! may be empty or malformed until the user finishes typing.

use crate::error::EngineResult;
use crate::field::{Field, FieldIssue, parse_dissociation_factor, parse_field};
use crate::osmolarity::compute_osmolarity;
use osm_core::Real;
use osm_core::units::{MassConc, MolarMass, g_per_l, g_per_mol};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoluteInput {
    /// g/L
    pub concentration: Real,
    /// g/mol
    pub molecular_weight: Real,
    /// Particles per formula unit, typically 1-4
    pub dissociation_factor: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl SoluteInput {
    pub fn new(concentration: Real, molecular_weight: Real, dissociation_factor: u32) -> Self {
        Self {
            concentration,
            molecular_weight,
            dissociation_factor,
            name: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn concentration_quantity(&self) -> MassConc {
        g_per_l(self.concentration)
    }

    pub fn molecular_weight_quantity(&self) -> MolarMass {
        g_per_mol(self.molecular_weight)
    }

    pub fn osmolarity(&self) -> EngineResult<Real> {
        compute_osmolarity(
            self.concentration,
            self.molecular_weight,
            self.dissociation_factor,
        )
    }
}

/// One editable solute row, exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoluteRow {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub concentration: String,
    #[serde(default)]
    pub molecular_weight: String,
    #[serde(default = "default_factor_text")]
    pub dissociation_factor: String,
}

fn default_factor_text() -> String {
    "1".to_string()
}

impl Default for SoluteRow {
    /// Blank row; the factor starts at "1".
    fn default() -> Self {
        Self {
            name: String::new(),
            concentration: String::new(),
            molecular_weight: String::new(),
            dissociation_factor: default_factor_text(),
        }
    }
}

impl SoluteRow {
    pub fn new(
        concentration: impl Into<String>,
        molecular_weight: impl Into<String>,
        dissociation_factor: impl Into<String>,
    ) -> Self {
        Self {
            name: String::new(),
            concentration: concentration.into(),
            molecular_weight: molecular_weight.into(),
            dissociation_factor: dissociation_factor.into(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn text(&self, field: Field) -> &str {
        match field {
            Field::Concentration => &self.concentration,
            Field::MolecularWeight => &self.molecular_weight,
            Field::DissociationFactor => &self.dissociation_factor,
        }
    }

    pub fn set_text(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Concentration => self.concentration = value,
            Field::MolecularWeight => self.molecular_weight = value,
            Field::DissociationFactor => self.dissociation_factor = value,
        }
    }

    /// Parse every field. All issues are collected, not just the first.
    pub fn parse(&self) -> Result<SoluteInput, Vec<FieldIssue>> {
        let concentration = parse_field(&self.concentration, Field::Concentration);
        let molecular_weight = parse_field(&self.molecular_weight, Field::MolecularWeight);
        let dissociation_factor = parse_dissociation_factor(&self.dissociation_factor);

        match (concentration, molecular_weight, dissociation_factor) {
            (Ok(c), Ok(mw), Ok(i)) => {
                let name = self.name.trim();
                let input = SoluteInput::new(c, mw, i);
                Ok(if name.is_empty() {
                    input
                } else {
                    input.with_name(name)
                })
            }
            (c, mw, i) => Err([c.err(), mw.err(), i.err()]
                .into_iter()
                .flatten()
                .collect()),
        }
    }
}
