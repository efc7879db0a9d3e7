//! Form field parsing.
//!
//! Converts the raw text of a form field into the canonical number used by the
//! engine (g/L, g/mol, or a whole dissociation factor). Anything that cannot
//! take part in a calculation comes back as a [`FieldIssue`] naming the field,
//! so the caller can decide whether to skip the row or report it.

use osm_core::Real;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The numeric fields a solute row carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// Mass concentration (canonical: g/L)
    Concentration,
    /// Molecular weight (canonical: g/mol)
    MolecularWeight,
    /// Particles per formula unit (whole number)
    DissociationFactor,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Concentration => write!(f, "concentration"),
            Self::MolecularWeight => write!(f, "molecular weight"),
            Self::DissociationFactor => write!(f, "dissociation factor"),
        }
    }
}

/// Why a field could not be used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IssueKind {
    /// Nothing was entered
    Empty,
    /// Text did not start with a finite number
    NotANumber { text: String },
    /// Unit suffix not recognized for this field
    UnknownUnit { unit: String },
    /// Zero or negative
    NotPositive { value: Real },
    /// Dissociation factor with a fractional part (or out of range)
    NotAnInteger { value: Real },
    /// Parsed, but the calculation it feeds cannot produce a finite result
    OutOfRange { reason: String },
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "value is required"),
            Self::NotANumber { text } => write!(f, "'{}' is not a number", text),
            Self::UnknownUnit { unit } => write!(f, "unknown unit '{}'", unit),
            Self::NotPositive { value } => {
                write!(f, "must be greater than zero (got {})", value)
            }
            Self::NotAnInteger { value } => {
                write!(f, "must be a whole number of particles (got {})", value)
            }
            Self::OutOfRange { reason } => write!(f, "out of range: {}", reason),
        }
    }
}

/// A single field that failed validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldIssue {
    pub field: Field,
    #[serde(flatten)]
    pub kind: IssueKind,
}

impl FieldIssue {
    pub fn new(field: Field, kind: IssueKind) -> Self {
        Self { field, kind }
    }
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.kind)
    }
}

impl std::error::Error for FieldIssue {}

/// Parse a field's raw text into its canonical value.
///
/// Concentration accepts `g/L` (default), `mg/mL`, `mg/L`, `mg/dL`, `kg/m3`
/// and `%` (w/v, 1 % = 10 g/L). Molecular weight accepts `g/mol` (default),
/// `Da`, `kDa` and `kg/mol`. The dissociation factor is unitless and must be a
/// whole number.
pub fn parse_field(raw_text: &str, field: Field) -> Result<Real, FieldIssue> {
    match field {
        Field::Concentration => parse_concentration(raw_text),
        Field::MolecularWeight => parse_molecular_weight(raw_text),
        Field::DissociationFactor => parse_dissociation_factor(raw_text).map(Real::from),
    }
}

/// Parse a dissociation factor, which must be a positive whole number.
pub fn parse_dissociation_factor(raw_text: &str) -> Result<u32, FieldIssue> {
    let field = Field::DissociationFactor;
    let (value, unit) = split_value_and_unit(raw_text, field)?;
    if !unit.is_empty() {
        return Err(FieldIssue::new(field, IssueKind::UnknownUnit { unit }));
    }
    let value = ensure_positive(value, field)?;
    if value.fract() != 0.0 || value > Real::from(u32::MAX) {
        return Err(FieldIssue::new(field, IssueKind::NotAnInteger { value }));
    }
    Ok(value as u32)
}

/// Parse mass concentration, return g/L.
fn parse_concentration(input: &str) -> Result<Real, FieldIssue> {
    let field = Field::Concentration;
    let (value, unit) = split_value_and_unit(input, field)?;

    let g_per_l = match unit.to_lowercase().as_str() {
        "" | "g/l" | "mg/ml" | "kg/m3" | "kg/m^3" | "kg/m³" => value,
        "mg/l" => value * 1e-3,
        "mg/dl" => value * 1e-2,
        "%" | "%w/v" | "% w/v" => value * 10.0,
        _ => return Err(FieldIssue::new(field, IssueKind::UnknownUnit { unit })),
    };

    ensure_positive(g_per_l, field)
}

/// Parse molecular weight, return g/mol.
fn parse_molecular_weight(input: &str) -> Result<Real, FieldIssue> {
    let field = Field::MolecularWeight;
    let (value, unit) = split_value_and_unit(input, field)?;

    let g_per_mol = match unit.to_lowercase().as_str() {
        "" | "g/mol" | "da" => value,
        "kda" | "kg/mol" => value * 1e3,
        _ => return Err(FieldIssue::new(field, IssueKind::UnknownUnit { unit })),
    };

    ensure_positive(g_per_mol, field)
}

fn ensure_positive(value: Real, field: Field) -> Result<Real, FieldIssue> {
    if value > 0.0 {
        Ok(value)
    } else {
        Err(FieldIssue::new(field, IssueKind::NotPositive { value }))
    }
}

fn split_value_and_unit(input: &str, field: Field) -> Result<(Real, String), FieldIssue> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(FieldIssue::new(field, IssueKind::Empty));
    }

    // Find where the numeric part ends
    let split_idx = trimmed
        .find(|c: char| !c.is_ascii_digit() && c != '.' && c != '-' && c != '+' && c != 'e' && c != 'E')
        .unwrap_or(trimmed.len());

    let (num_part, unit_part) = trimmed.split_at(split_idx);
    let num_part = num_part.trim();
    let unit_part = unit_part.trim();

    let not_a_number = || {
        FieldIssue::new(
            field,
            IssueKind::NotANumber {
                text: trimmed.to_string(),
            },
        )
    };

    let value: Real = num_part.parse().map_err(|_| not_a_number())?;
    if !value.is_finite() {
        return Err(not_a_number());
    }

    Ok((value, unit_part.to_string()))
}
