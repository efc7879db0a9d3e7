//! osm-engine: osmolarity calculations for osmoflow.
//!
//! Provides:
//! - Solute descriptors (typed inputs and raw form rows)
//! - Field parsing with unit suffixes and per-field issues
//! - Osmolarity from concentration, molecular weight and dissociation factor
//! - Tonicity classification against a configurable band
//! - Multi-solute aggregation with per-row validation reports
//! - An injectable table of reference solutions
//!
//! # Formula
//!
//! `Osmolarity [mOsm/L] = C [g/L] × i × 1000 / MW [g/mol]`
//!
//! Osmolality is reported as numerically equal to osmolarity, which only holds
//! for dilute aqueous solutions.
//!
//! # Example
//!
//! ```
//! use osm_engine::{CalculationResult, SoluteInput, Tonicity, TonicityBand};
//!
//! let saline = SoluteInput::new(9.0, 58.44, 2).with_name("NaCl");
//! let osm = saline.osmolarity().unwrap();
//! let result = CalculationResult::from_osmolarity(osm, &TonicityBand::default());
//! assert_eq!(result.tonicity, Tonicity::Isotonic);
//! assert_eq!(result.osmolarity_display(1), "308.0");
//! ```

pub mod aggregate;
pub mod error;
pub mod field;
pub mod osmolarity;
pub mod reference;
pub mod result;
pub mod solute;
pub mod tonicity;

// Re-exports for ergonomics
pub use aggregate::{AggregateReport, RowReport, aggregate_multiple_solutes, aggregate_rows};
pub use error::{EngineError, EngineResult};
pub use field::{Field, FieldIssue, IssueKind, parse_dissociation_factor, parse_field};
pub use osmolarity::{compute_osmolarity, osmolarity_quantity};
pub use reference::{ReferenceSolution, ReferenceTable, builtin_reference_table};
pub use result::CalculationResult;
pub use solute::{SoluteInput, SoluteRow};
pub use tonicity::{Tonicity, TonicityBand, classify_tonicity};
