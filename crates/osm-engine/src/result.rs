use crate::reference::ReferenceSolution;
use crate::tonicity::{Tonicity, TonicityBand};
use osm_core::units::{MolarConc, mosm_per_l};
use osm_core::{Real, round_half_away};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of one calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// mOsm/L
    pub osmolarity: Real,
    /// mOsm/kg, approximated as equal to osmolarity (dilute solutions)
    pub osmolality: Real,
    pub tonicity: Tonicity,
}

impl CalculationResult {
    pub fn from_osmolarity(osmolarity: Real, band: &TonicityBand) -> Self {
        Self {
            osmolarity,
            osmolality: osmolarity,
            tonicity: band.classify(osmolarity),
        }
    }

    /// Reference entries carry their own osmolality; tonicity follows osmolarity.
    pub fn from_reference(solution: &ReferenceSolution, band: &TonicityBand) -> Self {
        Self {
            osmolarity: solution.osmolarity,
            osmolality: solution.osmolality,
            tonicity: band.classify(solution.osmolarity),
        }
    }

    pub fn osmolarity_quantity(&self) -> MolarConc {
        mosm_per_l(self.osmolarity)
    }

    pub fn osmolarity_display(&self, precision: usize) -> String {
        display_fixed(self.osmolarity, precision)
    }

    pub fn osmolality_display(&self, precision: usize) -> String {
        display_fixed(self.osmolality, precision)
    }
}

/// Fixed decimals with ties rounded up in magnitude; `{:.N}` alone would
/// round an exact 0.25 to "0.2".
fn display_fixed(value: Real, precision: usize) -> String {
    format!("{:.*}", precision, round_half_away(value, precision))
}

impl fmt::Display for CalculationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(1);
        write!(
            f,
            "{} mOsm/L, {} mOsm/kg, {}",
            self.osmolarity_display(precision),
            self.osmolality_display(precision),
            self.tonicity
        )
    }
}
