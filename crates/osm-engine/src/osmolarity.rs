//! Osmolarity from a single solute.

use crate::error::{EngineError, EngineResult};
use crate::field::Field;
use osm_core::units::{MolarConc, constants::MILLI_PER_UNIT, g_per_l, g_per_mol};
use osm_core::Real;

/// Osmolarity in mOsm/L: `(concentration × dissociation_factor × 1000) / molecular_weight`.
///
/// `concentration` is in g/L and `molecular_weight` in g/mol. Molecular weight
/// and concentration must be finite and strictly positive, and the
/// dissociation factor at least 1; anything else is
/// [`EngineError::InvalidInput`] rather than an infinite or NaN result.
pub fn compute_osmolarity(
    concentration: Real,
    molecular_weight: Real,
    dissociation_factor: u32,
) -> EngineResult<Real> {
    check_inputs(concentration, molecular_weight, dissociation_factor)?;
    let osmolarity =
        (concentration * Real::from(dissociation_factor) * MILLI_PER_UNIT) / molecular_weight;
    if !osmolarity.is_finite() {
        return Err(EngineError::InvalidInput {
            field: Field::Concentration,
            reason: format!("osmolarity overflows for {concentration} g/L at {molecular_weight} g/mol"),
        });
    }
    Ok(osmolarity)
}

/// Same calculation carried through `uom`, for callers that want a typed quantity.
///
/// Agrees with [`compute_osmolarity`] to within floating-point rounding.
pub fn osmolarity_quantity(
    concentration: Real,
    molecular_weight: Real,
    dissociation_factor: u32,
) -> EngineResult<MolarConc> {
    check_inputs(concentration, molecular_weight, dissociation_factor)?;
    // Mass concentration over molar mass carries the plain kind; convert to the
    // constituent-concentration kind of `MolarConc`.
    let molar: MolarConc = (g_per_l(concentration) / g_per_mol(molecular_weight)).into();
    Ok(molar * Real::from(dissociation_factor))
}

fn check_inputs(
    concentration: Real,
    molecular_weight: Real,
    dissociation_factor: u32,
) -> EngineResult<()> {
    if !molecular_weight.is_finite() || molecular_weight <= 0.0 {
        return Err(EngineError::InvalidInput {
            field: Field::MolecularWeight,
            reason: format!("must be finite and greater than zero (got {molecular_weight})"),
        });
    }
    if !concentration.is_finite() || concentration <= 0.0 {
        return Err(EngineError::InvalidInput {
            field: Field::Concentration,
            reason: format!("must be finite and greater than zero (got {concentration})"),
        });
    }
    if dissociation_factor == 0 {
        return Err(EngineError::InvalidInput {
            field: Field::DissociationFactor,
            reason: "must be at least 1".to_string(),
        });
    }
    Ok(())
}
