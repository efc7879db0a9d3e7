// osm-core/src/units.rs

use uom::si::f64::{
    MassConcentration as UomMassConcentration, MolarConcentration as UomMolarConcentration,
    MolarMass as UomMolarMass,
};

// Public canonical unit types (SI, f64)
pub type MassConc = UomMassConcentration;
pub type MolarConc = UomMolarConcentration;
pub type MolarMass = UomMolarMass;

/// Mass concentration from grams per liter (1 g/L == 1 kg/m³).
#[inline]
pub fn g_per_l(v: f64) -> MassConc {
    use uom::si::mass_concentration::kilogram_per_cubic_meter;
    MassConc::new::<kilogram_per_cubic_meter>(v)
}

/// Molar mass from grams per mole.
#[inline]
pub fn g_per_mol(v: f64) -> MolarMass {
    use uom::si::molar_mass::kilogram_per_mole;
    MolarMass::new::<kilogram_per_mole>(v * 1.0e-3)
}

/// Osmotic concentration from mOsm/L (1 mmol/L == 1 mol/m³).
#[inline]
pub fn mosm_per_l(v: f64) -> MolarConc {
    use uom::si::molar_concentration::mole_per_cubic_meter;
    MolarConc::new::<mole_per_cubic_meter>(v)
}

/// Read a mass concentration back as g/L.
#[inline]
pub fn as_g_per_l(q: MassConc) -> f64 {
    use uom::si::mass_concentration::kilogram_per_cubic_meter;
    q.get::<kilogram_per_cubic_meter>()
}

/// Read a molar mass back as g/mol.
#[inline]
pub fn as_g_per_mol(q: MolarMass) -> f64 {
    use uom::si::molar_mass::kilogram_per_mole;
    q.get::<kilogram_per_mole>() * 1.0e3
}

/// Read an osmotic concentration back as mOsm/L.
#[inline]
pub fn as_mosm_per_l(q: MolarConc) -> f64 {
    use uom::si::molar_concentration::mole_per_cubic_meter;
    q.get::<mole_per_cubic_meter>()
}

pub mod constants {
    /// Lower edge of the isotonic band (normal plasma), mOsm/L.
    pub const ISOTONIC_LOWER_MOSM_L: f64 = 280.0;
    /// Upper edge of the isotonic band (normal plasma), mOsm/L.
    pub const ISOTONIC_UPPER_MOSM_L: f64 = 320.0;
    /// mmol per mol.
    pub const MILLI_PER_UNIT: f64 = 1000.0;
}
