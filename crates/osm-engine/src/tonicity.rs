//! Tonicity classification.

use crate::error::{EngineError, EngineResult};
use osm_core::{Real, ensure_finite};
use osm_core::units::constants::{ISOTONIC_LOWER_MOSM_L, ISOTONIC_UPPER_MOSM_L};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Osmotic effect of a solution relative to the isotonic band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tonicity {
    Hypotonic,
    Isotonic,
    Hypertonic,
}

impl Tonicity {
    pub fn label(self) -> &'static str {
        match self {
            Self::Hypotonic => "Hypotonic",
            Self::Isotonic => "Isotonic",
            Self::Hypertonic => "Hypertonic",
        }
    }
}

impl fmt::Display for Tonicity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Isotonic band in mOsm/L. Both edges belong to the band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BandDef")]
pub struct TonicityBand {
    lower: Real,
    upper: Real,
}

#[derive(Deserialize)]
struct BandDef {
    lower: Real,
    upper: Real,
}

impl TryFrom<BandDef> for TonicityBand {
    type Error = EngineError;

    fn try_from(def: BandDef) -> Result<Self, Self::Error> {
        TonicityBand::new(def.lower, def.upper)
    }
}

impl Default for TonicityBand {
    /// Normal plasma, 280–320 mOsm/L.
    fn default() -> Self {
        Self {
            lower: ISOTONIC_LOWER_MOSM_L,
            upper: ISOTONIC_UPPER_MOSM_L,
        }
    }
}

impl TonicityBand {
    pub fn new(lower: Real, upper: Real) -> EngineResult<Self> {
        let finite = |v, what| {
            ensure_finite(v, what).map_err(|err| EngineError::InvalidBand {
                what: err.to_string(),
            })
        };
        let lower = finite(lower, "lower edge")?;
        let upper = finite(upper, "upper edge")?;
        if lower > upper {
            return Err(EngineError::InvalidBand {
                what: format!("lower edge {lower} is above upper edge {upper}"),
            });
        }
        Ok(Self { lower, upper })
    }

    pub fn lower(&self) -> Real {
        self.lower
    }

    pub fn upper(&self) -> Real {
        self.upper
    }

    /// Below the band is hypotonic, above it hypertonic, otherwise isotonic.
    pub fn classify(&self, osmolarity: Real) -> Tonicity {
        if osmolarity < self.lower {
            Tonicity::Hypotonic
        } else if osmolarity > self.upper {
            Tonicity::Hypertonic
        } else {
            Tonicity::Isotonic
        }
    }
}

/// Classify against the default 280–320 mOsm/L band.
pub fn classify_tonicity(osmolarity: Real) -> Tonicity {
    TonicityBand::default().classify(osmolarity)
}
