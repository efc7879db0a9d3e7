use crate::{OsmError, OsmResult};

/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> OsmResult<Real> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(OsmError::NonFinite { what, value: v })
    }
}

/// Finite and strictly greater than zero.
pub fn ensure_positive(v: Real, what: &'static str) -> OsmResult<Real> {
    let v = ensure_finite(v, what)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(OsmError::NonPositive { what, value: v })
    }
}

/// Round to `decimals` places with ties away from zero (2.5 -> 3, -2.5 -> -3).
///
/// Values too large to scale are returned unchanged.
pub fn round_half_away(v: Real, decimals: usize) -> Real {
    let scale = 10f64.powi(decimals.min(i32::MAX as usize) as i32);
    let scaled = v * scale;
    if !scaled.is_finite() {
        return v;
    }
    scaled.round() / scale
}
