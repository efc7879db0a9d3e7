//! osm-core: stable foundation for osmoflow.
//!
//! Contains:
//! - units (uom SI types + constructors for concentrations and molar mass)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{OsmError, OsmResult};
pub use numeric::*;
pub use units::*;
