//! Unit conversion module.
//!
//! Stateless conversion between units of weight and between units of volume,
//! implemented purely as table lookups (no IO, no shared state).

pub mod unit;

pub use unit::{ConversionTable, UnitDomain, convert, VOLUME_TABLE, WEIGHT_TABLE};
