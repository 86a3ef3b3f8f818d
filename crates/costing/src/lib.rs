//! Costing domain module.
//!
//! Cost-of-goods-sold (CMV) for ingredient line items and sale-price derivation
//! from a target margin, implemented purely as deterministic calculations
//! (no IO, no HTTP, no storage).
//!
//! The two are usually chained by callers: the `total_cost` of a
//! [`CostBreakdown`] is fed into [`compute_price`] as the cost figure.

pub mod cmv;
pub mod pricing;

pub use cmv::{CostBreakdown, CostLine, IngredientLineItem, compute_cmv};
pub use pricing::{DEFAULT_MARGIN_PERCENT, PricingResult, compute_price};
