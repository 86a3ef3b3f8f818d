//! Inventory domain module.
//!
//! This crate contains the ingredient record and the stock reporting rules,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod ingredient;
pub mod report;

pub use ingredient::{DEFAULT_UNIT, Ingredient, NewIngredient};
pub use report::{
    AlertReason, DEFAULT_LOW_STOCK_THRESHOLD, FinancialSummary, InventorySummary, StockAlert, summarize,
    summarize_financials,
};
