//! `gastro-core`: shared building blocks for the costing engine.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the error model, strongly-typed record identifiers, and the numeric
//! validation/rounding helpers every calculator relies on.

pub mod error;
pub mod id;
pub mod numeric;
pub mod record;

pub use error::{DomainError, DomainResult};
pub use id::{IngredientId, RecipeId};
pub use record::Record;
