//! Recipes domain module.
//!
//! Recipe records as kept by the repository. The costing engine never mutates
//! them; they only carry what a kitchen needs to reproduce a preparation.

pub mod recipe;

pub use recipe::{DEFAULT_YIELD, NewRecipe, Recipe, RecipeIngredient};
