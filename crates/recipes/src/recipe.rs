use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use gastro_core::numeric::{ensure_non_negative, ensure_positive, ensure_present};
use gastro_core::{DomainResult, IngredientId, Record, RecipeId};

/// Servings assumed when a recipe is registered without a yield.
pub const DEFAULT_YIELD: f64 = 1.0;

/// An entry in a recipe's ingredient list.
///
/// Kitchens either point at a registered ingredient (`3`) or just write the
/// name down (`"Leite condensado"`); both are kept in the order given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecipeIngredient {
    Reference(IngredientId),
    Named(String),
}

/// Recipe record (owned by the repository, never mutated by the core).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,
    pub name: String,
    pub ingredients: Vec<RecipeIngredient>,
    pub preparation_method: String,
    pub preparation_time_minutes: f64,
    pub yield_count: f64,
    pub created_at: DateTime<Utc>,
}

/// Fields supplied when registering a recipe.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NewRecipe {
    pub name: Option<String>,
    pub ingredients: Vec<RecipeIngredient>,
    pub preparation_method: Option<String>,
    pub preparation_time_minutes: Option<f64>,
    pub yield_count: Option<f64>,
}

impl NewRecipe {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn with_ingredient(mut self, ingredient: RecipeIngredient) -> Self {
        self.ingredients.push(ingredient);
        self
    }

    pub fn with_preparation(mut self, method: impl Into<String>, minutes: f64) -> Self {
        self.preparation_method = Some(method.into());
        self.preparation_time_minutes = Some(minutes);
        self
    }

    pub fn with_yield(mut self, yield_count: f64) -> Self {
        self.yield_count = Some(yield_count);
        self
    }

    /// Check the draft and fill in defaults (no method, 0 minutes, yield of 1).
    pub fn validate(self) -> DomainResult<Self> {
        let name = ensure_present("nome", self.name.as_deref())?.to_string();
        for (position, ingredient) in self.ingredients.iter().enumerate() {
            if let RecipeIngredient::Named(n) = ingredient {
                ensure_present(&format!("ingredientes[{position}]"), Some(n.as_str()))?;
            }
        }
        let minutes = ensure_non_negative("tempo_preparo", self.preparation_time_minutes.unwrap_or(0.0))?;
        let yield_count = ensure_positive("rendimento", self.yield_count.unwrap_or(DEFAULT_YIELD))?;

        Ok(Self {
            name: Some(name),
            ingredients: self.ingredients,
            preparation_method: Some(self.preparation_method.unwrap_or_default()),
            preparation_time_minutes: Some(minutes),
            yield_count: Some(yield_count),
        })
    }
}

impl Record for Recipe {
    type Id = RecipeId;
    type Draft = NewRecipe;

    fn assemble(id: RecipeId, draft: NewRecipe, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: draft.name.unwrap_or_default(),
            ingredients: draft.ingredients,
            preparation_method: draft.preparation_method.unwrap_or_default(),
            preparation_time_minutes: draft.preparation_time_minutes.unwrap_or(0.0),
            yield_count: draft.yield_count.unwrap_or(DEFAULT_YIELD),
            created_at,
        }
    }

    fn id(&self) -> RecipeId {
        self.id
    }
}
