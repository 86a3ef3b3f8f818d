use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use gastro_core::numeric::{ensure_non_negative, ensure_present};
use gastro_core::{DomainResult, IngredientId, Record};

/// Unit assumed when an ingredient is registered without one.
pub const DEFAULT_UNIT: &str = "kg";

/// Ingredient record (owned by the repository, read by the reporters).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: IngredientId,
    pub name: String,
    pub unit_price: f64,
    pub unit: String,
    pub current_stock: f64,
    pub created_at: DateTime<Utc>,
}

impl Ingredient {
    /// Value of the stock on hand at the current unit price.
    pub fn stock_value(&self) -> f64 {
        self.current_stock * self.unit_price
    }
}

/// Fields supplied when registering an ingredient.
///
/// Optional fields fall back to the registration defaults: price 0, unit
/// [`DEFAULT_UNIT`], stock 0.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NewIngredient {
    pub name: Option<String>,
    pub unit_price: Option<f64>,
    pub unit: Option<String>,
    pub current_stock: Option<f64>,
}

impl NewIngredient {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn with_unit_price(mut self, unit_price: f64) -> Self {
        self.unit_price = Some(unit_price);
        self
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    pub fn with_current_stock(mut self, current_stock: f64) -> Self {
        self.current_stock = Some(current_stock);
        self
    }

    /// Check the draft and fill in defaults.
    ///
    /// The returned draft has every field populated, so assembling it into an
    /// [`Ingredient`] cannot fail.
    pub fn validate(self) -> DomainResult<Self> {
        let name = ensure_present("nome", self.name.as_deref())?.to_string();
        let unit_price = ensure_non_negative("preco_unitario", self.unit_price.unwrap_or(0.0))?;
        let unit = match self.unit.as_deref() {
            None => DEFAULT_UNIT.to_string(),
            Some(u) => ensure_present("unidade", Some(u))?.to_string(),
        };
        let current_stock = ensure_non_negative("estoque_atual", self.current_stock.unwrap_or(0.0))?;

        Ok(Self {
            name: Some(name),
            unit_price: Some(unit_price),
            unit: Some(unit),
            current_stock: Some(current_stock),
        })
    }
}

impl Record for Ingredient {
    type Id = IngredientId;
    type Draft = NewIngredient;

    fn assemble(id: IngredientId, draft: NewIngredient, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: draft.name.unwrap_or_default(),
            unit_price: draft.unit_price.unwrap_or(0.0),
            unit: draft.unit.unwrap_or_else(|| DEFAULT_UNIT.to_string()),
            current_stock: draft.current_stock.unwrap_or(0.0),
            created_at,
        }
    }

    fn id(&self) -> IngredientId {
        self.id
    }
}
