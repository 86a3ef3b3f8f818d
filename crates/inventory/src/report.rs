//! Stock reporting over a snapshot of ingredient records.
//!
//! Totals are accumulated at full precision in input order and rounded to two
//! places only when the summary is built.

use serde::{Deserialize, Serialize};

use gastro_core::DomainResult;
use gastro_core::numeric::{ensure_non_negative, ensure_representable, round_money};

use crate::ingredient::Ingredient;

/// Stock level under which an ingredient raises an alert by default.
pub const DEFAULT_LOW_STOCK_THRESHOLD: f64 = 10.0;

/// Why an alert was raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlertReason {
    #[serde(rename = "ESTOQUE BAIXO")]
    LowStock,
}

impl AlertReason {
    pub fn as_str(self) -> &'static str {
        match self {
            AlertReason::LowStock => "low stock",
        }
    }
}

impl core::fmt::Display for AlertReason {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockAlert {
    pub ingredient_name: String,
    pub current_stock: f64,
    pub reason: AlertReason,
}

/// Stock totals, valuation and alerts for a set of ingredients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventorySummary {
    pub total_ingredients: usize,
    pub total_stock: f64,
    pub total_value: f64,
    pub average_unit_price: f64,
    pub low_stock_threshold: f64,
    /// Alerts in the order the ingredients were supplied.
    pub alerts: Vec<StockAlert>,
}

impl InventorySummary {
    pub fn low_stock_count(&self) -> usize {
        self.alerts.len()
    }
}

/// Aggregate a snapshot of ingredients into an [`InventorySummary`].
///
/// An ingredient is low on stock when `current_stock < low_stock_threshold`.
/// The average unit price of an empty snapshot is 0.
pub fn summarize(ingredients: &[Ingredient], low_stock_threshold: f64) -> DomainResult<InventorySummary> {
    let low_stock_threshold = ensure_non_negative("limite_estoque", low_stock_threshold)?;

    let mut total_stock = 0.0;
    let mut total_value = 0.0;
    let mut alerts = Vec::new();

    for ingredient in ingredients {
        total_stock += ingredient.current_stock;
        total_value += ingredient.stock_value();

        if ingredient.current_stock < low_stock_threshold {
            alerts.push(StockAlert {
                ingredient_name: ingredient.name.clone(),
                current_stock: ingredient.current_stock,
                reason: AlertReason::LowStock,
            });
        }
    }

    let total_stock = ensure_representable("estoque_total", total_stock)?;
    let total_value = ensure_representable("valor_total_estoque", total_value)?;
    let average_unit_price = mean_unit_price(ingredients)?;

    Ok(InventorySummary {
        total_ingredients: ingredients.len(),
        total_stock: round_money(total_stock),
        total_value: round_money(total_value),
        average_unit_price: round_money(average_unit_price),
        low_stock_threshold,
        alerts,
    })
}

fn mean_unit_price(ingredients: &[Ingredient]) -> DomainResult<f64> {
    if ingredients.is_empty() {
        return Ok(0.0);
    }
    let sum: f64 = ingredients.iter().map(|i| i.unit_price).sum();
    ensure_representable("custo_medio_ingredientes", sum / ingredients.len() as f64)
}

/// Counts and average ingredient cost across the catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialSummary {
    pub total_recipes: usize,
    pub total_ingredients: usize,
    pub average_ingredient_cost: f64,
}

pub fn summarize_financials(recipe_count: usize, ingredients: &[Ingredient]) -> DomainResult<FinancialSummary> {
    Ok(FinancialSummary {
        total_recipes: recipe_count,
        total_ingredients: ingredients.len(),
        average_ingredient_cost: round_money(mean_unit_price(ingredients)?),
    })
}
