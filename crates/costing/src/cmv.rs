use serde::{Deserialize, Serialize};

use gastro_core::DomainResult;
use gastro_core::numeric::{ensure_non_negative, ensure_present, ensure_representable, round_money};

/// One ingredient used in a preparation (transient input).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientLineItem {
    pub name: String,
    pub quantity: f64,
    pub unit_price: f64,
}

impl IngredientLineItem {
    pub fn new(name: impl Into<String>, quantity: f64, unit_price: f64) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit_price,
        }
    }

    fn validate(&self, position: usize) -> DomainResult<()> {
        ensure_present(&format!("ingredientes[{position}].nome"), Some(self.name.as_str()))?;
        ensure_non_negative(&format!("ingredientes[{position}].quantidade"), self.quantity)?;
        ensure_non_negative(&format!("ingredientes[{position}].preco_unitario"), self.unit_price)?;
        Ok(())
    }

    /// Unrounded cost contribution of this line.
    fn cost(&self) -> f64 {
        self.quantity * self.unit_price
    }
}

/// Cost of a single line, rounded for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostLine {
    pub ingredient_name: String,
    pub quantity: f64,
    pub unit_price: f64,
    pub line_cost: f64,
}

/// Result of a CMV computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// Lines in input order.
    pub lines: Vec<CostLine>,
    pub total_cost: f64,
}

impl CostBreakdown {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Compute the cost of goods sold for a set of line items.
///
/// Every item is validated before any cost is computed, so a failure never
/// leaves a partial breakdown behind. Line costs are shown rounded to two
/// places, but the total sums the unrounded line costs left to right in input
/// order and rounds once at the end.
pub fn compute_cmv(items: &[IngredientLineItem]) -> DomainResult<CostBreakdown> {
    for (position, item) in items.iter().enumerate() {
        item.validate(position)?;
    }

    let mut total = 0.0;
    let mut lines = Vec::with_capacity(items.len());
    for (position, item) in items.iter().enumerate() {
        let cost = ensure_representable(&format!("ingredientes[{position}].custo_total"), item.cost())?;
        total += cost;
        lines.push(CostLine {
            ingredient_name: item.name.trim().to_string(),
            quantity: item.quantity,
            unit_price: item.unit_price,
            line_cost: round_money(cost),
        });
    }

    let total = ensure_representable("cmv", total)?;

    Ok(CostBreakdown {
        lines,
        total_cost: round_money(total),
    })
}
