use serde::{Deserialize, Serialize};

use gastro_core::numeric::{ensure_non_negative, ensure_representable, round_money};
use gastro_core::{DomainError, DomainResult};

/// Margin applied when a caller does not provide one.
pub const DEFAULT_MARGIN_PERCENT: f64 = 30.0;

/// Sale price derived from a cost and a target margin.
///
/// The margin is a share of the **sale price**, not a markup on cost: a 30%
/// margin on a cost of 7.00 gives a price of 10.00.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingResult {
    pub cost: f64,
    pub margin_percent: f64,
    pub sale_price: f64,
    pub unit_profit: f64,
}

/// Derive the sale price for `cost` at `margin_percent`.
///
/// `margin_percent` must lie in `[0, 100)`: at 100 the price diverges and above
/// it the price turns negative. Both outputs are rounded to two places after
/// the division; the profit is taken from the unrounded price.
pub fn compute_price(cost: f64, margin_percent: f64) -> DomainResult<PricingResult> {
    let cost = ensure_non_negative("cmv", cost)?;
    if !margin_percent.is_finite() || !(0.0..100.0).contains(&margin_percent) {
        return Err(DomainError::invalid_margin(margin_percent));
    }

    let sale_price = ensure_representable("preco_venda", cost / (1.0 - margin_percent / 100.0))?;
    let unit_profit = ensure_representable("lucro_unitario", sale_price - cost)?;

    Ok(PricingResult {
        cost: round_money(cost),
        margin_percent,
        sale_price: round_money(sale_price),
        unit_profit: round_money(unit_profit),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thirty_percent_margin_on_seven() {
        let result = compute_price(7.0, 30.0).unwrap();
        assert_eq!(result.sale_price, 10.0);
        assert_eq!(result.unit_profit, 3.0);
        assert_eq!(result.cost, 7.0);
        assert_eq!(result.margin_percent, 30.0);
    }

    #[test]
    fn default_margin_is_thirty_percent() {
        let result = compute_price(7.0, DEFAULT_MARGIN_PERCENT).unwrap();
        assert_eq!(result.sale_price, 10.0);
    }

    #[test]
    fn zero_margin_keeps_price_at_cost() {
        let result = compute_price(12.34, 0.0).unwrap();
        assert_eq!(result.sale_price, 12.34);
        assert_eq!(result.unit_profit, 0.0);
    }

    #[test]
    fn zero_cost_is_free() {
        let result = compute_price(0.0, 50.0).unwrap();
        assert_eq!(result.sale_price, 0.0);
        assert_eq!(result.unit_profit, 0.0);
    }

    #[test]
    fn rounds_after_division() {
        // 10 / (1 - 0.35) = 15.3846...
        let result = compute_price(10.0, 35.0).unwrap();
        assert_eq!(result.sale_price, 15.38);
        assert_eq!(result.unit_profit, 5.38);
    }

    #[test]
    fn margin_at_or_above_hundred_is_rejected() {
        assert_eq!(compute_price(7.0, 100.0), Err(DomainError::invalid_margin(100.0)));
        assert_eq!(compute_price(7.0, 150.0), Err(DomainError::invalid_margin(150.0)));
    }

    #[test]
    fn negative_margin_is_rejected() {
        assert!(matches!(compute_price(7.0, -5.0), Err(DomainError::InvalidMargin(_))));
    }

    #[test]
    fn non_finite_margin_is_rejected() {
        assert!(matches!(compute_price(7.0, f64::NAN), Err(DomainError::InvalidMargin(_))));
        assert!(matches!(compute_price(7.0, f64::INFINITY), Err(DomainError::InvalidMargin(_))));
    }

    #[test]
    fn overflowing_sale_price_is_rejected() {
        assert_eq!(
            compute_price(f64::MAX, 99.0),
            Err(DomainError::validation("preco_venda is too large to compute"))
        );
    }

    #[test]
    fn negative_cost_is_a_validation_error() {
        assert!(matches!(compute_price(-1.0, 30.0), Err(DomainError::Validation(_))));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 1000,
                ..ProptestConfig::default()
            })]

            /// Property: with no margin the sale price is the cost itself.
            #[test]
            fn zero_margin_identity(cost in 0.0f64..1_000_000.0) {
                let result = compute_price(cost, 0.0).unwrap();
                prop_assert_eq!(result.sale_price, round_money(cost));
                prop_assert_eq!(result.unit_profit, 0.0);
            }

            /// Property: any margin of 100 or more is rejected.
            #[test]
            fn margins_from_hundred_up_are_invalid(cost in 0.0f64..1_000.0, margin in 100.0f64..1_000.0) {
                prop_assert!(matches!(compute_price(cost, margin), Err(DomainError::InvalidMargin(_))));
            }

            /// Property: a valid margin never prices below cost.
            #[test]
            fn price_never_below_cost(cost in 0.0f64..100_000.0, margin in 0.0f64..99.0) {
                let result = compute_price(cost, margin).unwrap();
                prop_assert!(result.sale_price >= result.cost);
                prop_assert!(result.unit_profit >= 0.0);
            }
        }
    }
}
