//! Allocation summary.

use std::collections::BTreeMap;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::types::Position;
use crate::Portfolio;

/// Number of positions reported as top positions.
pub const TOP_POSITIONS: usize = 5;

/// One of the largest positions by value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopPosition {
    /// Ticker or identifier.
    pub symbol: String,
    /// Asset class label.
    pub asset_class: String,
    /// Market value.
    pub value: Decimal,
    /// Fraction of total portfolio value.
    pub weight: f64,
}

impl TopPosition {
    /// Market value as `f64`.
    #[must_use]
    pub fn value_f64(&self) -> f64 {
        self.value.to_f64().unwrap_or(0.0)
    }
}

impl From<&Position> for TopPosition {
    fn from(p: &Position) -> Self {
        Self {
            symbol: p.symbol.clone(),
            asset_class: p.asset_class.clone(),
            value: p.value,
            weight: p.weight,
        }
    }
}

/// Allocation by asset class plus concentration measures.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AllocationSummary {
    /// Asset class to aggregate weight, ordered by asset class name.
    pub weights: BTreeMap<String, f64>,

    /// Up to [`TOP_POSITIONS`] positions by value, largest first.
    pub top_positions: Vec<TopPosition>,

    /// Sum of squared position weights.
    pub herfindahl_index: f64,
}

impl AllocationSummary {
    /// Weight of an asset class, 0 if absent.
    #[must_use]
    pub fn weight_of(&self, asset_class: &str) -> f64 {
        self.weights.get(asset_class).copied().unwrap_or(0.0)
    }
}

/// Summarizes a portfolio's allocation.
///
/// - Class weights are class value over total value. Every class present
///   in the portfolio appears, with weight 0 when the total is zero.
/// - Top positions are sorted by value descending; ties keep input order.
/// - The Herfindahl index uses position weights, not class weights, so it
///   measures single-name concentration. An empty portfolio scores 0.
#[must_use]
pub fn summarize_allocation(portfolio: &Portfolio) -> AllocationSummary {
    let mut class_values: BTreeMap<String, Decimal> = BTreeMap::new();
    for p in &portfolio.positions {
        *class_values.entry(p.asset_class.clone()).or_insert(Decimal::ZERO) += p.value;
    }

    let total = portfolio.total_value;
    let weights: BTreeMap<String, f64> = class_values
        .into_iter()
        .map(|(class, value)| {
            let weight = if total.is_zero() {
                0.0
            } else {
                (value / total).to_f64().unwrap_or(0.0)
            };
            (class, weight)
        })
        .collect();

    info!(asset_classes = weights.len(), "Computed allocation across asset classes");

    AllocationSummary {
        weights,
        top_positions: top_positions(&portfolio.positions, TOP_POSITIONS),
        herfindahl_index: herfindahl_index(&portfolio.positions),
    }
}

/// Returns the `n` largest positions by value.
///
/// Positions with equal value keep their input order.
#[must_use]
pub fn top_positions(positions: &[Position], n: usize) -> Vec<TopPosition> {
    let mut ranked: Vec<&Position> = positions.iter().collect();
    ranked.sort_by(|a, b| b.value.cmp(&a.value));
    ranked.into_iter().take(n).map(TopPosition::from).collect()
}

/// Sum of squared position weights. 0 for an empty slice.
#[must_use]
pub fn herfindahl_index(positions: &[Position]) -> f64 {
    positions.iter().map(|p| p.weight * p.weight).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::UserProfile;
    use approx::assert_relative_eq;
    use quantprint_config::HoldingSpec;

    fn load(holdings: &[(&str, &str, f64, f64)]) -> Portfolio {
        let specs: Vec<HoldingSpec> = holdings
            .iter()
            .map(|(s, c, q, p)| HoldingSpec::new(*s, *c, *q, *p))
            .collect();
        Portfolio::load(&specs, UserProfile::default()).unwrap()
    }

    #[test]
    fn test_two_asset_summary() {
        let portfolio = load(&[("AAA", "equity", 10.0, 100.0), ("BBB", "bond", 5.0, 100.0)]);
        let summary = summarize_allocation(&portfolio);

        assert_relative_eq!(summary.weight_of("equity"), 2.0 / 3.0, epsilon = 1e-12);
        assert_relative_eq!(summary.weight_of("bond"), 1.0 / 3.0, epsilon = 1e-12);
        assert_eq!(summary.weight_of("cash"), 0.0);
        assert_relative_eq!(summary.herfindahl_index, 5.0 / 9.0, epsilon = 1e-12);

        let keys: Vec<&String> = summary.weights.keys().collect();
        assert_eq!(keys, vec!["bond", "equity"]);
        assert_eq!(summary.top_positions[0].symbol, "AAA");
    }

    #[test]
    fn test_classes_aggregate() {
        let portfolio = load(&[
            ("A", "equity", 1.0, 30.0),
            ("B", "bond", 1.0, 40.0),
            ("C", "equity", 1.0, 30.0),
        ]);
        let summary = summarize_allocation(&portfolio);

        assert_relative_eq!(summary.weight_of("equity"), 0.6, epsilon = 1e-12);
        assert_relative_eq!(summary.weight_of("bond"), 0.4, epsilon = 1e-12);
        // position-level, not class-level
        assert_relative_eq!(summary.herfindahl_index, 0.09 + 0.16 + 0.09, epsilon = 1e-12);
    }

    #[test]
    fn test_top_positions_stable_and_capped() {
        let portfolio = load(&[
            ("P1", "equity", 1.0, 10.0),
            ("P2", "equity", 1.0, 50.0),
            ("P3", "bond", 1.0, 10.0),
            ("P4", "bond", 1.0, 20.0),
            ("P5", "cash", 1.0, 10.0),
            ("P6", "cash", 1.0, 10.0),
            ("P7", "cash", 1.0, 5.0),
        ]);
        let top = top_positions(&portfolio.positions, TOP_POSITIONS);

        let symbols: Vec<&str> = top.iter().map(|p| p.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["P2", "P4", "P1", "P3", "P5"]);
    }

    #[test]
    fn test_empty_portfolio() {
        let portfolio = load(&[]);
        let summary = summarize_allocation(&portfolio);

        assert!(summary.weights.is_empty());
        assert!(summary.top_positions.is_empty());
        assert_eq!(summary.herfindahl_index, 0.0);
    }

    #[test]
    fn test_zero_value_portfolio() {
        let portfolio = load(&[("A", "equity", 0.0, 10.0), ("B", "bond", 0.0, 10.0)]);
        let summary = summarize_allocation(&portfolio);

        assert_eq!(summary.weights.len(), 2);
        assert!(summary.weights.values().all(|w| *w == 0.0));
        assert_eq!(summary.herfindahl_index, 0.0);
    }

    #[test]
    fn test_single_position_fully_concentrated() {
        let portfolio = load(&[("ONLY", "equity", 3.0, 7.0)]);
        assert_eq!(summarize_allocation(&portfolio).herfindahl_index, 1.0);
    }
}
