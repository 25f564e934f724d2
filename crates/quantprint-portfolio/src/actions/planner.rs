//! Action planner.

use std::fmt;

use quantprint_core::{currency, percent};
use serde::{Deserialize, Serialize};

use super::policy::ActionPolicy;
use crate::analytics::{AllocationSummary, TopPosition};

/// Direction of a rebalance trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RebalanceDirection {
    /// Over target: sell down.
    Trim,
    /// At or under target: buy.
    Add,
}

impl fmt::Display for RebalanceDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Trim => f.write_str("Trim"),
            Self::Add => f.write_str("Add"),
        }
    }
}

/// A recommended action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RecommendedAction {
    /// Move an asset class toward its target weight.
    Rebalance {
        /// Trim or add.
        direction: RebalanceDirection,
        /// Asset class.
        asset_class: String,
        /// Current weight minus target weight.
        drift: f64,
        /// Approximate trade size: |drift| x total value.
        amount: f64,
        /// Target weight.
        target: f64,
    },

    /// Reduce a position above the single-position cap.
    Concentration {
        /// Position symbol.
        symbol: String,
        /// Current weight.
        weight: f64,
        /// Configured cap.
        limit: f64,
    },

    /// Configured note, rendered verbatim.
    Note {
        /// Note text.
        text: String,
    },
}

impl fmt::Display for RecommendedAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rebalance {
                direction,
                asset_class,
                amount,
                target,
                ..
            } => write!(
                f,
                "{} approximately {} in {} to move toward {} target.",
                direction,
                currency(*amount),
                asset_class,
                percent(*target, 0)
            ),
            Self::Concentration {
                symbol,
                weight,
                limit,
            } => write!(
                f,
                "Reduce {} which is {} of the portfolio (above {} limit).",
                symbol,
                percent(*weight, 1),
                percent(*limit, 0)
            ),
            Self::Note { text } => f.write_str(text),
        }
    }
}

/// Rebalance actions, one per target whose |drift| reaches the threshold.
///
/// Asset classes missing from the allocation count as weight 0.
#[must_use]
pub fn rebalance_actions(
    allocation: &AllocationSummary,
    total_value: f64,
    policy: &ActionPolicy,
) -> Vec<RecommendedAction> {
    policy
        .targets
        .iter()
        .filter_map(|(asset_class, target)| {
            let drift = allocation.weight_of(asset_class) - target;
            if drift.abs() < policy.rebalance_threshold {
                return None;
            }
            let direction = if drift > 0.0 {
                RebalanceDirection::Trim
            } else {
                RebalanceDirection::Add
            };
            Some(RecommendedAction::Rebalance {
                direction,
                asset_class: asset_class.clone(),
                drift,
                amount: drift.abs() * total_value,
                target: *target,
            })
        })
        .collect()
}

/// Concentration actions for top positions above the cap.
#[must_use]
pub fn concentration_actions(
    top_positions: &[TopPosition],
    policy: &ActionPolicy,
) -> Vec<RecommendedAction> {
    top_positions
        .iter()
        .filter(|p| p.weight > policy.max_single_position)
        .map(|p| RecommendedAction::Concentration {
            symbol: p.symbol.clone(),
            weight: p.weight,
            limit: policy.max_single_position,
        })
        .collect()
}

/// Full action plan: rebalance actions, then concentration actions, then
/// notes. The order is part of the report output and is never re-sorted.
#[must_use]
pub fn plan_actions(
    allocation: &AllocationSummary,
    total_value: f64,
    policy: &ActionPolicy,
) -> Vec<RecommendedAction> {
    let mut actions = rebalance_actions(allocation, total_value, policy);
    actions.extend(concentration_actions(&allocation.top_positions, policy));
    actions.extend(
        policy
            .notes
            .iter()
            .map(|text| RecommendedAction::Note { text: text.clone() }),
    );
    actions
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::collections::BTreeMap;

    fn allocation(weights: &[(&str, f64)], top: &[(&str, f64)]) -> AllocationSummary {
        AllocationSummary {
            weights: weights
                .iter()
                .map(|(k, v)| (k.to_string(), *v))
                .collect::<BTreeMap<_, _>>(),
            top_positions: top
                .iter()
                .map(|(s, w)| TopPosition {
                    symbol: s.to_string(),
                    asset_class: "equity".into(),
                    value: dec!(0),
                    weight: *w,
                })
                .collect(),
            herfindahl_index: 0.0,
        }
    }

    #[test]
    fn test_trim_over_target() {
        let alloc = allocation(&[("equity", 2.0 / 3.0), ("bond", 1.0 / 3.0)], &[]);
        let policy = ActionPolicy::new()
            .with_target("equity", 0.5)
            .with_rebalance_threshold(0.05);
        let actions = rebalance_actions(&alloc, 1500.0, &policy);

        assert_eq!(actions.len(), 1);
        assert_eq!(
            actions[0].to_string(),
            "Trim approximately $250 in equity to move toward 50% target."
        );
    }

    #[test]
    fn test_add_missing_class() {
        let alloc = allocation(&[("equity", 1.0)], &[]);
        let policy = ActionPolicy::new().with_target("cash", 0.1);
        let actions = rebalance_actions(&alloc, 20_000.0, &policy);

        assert_eq!(
            actions[0].to_string(),
            "Add approximately $2,000 in cash to move toward 10% target."
        );
    }

    #[test]
    fn test_threshold_inclusive() {
        let alloc = allocation(&[("equity", 0.75)], &[]);
        let at = ActionPolicy::new()
            .with_target("equity", 0.5)
            .with_rebalance_threshold(0.25);
        assert_eq!(rebalance_actions(&alloc, 100.0, &at).len(), 1);

        let above = at.clone().with_rebalance_threshold(0.26);
        assert!(rebalance_actions(&alloc, 100.0, &above).is_empty());
    }

    #[test]
    fn test_zero_drift_with_zero_threshold_is_add() {
        let alloc = allocation(&[("equity", 0.5)], &[]);
        let policy = ActionPolicy::new().with_target("equity", 0.5);
        let actions = rebalance_actions(&alloc, 1000.0, &policy);

        assert!(matches!(
            actions[0],
            RecommendedAction::Rebalance { direction: RebalanceDirection::Add, .. }
        ));
        assert_eq!(
            actions[0].to_string(),
            "Add approximately $0 in equity to move toward 50% target."
        );
    }

    #[test]
    fn test_concentration() {
        let alloc = allocation(&[], &[("AAA", 0.4), ("BBB", 0.25), ("CCC", 0.35)]);
        let policy = ActionPolicy::new().with_max_single_position(0.25);
        let actions = concentration_actions(&alloc.top_positions, &policy);

        assert_eq!(actions.len(), 2);
        assert_eq!(
            actions[0].to_string(),
            "Reduce AAA which is 40.0% of the portfolio (above 25% limit)."
        );
        assert_eq!(
            actions[1].to_string(),
            "Reduce CCC which is 35.0% of the portfolio (above 25% limit)."
        );
    }

    #[test]
    fn test_plan_order() {
        let alloc = allocation(&[("equity", 0.9), ("bond", 0.1)], &[("AAA", 0.9)]);
        let policy = ActionPolicy::new()
            .with_target("bond", 0.4)
            .with_target("equity", 0.6)
            .with_rebalance_threshold(0.05)
            .with_max_single_position(0.5)
            .with_note("Review annually")
            .with_note("Keep an emergency fund");
        let plan: Vec<String> = plan_actions(&alloc, 1000.0, &policy)
            .iter()
            .map(ToString::to_string)
            .collect();

        assert_eq!(plan.len(), 5);
        assert!(plan[0].starts_with("Add approximately $300 in bond"));
        assert!(plan[1].starts_with("Trim approximately $300 in equity"));
        assert!(plan[2].starts_with("Reduce AAA"));
        assert_eq!(plan[3], "Review annually");
        assert_eq!(plan[4], "Keep an emergency fund");
    }

    #[test]
    fn test_default_policy_only_fires_on_drift() {
        let alloc = allocation(&[("equity", 1.0)], &[("AAA", 1.0)]);
        assert!(plan_actions(&alloc, 100.0, &ActionPolicy::default()).is_empty());
    }
}
