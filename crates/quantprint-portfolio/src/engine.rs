//! Consumer analytics engine.
//!
//! Runs the five stages in order, each consuming the previous stage's
//! finished output:
//!
//! ```text
//! load -> allocation -> { stress tests, projection } -> actions
//! ```

use quantprint_config::{ConsumerBlueprint, HoldingSpec};
use serde::{Deserialize, Serialize};

use crate::actions::{plan_actions, ActionPolicy, RecommendedAction};
use crate::analytics::{
    project_growth, summarize_allocation, AllocationSummary, GrowthAssumptions, ProjectionPoint,
};
use crate::stress::{run_stress_scenarios, ScenarioOutcome, StressScenario};
use crate::types::UserProfile;
use crate::{Portfolio, PortfolioResult};

/// Everything the engine needs, extracted from a blueprint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConsumerInputs {
    /// Raw holdings.
    pub holdings: Vec<HoldingSpec>,
    /// Investor profile.
    pub profile: UserProfile,
    /// Stress scenarios in declaration order.
    pub scenarios: Vec<StressScenario>,
    /// Projection assumptions.
    pub assumptions: GrowthAssumptions,
    /// Action policy.
    pub policy: ActionPolicy,
}

impl ConsumerInputs {
    /// Extracts engine inputs from a consumer blueprint.
    #[must_use]
    pub fn from_blueprint(blueprint: &ConsumerBlueprint) -> Self {
        let templates = &blueprint.action_templates;
        Self {
            holdings: blueprint.portfolio.holdings.clone(),
            profile: UserProfile::from(&blueprint.user_profile),
            scenarios: StressScenario::from_specs(&blueprint.stress_tests),
            assumptions: GrowthAssumptions {
                expected_returns: blueprint
                    .expected_returns
                    .iter()
                    .map(|(k, v)| (k.to_string(), *v))
                    .collect(),
                monthly_contribution: templates.monthly_contribution,
            },
            policy: ActionPolicy::from_config(&blueprint.policy_targets, templates),
        }
    }
}

/// Composite result of one analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsumerAnalysis {
    /// Priced, weighted portfolio.
    pub portfolio: Portfolio,
    /// Allocation summary.
    pub allocation: AllocationSummary,
    /// Stress outcomes in scenario order.
    pub stress_tests: Vec<ScenarioOutcome>,
    /// Month-by-month projection.
    pub projection: Vec<ProjectionPoint>,
    /// Recommended actions in plan order.
    pub actions: Vec<RecommendedAction>,
}

/// Runs the full analysis.
///
/// # Errors
///
/// Returns an error only if a holding cannot be priced.
pub fn analyze(inputs: &ConsumerInputs, months: u32) -> PortfolioResult<ConsumerAnalysis> {
    let portfolio = Portfolio::load(&inputs.holdings, inputs.profile.clone())?;
    let allocation = summarize_allocation(&portfolio);
    let stress_tests = run_stress_scenarios(&portfolio, &inputs.scenarios);
    let projection = project_growth(&portfolio, &inputs.assumptions, months);
    let actions = plan_actions(&allocation, portfolio.total_value_f64(), &inputs.policy);

    Ok(ConsumerAnalysis {
        portfolio,
        allocation,
        stress_tests,
        projection,
        actions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use quantprint_config::ConfigDocument;

    const BLUEPRINT: &str = r#"
portfolio:
  holdings:
    - {symbol: AAA, asset_class: equity, quantity: 10, price: 100}
    - {symbol: BBB, asset_class: bond, quantity: 5, price: 100}
user_profile: {risk_tolerance: moderate}
stress_tests:
  equity_crash:
    description: Equities fall 20%
    shocks: {equity: -0.20, default: 0.0}
expected_returns: {equity: 0.06, bond: 0.03}
policy_targets: {equity: 0.5}
action_templates:
  monthly_contribution: 100
  rebalance_threshold: 0.05
  max_single_position: 0.6
  notes: [Revisit after bonus season]
"#;

    #[test]
    fn test_from_blueprint() {
        let blueprint = ConsumerBlueprint::from_yaml(BLUEPRINT).unwrap();
        let inputs = ConsumerInputs::from_blueprint(&blueprint);

        assert_eq!(inputs.holdings.len(), 2);
        assert_eq!(inputs.profile.risk_tolerance.as_deref(), Some("moderate"));
        assert_eq!(inputs.scenarios[0].default_shock, Some(0.0));
        assert_eq!(inputs.assumptions.annual_return("bond"), 0.03);
        assert_eq!(inputs.assumptions.monthly_contribution, 100.0);
        assert_eq!(inputs.policy.targets, vec![("equity".to_string(), 0.5)]);
        assert_eq!(inputs.policy.max_single_position, 0.6);
    }

    #[test]
    fn test_analyze() {
        let blueprint = ConsumerBlueprint::from_yaml(BLUEPRINT).unwrap();
        let analysis = analyze(&ConsumerInputs::from_blueprint(&blueprint), 12).unwrap();

        assert_relative_eq!(analysis.allocation.herfindahl_index, 5.0 / 9.0, epsilon = 1e-12);
        assert_relative_eq!(analysis.stress_tests[0].pnl, -200.0, epsilon = 1e-9);
        assert_eq!(analysis.projection.len(), 12);

        let actions: Vec<String> = analysis.actions.iter().map(ToString::to_string).collect();
        assert_eq!(
            actions,
            vec![
                "Trim approximately $250 in equity to move toward 50% target.",
                "Reduce AAA which is 66.7% of the portfolio (above 60% limit).",
                "Revisit after bonus season",
            ]
        );
    }

    #[test]
    fn test_analyze_empty_blueprint() {
        let analysis = analyze(&ConsumerInputs::default(), 3).unwrap();

        assert!(analysis.portfolio.is_empty());
        assert!(analysis.allocation.weights.is_empty());
        assert!(analysis.stress_tests.is_empty());
        assert!(analysis.actions.is_empty());
        assert!(analysis.projection.iter().all(|p| p.projected_value == 0.0));
    }
}
