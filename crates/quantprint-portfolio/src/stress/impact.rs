//! Stress impact calculations.

use serde::{Deserialize, Serialize};
use tracing::info;

use super::scenarios::StressScenario;
use crate::Portfolio;

/// Result of a stress test on a portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioOutcome {
    /// Scenario name.
    pub name: String,

    /// Scenario description.
    pub description: String,

    /// Initial portfolio value.
    pub initial_value: f64,

    /// Portfolio value after the shocks.
    pub scenario_value: f64,

    /// Absolute P&L.
    pub pnl: f64,

    /// P&L as a fraction of initial value; 0 when the initial value is 0.
    pub pnl_pct: f64,
}

impl ScenarioOutcome {
    /// Returns true if this is a gain.
    #[must_use]
    pub fn is_gain(&self) -> bool {
        self.pnl > 0.0
    }

    /// Returns true if this is a loss.
    #[must_use]
    pub fn is_loss(&self) -> bool {
        self.pnl < 0.0
    }
}

/// Runs a single scenario.
#[must_use]
pub fn run_stress_scenario(portfolio: &Portfolio, scenario: &StressScenario) -> ScenarioOutcome {
    let initial_value = portfolio.total_value_f64();

    let scenario_value: f64 = portfolio
        .positions
        .iter()
        .map(|p| p.value_f64() * (1.0 + scenario.shock_for(&p.asset_class)))
        .sum();

    let pnl = scenario_value - initial_value;
    let pnl_pct = if initial_value == 0.0 {
        0.0
    } else {
        pnl / initial_value
    };

    ScenarioOutcome {
        name: scenario.name.clone(),
        description: scenario.description.clone(),
        initial_value,
        scenario_value,
        pnl,
        pnl_pct,
    }
}

/// Runs every scenario, returning outcomes in scenario order.
#[must_use]
pub fn run_stress_scenarios(
    portfolio: &Portfolio,
    scenarios: &[StressScenario],
) -> Vec<ScenarioOutcome> {
    let outcomes: Vec<ScenarioOutcome> = scenarios
        .iter()
        .map(|s| run_stress_scenario(portfolio, s))
        .collect();
    info!(scenarios = outcomes.len(), "Ran consumer stress tests");
    outcomes
}

/// The outcome with the largest loss.
#[must_use]
pub fn worst_case(outcomes: &[ScenarioOutcome]) -> Option<&ScenarioOutcome> {
    outcomes.iter().min_by(|a, b| {
        a.pnl
            .partial_cmp(&b.pnl)
            .unwrap_or(std::cmp::Ordering::Equal)
    })
}
