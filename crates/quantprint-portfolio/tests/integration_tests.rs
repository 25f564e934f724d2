//! Integration tests for quantprint-portfolio.
//!
//! These tests run blueprints end to end, from YAML to markdown.

use approx::assert_relative_eq;
use chrono::NaiveDate;
use quantprint_config::{ConfigDocument, ConsumerBlueprint};
use quantprint_portfolio::prelude::*;
use quantprint_portfolio::{RebalanceDirection, DEFAULT_PROJECTION_MONTHS};

// =============================================================================
// TEST FIXTURES
// =============================================================================

const TWO_ASSET: &str = r#"
portfolio:
  holdings:
    - {symbol: AAA, asset_class: equity, quantity: 10, price: 100}
    - {symbol: BBB, asset_class: bond, quantity: 5, price: 100}
stress_tests:
  equity_crash:
    description: Equities fall 20%
    shocks: {equity: -0.20, default: 0.0}
policy_targets:
  equity: 0.5
action_templates:
  rebalance_threshold: 0.05
"#;

/// A household portfolio with more positions than the top-N cutoff.
const HOUSEHOLD: &str = r#"
portfolio:
  holdings:
    - {symbol: VTI, asset_class: equity, quantity: 120, price: 250}
    - {symbol: VXUS, asset_class: equity, quantity: 200, price: 60}
    - {symbol: BND, asset_class: bond, quantity: 150, price: 72}
    - {symbol: BNDX, asset_class: bond, quantity: 40, price: 49}
    - {symbol: VNQ, asset_class: real_estate, quantity: 30, price: 85}
    - {symbol: SGOV, asset_class: cash, quantity: 50, price: 100}
    - {symbol: AAPL, asset_class: equity, quantity: 20, price: 190}
user_profile:
  risk_tolerance: moderate
  investment_horizon_years: 20
  objective: Retirement at 60
stress_tests:
  equity_bear:
    description: Global equities -30%, bonds rally
    shocks: {equity: -0.30, bond: 0.05, default: -0.10}
  rate_shock:
    description: Rates +200bp
    shocks: {bond: -0.08, real_estate: -0.15}
  nothing_configured:
    description: Empty shock vector
expected_returns:
  equity: 0.07
  bond: 0.035
  cash: 0.045
policy_targets:
  equity: 0.60
  bond: 0.30
  cash: 0.05
  real_estate: 0.05
action_templates:
  monthly_contribution: 1000
  rebalance_threshold: 0.03
  max_single_position: 0.40
  notes:
    - Keep six months of expenses in cash.
    - Revisit targets after major life events.
"#;

fn run(yaml: &str, months: u32) -> ConsumerAnalysis {
    let blueprint = ConsumerBlueprint::from_yaml(yaml).unwrap();
    analyze(&ConsumerInputs::from_blueprint(&blueprint), months).unwrap()
}

fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()
}

// =============================================================================
// TWO-ASSET SCENARIOS
// =============================================================================

#[test]
fn test_two_asset_weights_and_concentration() {
    let analysis = run(TWO_ASSET, DEFAULT_PROJECTION_MONTHS);

    assert_relative_eq!(analysis.portfolio.total_value_f64(), 1500.0);
    assert_relative_eq!(analysis.portfolio.positions[0].weight, 0.6667, epsilon = 1e-4);
    assert_relative_eq!(analysis.portfolio.positions[1].weight, 0.3333, epsilon = 1e-4);
    assert_relative_eq!(analysis.allocation.weight_of("equity"), 0.6667, epsilon = 1e-4);
    assert_relative_eq!(analysis.allocation.weight_of("bond"), 0.3333, epsilon = 1e-4);
    assert_relative_eq!(analysis.allocation.herfindahl_index, 0.556, epsilon = 1e-3);
}

#[test]
fn test_two_asset_equity_crash() {
    let analysis = run(TWO_ASSET, DEFAULT_PROJECTION_MONTHS);
    let crash = &analysis.stress_tests[0];

    assert_relative_eq!(crash.scenario_value, 1300.0, epsilon = 1e-9);
    assert_relative_eq!(crash.pnl, -200.0, epsilon = 1e-9);
    assert_relative_eq!(crash.pnl_pct, -0.1333, epsilon = 1e-4);
}

#[test]
fn test_two_asset_trim_equity() {
    let analysis = run(TWO_ASSET, DEFAULT_PROJECTION_MONTHS);

    assert_eq!(analysis.actions.len(), 1);
    match &analysis.actions[0] {
        RecommendedAction::Rebalance {
            direction,
            asset_class,
            drift,
            ..
        } => {
            assert_eq!(*direction, RebalanceDirection::Trim);
            assert_eq!(asset_class, "equity");
            assert_relative_eq!(*drift, 0.1667, epsilon = 1e-4);
        }
        other => panic!("unexpected action {:?}", other),
    }
}

// =============================================================================
// HOUSEHOLD PORTFOLIO
// =============================================================================

#[test]
fn test_household_allocation() {
    let analysis = run(HOUSEHOLD, 24);

    // 30000 + 12000 + 10800 + 1960 + 2550 + 5000 + 3800
    assert_relative_eq!(analysis.portfolio.total_value_f64(), 66_110.0);

    let classes: Vec<&String> = analysis.allocation.weights.keys().collect();
    assert_eq!(classes, vec!["bond", "cash", "equity", "real_estate"]);
    let weight_sum: f64 = analysis.allocation.weights.values().sum();
    assert_relative_eq!(weight_sum, 1.0, epsilon = 1e-9);

    let top: Vec<&str> = analysis
        .allocation
        .top_positions
        .iter()
        .map(|p| p.symbol.as_str())
        .collect();
    assert_eq!(top, vec!["VTI", "VXUS", "BND", "SGOV", "AAPL"]);
}

#[test]
fn test_household_stress_order_and_defaults() {
    let analysis = run(HOUSEHOLD, 24);
    let names: Vec<&str> = analysis.stress_tests.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["equity_bear", "rate_shock", "nothing_configured"]);

    // equity -30% on 45800, bond +5% on 12760, others -10% on 7550
    let bear = &analysis.stress_tests[0];
    assert_relative_eq!(bear.pnl, -13_740.0 + 638.0 - 755.0, epsilon = 1e-6);

    let empty = &analysis.stress_tests[2];
    assert_eq!(empty.pnl, 0.0);
    assert_eq!(empty.pnl_pct, 0.0);
}

#[test]
fn test_household_projection_static_weights() {
    let analysis = run(HOUSEHOLD, 24);
    assert_eq!(analysis.projection.len(), 24);

    let r = analysis
        .portfolio
        .positions
        .iter()
        .map(|p| {
            let annual = match p.asset_class.as_str() {
                "equity" => 0.07,
                "bond" => 0.035,
                "cash" => 0.045,
                _ => 0.0,
            };
            p.weight * (annual / 12.0)
        })
        .sum::<f64>();

    let mut expected = 66_110.0;
    for point in &analysis.projection {
        expected = expected * (1.0 + r) + 1000.0;
        assert_relative_eq!(point.projected_value, expected, epsilon = 1e-6);
    }
    assert!(analysis.projection.windows(2).all(|w| w[1].month == w[0].month + 1));
}

#[test]
fn test_household_actions_order() {
    let analysis = run(HOUSEHOLD, 12);
    let text: Vec<String> = analysis.actions.iter().map(ToString::to_string).collect();

    // equity 69.3% vs 60%, bond 19.3% vs 30%, cash 7.6% vs 5%, real estate 3.9% vs 5%
    assert!(text[0].starts_with("Trim approximately"));
    assert!(text[0].contains("in equity to move toward 60% target."));
    assert!(text[1].starts_with("Add approximately"));
    assert!(text[1].contains("in bond to move toward 30% target."));
    assert_eq!(text.len(), 5);
    assert_eq!(
        text[2],
        "Reduce VTI which is 45.4% of the portfolio (above 40% limit)."
    );
    assert_eq!(text[3], "Keep six months of expenses in cash.");
    assert_eq!(text[4], "Revisit targets after major life events.");
}

#[test]
fn test_household_markdown() {
    let analysis = run(HOUSEHOLD, 12);
    let md = ConsumerReport::assemble(as_of(), &analysis).to_markdown();

    assert!(md.contains("# Consumer Quant Blueprint – 2024-12-31"));
    assert!(md.contains("- Risk tolerance: moderate | Horizon: 20 years"));
    assert!(md.contains("- Objective: Retirement at 60"));
    assert!(md.contains("- Total value: $66,110"));
    assert!(md.contains("- VTI: 45.4% of portfolio ($30,000)"));
    assert!(md.contains("### 12-Month Projection"));
    assert!(md.contains("- Month 12: $"));
}

// =============================================================================
// DEGENERATE INPUT
// =============================================================================

#[test]
fn test_zero_value_portfolio_reports_cleanly() {
    let yaml = r#"
portfolio:
  holdings:
    - {symbol: AAA, asset_class: equity, quantity: 0, price: 100}
stress_tests:
  crash: {description: down, shocks: {default: -0.5}}
policy_targets: {equity: 1.0}
"#;
    let analysis = run(yaml, 3);

    assert!(analysis.portfolio.is_degenerate());
    assert_eq!(analysis.allocation.weight_of("equity"), 0.0);
    assert_eq!(analysis.allocation.herfindahl_index, 0.0);
    assert_eq!(analysis.stress_tests[0].pnl_pct, 0.0);

    let text: Vec<String> = analysis.actions.iter().map(ToString::to_string).collect();
    assert_eq!(text, vec!["Add approximately $0 in equity to move toward 100% target."]);

    let md = ConsumerReport::assemble(as_of(), &analysis).to_markdown();
    assert!(!md.contains("NaN"));
}

#[test]
fn test_holdings_only_blueprint() {
    let yaml = "portfolio:\n  holdings:\n    - {symbol: X, asset_class: cash, quantity: 1, price: 1}\n";
    let analysis = run(yaml, DEFAULT_PROJECTION_MONTHS);

    assert!(analysis.stress_tests.is_empty());
    assert!(analysis.actions.is_empty());
    assert_eq!(analysis.projection.len(), 12);
    assert!(analysis.projection.iter().all(|p| p.projected_value == 1.0));
}

#[test]
fn test_largest_accepted_holdings_analyze() {
    let yaml = r#"
portfolio:
  holdings:
    - {symbol: BIG1, asset_class: equity, quantity: 1.0e12, price: 1.0e12}
    - {symbol: BIG2, asset_class: bond, quantity: 1.0e12, price: 1.0e12}
    - {symbol: BIG3, asset_class: bond, quantity: 1.0e12, price: 1.0e12}
    - {symbol: BIG4, asset_class: cash, quantity: 1.0e12, price: 1.0e12}
stress_tests:
  crash: {description: down, shocks: {equity: -0.5}}
"#;
    let analysis = run(yaml, 2);

    assert_relative_eq!(analysis.portfolio.total_value_f64(), 4e24, max_relative = 1e-12);
    assert_relative_eq!(analysis.allocation.weight_of("bond"), 0.5, epsilon = 1e-9);
    assert_relative_eq!(analysis.stress_tests[0].pnl_pct, -0.125, epsilon = 1e-9);
    assert_eq!(analysis.projection.len(), 2);
}

#[test]
fn test_out_of_range_holding_fails_at_load() {
    let yaml = "portfolio:\n  holdings:\n    - {symbol: BIG, asset_class: equity, quantity: 1.0e15, price: 1.0e15}\n";
    assert!(ConsumerBlueprint::from_yaml(yaml).is_err());
}
