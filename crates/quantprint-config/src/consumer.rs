//! Consumer blueprint document (`config/consumer/blueprint.yaml`).
//!
//! Every section is optional. Absent sections load as empty lists, empty
//! maps or zero, so a blueprint with only holdings is still a complete
//! document.

use serde::{Deserialize, Serialize};

use crate::error::{check_finite, check_non_negative, Validate, ValidationError};
use crate::ordered::OrderedMap;
use crate::scalar;

// =============================================================================
// CONSUMER BLUEPRINT
// =============================================================================

/// Top-level consumer blueprint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConsumerBlueprint {
    /// Holdings to analyze.
    #[serde(default)]
    pub portfolio: PortfolioSpec,

    /// Investor profile, passed through to the report.
    #[serde(default)]
    pub user_profile: UserProfileSpec,

    /// Stress scenarios in declaration order.
    #[serde(default)]
    pub stress_tests: OrderedMap<StressTestSpec>,

    /// Annual expected return per asset class.
    #[serde(default)]
    pub expected_returns: OrderedMap<f64>,

    /// Target weight per asset class.
    #[serde(default)]
    pub policy_targets: OrderedMap<f64>,

    /// Contribution, rebalance and concentration settings.
    #[serde(default)]
    pub action_templates: ActionTemplates,
}

/// `portfolio` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PortfolioSpec {
    /// Raw holdings.
    #[serde(default)]
    pub holdings: Vec<HoldingSpec>,
}

/// A raw holding record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoldingSpec {
    /// Ticker or identifier.
    pub symbol: String,
    /// Asset class label (e.g. `equity`, `bond`, `cash`).
    pub asset_class: String,
    /// Units held.
    pub quantity: f64,
    /// Price per unit.
    pub price: f64,
}

impl HoldingSpec {
    /// Creates a holding record.
    pub fn new(
        symbol: impl Into<String>,
        asset_class: impl Into<String>,
        quantity: f64,
        price: f64,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            asset_class: asset_class.into(),
            quantity,
            price,
        }
    }
}

/// `user_profile` section. All fields are opaque labels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfileSpec {
    /// Risk tolerance label.
    #[serde(default, deserialize_with = "scalar::opt_string", skip_serializing_if = "Option::is_none")]
    pub risk_tolerance: Option<String>,

    /// Investment horizon in years, kept as text.
    #[serde(default, deserialize_with = "scalar::opt_string", skip_serializing_if = "Option::is_none")]
    pub investment_horizon_years: Option<String>,

    /// Free-form objective.
    #[serde(default, deserialize_with = "scalar::opt_string", skip_serializing_if = "Option::is_none")]
    pub objective: Option<String>,
}

impl UserProfileSpec {
    /// Returns true if no profile field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.risk_tolerance.is_none()
            && self.investment_horizon_years.is_none()
            && self.objective.is_none()
    }
}

/// One entry of `stress_tests`.
///
/// `shocks` may contain a `default` key that applies to every asset class
/// not listed explicitly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StressTestSpec {
    /// Human-readable description.
    #[serde(default)]
    pub description: String,

    /// Asset class to fractional shock, plus optional `default`.
    #[serde(default)]
    pub shocks: OrderedMap<f64>,
}

/// Key inside `shocks` holding the fallback shock.
pub const DEFAULT_SHOCK_KEY: &str = "default";

/// Largest accepted quantity, price or market value of a single holding.
pub const MAX_HOLDING_VALUE: f64 = 1e24;

/// Largest accepted total portfolio value.
pub const MAX_PORTFOLIO_VALUE: f64 = 1e27;

/// `action_templates` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionTemplates {
    /// Fixed contribution added every projected month.
    #[serde(default)]
    pub monthly_contribution: f64,

    /// Minimum absolute drift that triggers a rebalance action.
    #[serde(default)]
    pub rebalance_threshold: f64,

    /// Largest allowed single-position weight.
    #[serde(default = "default_max_single_position")]
    pub max_single_position: f64,

    /// Static notes appended to the action plan verbatim.
    #[serde(default)]
    pub notes: Vec<String>,
}

fn default_max_single_position() -> f64 {
    1.0
}

impl Default for ActionTemplates {
    fn default() -> Self {
        Self {
            monthly_contribution: 0.0,
            rebalance_threshold: 0.0,
            max_single_position: default_max_single_position(),
            notes: Vec::new(),
        }
    }
}

// =============================================================================
// VALIDATION
// =============================================================================

impl Validate for HoldingSpec {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.symbol.trim().is_empty() {
            errors.push(ValidationError::new("symbol", "Symbol cannot be empty"));
        }
        if self.asset_class.trim().is_empty() {
            errors.push(ValidationError::new("asset_class", "Asset class cannot be empty"));
        }
        check_non_negative(&mut errors, "quantity", self.quantity);
        check_non_negative(&mut errors, "price", self.price);
        check_at_most(&mut errors, "quantity", self.quantity, MAX_HOLDING_VALUE);
        check_at_most(&mut errors, "price", self.price, MAX_HOLDING_VALUE);
        if self.quantity <= MAX_HOLDING_VALUE && self.price <= MAX_HOLDING_VALUE {
            check_at_most(&mut errors, "value", self.quantity * self.price, MAX_HOLDING_VALUE);
        }

        errors
    }
}

impl Validate for ConsumerBlueprint {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        for (i, holding) in self.portfolio.holdings.iter().enumerate() {
            let prefix = format!("portfolio.holdings[{}]", i);
            errors.extend(holding.validate().into_iter().map(|e| e.nested(&prefix)));
        }
        let total: f64 = self
            .portfolio
            .holdings
            .iter()
            .map(|h| h.quantity * h.price)
            .sum();
        check_at_most(&mut errors, "portfolio.holdings", total, MAX_PORTFOLIO_VALUE);

        for (name, scenario) in self.stress_tests.iter() {
            for (asset_class, shock) in scenario.shocks.iter() {
                check_finite(
                    &mut errors,
                    format!("stress_tests.{}.shocks.{}", name, asset_class),
                    *shock,
                );
            }
        }

        for (asset_class, ret) in self.expected_returns.iter() {
            check_finite(&mut errors, format!("expected_returns.{}", asset_class), *ret);
        }

        for (asset_class, target) in self.policy_targets.iter() {
            if !target.is_finite() || !(0.0..=1.0).contains(target) {
                errors.push(ValidationError::with_rule(
                    format!("policy_targets.{}", asset_class),
                    format!("Target weight must be between 0 and 1, got {}", target),
                    "unit_interval",
                ));
            }
        }

        let templates = &self.action_templates;
        check_finite(
            &mut errors,
            "action_templates.monthly_contribution",
            templates.monthly_contribution,
        );
        check_non_negative(
            &mut errors,
            "action_templates.rebalance_threshold",
            templates.rebalance_threshold,
        );
        check_non_negative(
            &mut errors,
            "action_templates.max_single_position",
            templates.max_single_position,
        );

        errors
    }
}

fn check_at_most(errors: &mut Vec<ValidationError>, field: &str, value: f64, limit: f64) {
    if value > limit {
        errors.push(ValidationError::with_rule(
            field,
            format!("Value {} exceeds the supported maximum {}", value, limit),
            "max_value",
        ));
    }
}
