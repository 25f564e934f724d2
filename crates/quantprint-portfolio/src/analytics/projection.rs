//! Growth projection.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::Portfolio;

/// Default projection length in months.
pub const DEFAULT_PROJECTION_MONTHS: u32 = 12;

/// Return and contribution assumptions for the projection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GrowthAssumptions {
    /// Annual expected return per asset class.
    pub expected_returns: BTreeMap<String, f64>,

    /// Amount added at the end of every month.
    pub monthly_contribution: f64,
}

impl GrowthAssumptions {
    /// Creates assumptions with no expected returns.
    #[must_use]
    pub fn new(monthly_contribution: f64) -> Self {
        Self {
            expected_returns: BTreeMap::new(),
            monthly_contribution,
        }
    }

    /// Sets the annual expected return for an asset class.
    #[must_use]
    pub fn with_return(mut self, asset_class: impl Into<String>, annual: f64) -> Self {
        self.expected_returns.insert(asset_class.into(), annual);
        self
    }

    /// Annual expected return for an asset class, 0 if not configured.
    #[must_use]
    pub fn annual_return(&self, asset_class: &str) -> f64 {
        self.expected_returns.get(asset_class).copied().unwrap_or(0.0)
    }
}

/// Projected value at the end of a month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    /// Month index, starting at 1.
    pub month: u32,
    /// Projected total value.
    pub projected_value: f64,
}

/// Blended monthly return: sum of position weight x annual return / 12.
#[must_use]
pub fn blended_monthly_return(portfolio: &Portfolio, assumptions: &GrowthAssumptions) -> f64 {
    portfolio
        .positions
        .iter()
        .map(|p| p.weight * (assumptions.annual_return(&p.asset_class) / 12.0))
        .sum()
}

/// Projects portfolio value month by month.
///
/// Each month: `total = total * (1 + r) + contribution`, where `r` is the
/// blended monthly return from the starting weights. Weights are not
/// recomputed as contributions arrive.
///
/// Returns exactly `months` points; `months == 0` returns an empty vector.
#[must_use]
pub fn project_growth(
    portfolio: &Portfolio,
    assumptions: &GrowthAssumptions,
    months: u32,
) -> Vec<ProjectionPoint> {
    let monthly_return = blended_monthly_return(portfolio, assumptions);

    let mut total = portfolio.total_value_f64();
    let mut points = Vec::with_capacity(months as usize);
    for month in 1..=months {
        total = total * (1.0 + monthly_return) + assumptions.monthly_contribution;
        points.push(ProjectionPoint {
            month,
            projected_value: total,
        });
    }

    info!(months, "Built projection for consumer portfolio");
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::UserProfile;
    use approx::assert_relative_eq;
    use quantprint_config::HoldingSpec;

    fn portfolio() -> Portfolio {
        Portfolio::load(
            &[
                HoldingSpec::new("AAA", "equity", 10.0, 100.0),
                HoldingSpec::new("BBB", "bond", 5.0, 100.0),
            ],
            UserProfile::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_blended_return() {
        let assumptions = GrowthAssumptions::new(0.0)
            .with_return("equity", 0.12)
            .with_return("bond", 0.06);

        // 2/3 * 0.01 + 1/3 * 0.005
        assert_relative_eq!(
            blended_monthly_return(&portfolio(), &assumptions),
            0.025 / 3.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_contributions_only() {
        let points = project_growth(&portfolio(), &GrowthAssumptions::new(100.0), 3);

        assert_eq!(points.len(), 3);
        assert_eq!(points[0], ProjectionPoint { month: 1, projected_value: 1600.0 });
        assert_eq!(points[2].month, 3);
        assert_relative_eq!(points[2].projected_value, 1800.0);
    }

    #[test]
    fn test_compounding_recurrence() {
        let assumptions = GrowthAssumptions::new(50.0).with_return("equity", 0.12);
        let r = (2.0 / 3.0) * 0.01;
        let points = project_growth(&portfolio(), &assumptions, 2);

        let m1 = 1500.0 * (1.0 + r) + 50.0;
        let m2 = m1 * (1.0 + r) + 50.0;
        assert_relative_eq!(points[0].projected_value, m1, epsilon = 1e-9);
        assert_relative_eq!(points[1].projected_value, m2, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_months() {
        assert!(project_growth(&portfolio(), &GrowthAssumptions::default(), 0).is_empty());
    }

    #[test]
    fn test_unknown_class_earns_nothing() {
        let assumptions = GrowthAssumptions::new(0.0).with_return("crypto", 0.5);
        let points = project_growth(&portfolio(), &assumptions, DEFAULT_PROJECTION_MONTHS);

        assert_eq!(points.len(), 12);
        assert!(points.iter().all(|p| p.projected_value == 1500.0));
    }
}
