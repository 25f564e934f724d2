//! Investor profile.

use quantprint_config::UserProfileSpec;
use serde::{Deserialize, Serialize};

/// Investor profile. Values are labels passed through to the report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Risk tolerance label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_tolerance: Option<String>,

    /// Investment horizon in years.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub investment_horizon_years: Option<String>,

    /// Free-form objective.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub objective: Option<String>,
}

impl UserProfile {
    /// Returns true if no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.risk_tolerance.is_none()
            && self.investment_horizon_years.is_none()
            && self.objective.is_none()
    }
}

impl From<&UserProfileSpec> for UserProfile {
    fn from(spec: &UserProfileSpec) -> Self {
        Self {
            risk_tolerance: spec.risk_tolerance.clone(),
            investment_horizon_years: spec.investment_horizon_years.clone(),
            objective: spec.objective.clone(),
        }
    }
}
