//! Pipeline cadences.

use std::fmt;
use std::str::FromStr;

use quantprint_config::{DashboardSpec, DashboardsConfig};
use serde::{Deserialize, Serialize};

/// How often a research pipeline runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cadence {
    /// Daily cross-asset snapshot.
    Daily,
    /// Weekly factor deep-dive.
    Weekly,
    /// Monthly strategic allocation review.
    Monthly,
}

impl Cadence {
    /// All cadences.
    pub const ALL: [Cadence; 3] = [Cadence::Daily, Cadence::Weekly, Cadence::Monthly];

    /// Lower-case name, also the `reports/` subdirectory.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }

    /// Summary document title (without the date).
    #[must_use]
    pub fn summary_title(self) -> &'static str {
        match self {
            Self::Daily => "Daily Cross-Asset Summary",
            Self::Weekly => "Weekly Factor Deep-Dive",
            Self::Monthly => "Monthly SAA Review",
        }
    }

    /// Dashboard section this cadence publishes.
    #[must_use]
    pub fn dashboard_spec(self, config: &DashboardsConfig) -> &DashboardSpec {
        match self {
            Self::Daily => &config.dashboards.daily_overview,
            Self::Weekly => &config.dashboards.weekly_review,
            Self::Monthly => &config.dashboards.monthly_saa,
        }
    }

    /// Whether low coverage files data-quality issues.
    #[must_use]
    pub fn files_quality_issues(self) -> bool {
        matches!(self, Self::Daily)
    }
}

impl fmt::Display for Cadence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Cadence {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            other => Err(format!("Unknown cadence '{}'", other)),
        }
    }
}
