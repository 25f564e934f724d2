//! Consumer blueprint report.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use quantprint_core::{currency, percent, MarkdownDoc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analytics::{ProjectionPoint, TopPosition};
use crate::engine::ConsumerAnalysis;
use crate::stress::ScenarioOutcome;
use crate::types::UserProfile;
use crate::{PortfolioError, PortfolioResult};

/// Application modules a consumer product built on this blueprint would ship.
pub const APPLICATION_MODULES: [&str; 6] = [
    "Broker CSV/API ingestion",
    "Holdings normalization and cost basis tracking",
    "Factor-lite analytics (allocation, concentration, beta proxies)",
    "Scenario builder for retail-friendly what-if analysis",
    "Goal tracking with monthly contribution planning",
    "Action queue connected to brokerage/trading APIs",
];

/// Portfolio section of the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSection {
    /// Total portfolio value.
    pub total_value: f64,
    /// Largest positions.
    pub top_positions: Vec<TopPosition>,
    /// Asset class weights.
    pub weights: BTreeMap<String, f64>,
}

/// Analytics section of the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsSection {
    /// Herfindahl concentration index.
    pub herfindahl_index: f64,
    /// Stress outcomes.
    pub stress_tests: Vec<ScenarioOutcome>,
    /// Growth projection.
    pub projection: Vec<ProjectionPoint>,
}

/// The assembled consumer blueprint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsumerReport {
    /// Report date.
    pub as_of: NaiveDate,
    /// Investor profile.
    pub user_profile: UserProfile,
    /// Portfolio snapshot.
    pub portfolio: PortfolioSection,
    /// Diagnostics.
    pub analytics: AnalyticsSection,
    /// Rendered action plan.
    pub actions: Vec<String>,
    /// Application modules.
    pub modules: Vec<String>,
}

impl ConsumerReport {
    /// Assembles the report from a finished analysis.
    #[must_use]
    pub fn assemble(as_of: NaiveDate, analysis: &ConsumerAnalysis) -> Self {
        Self {
            as_of,
            user_profile: analysis.portfolio.profile.clone(),
            portfolio: PortfolioSection {
                total_value: analysis.portfolio.total_value_f64(),
                top_positions: analysis.allocation.top_positions.clone(),
                weights: analysis.allocation.weights.clone(),
            },
            analytics: AnalyticsSection {
                herfindahl_index: analysis.allocation.herfindahl_index,
                stress_tests: analysis.stress_tests.clone(),
                projection: analysis.projection.clone(),
            },
            actions: analysis.actions.iter().map(ToString::to_string).collect(),
            modules: APPLICATION_MODULES.iter().map(|m| m.to_string()).collect(),
        }
    }

    /// Report file name for a date.
    #[must_use]
    pub fn file_name(as_of: NaiveDate) -> String {
        format!("consumer_quant_blueprint_{}.md", as_of)
    }

    /// Renders the report as markdown.
    #[must_use]
    pub fn to_markdown(&self) -> String {
        let mut doc = MarkdownDoc::new();
        doc.title(format!("Consumer Quant Blueprint – {}", self.as_of)).blank();

        let profile = &self.user_profile;
        if !profile.is_empty() {
            doc.heading(2, "Investor Profile");
            doc.bullet(format!(
                "Risk tolerance: {} | Horizon: {} years",
                profile.risk_tolerance.as_deref().unwrap_or("n/a"),
                profile.investment_horizon_years.as_deref().unwrap_or("n/a"),
            ));
            if let Some(objective) = profile.objective.as_deref().filter(|o| !o.is_empty()) {
                doc.bullet(format!("Objective: {}", objective));
            }
            doc.blank();
        }

        doc.heading(2, "Portfolio Snapshot")
            .bullet(format!("Total value: {}", currency(self.portfolio.total_value)))
            .bullet("Allocation by asset class:");
        for (asset_class, weight) in &self.portfolio.weights {
            doc.sub_bullet(format!("{}: {}", asset_class, percent(*weight, 1)));
        }
        doc.blank();

        doc.heading(3, "Top Positions");
        for pos in &self.portfolio.top_positions {
            doc.bullet(format!(
                "{}: {} of portfolio ({})",
                pos.symbol,
                percent(pos.weight, 1),
                currency(pos.value_f64())
            ));
        }
        doc.blank();

        doc.heading(2, "Scenario Diagnostics")
            .bullet(format!(
                "Herfindahl concentration index: {:.3}",
                self.analytics.herfindahl_index
            ))
            .blank();

        doc.heading(3, "Stress Tests");
        for outcome in &self.analytics.stress_tests {
            doc.bullet(format!(
                "{}: {} | P&L: {} ({})",
                outcome.name,
                outcome.description,
                currency(outcome.pnl),
                percent(outcome.pnl_pct, 1)
            ));
        }
        doc.blank();

        doc.heading(3, format!("{}-Month Projection", self.analytics.projection.len()));
        for point in &self.analytics.projection {
            doc.bullet(format!("Month {}: {}", point.month, currency(point.projected_value)));
        }
        doc.blank();

        doc.heading(2, "Action Plan");
        for action in &self.actions {
            doc.bullet(action);
        }
        doc.blank();

        doc.heading(2, "Application Modules");
        for module in &self.modules {
            doc.bullet(module);
        }

        doc.render()
    }

    /// Writes the markdown report into `output_dir`, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be written.
    pub fn write_markdown(&self, output_dir: &Path) -> PortfolioResult<PathBuf> {
        std::fs::create_dir_all(output_dir)
            .map_err(|e| PortfolioError::report_write(output_dir, &e))?;

        let path = output_dir.join(Self::file_name(self.as_of));
        std::fs::write(&path, self.to_markdown())
            .map_err(|e| PortfolioError::report_write(&path, &e))?;

        info!(path = %path.display(), "Wrote consumer quant blueprint");
        Ok(path)
    }
}
