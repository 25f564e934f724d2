//! Research pipeline orchestration.
//!
//! Every cadence runs the same stages:
//!
//! 1. Load and standardize benchmark returns, compute coverage
//! 2. Run the enabled models
//! 3. Write the markdown summary under `reports/{cadence}/`
//! 4. Publish the cadence's dashboard feeds
//! 5. (daily only) File data-quality issues for low-coverage asset classes

use std::path::PathBuf;

use chrono::NaiveDate;
use quantprint_config::{
    ConfigDocument, DashboardsConfig, DatasourcesConfig, ModelsConfig, OrderedMap, RepoLayout,
};
use serde::Serialize;
use tracing::{info, warn};

use crate::cadence::Cadence;
use crate::data::load_cross_asset_returns;
use crate::diagnostics::{coverage_breaches, CoverageStats};
use crate::feeds::write_dashboard_feeds;
use crate::insight::write_summary;
use crate::issues::{IssueDraft, IssueTracker};
use crate::models::{run_models, ModelResults};
use crate::returns::{BenchmarkReturnSource, CsvReturnSource, WarehouseProfile};
use crate::ResearchResult;

/// An issue filed (or attempted) during a run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FiledIssue {
    /// Asset class.
    pub asset_class: String,
    /// Coverage that triggered the issue.
    pub coverage: f64,
    /// Tracker issue number, when one was created.
    pub number: Option<u64>,
}

/// What a pipeline run produced.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineOutcome {
    /// Cadence run.
    pub cadence: Cadence,
    /// Run date.
    pub as_of: NaiveDate,
    /// Summary document.
    pub summary_path: PathBuf,
    /// Dashboard feeds written.
    pub feeds: Vec<PathBuf>,
    /// Coverage per asset class.
    pub diagnostics: OrderedMap<CoverageStats>,
    /// Model output.
    pub models: ModelResults,
    /// Data-quality issues.
    pub issues: Vec<FiledIssue>,
}

/// A configured research pipeline.
pub struct ResearchPipeline {
    layout: RepoLayout,
    datasources: DatasourcesConfig,
    models: ModelsConfig,
    dashboards: DashboardsConfig,
    source: Box<dyn BenchmarkReturnSource>,
    tracker: Option<Box<dyn IssueTracker>>,
}

impl ResearchPipeline {
    /// Creates a pipeline from already-loaded configuration.
    ///
    /// Returns are read from the CSV export under
    /// `connections.export_dir`, tagged with the warehouse profile
    /// resolved against the environment.
    pub fn new(
        layout: RepoLayout,
        datasources: DatasourcesConfig,
        models: ModelsConfig,
        dashboards: DashboardsConfig,
    ) -> Self {
        let profile = WarehouseProfile::from_env(datasources.connections.snowflake.as_ref());
        let source = CsvReturnSource::from_export_dir(layout.resolve(&datasources.connections.export_dir))
            .with_profile(profile);
        Self {
            layout,
            datasources,
            models,
            dashboards,
            source: Box::new(source),
            tracker: None,
        }
    }

    /// Loads `datasources.yaml`, `models.yaml` and `dashboards.yaml` from
    /// the repository layout.
    ///
    /// # Errors
    ///
    /// Returns an error if any document is missing or invalid.
    pub fn from_layout(layout: RepoLayout) -> ResearchResult<Self> {
        let datasources = DatasourcesConfig::load(layout.datasources())?;
        let models = ModelsConfig::load(layout.models())?;
        let dashboards = DashboardsConfig::load(layout.dashboards())?;
        Ok(Self::new(layout, datasources, models, dashboards))
    }

    /// Replaces the return source.
    #[must_use]
    pub fn with_source(mut self, source: impl BenchmarkReturnSource + 'static) -> Self {
        self.source = Box::new(source);
        self
    }

    /// Sets the tracker used for data-quality issues.
    #[must_use]
    pub fn with_issue_tracker(mut self, tracker: impl IssueTracker + 'static) -> Self {
        self.tracker = Some(Box::new(tracker));
        self
    }

    /// Minimum acceptable coverage.
    #[must_use]
    pub fn min_coverage(&self) -> f64 {
        self.datasources.quality.min_coverage
    }

    /// Runs the pipeline for one cadence.
    ///
    /// # Errors
    ///
    /// Returns an error if returns cannot be loaded or outputs cannot be
    /// written. Issue tracker failures are logged and do not fail the run.
    pub fn run(&self, cadence: Cadence, as_of: NaiveDate) -> ResearchResult<PipelineOutcome> {
        info!(%cadence, %as_of, root = %self.layout.root().display(), "Running research pipeline");

        let data = load_cross_asset_returns(self.source.as_ref(), &self.datasources.benchmarks, as_of)?;
        let models = run_models(&self.models, &data);

        let summary_path = write_summary(
            &self.layout.reports_dir(cadence.as_str()),
            cadence,
            as_of,
            &data.diagnostics,
            models.factor_timing.is_some(),
        )?;

        info!(%cadence, "Publishing dashboard feeds");
        let feeds = write_dashboard_feeds(
            cadence.dashboard_spec(&self.dashboards),
            &self.layout,
            &data.diagnostics,
            &models,
        )?;

        let issues = if cadence.files_quality_issues() {
            self.file_quality_issues(as_of, &data.diagnostics)
        } else {
            Vec::new()
        };

        info!(path = %summary_path.display(), feeds = feeds.len(), "Research pipeline finished");
        Ok(PipelineOutcome {
            cadence,
            as_of,
            summary_path,
            feeds,
            diagnostics: data.diagnostics,
            models,
            issues,
        })
    }

    fn file_quality_issues(
        &self,
        as_of: NaiveDate,
        diagnostics: &OrderedMap<CoverageStats>,
    ) -> Vec<FiledIssue> {
        coverage_breaches(diagnostics, self.min_coverage())
            .into_iter()
            .map(|(asset_class, coverage)| {
                warn!(asset_class = %asset_class, coverage, "Coverage below threshold");
                let number = match &self.tracker {
                    Some(tracker) => {
                        let draft = IssueDraft::data_quality(as_of, &asset_class, coverage);
                        tracker.create_issue(&draft).unwrap_or_else(|e| {
                            warn!(error = %e, "Could not file data-quality issue");
                            None
                        })
                    }
                    None => None,
                };
                FiledIssue {
                    asset_class,
                    coverage,
                    number,
                }
            })
            .collect()
    }
}
