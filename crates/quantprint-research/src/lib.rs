//! # Quantprint Research
//!
//! Cross-asset benchmark research pipelines.
//!
//! A run loads benchmark returns for every configured asset class, measures
//! universe coverage, runs the enabled models and publishes:
//!
//! - a markdown summary under `reports/{daily|weekly|monthly}/`
//! - JSON dashboard feeds listed in `config/dashboards.yaml`
//! - data-quality issues for low-coverage asset classes (daily runs)
//!
//! ## Example
//!
//! ```rust
//! use quantprint_research::prelude::*;
//!
//! let stats = CoverageStats::new(4, 3);
//! assert!(stats.is_below(0.8));
//!
//! let draft = IssueDraft::data_quality(
//!     chrono::NaiveDate::from_ymd_opt(2024, 6, 28).unwrap(),
//!     "equity",
//!     stats.coverage,
//! );
//! assert_eq!(draft.title, "Data quality alert: equity coverage 75.0% on 2024-06-28");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod cadence;
pub mod data;
pub mod diagnostics;
pub mod error;
pub mod feeds;
pub mod frames;
pub mod insight;
pub mod issues;
pub mod models;
pub mod pipeline;
pub mod returns;

pub use cadence::Cadence;
pub use data::{load_cross_asset_returns, DataBundle};
pub use diagnostics::{compute_diagnostics, coverage_breaches, CoverageStats};
pub use error::{ResearchError, ResearchResult};
pub use feeds::{write_dashboard_feeds, FeedData, FeedMeta, FeedPayload};
pub use frames::{standardize_returns, ReturnFrame, ReturnObservation};
pub use insight::{render_summary, summary_file_name, write_summary};
pub use issues::{GitHubIssueClient, IssueDraft, IssueTracker, DEFAULT_TOKEN_ENV, GITHUB_API};
pub use models::{
    run_factor_timing, run_models, run_saa_optimizer, FactorSignal, FactorTimingResult,
    ModelResults, ProposedTilt, RiskMetrics, SaaResult,
};
pub use pipeline::{FiledIssue, PipelineOutcome, ResearchPipeline};
pub use returns::{
    BenchmarkReturnSource, CsvReturnSource, RawReturnRow, WarehouseProfile, RETURNS_EXPORT_FILE,
    RETURNS_TABLE,
};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::cadence::Cadence;
    pub use crate::diagnostics::CoverageStats;
    pub use crate::error::{ResearchError, ResearchResult};
    pub use crate::issues::{GitHubIssueClient, IssueDraft, IssueTracker};
    pub use crate::pipeline::{PipelineOutcome, ResearchPipeline};
    pub use crate::returns::{BenchmarkReturnSource, CsvReturnSource, RawReturnRow};
}
