//! CLI command implementations.

pub mod consumer;
pub mod research;
pub mod warehouse;

pub use consumer::ConsumerArgs;
pub use research::{DailyArgs, PipelineArgs};
pub use warehouse::WarehouseArgs;

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Args;
use quantprint_config::RepoLayout;

use crate::error::{CliError, CliResult};

/// Arguments shared by every command.
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// As-of date (YYYY-MM-DD). Defaults to today.
    #[arg(long)]
    pub as_of: Option<String>,

    /// Repository root holding `config/` and `reports/`
    #[arg(long, default_value = ".", env = "QUANTPRINT_REPO_ROOT")]
    pub repo_root: PathBuf,
}

impl CommonArgs {
    /// Resolves the as-of date.
    pub fn as_of(&self) -> CliResult<NaiveDate> {
        match self.as_of.as_deref() {
            Some(s) => parse_date(s),
            None => Ok(chrono::Local::now().date_naive()),
        }
    }

    /// Repository layout rooted at `--repo-root`.
    pub fn layout(&self) -> RepoLayout {
        RepoLayout::new(&self.repo_root)
    }
}

/// Parses a date string in YYYY-MM-DD format.
pub fn parse_date(s: &str) -> CliResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| CliError::InvalidDate(s.to_string()))
}
