//! Benchmark return sources.
//!
//! Returns come from the warehouse `BENCHMARK_RETURNS` table. The pipelines
//! read them through [`BenchmarkReturnSource`]; [`CsvReturnSource`] serves a
//! table export so runs work offline and in tests.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use quantprint_config::WarehouseConnection;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::{ResearchError, ResearchResult};

/// File name of the returns table export.
pub const RETURNS_EXPORT_FILE: &str = "benchmark_returns.csv";

/// Physical name of the returns table.
pub const RETURNS_TABLE: &str = "BENCHMARK_RETURNS";

// =============================================================================
// ROWS
// =============================================================================

/// One row as delivered by a source, before standardization.
///
/// Exports carry either `DAILY_RETURN` or an already-standardized `RETURN`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawReturnRow {
    /// Observation date.
    #[serde(rename = "AS_OF_DATE")]
    pub as_of_date: NaiveDate,
    /// Benchmark identifier.
    #[serde(rename = "BENCHMARK_ID")]
    pub benchmark_id: String,
    /// Daily return column.
    #[serde(rename = "DAILY_RETURN", default, skip_serializing_if = "Option::is_none")]
    pub daily_return: Option<f64>,
    /// Standardized return column.
    #[serde(rename = "RETURN", default, skip_serializing_if = "Option::is_none")]
    pub standard_return: Option<f64>,
}

impl RawReturnRow {
    /// Creates a row with a daily return.
    #[must_use]
    pub fn daily(as_of_date: NaiveDate, benchmark_id: impl Into<String>, daily_return: f64) -> Self {
        Self {
            as_of_date,
            benchmark_id: benchmark_id.into(),
            daily_return: Some(daily_return),
            standard_return: None,
        }
    }
}

// =============================================================================
// SOURCE TRAIT
// =============================================================================

/// Supplies benchmark returns for a universe up to a date.
pub trait BenchmarkReturnSource {
    /// Returns rows for `universe` with `AS_OF_DATE <= as_of`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying data cannot be read.
    fn fetch_benchmark_returns(
        &self,
        universe: &[String],
        as_of: NaiveDate,
        frequency: &str,
    ) -> ResearchResult<Vec<RawReturnRow>>;
}

// =============================================================================
// WAREHOUSE PROFILE
// =============================================================================

/// Resolved warehouse connection.
///
/// `SNOWFLAKE_ACCOUNT`, `SNOWFLAKE_USER`, `SNOWFLAKE_WAREHOUSE` and
/// `SNOWFLAKE_ROLE` override configured values; database and schema always
/// come from configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarehouseProfile {
    /// Account locator.
    pub account: Option<String>,
    /// Login user.
    pub user: Option<String>,
    /// Compute warehouse.
    pub warehouse: Option<String>,
    /// Role.
    pub role: Option<String>,
    /// Database.
    pub database: Option<String>,
    /// Schema.
    pub schema: Option<String>,
}

impl WarehouseProfile {
    /// Resolves the profile against the process environment.
    #[must_use]
    pub fn from_env(config: Option<&WarehouseConnection>) -> Self {
        Self::resolve(config, |key| std::env::var(key).ok())
    }

    /// Resolves the profile with a custom variable lookup.
    pub fn resolve(
        config: Option<&WarehouseConnection>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let config = config.cloned().unwrap_or_default();
        let env_or = |key: &str, fallback: Option<String>| {
            lookup(key).filter(|v| !v.is_empty()).or(fallback)
        };
        Self {
            account: env_or("SNOWFLAKE_ACCOUNT", config.account),
            user: env_or("SNOWFLAKE_USER", config.user),
            warehouse: env_or("SNOWFLAKE_WAREHOUSE", config.warehouse),
            role: env_or("SNOWFLAKE_ROLE", config.role),
            database: config.database,
            schema: config.schema,
        }
    }

    /// `DATABASE.SCHEMA.BENCHMARK_RETURNS`, or the bare table name when the
    /// profile has no database or schema.
    #[must_use]
    pub fn returns_table(&self) -> String {
        match (self.database.as_deref(), self.schema.as_deref()) {
            (Some(db), Some(schema)) => format!(
                "{}.{}.{}",
                db.to_uppercase(),
                schema.to_uppercase(),
                RETURNS_TABLE
            ),
            _ => RETURNS_TABLE.to_string(),
        }
    }

    /// The query a live warehouse connection would run.
    #[must_use]
    pub fn returns_query(&self, universe: &[String], as_of: NaiveDate) -> String {
        let ids = universe
            .iter()
            .map(|id| format!("'{}'", id.replace('\'', "''")))
            .collect::<Vec<_>>()
            .join(",");
        format!(
            "SELECT AS_OF_DATE, BENCHMARK_ID, DAILY_RETURN FROM {} WHERE BENCHMARK_ID IN ({}) AND AS_OF_DATE <= '{}'",
            self.returns_table(),
            ids,
            as_of
        )
    }
}

// =============================================================================
// CSV EXPORT SOURCE
// =============================================================================

/// Reads returns from a CSV export of the returns table.
///
/// A missing file is an empty source.
#[derive(Debug, Clone)]
pub struct CsvReturnSource {
    path: PathBuf,
    profile: WarehouseProfile,
}

impl CsvReturnSource {
    /// Creates a source over a CSV file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            profile: WarehouseProfile::default(),
        }
    }

    /// Creates a source over `{export_dir}/benchmark_returns.csv`.
    pub fn from_export_dir(export_dir: impl AsRef<Path>) -> Self {
        Self::new(export_dir.as_ref().join(RETURNS_EXPORT_FILE))
    }

    /// Attaches the warehouse profile the export was taken from.
    #[must_use]
    pub fn with_profile(mut self, profile: WarehouseProfile) -> Self {
        self.profile = profile;
        self
    }

    /// Export file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> ResearchResult<Vec<RawReturnRow>> {
        let source_name = self.path.display().to_string();
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(&self.path)
            .map_err(|e| ResearchError::return_source(&source_name, e))?;

        let mut rows = Vec::new();
        for result in reader.deserialize() {
            let row: RawReturnRow =
                result.map_err(|e| ResearchError::return_source(&source_name, e))?;
            rows.push(row);
        }
        Ok(rows)
    }
}

impl BenchmarkReturnSource for CsvReturnSource {
    fn fetch_benchmark_returns(
        &self,
        universe: &[String],
        as_of: NaiveDate,
        frequency: &str,
    ) -> ResearchResult<Vec<RawReturnRow>> {
        info!(
            frequency,
            benchmarks = universe.len(),
            %as_of,
            "Fetching benchmark returns"
        );
        debug!(sql = %self.profile.returns_query(universe, as_of), "Equivalent warehouse query");

        if !self.path.exists() {
            warn!(path = %self.path.display(), "Benchmark return export not found; treating as empty");
            return Ok(Vec::new());
        }

        let rows = self
            .read_all()?
            .into_iter()
            .filter(|row| row.as_of_date <= as_of && universe.contains(&row.benchmark_id))
            .collect();
        Ok(rows)
    }
}
