//! Cross-asset data loading.

use chrono::NaiveDate;
use quantprint_config::{BenchmarkGroup, OrderedMap};
use serde::Serialize;
use tracing::info;

use crate::diagnostics::{compute_diagnostics, CoverageStats};
use crate::frames::{standardize_returns, ReturnFrame};
use crate::returns::{BenchmarkReturnSource, RawReturnRow};
use crate::ResearchResult;

/// Raw and standardized returns per asset class with coverage diagnostics.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DataBundle {
    /// Rows as fetched.
    pub raw: OrderedMap<Vec<RawReturnRow>>,
    /// Standardized frames.
    pub standardized: OrderedMap<ReturnFrame>,
    /// Coverage per asset class.
    pub diagnostics: OrderedMap<CoverageStats>,
}

/// Fetches, standardizes and diagnoses every configured benchmark group.
///
/// # Errors
///
/// Returns an error if the source fails for any group.
pub fn load_cross_asset_returns(
    source: &dyn BenchmarkReturnSource,
    benchmarks: &OrderedMap<BenchmarkGroup>,
    as_of: NaiveDate,
) -> ResearchResult<DataBundle> {
    info!(%as_of, asset_classes = benchmarks.len(), "Loading cross-asset returns");

    let mut raw = OrderedMap::new();
    for (asset_class, group) in benchmarks.iter() {
        let rows = source.fetch_benchmark_returns(&group.universe, as_of, &group.frequency)?;
        raw.insert(asset_class, rows);
    }

    let standardized = standardize_returns(&raw);
    let diagnostics = compute_diagnostics(&standardized, benchmarks);

    Ok(DataBundle {
        raw,
        standardized,
        diagnostics,
    })
}
