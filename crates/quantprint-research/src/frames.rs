//! Standardized return frames.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use quantprint_config::OrderedMap;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::returns::RawReturnRow;

/// A standardized observation: `AS_OF_DATE, BENCHMARK_ID, RETURN`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnObservation {
    /// Observation date.
    #[serde(rename = "AS_OF_DATE")]
    pub as_of_date: NaiveDate,
    /// Benchmark identifier.
    #[serde(rename = "BENCHMARK_ID")]
    pub benchmark_id: String,
    /// Period return.
    #[serde(rename = "RETURN")]
    pub value: f64,
}

/// Standardized returns for one asset class.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReturnFrame {
    rows: Vec<ReturnObservation>,
}

impl ReturnFrame {
    /// Wraps observations.
    #[must_use]
    pub fn new(rows: Vec<ReturnObservation>) -> Self {
        Self { rows }
    }

    /// Standardizes raw rows.
    ///
    /// `DAILY_RETURN` becomes `RETURN`. Rows carrying neither column are
    /// dropped with a warning.
    #[must_use]
    pub fn standardize(asset_class: &str, raw: &[RawReturnRow]) -> Self {
        let rows: Vec<ReturnObservation> = raw
            .iter()
            .filter_map(|row| {
                let value = row.daily_return.or(row.standard_return)?;
                Some(ReturnObservation {
                    as_of_date: row.as_of_date,
                    benchmark_id: row.benchmark_id.clone(),
                    value,
                })
            })
            .collect();

        let dropped = raw.len() - rows.len();
        if dropped > 0 {
            warn!(asset_class, dropped, "Dropped benchmark rows without a return");
        }
        Self { rows }
    }

    /// Observations.
    #[must_use]
    pub fn rows(&self) -> &[ReturnObservation] {
        &self.rows
    }

    /// Number of observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the frame has no observations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of distinct benchmark ids.
    #[must_use]
    pub fn distinct_benchmarks(&self) -> usize {
        self.rows
            .iter()
            .map(|r| r.benchmark_id.as_str())
            .collect::<BTreeSet<_>>()
            .len()
    }
}

/// Standardizes every asset class, keeping declaration order.
#[must_use]
pub fn standardize_returns(raw: &OrderedMap<Vec<RawReturnRow>>) -> OrderedMap<ReturnFrame> {
    raw.iter()
        .map(|(asset_class, rows)| (asset_class, ReturnFrame::standardize(asset_class, rows)))
        .collect()
}
