//! Coverage diagnostics per asset class.

use quantprint_config::{BenchmarkGroup, OrderedMap};
use serde::{Deserialize, Serialize};

use crate::frames::ReturnFrame;

/// Coverage of one asset class's benchmark universe.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoverageStats {
    /// Benchmarks configured.
    pub expected: usize,
    /// Distinct benchmarks with data.
    pub actual: usize,
    /// `actual / expected`, or 1.0 for an empty universe.
    pub coverage: f64,
}

impl CoverageStats {
    /// Computes coverage from counts.
    #[must_use]
    pub fn new(expected: usize, actual: usize) -> Self {
        let coverage = if expected > 0 {
            actual as f64 / expected as f64
        } else {
            1.0
        };
        Self {
            expected,
            actual,
            coverage,
        }
    }

    /// Returns true if coverage is strictly below `threshold`.
    #[must_use]
    pub fn is_below(&self, threshold: f64) -> bool {
        self.coverage < threshold
    }
}

/// Coverage per asset class, in the order of `frames`.
///
/// An asset class missing from `benchmarks` has an empty universe.
#[must_use]
pub fn compute_diagnostics(
    frames: &OrderedMap<ReturnFrame>,
    benchmarks: &OrderedMap<BenchmarkGroup>,
) -> OrderedMap<CoverageStats> {
    frames
        .iter()
        .map(|(asset_class, frame)| {
            let expected = benchmarks
                .get(asset_class)
                .map_or(0, |group| group.universe.len());
            (asset_class, CoverageStats::new(expected, frame.distinct_benchmarks()))
        })
        .collect()
}

/// Asset classes whose coverage is below `threshold`, with their coverage.
#[must_use]
pub fn coverage_breaches(
    diagnostics: &OrderedMap<CoverageStats>,
    threshold: f64,
) -> Vec<(String, f64)> {
    diagnostics
        .iter()
        .filter(|(_, stats)| stats.is_below(threshold))
        .map(|(asset_class, stats)| (asset_class.to_string(), stats.coverage))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frames::ReturnObservation;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;

    fn frame(ids: &[&str]) -> ReturnFrame {
        let date = NaiveDate::from_ymd_opt(2024, 6, 28).unwrap();
        ReturnFrame::new(
            ids.iter()
                .map(|id| ReturnObservation {
                    as_of_date: date,
                    benchmark_id: id.to_string(),
                    value: 0.0,
                })
                .collect(),
        )
    }

    fn group(ids: &[&str]) -> BenchmarkGroup {
        BenchmarkGroup {
            universe: ids.iter().map(|s| s.to_string()).collect(),
            frequency: "daily".into(),
        }
    }

    #[test]
    fn test_coverage_ratio() {
        let stats = CoverageStats::new(3, 2);
        assert_relative_eq!(stats.coverage, 2.0 / 3.0);
        assert!(stats.is_below(0.8));
    }

    #[test]
    fn test_empty_universe_is_fully_covered() {
        let stats = CoverageStats::new(0, 0);
        assert_eq!(stats.coverage, 1.0);
        assert!(!stats.is_below(0.8));
    }

    #[test]
    fn test_compute_diagnostics() {
        let frames: OrderedMap<ReturnFrame> = [
            ("equity", frame(&["SPX", "SPX", "NDX"])),
            ("rates", frame(&[])),
        ]
        .into_iter()
        .collect();
        let benchmarks: OrderedMap<BenchmarkGroup> = [
            ("equity", group(&["SPX", "NDX", "RTY"])),
            ("rates", group(&["AGG"])),
        ]
        .into_iter()
        .collect();

        let diagnostics = compute_diagnostics(&frames, &benchmarks);

        let equity = diagnostics.get("equity").unwrap();
        assert_eq!((equity.expected, equity.actual), (3, 2));
        let rates = diagnostics.get("rates").unwrap();
        assert_eq!((rates.expected, rates.actual), (1, 0));
        assert_eq!(rates.coverage, 0.0);

        let breaches = coverage_breaches(&diagnostics, 0.8);
        assert_eq!(breaches.len(), 2);
        assert_eq!(breaches[1], ("rates".to_string(), 0.0));
    }

    #[test]
    fn test_threshold_is_strict() {
        let diagnostics: OrderedMap<CoverageStats> =
            [("credit", CoverageStats::new(5, 4))].into_iter().collect();
        assert!(coverage_breaches(&diagnostics, 0.8).is_empty());
    }
}
