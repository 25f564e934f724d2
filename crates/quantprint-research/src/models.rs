//! Model stage: factor timing, strategic asset allocation, risk metrics.
//!
//! The models are placeholders with a stable output shape. Dashboards and
//! summaries consume that shape, so it stays fixed while the models mature.

use std::collections::BTreeMap;

use quantprint_config::{FactorTimingConfig, ModelsConfig, OrderedMap, SaaOptimizerConfig};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::data::DataBundle;
use crate::frames::ReturnFrame;

/// Signal for one asset class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorSignal {
    /// Placeholder signal value.
    pub dummy_signal: f64,
    /// Horizons the signal covers.
    pub horizons: Vec<String>,
}

/// Factor-timing output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorTimingResult {
    /// The configuration the model ran with.
    pub config: FactorTimingConfig,
    /// Signals for every asset class with data.
    pub signals: OrderedMap<FactorSignal>,
}

/// A proposed deviation from the base allocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProposedTilt {
    /// Asset class.
    pub asset_class: String,
    /// Weight change.
    pub tilt: f64,
}

/// Strategic asset allocation output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaaResult {
    /// Base allocation identifier.
    pub base_saa_id: String,
    /// Risk aversion settings.
    pub risk_aversion: OrderedMap<f64>,
    /// Proposed tilts.
    pub proposed_tilts: Vec<ProposedTilt>,
}

/// Risk metrics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RiskMetrics {
    /// Volatility by benchmark.
    pub volatility: BTreeMap<String, f64>,
    /// Pairwise correlations.
    pub correlations: BTreeMap<String, BTreeMap<String, f64>>,
}

/// Everything the model stage produces.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelResults {
    /// Present when factor timing is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub factor_timing: Option<FactorTimingResult>,
    /// Present when the optimizer is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saa: Option<SaaResult>,
    /// Always present.
    pub risk_metrics: RiskMetrics,
}

/// Runs the factor-timing model.
///
/// Empty frames produce no signal.
#[must_use]
pub fn run_factor_timing(
    frames: &OrderedMap<ReturnFrame>,
    config: &FactorTimingConfig,
) -> FactorTimingResult {
    let signals = frames
        .iter()
        .filter(|(_, frame)| !frame.is_empty())
        .map(|(asset_class, _)| {
            (
                asset_class,
                FactorSignal {
                    dummy_signal: 0.0,
                    horizons: config.horizons.clone(),
                },
            )
        })
        .collect();

    FactorTimingResult {
        config: config.clone(),
        signals,
    }
}

/// Runs the strategic asset allocation optimizer.
#[must_use]
pub fn run_saa_optimizer(
    _frames: &OrderedMap<ReturnFrame>,
    config: &SaaOptimizerConfig,
) -> SaaResult {
    SaaResult {
        base_saa_id: config.base_saa_id.clone(),
        risk_aversion: config.risk_aversion.clone(),
        proposed_tilts: Vec::new(),
    }
}

/// Runs every enabled model over the bundle.
#[must_use]
pub fn run_models(config: &ModelsConfig, data: &DataBundle) -> ModelResults {
    info!(
        factor_timing = config.factor_timing.enabled,
        saa = config.saa_optimizer.enabled,
        "Running factor timing and SAA models"
    );

    ModelResults {
        factor_timing: config
            .factor_timing
            .enabled
            .then(|| run_factor_timing(&data.standardized, &config.factor_timing)),
        saa: config
            .saa_optimizer
            .enabled
            .then(|| run_saa_optimizer(&data.standardized, &config.saa_optimizer)),
        risk_metrics: RiskMetrics::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::returns::RawReturnRow;
    use chrono::NaiveDate;
    use quantprint_config::ConfigDocument;

    fn bundle() -> DataBundle {
        let date = NaiveDate::from_ymd_opt(2024, 6, 28).unwrap();
        let standardized = [
            ("equity", ReturnFrame::standardize("equity", &[RawReturnRow::daily(date, "SPX", 0.01)])),
            ("rates", ReturnFrame::default()),
        ]
        .into_iter()
        .collect();
        DataBundle {
            standardized,
            ..DataBundle::default()
        }
    }

    #[test]
    fn test_all_disabled() {
        let results = run_models(&ModelsConfig::default(), &bundle());

        assert!(results.factor_timing.is_none());
        assert!(results.saa.is_none());
        assert!(results.risk_metrics.volatility.is_empty());
        assert!(results.risk_metrics.correlations.is_empty());
    }

    #[test]
    fn test_factor_timing_skips_empty_frames() {
        let config = ModelsConfig::from_yaml(
            "factor_timing:\n  enabled: true\n  horizons: [1m, 3m]\n  lookback_days: 252\n",
        )
        .unwrap();
        let results = run_models(&config, &bundle());

        let timing = results.factor_timing.unwrap();
        assert_eq!(timing.signals.keys().collect::<Vec<_>>(), vec!["equity"]);
        let signal = timing.signals.get("equity").unwrap();
        assert_eq!(signal.dummy_signal, 0.0);
        assert_eq!(signal.horizons, vec!["1m", "3m"]);

        let json = serde_json::to_value(&timing).unwrap();
        assert_eq!(json["config"]["lookback_days"], 252);
        assert_eq!(json["config"]["enabled"], true);
    }

    #[test]
    fn test_saa_echoes_config() {
        let config = ModelsConfig::from_yaml(
            "saa_optimizer:\n  enabled: true\n  risk_aversion: {conservative: 6.0, balanced: 3.0}\n",
        )
        .unwrap();
        let saa = run_models(&config, &bundle()).saa.unwrap();

        assert_eq!(saa.base_saa_id, "GLOBAL_MULTI_ASSET");
        assert_eq!(saa.risk_aversion.get("balanced"), Some(&3.0));
        assert!(saa.proposed_tilts.is_empty());
    }
}
