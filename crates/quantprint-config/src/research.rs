//! Research pipeline documents: `datasources.yaml`, `models.yaml` and
//! `dashboards.yaml`.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Validate, ValidationError};
use crate::ordered::OrderedMap;
use crate::scalar;
use crate::warehouse::WarehouseConnection;

// =============================================================================
// DATASOURCES
// =============================================================================

/// `config/datasources.yaml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatasourcesConfig {
    /// Connection settings.
    #[serde(default)]
    pub connections: Connections,

    /// Benchmark groups keyed by asset class, in declaration order.
    #[serde(default)]
    pub benchmarks: OrderedMap<BenchmarkGroup>,

    /// Data-quality thresholds.
    #[serde(default)]
    pub quality: QualityConfig,
}

/// `connections` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Connections {
    /// Warehouse connection profile.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snowflake: Option<WarehouseConnection>,

    /// Directory holding warehouse table exports, relative to the repo root.
    #[serde(default = "default_export_dir")]
    pub export_dir: PathBuf,
}

fn default_export_dir() -> PathBuf {
    PathBuf::from("data/benchmarks")
}

impl Default for Connections {
    fn default() -> Self {
        Self {
            snowflake: None,
            export_dir: default_export_dir(),
        }
    }
}

/// A benchmark universe for one asset class.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkGroup {
    /// Benchmark identifiers expected in the feed.
    #[serde(default, deserialize_with = "scalar::string_seq")]
    pub universe: Vec<String>,

    /// Sampling frequency label.
    #[serde(default = "default_frequency")]
    pub frequency: String,
}

fn default_frequency() -> String {
    "daily".to_string()
}

/// `quality` section.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct QualityConfig {
    /// Coverage below this fraction raises a data-quality alert.
    #[serde(default = "default_min_coverage")]
    pub min_coverage: f64,
}

fn default_min_coverage() -> f64 {
    0.8
}

impl Default for QualityConfig {
    fn default() -> Self {
        Self {
            min_coverage: default_min_coverage(),
        }
    }
}

impl Validate for DatasourcesConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        for (asset_class, group) in self.benchmarks.iter() {
            if group.universe.iter().any(|id| id.trim().is_empty()) {
                errors.push(ValidationError::new(
                    format!("benchmarks.{}.universe", asset_class),
                    "Benchmark identifiers cannot be empty",
                ));
            }
        }

        let min = self.quality.min_coverage;
        if !min.is_finite() || !(0.0..=1.0).contains(&min) {
            errors.push(ValidationError::with_rule(
                "quality.min_coverage",
                format!("Coverage threshold must be between 0 and 1, got {}", min),
                "unit_interval",
            ));
        }

        errors
    }
}

// =============================================================================
// MODELS
// =============================================================================

/// `config/models.yaml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelsConfig {
    /// Factor-timing model settings.
    #[serde(default)]
    pub factor_timing: FactorTimingConfig,

    /// Strategic asset allocation optimizer settings.
    #[serde(default)]
    pub saa_optimizer: SaaOptimizerConfig,
}

/// `factor_timing` section.
///
/// Unknown keys are kept in `extra` and echoed back with the model output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FactorTimingConfig {
    /// Whether the model runs.
    #[serde(default)]
    pub enabled: bool,

    /// Signal horizons, e.g. `1m`, `3m`, `12m`.
    #[serde(default, deserialize_with = "scalar::string_seq")]
    pub horizons: Vec<String>,

    /// Any other configured keys.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

/// `saa_optimizer` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaaOptimizerConfig {
    /// Whether the optimizer runs.
    #[serde(default)]
    pub enabled: bool,

    /// Identifier of the base allocation.
    #[serde(default = "default_base_saa_id")]
    pub base_saa_id: String,

    /// Risk-aversion coefficient per investor profile.
    #[serde(default)]
    pub risk_aversion: OrderedMap<f64>,
}

fn default_base_saa_id() -> String {
    "GLOBAL_MULTI_ASSET".to_string()
}

impl Default for SaaOptimizerConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            base_saa_id: default_base_saa_id(),
            risk_aversion: OrderedMap::new(),
        }
    }
}

impl Validate for ModelsConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        if self.saa_optimizer.base_saa_id.trim().is_empty() {
            errors.push(ValidationError::new(
                "saa_optimizer.base_saa_id",
                "Base SAA id cannot be empty",
            ));
        }
        for (profile, value) in self.saa_optimizer.risk_aversion.iter() {
            crate::error::check_non_negative(
                &mut errors,
                format!("saa_optimizer.risk_aversion.{}", profile),
                *value,
            );
        }
        errors
    }
}

// =============================================================================
// DASHBOARDS
// =============================================================================

/// `config/dashboards.yaml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardsConfig {
    /// Dashboard sections.
    #[serde(default)]
    pub dashboards: DashboardSections,
}

/// The three dashboard sections, one per pipeline cadence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardSections {
    /// Daily cross-asset overview.
    #[serde(default)]
    pub daily_overview: DashboardSpec,
    /// Weekly factor review.
    #[serde(default)]
    pub weekly_review: DashboardSpec,
    /// Monthly SAA review.
    #[serde(default)]
    pub monthly_saa: DashboardSpec,
}

/// A dashboard section: the feed files it publishes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardSpec {
    /// Feed files in declaration order.
    #[serde(default)]
    pub outputs: Vec<FeedOutput>,
}

/// One JSON feed file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedOutput {
    /// Target path, relative to the repo root.
    pub file: PathBuf,
    /// Free-form description, copied into the feed's `meta`.
    #[serde(default)]
    pub description: String,
}

impl Validate for DashboardsConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let sections = [
            ("daily_overview", &self.dashboards.daily_overview),
            ("weekly_review", &self.dashboards.weekly_review),
            ("monthly_saa", &self.dashboards.monthly_saa),
        ];

        let mut errors = Vec::new();
        for (section, spec) in sections {
            for (i, output) in spec.outputs.iter().enumerate() {
                if output.file.as_os_str().is_empty() {
                    errors.push(ValidationError::new(
                        format!("dashboards.{}.outputs[{}].file", section, i),
                        "Feed file path cannot be empty",
                    ));
                }
            }
        }
        errors
    }
}
