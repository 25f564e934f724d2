//! Stress scenario definitions.

use std::collections::BTreeMap;

use quantprint_config::{OrderedMap, StressTestSpec, DEFAULT_SHOCK_KEY};
use serde::{Deserialize, Serialize};

/// A named shock vector over asset classes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StressScenario {
    /// Scenario name.
    pub name: String,

    /// Description.
    pub description: String,

    /// Fractional shock per asset class (e.g. -0.20 for a 20% loss).
    pub shocks: BTreeMap<String, f64>,

    /// Shock for asset classes not listed in `shocks`.
    pub default_shock: Option<f64>,
}

impl StressScenario {
    /// Creates a scenario with no shocks.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = desc.into();
        self
    }

    /// Sets the shock for an asset class.
    #[must_use]
    pub fn with_shock(mut self, asset_class: impl Into<String>, shock: f64) -> Self {
        self.shocks.insert(asset_class.into(), shock);
        self
    }

    /// Sets the default shock.
    #[must_use]
    pub fn with_default_shock(mut self, shock: f64) -> Self {
        self.default_shock = Some(shock);
        self
    }

    /// Shock for an asset class: explicit value, else default, else 0.
    #[must_use]
    pub fn shock_for(&self, asset_class: &str) -> f64 {
        self.shocks
            .get(asset_class)
            .copied()
            .or(self.default_shock)
            .unwrap_or(0.0)
    }

    /// Builds a scenario from a configured stress test.
    ///
    /// The `default` key of the shock map becomes the default shock.
    #[must_use]
    pub fn from_spec(name: &str, spec: &StressTestSpec) -> Self {
        let mut scenario = Self::new(name).with_description(spec.description.clone());
        for (key, shock) in spec.shocks.iter() {
            if key == DEFAULT_SHOCK_KEY {
                scenario.default_shock = Some(*shock);
            } else {
                scenario.shocks.insert(key.to_string(), *shock);
            }
        }
        scenario
    }

    /// Builds every configured scenario, keeping declaration order.
    #[must_use]
    pub fn from_specs(specs: &OrderedMap<StressTestSpec>) -> Vec<Self> {
        specs
            .iter()
            .map(|(name, spec)| Self::from_spec(name, spec))
            .collect()
    }
}
