//! Action policy.

use quantprint_config::{ActionTemplates, OrderedMap};
use serde::{Deserialize, Serialize};

/// Targets and limits the action planner checks against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionPolicy {
    /// Target weight per asset class, in declaration order.
    pub targets: Vec<(String, f64)>,

    /// Minimum absolute drift that triggers a rebalance (inclusive).
    pub rebalance_threshold: f64,

    /// Largest allowed single-position weight (exclusive).
    pub max_single_position: f64,

    /// Static notes appended after generated actions.
    pub notes: Vec<String>,
}

impl Default for ActionPolicy {
    fn default() -> Self {
        Self {
            targets: Vec::new(),
            rebalance_threshold: 0.0,
            max_single_position: 1.0,
            notes: Vec::new(),
        }
    }
}

impl ActionPolicy {
    /// Creates a policy with no targets and default limits.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a target weight.
    #[must_use]
    pub fn with_target(mut self, asset_class: impl Into<String>, weight: f64) -> Self {
        self.targets.push((asset_class.into(), weight));
        self
    }

    /// Sets the rebalance threshold.
    #[must_use]
    pub fn with_rebalance_threshold(mut self, threshold: f64) -> Self {
        self.rebalance_threshold = threshold;
        self
    }

    /// Sets the single-position cap.
    #[must_use]
    pub fn with_max_single_position(mut self, limit: f64) -> Self {
        self.max_single_position = limit;
        self
    }

    /// Appends a note.
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Builds a policy from configured targets and templates.
    #[must_use]
    pub fn from_config(targets: &OrderedMap<f64>, templates: &ActionTemplates) -> Self {
        Self {
            targets: targets.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
            rebalance_threshold: templates.rebalance_threshold,
            max_single_position: templates.max_single_position,
            notes: templates.notes.clone(),
        }
    }
}
