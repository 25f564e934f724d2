//! # Quantprint Portfolio
//!
//! Consumer portfolio analytics: turns a list of raw holdings into a
//! priced portfolio and runs allocation, stress, projection and action
//! planning over it.
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: every stage takes its inputs explicitly and
//!   returns a new value; nothing holds on to the raw configuration
//! - **Degenerate input is data, not an error**: zero-value portfolios,
//!   missing shocks and missing expected returns resolve to documented
//!   defaults
//! - **Structured actions**: the planner emits [`RecommendedAction`]
//!   records; text comes from `Display`
//!
//! ## Quick Start
//!
//! ```rust
//! use quantprint_portfolio::prelude::*;
//!
//! let inputs = ConsumerInputs {
//!     holdings: vec![
//!         HoldingSpec::new("AAA", "equity", 10.0, 100.0),
//!         HoldingSpec::new("BBB", "bond", 5.0, 100.0),
//!     ],
//!     policy: ActionPolicy::new()
//!         .with_target("equity", 0.5)
//!         .with_rebalance_threshold(0.05),
//!     ..ConsumerInputs::default()
//! };
//!
//! let analysis = analyze(&inputs, 12).unwrap();
//! assert_eq!(analysis.projection.len(), 12);
//! assert_eq!(
//!     analysis.actions[0].to_string(),
//!     "Trim approximately $250 in equity to move toward 50% target."
//! );
//! ```
//!
//! ## Module Overview
//!
//! - [`portfolio`] - Portfolio and builder types
//! - [`analytics`] - Allocation summary and growth projection
//! - [`stress`] - Shock-vector stress testing
//! - [`actions`] - Rebalance and concentration rules
//! - [`engine`] - End-to-end analysis over a blueprint
//! - [`report`] - Blueprint assembly and markdown rendering
//! - [`types`] - Position and profile types

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod actions;
pub mod analytics;
pub mod engine;
pub mod error;
pub mod portfolio;
pub mod report;
pub mod stress;
pub mod types;

pub use error::{PortfolioError, PortfolioResult};

pub use types::{Position, UserProfile};

pub use portfolio::{Portfolio, PortfolioBuilder};

pub use analytics::{
    blended_monthly_return, herfindahl_index, project_growth, summarize_allocation,
    top_positions, AllocationSummary, GrowthAssumptions, ProjectionPoint, TopPosition,
    DEFAULT_PROJECTION_MONTHS, TOP_POSITIONS,
};

pub use stress::{
    run_stress_scenario, run_stress_scenarios, worst_case, ScenarioOutcome, StressScenario,
};

pub use actions::{
    concentration_actions, plan_actions, rebalance_actions, ActionPolicy, RebalanceDirection,
    RecommendedAction,
};

pub use engine::{analyze, ConsumerAnalysis, ConsumerInputs};

pub use report::{ConsumerReport, APPLICATION_MODULES};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::actions::{plan_actions, ActionPolicy, RecommendedAction};
    pub use crate::analytics::{
        project_growth, summarize_allocation, AllocationSummary, GrowthAssumptions,
        ProjectionPoint,
    };
    pub use crate::engine::{analyze, ConsumerAnalysis, ConsumerInputs};
    pub use crate::error::{PortfolioError, PortfolioResult};
    pub use crate::portfolio::{Portfolio, PortfolioBuilder};
    pub use crate::report::ConsumerReport;
    pub use crate::stress::{run_stress_scenarios, ScenarioOutcome, StressScenario};
    pub use crate::types::{Position, UserProfile};
    pub use quantprint_config::HoldingSpec;
}
