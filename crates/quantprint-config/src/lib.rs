//! Quantprint Configuration Layer
//!
//! Typed YAML documents for every configuration file the blueprints and
//! research pipelines read.
//!
//! # Documents
//!
//! - [`ConsumerBlueprint`] - `config/consumer/blueprint.yaml`
//! - [`WarehouseSchema`] - `config/snowflake/schema.yaml`
//! - [`DatasourcesConfig`] - `config/datasources.yaml`
//! - [`ModelsConfig`] - `config/models.yaml`
//! - [`DashboardsConfig`] - `config/dashboards.yaml`
//!
//! Missing sections fall back to empty collections or documented defaults.
//! Sections whose order shows up in reports load into [`OrderedMap`].
//!
//! # Example
//!
//! ```rust
//! use quantprint_config::{ConfigDocument, ConsumerBlueprint};
//!
//! let yaml = r#"
//! portfolio:
//!   holdings:
//!     - {symbol: AAA, asset_class: equity, quantity: 10, price: 100}
//! policy_targets: {equity: 0.6, bond: 0.4}
//! "#;
//!
//! let blueprint = ConsumerBlueprint::from_yaml(yaml).unwrap();
//! assert_eq!(blueprint.portfolio.holdings.len(), 1);
//! assert_eq!(blueprint.policy_targets.keys().collect::<Vec<_>>(), ["equity", "bond"]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod consumer;
pub mod error;
pub mod loader;
pub mod ordered;
pub mod paths;
pub mod research;
pub mod scalar;
pub mod warehouse;

pub use consumer::{
    ActionTemplates, ConsumerBlueprint, HoldingSpec, PortfolioSpec, StressTestSpec,
    UserProfileSpec, DEFAULT_SHOCK_KEY, MAX_HOLDING_VALUE, MAX_PORTFOLIO_VALUE,
};
pub use error::{ConfigError, ConfigResult, Validate, ValidationError};
pub use loader::{parse_yaml, ConfigDocument};
pub use ordered::OrderedMap;
pub use paths::RepoLayout;
pub use research::{
    BenchmarkGroup, Connections, DashboardSections, DashboardSpec, DashboardsConfig,
    DatasourcesConfig, FactorTimingConfig, FeedOutput, ModelsConfig, QualityConfig,
    SaaOptimizerConfig,
};
pub use warehouse::{ColumnSpec, TableSpec, WarehouseConnection, WarehouseSchema};
