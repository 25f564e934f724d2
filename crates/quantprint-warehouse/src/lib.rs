//! Quantprint Warehouse Blueprint
//!
//! Documents a benchmark analytics warehouse from its schema document:
//!
//! - **Schema**: connection profile, table catalog, fully-qualified names
//! - **Queries**: a Snowflake-dialect SQL library for coverage, performance,
//!   composition, fundamentals, attribution and data-quality checks
//! - **Blueprint**: a markdown document combining both with dashboard starters
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use quantprint_config::{ConfigDocument, WarehouseSchema};
//! use quantprint_warehouse::prelude::*;
//!
//! let schema = WarehouseSchema::from_yaml("connection: {database: markets, schema: bench}").unwrap();
//! let catalog = SchemaCatalog::new(schema);
//! assert_eq!(catalog.fully_qualified_name("benchmark_returns"), "MARKETS.BENCH.benchmark_returns");
//!
//! let blueprint = WarehouseBlueprint::build(&catalog, NaiveDate::from_ymd_opt(2024, 6, 28).unwrap());
//! assert_eq!(blueprint.queries.len(), 7);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod blueprint;
pub mod error;
pub mod queries;
pub mod schema;

pub use blueprint::WarehouseBlueprint;
pub use error::{WarehouseError, WarehouseResult};
pub use queries::{build_queries, dashboard_ideas, undocumented_tables, QuerySpec, DASHBOARD_IDEAS};
pub use schema::{SchemaCatalog, TableDescription};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::blueprint::WarehouseBlueprint;
    pub use crate::error::{WarehouseError, WarehouseResult};
    pub use crate::queries::{build_queries, dashboard_ideas, QuerySpec};
    pub use crate::schema::{SchemaCatalog, TableDescription};
}
