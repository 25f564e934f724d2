//! Schema catalog: table descriptions and fully-qualified names.

use quantprint_config::{ColumnSpec, TableSpec, WarehouseConnection, WarehouseSchema};
use serde::{Deserialize, Serialize};
use tracing::info;

/// A table as presented in the blueprint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableDescription {
    /// Key in the schema document.
    pub slug: String,
    /// Physical name (slug when not configured).
    pub name: String,
    /// Description.
    pub description: String,
    /// Row grain.
    pub grain: String,
    /// Primary key columns.
    pub primary_keys: Vec<String>,
    /// Columns.
    pub columns: Vec<ColumnSpec>,
}

impl TableDescription {
    fn from_spec(slug: &str, spec: &TableSpec) -> Self {
        Self {
            slug: slug.to_string(),
            name: spec.name.clone().unwrap_or_else(|| slug.to_string()),
            description: spec.description.clone(),
            grain: spec.grain.clone(),
            primary_keys: spec.primary_keys.clone(),
            columns: spec.columns.clone(),
        }
    }
}

/// Read-only view over a warehouse schema document.
#[derive(Debug, Clone, Default)]
pub struct SchemaCatalog {
    schema: WarehouseSchema,
}

impl SchemaCatalog {
    /// Wraps a loaded schema document.
    #[must_use]
    pub fn new(schema: WarehouseSchema) -> Self {
        Self { schema }
    }

    /// Connection profile.
    #[must_use]
    pub fn connection(&self) -> &WarehouseConnection {
        &self.schema.connection
    }

    /// Returns true if the schema defines `slug`.
    #[must_use]
    pub fn has_table(&self, slug: &str) -> bool {
        self.schema.tables.contains_key(slug)
    }

    /// Describes every table in declaration order.
    #[must_use]
    pub fn describe_tables(&self) -> Vec<TableDescription> {
        let tables: Vec<TableDescription> = self
            .schema
            .tables
            .iter()
            .map(|(slug, spec)| TableDescription::from_spec(slug, spec))
            .collect();
        info!(tables = tables.len(), "Loaded warehouse tables from schema");
        tables
    }

    /// `DATABASE.SCHEMA.NAME` for a table slug.
    ///
    /// Database and schema are upper-cased. The name is the table's
    /// configured name, or the slug itself when the table has no name or
    /// is not in the schema. Missing database or schema render as empty
    /// segments.
    #[must_use]
    pub fn fully_qualified_name(&self, slug: &str) -> String {
        let name = self
            .schema
            .tables
            .get(slug)
            .and_then(|t| t.name.as_deref())
            .unwrap_or(slug);
        let conn = &self.schema.connection;
        let database = conn.database.as_deref().unwrap_or("").to_uppercase();
        let schema = conn.schema.as_deref().unwrap_or("").to_uppercase();
        format!("{}.{}.{}", database, schema, name)
    }
}
