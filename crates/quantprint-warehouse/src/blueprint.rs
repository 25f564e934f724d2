//! Warehouse blueprint assembly and markdown rendering.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use quantprint_config::WarehouseConnection;
use quantprint_core::MarkdownDoc;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::queries::{build_queries, dashboard_ideas, QuerySpec};
use crate::schema::{SchemaCatalog, TableDescription};
use crate::{WarehouseError, WarehouseResult};

/// Everything the blueprint document shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarehouseBlueprint {
    /// Blueprint date.
    pub as_of: NaiveDate,
    /// Connection profile.
    pub connection: WarehouseConnection,
    /// Documented tables.
    pub tables: Vec<TableDescription>,
    /// Query library.
    pub queries: Vec<QuerySpec>,
    /// Dashboard starters.
    pub dashboards: Vec<String>,
}

impl WarehouseBlueprint {
    /// Builds the blueprint from a schema catalog.
    #[must_use]
    pub fn build(catalog: &SchemaCatalog, as_of: NaiveDate) -> Self {
        Self {
            as_of,
            connection: catalog.connection().clone(),
            tables: catalog.describe_tables(),
            queries: build_queries(catalog),
            dashboards: dashboard_ideas(),
        }
    }

    /// Report file name for a date.
    #[must_use]
    pub fn file_name(as_of: NaiveDate) -> String {
        format!("snowflake_benchmark_blueprint_{}.md", as_of)
    }

    /// Renders the blueprint as markdown.
    #[must_use]
    pub fn to_markdown(&self) -> String {
        let mut doc = MarkdownDoc::new();
        doc.title(format!("Snowflake Benchmark Analytics Blueprint – {}", self.as_of))
            .blank();

        let conn = &self.connection;
        if !conn.is_empty() {
            doc.heading(2, "Connection profile");
            if let Some(warehouse) = non_blank(&conn.warehouse) {
                doc.bullet(format!("Warehouse: {}", warehouse));
            }
            if let Some(role) = non_blank(&conn.role) {
                doc.bullet(format!("Role: {}", role));
            }
            if let (Some(db), Some(schema)) = (non_blank(&conn.database), non_blank(&conn.schema)) {
                doc.bullet(format!("Default database.schema: {}.{}", db, schema));
            }
            doc.blank();
        }

        doc.heading(2, "Tables");
        for table in &self.tables {
            doc.heading(3, &table.name);
            if !table.description.is_empty() {
                doc.bullet(&table.description);
            }
            if !table.grain.is_empty() {
                doc.bullet(format!("Grain: {}", table.grain));
            }
            if !table.primary_keys.is_empty() {
                doc.bullet("Primary keys:");
                for key in &table.primary_keys {
                    doc.sub_bullet(key);
                }
            }
            if !table.columns.is_empty() {
                doc.bullet("Columns:");
                for column in &table.columns {
                    doc.sub_bullet(column.to_string());
                }
            }
            doc.blank();
        }

        doc.heading(2, "Query library");
        for query in &self.queries {
            doc.heading(3, &query.name)
                .line(format!("Purpose: {}", query.purpose))
                .blank()
                .fenced("sql", &query.sql)
                .blank();
        }

        doc.heading(2, "Dashboard starters");
        for idea in &self.dashboards {
            doc.bullet(idea);
        }

        doc.render()
    }

    /// Writes the markdown blueprint into `output_dir`, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be written.
    pub fn write_markdown(&self, output_dir: &Path) -> WarehouseResult<PathBuf> {
        std::fs::create_dir_all(output_dir)
            .map_err(|e| WarehouseError::report_write(output_dir, &e))?;

        let path = output_dir.join(Self::file_name(self.as_of));
        std::fs::write(&path, self.to_markdown())
            .map_err(|e| WarehouseError::report_write(&path, &e))?;

        info!(path = %path.display(), "Wrote warehouse benchmark blueprint");
        Ok(path)
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
