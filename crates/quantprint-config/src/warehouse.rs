//! Warehouse schema document (`config/snowflake/schema.yaml`) and the
//! shared connection profile.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Validate, ValidationError};
use crate::ordered::OrderedMap;
use crate::scalar;

/// Warehouse connection profile. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarehouseConnection {
    /// Account locator.
    #[serde(default, deserialize_with = "scalar::opt_string", skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
    /// Login user.
    #[serde(default, deserialize_with = "scalar::opt_string", skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    /// Compute warehouse.
    #[serde(default, deserialize_with = "scalar::opt_string", skip_serializing_if = "Option::is_none")]
    pub warehouse: Option<String>,
    /// Role.
    #[serde(default, deserialize_with = "scalar::opt_string", skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Default database.
    #[serde(default, deserialize_with = "scalar::opt_string", skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
    /// Default schema.
    #[serde(default, deserialize_with = "scalar::opt_string", skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
}

impl WarehouseConnection {
    /// Returns true if no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.account.is_none()
            && self.user.is_none()
            && self.warehouse.is_none()
            && self.role.is_none()
            && self.database.is_none()
            && self.schema.is_none()
    }
}

/// `config/snowflake/schema.yaml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WarehouseSchema {
    /// Connection profile.
    #[serde(default)]
    pub connection: WarehouseConnection,

    /// Tables keyed by slug, in declaration order.
    #[serde(default)]
    pub tables: OrderedMap<TableSpec>,
}

/// A documented table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableSpec {
    /// Physical table name; the slug is used when absent.
    #[serde(default, deserialize_with = "scalar::opt_string", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// What the table holds.
    #[serde(default)]
    pub description: String,

    /// One row per ...
    #[serde(default)]
    pub grain: String,

    /// Primary key columns.
    #[serde(default, deserialize_with = "scalar::string_seq")]
    pub primary_keys: Vec<String>,

    /// Columns, either bare names or `{name, type, description}` records.
    #[serde(default)]
    pub columns: Vec<ColumnSpec>,
}

/// A column entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColumnSpec {
    /// Bare column name.
    Name(String),
    /// Column with optional type and description.
    Detailed {
        /// Column name.
        name: String,
        /// SQL type.
        #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
        data_type: Option<String>,
        /// Free-form description.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<String>,
    },
}

impl ColumnSpec {
    /// Column name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Name(name) | Self::Detailed { name, .. } => name,
        }
    }
}

impl fmt::Display for ColumnSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => f.write_str(name),
            Self::Detailed {
                name,
                data_type,
                description,
            } => {
                f.write_str(name)?;
                if let Some(t) = data_type {
                    write!(f, " ({})", t)?;
                }
                if let Some(d) = description {
                    write!(f, ": {}", d)?;
                }
                Ok(())
            }
        }
    }
}

impl Validate for WarehouseSchema {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        for (slug, table) in self.tables.iter() {
            if slug.trim().is_empty() {
                errors.push(ValidationError::new("tables", "Table slug cannot be empty"));
            }
            if matches!(table.name.as_deref(), Some(n) if n.trim().is_empty()) {
                errors.push(ValidationError::new(
                    format!("tables.{}.name", slug),
                    "Table name cannot be blank",
                ));
            }
            for (i, column) in table.columns.iter().enumerate() {
                if column.name().trim().is_empty() {
                    errors.push(ValidationError::new(
                        format!("tables.{}.columns[{}]", slug, i),
                        "Column name cannot be empty",
                    ));
                }
            }
        }
        errors
    }
}
