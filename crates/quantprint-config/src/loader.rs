//! YAML document loading.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde_yaml::{Mapping, Value};

use crate::error::{ConfigError, ConfigResult, Validate};

/// A typed configuration document that can be parsed and validated.
///
/// An empty file (or one holding only comments) loads as an empty mapping,
/// so every section falls back to its default.
pub trait ConfigDocument: DeserializeOwned + Validate + Sized {
    /// Document kind used in error messages.
    const KIND: &'static str;

    /// Parses and validates YAML text.
    fn from_yaml(text: &str) -> ConfigResult<Self> {
        let doc: Self = parse_yaml(Self::KIND, text)?;
        doc.validate_or_error()?;
        Ok(doc)
    }

    /// Reads, parses and validates a YAML file.
    fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let doc: Self = parse_yaml(&path.display().to_string(), &text)?;
        doc.validate_or_error()?;
        Ok(doc)
    }
}

/// Parses YAML text into `T` without validation.
pub fn parse_yaml<T: DeserializeOwned>(document: &str, text: &str) -> ConfigResult<T> {
    let value: Value = serde_yaml::from_str(text)
        .map_err(|e| ConfigError::deserialization(document, e.to_string()))?;
    let value = match value {
        Value::Null => Value::Mapping(Mapping::new()),
        other => other,
    };
    serde_yaml::from_value(value).map_err(|e| ConfigError::deserialization(document, e.to_string()))
}

impl ConfigDocument for crate::ConsumerBlueprint {
    const KIND: &'static str = "consumer blueprint";
}

impl ConfigDocument for crate::WarehouseSchema {
    const KIND: &'static str = "warehouse schema";
}

impl ConfigDocument for crate::DatasourcesConfig {
    const KIND: &'static str = "datasources";
}

impl ConfigDocument for crate::ModelsConfig {
    const KIND: &'static str = "models";
}

impl ConfigDocument for crate::DashboardsConfig {
    const KIND: &'static str = "dashboards";
}
