//! Lenient scalar deserializers.
//!
//! Profile fields and model horizons are opaque labels: `10`, `"10"` and
//! `moderate` should all load as text.

use serde::de::{Deserialize, Deserializer, Error};
use serde_yaml::Value;

fn scalar_to_string<E: Error>(value: Value) -> Result<Option<String>, E> {
    match value {
        Value::Null => Ok(None),
        Value::Bool(b) => Ok(Some(b.to_string())),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::String(s) => Ok(Some(s)),
        Value::Sequence(_) | Value::Mapping(_) | Value::Tagged(_) => {
            Err(E::custom("expected a scalar value"))
        }
    }
}

/// Deserializes an optional scalar as text.
pub fn opt_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    scalar_to_string(value)
}

/// Deserializes a sequence of scalars as text. Null entries are skipped.
pub fn string_seq<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Null => Ok(Vec::new()),
        Value::Sequence(items) => {
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                if let Some(s) = scalar_to_string(item)? {
                    out.push(s);
                }
            }
            Ok(out)
        }
        other => Ok(scalar_to_string(other)?.into_iter().collect()),
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "super::opt_string")]
        label: Option<String>,
        #[serde(default, deserialize_with = "super::string_seq")]
        items: Vec<String>,
    }

    #[test]
    fn test_numbers_become_text() {
        let probe: Probe = serde_yaml::from_str("label: 10\nitems: [1, 3m, true]").unwrap();
        assert_eq!(probe.label.as_deref(), Some("10"));
        assert_eq!(probe.items, vec!["1", "3m", "true"]);
    }

    #[test]
    fn test_missing_and_null() {
        let probe: Probe = serde_yaml::from_str("label: ~").unwrap();
        assert!(probe.label.is_none());
        assert!(probe.items.is_empty());
    }

    #[test]
    fn test_single_scalar_seq() {
        let probe: Probe = serde_yaml::from_str("items: 12m").unwrap();
        assert_eq!(probe.items, vec!["12m"]);
    }

    #[test]
    fn test_mapping_rejected() {
        let result: Result<Probe, _> = serde_yaml::from_str("label: {a: 1}");
        assert!(result.is_err());
    }
}
