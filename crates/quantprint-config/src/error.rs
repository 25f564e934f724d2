//! Configuration error types.

use std::path::PathBuf;

use thiserror::Error;

/// Configuration operation result type.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        /// The file that failed to load.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Document is not valid YAML or does not match the expected shape.
    #[error("Deserialization error in {document}: {message}")]
    Deserialization {
        /// Document kind or path.
        document: String,
        /// Parser message.
        message: String,
    },

    /// Validation error.
    #[error("Validation error: {field}: {message}")]
    Validation {
        /// Field that failed validation.
        field: String,
        /// Validation error message.
        message: String,
    },

    /// Multiple validation errors.
    #[error("Multiple validation errors: {0:?}")]
    MultipleValidationErrors(Vec<ValidationError>),
}

impl ConfigError {
    /// Creates a deserialization error.
    #[must_use]
    pub fn deserialization(document: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Deserialization {
            document: document.into(),
            message: message.into(),
        }
    }
}

/// A single validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Field that failed validation.
    pub field: String,
    /// Validation error message.
    pub message: String,
    /// Validation rule that was violated.
    pub rule: Option<String>,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            rule: None,
        }
    }

    /// Creates a validation error with a rule name.
    pub fn with_rule(
        field: impl Into<String>,
        message: impl Into<String>,
        rule: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            rule: Some(rule.into()),
        }
    }

    /// Prefixes the field path, e.g. `holdings[0]` + `price`.
    #[must_use]
    pub fn nested(self, prefix: impl AsRef<str>) -> Self {
        Self {
            field: format!("{}.{}", prefix.as_ref(), self.field),
            ..self
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref rule) = self.rule {
            write!(f, "{}: {} (rule: {})", self.field, self.message, rule)
        } else {
            write!(f, "{}: {}", self.field, self.message)
        }
    }
}

/// Trait for validatable configurations.
pub trait Validate {
    /// Validates the configuration.
    ///
    /// Returns a list of validation errors, or an empty vector if valid.
    fn validate(&self) -> Vec<ValidationError>;

    /// Returns true if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// Validates and returns an error if invalid.
    fn validate_or_error(&self) -> ConfigResult<()> {
        let mut errors = self.validate();
        match errors.len() {
            0 => Ok(()),
            1 => {
                let err = errors.remove(0);
                Err(ConfigError::Validation {
                    field: err.field,
                    message: err.message,
                })
            }
            _ => Err(ConfigError::MultipleValidationErrors(errors)),
        }
    }
}

/// Pushes an error when `value` is not a finite number.
pub(crate) fn check_finite(errors: &mut Vec<ValidationError>, field: impl Into<String>, value: f64) {
    if !value.is_finite() {
        errors.push(ValidationError::with_rule(
            field,
            format!("Value must be finite, got {}", value),
            "finite",
        ));
    }
}

/// Pushes an error when `value` is negative or not finite.
pub(crate) fn check_non_negative(
    errors: &mut Vec<ValidationError>,
    field: impl Into<String>,
    value: f64,
) {
    if !value.is_finite() || value < 0.0 {
        errors.push(ValidationError::with_rule(
            field,
            format!("Value must be a non-negative number, got {}", value),
            "non_negative",
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(Vec<ValidationError>);

    impl Validate for Fixed {
        fn validate(&self) -> Vec<ValidationError> {
            self.0.clone()
        }
    }

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::new("price", "must be positive");
        assert_eq!(err.to_string(), "price: must be positive");

        let err = ValidationError::with_rule("price", "must be positive", "positive");
        assert_eq!(err.to_string(), "price: must be positive (rule: positive)");
    }

    #[test]
    fn test_nested_field() {
        let err = ValidationError::new("price", "bad").nested("holdings[2]");
        assert_eq!(err.field, "holdings[2].price");
    }

    #[test]
    fn test_validate_or_error() {
        assert!(Fixed(vec![]).validate_or_error().is_ok());

        let single = Fixed(vec![ValidationError::new("a", "bad")]);
        assert!(matches!(
            single.validate_or_error(),
            Err(ConfigError::Validation { ref field, .. }) if field == "a"
        ));

        let many = Fixed(vec![
            ValidationError::new("a", "bad"),
            ValidationError::new("b", "worse"),
        ]);
        assert!(!many.is_valid());
        assert!(matches!(
            many.validate_or_error(),
            Err(ConfigError::MultipleValidationErrors(ref errs)) if errs.len() == 2
        ));
    }

    #[test]
    fn test_checks() {
        let mut errors = Vec::new();
        check_finite(&mut errors, "x", 1.0);
        check_non_negative(&mut errors, "y", 0.0);
        assert!(errors.is_empty());

        check_finite(&mut errors, "x", f64::NAN);
        check_non_negative(&mut errors, "y", -1.0);
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[1].rule.as_deref(), Some("non_negative"));
    }
}
