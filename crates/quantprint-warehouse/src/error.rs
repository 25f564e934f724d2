//! Error types for the warehouse blueprint.

use thiserror::Error;

/// Result type for warehouse operations.
pub type WarehouseResult<T> = Result<T, WarehouseError>;

/// Errors that can occur while building the warehouse blueprint.
#[derive(Error, Debug, Clone)]
pub enum WarehouseError {
    /// Report could not be written.
    #[error("Failed to write blueprint to {path}: {reason}")]
    ReportWrite {
        /// Target path.
        path: String,
        /// Underlying IO message.
        reason: String,
    },
}

impl WarehouseError {
    /// Create a report write error.
    #[must_use]
    pub fn report_write(path: impl AsRef<std::path::Path>, err: &std::io::Error) -> Self {
        Self::ReportWrite {
            path: path.as_ref().display().to_string(),
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory");
        let err = WarehouseError::report_write("reports/snowflake/x.md", &io);
        assert!(err.to_string().contains("reports/snowflake/x.md"));
        assert!(err.to_string().contains("no such directory"));
    }
}
