//! Error types for portfolio analytics.
//!
//! Analytics never fail on degenerate input (zero value, empty holdings,
//! missing shocks). Errors come from malformed holdings and report output.

use thiserror::Error;

/// Result type for portfolio operations.
pub type PortfolioResult<T> = Result<T, PortfolioError>;

/// Errors that can occur during portfolio operations.
#[derive(Error, Debug, Clone)]
pub enum PortfolioError {
    /// Invalid holding data.
    #[error("Invalid holding '{symbol}': {reason}")]
    InvalidHolding {
        /// The holding symbol.
        symbol: String,
        /// The reason the holding is invalid.
        reason: String,
    },

    /// Calculation failed.
    #[error("Calculation failed: {reason}")]
    CalculationFailed {
        /// The reason the calculation failed.
        reason: String,
    },

    /// Report could not be written.
    #[error("Failed to write report to {path}: {reason}")]
    ReportWrite {
        /// Target path.
        path: String,
        /// Underlying IO message.
        reason: String,
    },
}

impl PortfolioError {
    /// Create an invalid holding error.
    #[must_use]
    pub fn invalid_holding(symbol: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidHolding {
            symbol: symbol.into(),
            reason: reason.into(),
        }
    }

    /// Create a calculation failed error.
    #[must_use]
    pub fn calculation_failed(reason: impl Into<String>) -> Self {
        Self::CalculationFailed {
            reason: reason.into(),
        }
    }

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
        let err = PortfolioError::invalid_holding("AAA", "negative quantity");
        assert!(err.to_string().contains("AAA"));
        assert!(err.to_string().contains("negative quantity"));

        let err = PortfolioError::calculation_failed("overflow");
        assert!(err.to_string().contains("overflow"));

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = PortfolioError::report_write("/tmp/out.md", &io);
        assert!(err.to_string().contains("/tmp/out.md"));
    }

    #[test]
    fn test_error_clone() {
        let err = PortfolioError::invalid_holding("X", "bad");
        let cloned = err.clone();
        assert_eq!(err.to_string(), cloned.to_string());
    }
}
