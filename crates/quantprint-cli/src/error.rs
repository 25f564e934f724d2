//! CLI error types.

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid date format.
    #[error("Invalid date format: {0}. Use YYYY-MM-DD.")]
    InvalidDate(String),

    /// Invalid projection horizon.
    #[error("Invalid projection horizon: {0}. Must be at least 1 month.")]
    InvalidMonths(u32),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
