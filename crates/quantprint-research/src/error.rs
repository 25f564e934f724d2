//! Error types for the research pipelines.

use quantprint_config::ConfigError;
use thiserror::Error;

/// Result type for research operations.
pub type ResearchResult<T> = Result<T, ResearchError>;

/// Errors that can occur while running a research pipeline.
#[derive(Error, Debug)]
pub enum ResearchError {
    /// A configuration document failed to load.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Benchmark returns could not be read.
    #[error("Failed to read benchmark returns from {source_name}: {reason}")]
    ReturnSource {
        /// File or table the returns came from.
        source_name: String,
        /// Underlying reason.
        reason: String,
    },

    /// An output file could not be written.
    #[error("Failed to write {path}: {reason}")]
    OutputWrite {
        /// Target path.
        path: String,
        /// Underlying reason.
        reason: String,
    },

    /// Issue tracker request failed before a response arrived.
    #[error("Issue tracker request failed: {reason}")]
    IssueTracker {
        /// Underlying reason.
        reason: String,
    },
}

impl ResearchError {
    /// Create a return source error.
    #[must_use]
    pub fn return_source(source_name: impl Into<String>, reason: impl ToString) -> Self {
        Self::ReturnSource {
            source_name: source_name.into(),
            reason: reason.to_string(),
        }
    }

    /// Create an output write error.
    #[must_use]
    pub fn output_write(path: impl AsRef<std::path::Path>, reason: impl ToString) -> Self {
        Self::OutputWrite {
            path: path.as_ref().display().to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create an issue tracker error.
    #[must_use]
    pub fn issue_tracker(reason: impl ToString) -> Self {
        Self::IssueTracker {
            reason: reason.to_string(),
        }
    }
}
