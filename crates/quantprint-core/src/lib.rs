//! # Quantprint Core
//!
//! Shared building blocks for the Quantprint research blueprints.
//!
//! Every report in the workspace (consumer blueprint, warehouse blueprint,
//! pipeline summaries) is plain markdown built from the same pieces:
//!
//! - **Formatting**: percentages, grouped thousands, currency amounts
//! - **Markdown**: a line-oriented document builder
//!
//! ## Example
//!
//! ```rust
//! use quantprint_core::prelude::*;
//!
//! let mut doc = MarkdownDoc::new();
//! doc.title("Portfolio");
//! doc.bullet(format!("Total value: {}", currency(1_500.0)));
//! doc.bullet(format!("Equity: {}", percent(2.0 / 3.0, 1)));
//!
//! assert_eq!(doc.render(), "# Portfolio\n- Total value: $1,500\n- Equity: 66.7%");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod format;
pub mod markdown;

pub use format::{capitalize, currency, grouped, percent};
pub use markdown::MarkdownDoc;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::format::{capitalize, currency, grouped, percent};
    pub use crate::markdown::MarkdownDoc;
}
