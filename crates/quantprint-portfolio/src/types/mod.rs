//! Core types for portfolio analytics.
//!
//! - [`Position`] - a priced holding with value and weight
//! - [`UserProfile`] - opaque investor profile labels

mod position;
mod profile;

pub use position::*;
pub use profile::*;
