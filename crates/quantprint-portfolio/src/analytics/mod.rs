//! Portfolio-level analytics.
//!
//! - Allocation summary: asset-class weights, top positions, Herfindahl index
//! - Growth projection: monthly compounding with fixed contributions
//!
//! All functions are pure - they take a portfolio and assumptions as input
//! and return computed results.

mod allocation;
mod projection;

pub use allocation::*;
pub use projection::*;
