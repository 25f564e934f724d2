//! Stress testing for portfolios.
//!
//! A scenario is a shock vector over asset classes. Each position's value
//! is scaled by `1 + shock`, using the scenario's default shock for classes
//! it does not list, and 0 when there is no default either.

mod impact;
mod scenarios;

pub use impact::*;
pub use scenarios::*;
