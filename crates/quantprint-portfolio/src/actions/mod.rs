//! Rule-based action planning.
//!
//! Two rule families produce structured [`RecommendedAction`]s:
//! - rebalance: asset-class drift from policy targets
//! - concentration: single positions above the size cap
//!
//! Configured notes follow. Rendering to text is done by `Display`.

mod planner;
mod policy;

pub use planner::*;
pub use policy::*;
