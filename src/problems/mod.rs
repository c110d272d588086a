//! Reference cost models for the hop-path solver.
//!
//! These modules show how to implement [`CostModel`](crate::traits::CostModel)
//! for concrete instances:
//! - [`heights`] : positions carrying heights, hop cost from the height gap.
//! - [`fn_cost`] : any closure over a position sequence.

pub mod fn_cost;
pub mod heights;

pub use fn_cost::FnCost;
pub use heights::{AbsDiff, Positions, SquaredDiff};
