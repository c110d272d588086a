//! Minimum-cost hop paths (HOP-DP)
//!
//! This crate solves a family of one-dimensional shortest-path dynamic
//! programs: positions `0..N` are visited left to right, each position may be
//! entered from a fixed set of earlier positions (`i - d` for every configured
//! offset `d`), and every hop has a non-negative cost. The solver returns the
//! minimum total cost to reach the last position *and* an explicit path
//! achieving it.
//!
//! ## Core idea
//! 1. Describe your instance with the [`CostModel`] trait.
//! 2. Pick the allowed backward [`Offsets`] (default `{1, 2}`).
//! 3. Let [`PathSolver`] build the DP and predecessor tables, reconstruct the
//!    path and hand you a [`Solution`] you can print with
//!    [`Solution::report`].
//!
//! ## Quick start
//! ```
//! use hop_dp::{problems::AbsDiff, PathSolver};
//!
//! let model = AbsDiff::from_heights(vec![30, 10, 60, 10, 60, 50]).unwrap();
//! let solution = PathSolver::new(model).run().unwrap();
//! assert_eq!(solution.cost, 40);
//! assert_eq!(solution.report().to_string(), "4\n1 3 5 6\n");
//! ```
//!
//! ## Built-in cost models
//! The `problems` module contains:
//! - [`AbsDiff`](problems::AbsDiff): absolute height difference (the "frog" hop)
//! - [`SquaredDiff`](problems::SquaredDiff): squared height difference
//! - [`FnCost`](problems::FnCost): any closure over the position values
//!
//! When only the optimal cost is needed, [`rolling::min_cost`] computes it in
//! memory proportional to the largest offset instead of `N`.
//!
//! ## Cargo features
//! - `parallel`: [`solve_batch`] spreads independent instances over rayon.
//! - `tracing`: spans around every pipeline stage via the `tracing` crate.

pub mod builder;
pub mod error;
pub mod input;
pub mod offsets;
pub mod problems;
pub mod reconstruct;
pub mod report;
pub mod rolling;
pub mod solver;
pub mod table;
pub mod traits;
pub mod utils;

pub use crate::builder::PathSolverBuilder;
pub use crate::error::{Error, Result};
pub use crate::offsets::Offsets;
pub use crate::solver::{solve_batch, PathSolver, Solution};
pub use crate::traits::CostModel;
