//! Build → Reconstruct → Report pipeline.
//!
//! [`PathSolver::run`] executes the three stages strictly in order:
//! 1. build the DP and predecessor tables ([`build_table`]),
//! 2. walk predecessors back from the last position ([`reconstruct`]),
//! 3. hand the path to the caller, who renders it with [`Solution::report`].
//!
//! Every table is owned by a single call to `run`; a solver can be shared
//! across threads and run concurrently as long as its model is `Sync`.

use crate::error::{BrokenInvariant, InvalidInput, Result};
use crate::offsets::Offsets;
use crate::reconstruct::reconstruct;
use crate::report::Report;
use crate::table::{build_table, DpTable};
use crate::traits::CostModel;
use crate::utils::path_cost;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::Serialize;

/// Minimum-cost hop path solver for a given cost model `M`.
///
/// Typical usage:
/// ```
/// use hop_dp::{problems::AbsDiff, PathSolver};
///
/// let model = AbsDiff::from_heights(vec![30, 10, 60, 10, 60, 50]).unwrap();
/// let solution = PathSolver::new(model).run().unwrap();
/// assert_eq!(solution.cost, 40);
/// assert_eq!(solution.path, vec![0, 2, 4, 5]);
/// print!("{}", solution.report());
/// ```
#[derive(Debug, Clone)]
pub struct PathSolver<M: CostModel> {
    model: M,
    offsets: Offsets,
}

/// Optimal cost and the path (0-based indices, start to goal) achieving it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Solution {
    pub cost: u64,
    pub path: Vec<usize>,
}

impl Solution {
    /// Two-line report: path length, then the 1-indexed path.
    pub fn report(&self) -> Report<'_> {
        Report::new(&self.path)
    }
}

impl<M: CostModel> PathSolver<M> {
    /// Create a solver with the default offsets `{1, 2}`.
    pub fn new(model: M) -> Self {
        Self::with_offsets(model, Offsets::default())
    }

    /// Create a solver with explicit offsets.
    pub fn with_offsets(model: M, offsets: Offsets) -> Self {
        Self { model, offsets }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn offsets(&self) -> &Offsets {
        &self.offsets
    }

    pub fn into_model(self) -> M {
        self.model
    }

    /// Stage 1 only: the completed DP and predecessor tables.
    pub fn build_table(&self) -> Result<DpTable> {
        build_table(&self.model, &self.offsets)
    }

    /// Run the full pipeline.
    ///
    /// Fails with [`InvalidInput`] for empty models, negative or overflowing
    /// costs and unreachable goals, and with [`BrokenInvariant`] if the
    /// tables turn out inconsistent. No partial result is returned.
    pub fn run(&self) -> Result<Solution> {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("hop_run", n = self.model.len(), offsets = %self.offsets);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let table = {
            #[cfg(feature = "tracing")]
            let span = tracing::info_span!("build_table");
            #[cfg(feature = "tracing")]
            let _enter = span.enter();
            self.build_table()?
        };

        let terminal = table.terminal();
        let cost = table
            .cost(terminal)
            .ok_or(InvalidInput::Unreachable { terminal })?;

        let path = {
            #[cfg(feature = "tracing")]
            let span = tracing::info_span!("reconstruct", terminal);
            #[cfg(feature = "tracing")]
            let _enter = span.enter();
            reconstruct(table.predecessors(), terminal)?
        };

        self.verify(&path, cost)?;

        Ok(Solution { cost, path })
    }

    /// Minimum cost only, computed with a rolling frontier.
    pub fn min_cost(&self) -> Result<u64> {
        crate::rolling::min_cost(&self.model, &self.offsets)
    }

    /// Check that a reconstructed path starts at 0 and sums to the table cost.
    fn verify(&self, path: &[usize], table_cost: u64) -> Result<()> {
        // `reconstruct` never returns an empty path.
        let start = path[0];
        if start != 0 {
            #[cfg(feature = "tracing")]
            tracing::warn!(start, "reconstructed path is detached from the start");
            return Err(BrokenInvariant::DetachedStart { start }.into());
        }
        let summed = path_cost(&self.model, path)?;
        if summed != table_cost {
            #[cfg(feature = "tracing")]
            tracing::warn!(summed, table_cost, "path cost disagrees with table");
            return Err(BrokenInvariant::CostMismatch {
                path_cost: summed,
                table_cost,
            }
            .into());
        }
        Ok(())
    }
}

/// Solve independent instances that share one offset set.
///
/// Results are returned in input order; each instance fails or succeeds on its
/// own. With the `parallel` feature the instances are spread over rayon's
/// global pool.
#[cfg(feature = "parallel")]
pub fn solve_batch<M>(models: &[M], offsets: &Offsets) -> Vec<Result<Solution>>
where
    M: CostModel + Sync,
{
    models
        .par_iter()
        .enumerate()
        .map(|(idx, model)| solve_one(idx, model, offsets))
        .collect()
}

/// Solve independent instances that share one offset set.
///
/// Results are returned in input order; each instance fails or succeeds on its
/// own.
#[cfg(not(feature = "parallel"))]
pub fn solve_batch<M>(models: &[M], offsets: &Offsets) -> Vec<Result<Solution>>
where
    M: CostModel,
{
    models
        .iter()
        .enumerate()
        .map(|(idx, model)| solve_one(idx, model, offsets))
        .collect()
}

fn solve_one<M: CostModel>(idx: usize, model: &M, offsets: &Offsets) -> Result<Solution> {
    #[cfg(feature = "tracing")]
    let span = tracing::trace_span!("batch_item", idx);
    #[cfg(feature = "tracing")]
    let _enter = span.enter();
    #[cfg(not(feature = "tracing"))]
    let _ = idx;

    PathSolver::with_offsets(model, offsets.clone()).run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::problems::AbsDiff;

    /// Model with an explicit cost matrix.
    struct Matrix(Vec<Vec<i64>>);

    impl CostModel for Matrix {
        fn len(&self) -> usize {
            self.0.len()
        }
        fn cost(&self, from: usize, to: usize) -> i64 {
            self.0[from][to]
        }
    }

    #[test]
    fn frog_scenario() {
        let model = AbsDiff::from_heights(vec![30, 10, 60, 10, 60, 50]).unwrap();
        let solution = PathSolver::new(model).run().unwrap();
        assert_eq!(solution.cost, 40);
        assert_eq!(solution.path, vec![0, 2, 4, 5]);
        assert_eq!(solution.report().to_string(), "4\n1 3 5 6\n");
    }

    #[test]
    fn one_and_two_positions() {
        let one = PathSolver::new(AbsDiff::from_heights(vec![9]).unwrap())
            .run()
            .unwrap();
        assert_eq!(one, Solution { cost: 0, path: vec![0] });
        assert_eq!(one.report().to_string(), "1\n1\n");

        let two = PathSolver::new(AbsDiff::from_heights(vec![9, 2]).unwrap())
            .run()
            .unwrap();
        assert_eq!(two, Solution { cost: 7, path: vec![0, 1] });
    }

    #[test]
    fn unreachable_goal_fails_without_partial_output() {
        let model = AbsDiff::from_heights(vec![1, 2, 3, 4]).unwrap();
        let solver = PathSolver::with_offsets(model, Offsets::new([2]).unwrap());
        assert_eq!(
            solver.run().unwrap_err(),
            Error::InvalidInput(InvalidInput::Unreachable { terminal: 3 })
        );
    }

    #[test]
    fn negative_cost_propagates() {
        let solver = PathSolver::new(Matrix(vec![vec![0, 1, -1], vec![0, 0, 1], vec![0; 3]]));
        assert!(matches!(
            solver.run(),
            Err(Error::InvalidInput(InvalidInput::NegativeCost { from: 0, to: 2, .. }))
        ));
    }

    #[test]
    fn larger_offsets_can_skip_expensive_positions() {
        let model = AbsDiff::from_heights(vec![0, 100, 100, 0]).unwrap();
        let solver = PathSolver::with_offsets(model, Offsets::new([1, 3]).unwrap());
        let solution = solver.run().unwrap();
        assert_eq!(solution.cost, 0);
        assert_eq!(solution.path, vec![0, 3]);
        assert_eq!(solver.min_cost().unwrap(), 0);
    }

    #[test]
    fn batch_keeps_order_and_isolates_failures() {
        let models = vec![
            AbsDiff::from_heights(vec![30, 10, 60, 10, 60, 50]).unwrap(),
            AbsDiff::from_heights(vec![1, 2]).unwrap(),
            AbsDiff::from_heights(vec![5]).unwrap(),
        ];
        let results = solve_batch(&models, &Offsets::new([1, 2]).unwrap());
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().path, vec![0, 2, 4, 5]);
        assert_eq!(results[1].as_ref().unwrap().cost, 1);
        assert_eq!(results[2].as_ref().unwrap().path, vec![0]);

        let failing = solve_batch(&models, &Offsets::new([2]).unwrap());
        assert!(failing[0].is_err());
        assert!(failing[1].is_err());
        assert!(failing[2].is_ok());
    }
}
