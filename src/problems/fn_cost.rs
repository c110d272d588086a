//! Closure-backed cost model for ad-hoc instances.

use crate::problems::heights::Positions;
use crate::traits::CostModel;

/// Cost model defined by a closure `f(values, from, to)`.
///
/// ```
/// use hop_dp::problems::{FnCost, Positions};
/// use hop_dp::PathSolver;
///
/// let positions = Positions::new(vec![5, 1, 4, 2]).unwrap();
/// // Flat entry fee of 3 plus the height gap.
/// let model = FnCost::new(positions, |h, from, to| 3 + (h[to] - h[from]).abs());
/// let solution = PathSolver::new(model).run().unwrap();
/// assert_eq!(solution.path.first(), Some(&0));
/// ```
pub struct FnCost<F> {
    positions: Positions,
    f: F,
}

impl<F> FnCost<F>
where
    F: Fn(&[i64], usize, usize) -> i64,
{
    pub fn new(positions: Positions, f: F) -> Self {
        Self { positions, f }
    }

    pub fn positions(&self) -> &Positions {
        &self.positions
    }
}

impl<F> CostModel for FnCost<F>
where
    F: Fn(&[i64], usize, usize) -> i64,
{
    fn len(&self) -> usize {
        self.positions.len()
    }

    fn cost(&self, from: usize, to: usize) -> i64 {
        (self.f)(self.positions.values(), from, to)
    }
}
