//! Assorted helpers shared by the solver, the binaries and tests.

use crate::error::{InvalidInput, Result};
use crate::table::hop_cost;
use crate::traits::CostModel;

/// Sum of hop costs along consecutive entries of `path`.
///
/// Uses the same checked arithmetic as the table builder, so a path whose
/// table cost fits in `u64` also sums without overflow.
pub fn path_cost<M>(model: &M, path: &[usize]) -> Result<u64>
where
    M: CostModel + ?Sized,
{
    path.windows(2).try_fold(0u64, |acc, hop| {
        let step = hop_cost(model, hop[0], hop[1])?;
        acc.checked_add(step)
            .ok_or_else(|| InvalidInput::CostOverflow { at: hop[1] }.into())
    })
}

/// Convert 0-based indices to the 1-based numbering used in reports.
#[inline]
pub fn one_indexed(path: &[usize]) -> Vec<usize> {
    path.iter().map(|&i| i + 1).collect()
}
