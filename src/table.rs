//! Forward pass: minimum accumulated cost and predecessor per position.
//!
//! Position `i` is relaxed from every `i - d` (for `d` in the configured
//! offsets) whose entry is already reached. Entries are written only while
//! processing their own position, so after the pass each `(cost, predecessor)`
//! pair is final.

use crate::error::{InvalidInput, Result};
use crate::offsets::Offsets;
use crate::traits::CostModel;

/// Completed DP and predecessor tables for one instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DpTable {
    costs: Vec<Option<u64>>,
    preds: Vec<Option<usize>>,
}

impl DpTable {
    /// Assemble a table from raw parts.
    ///
    /// No consistency check is performed here; the reconstructor validates
    /// every link it follows.
    #[doc(hidden)]
    pub fn from_parts(costs: Vec<Option<u64>>, preds: Vec<Option<usize>>) -> Self {
        debug_assert_eq!(costs.len(), preds.len(), "tables must have equal length");
        Self { costs, preds }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.costs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }

    /// Index of the goal position, `N - 1`.
    #[inline]
    pub fn terminal(&self) -> usize {
        self.len().saturating_sub(1)
    }

    /// Minimum accumulated cost to reach `i`, or `None` if unreached.
    #[inline]
    pub fn cost(&self, i: usize) -> Option<u64> {
        self.costs.get(i).copied().flatten()
    }

    /// Predecessor chosen for `i`; `None` for the start and unreached positions.
    #[inline]
    pub fn predecessor(&self, i: usize) -> Option<usize> {
        self.preds.get(i).copied().flatten()
    }

    #[inline]
    pub fn is_reached(&self, i: usize) -> bool {
        self.cost(i).is_some()
    }

    pub fn costs(&self) -> &[Option<u64>] {
        &self.costs
    }

    pub fn predecessors(&self) -> &[Option<usize>] {
        &self.preds
    }
}

/// Run the forward pass over `model` with the given offsets.
///
/// Errors:
/// - [`InvalidInput::EmptySequence`] if the model has no positions,
/// - [`InvalidInput::NegativeCost`] if any evaluated hop is negative,
/// - [`InvalidInput::CostOverflow`] if an accumulated cost exceeds `u64`.
pub fn build_table<M>(model: &M, offsets: &Offsets) -> Result<DpTable>
where
    M: CostModel + ?Sized,
{
    let n = model.len();
    if n == 0 {
        return Err(InvalidInput::EmptySequence.into());
    }

    #[cfg(feature = "tracing")]
    let span = tracing::trace_span!("build_table", n, offsets = %offsets);
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let mut costs: Vec<Option<u64>> = vec![None; n];
    let mut preds: Vec<Option<usize>> = vec![None; n];
    costs[0] = Some(0);

    for i in 1..n {
        let mut best: Option<(u64, usize)> = None;
        for j in offsets.predecessors(i) {
            let Some(dj) = costs[j] else {
                continue;
            };
            let step = hop_cost(model, j, i)?;
            let cand = dj
                .checked_add(step)
                .ok_or(InvalidInput::CostOverflow { at: i })?;
            // Strict improvement only: the nearest predecessor wins ties.
            if best.map_or(true, |(b, _)| cand < b) {
                best = Some((cand, j));
            }
        }
        if let Some((cost, pred)) = best {
            costs[i] = Some(cost);
            preds[i] = Some(pred);
        }
    }

    Ok(DpTable { costs, preds })
}

/// Evaluate a single hop, rejecting negative costs.
pub(crate) fn hop_cost<M>(model: &M, from: usize, to: usize) -> Result<u64>
where
    M: CostModel + ?Sized,
{
    let cost = model.cost(from, to);
    u64::try_from(cost).map_err(|_| InvalidInput::NegativeCost { from, to, cost }.into())
}
