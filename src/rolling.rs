//! Cost-only evaluation in `O(max offset)` memory.
//!
//! The full [`DpTable`](crate::table::DpTable) keeps every entry so that a path
//! can be reconstructed. When only the optimal cost is needed, the recurrence
//! at position `i` reads at most `max_offset` earlier entries, so a ring buffer
//! of that width (the *frontier*) is enough.

use crate::error::{InvalidInput, Result};
use crate::offsets::Offsets;
use crate::table::hop_cost;
use crate::traits::CostModel;

/// The last `width` DP entries, stored in a ring indexed by `position % width`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frontier {
    slots: Vec<Option<u64>>,
    /// Next position to be computed; the ring holds `[next - width, next)`.
    next: usize,
}

impl Frontier {
    /// Frontier after position 0, which costs nothing to reach.
    pub fn new(width: usize) -> Self {
        let width = width.max(1);
        let mut slots = vec![None; width];
        slots[0] = Some(0);
        Self { slots, next: 1 }
    }

    /// Index of the next position this frontier will compute.
    #[inline]
    pub fn position(&self) -> usize {
        self.next
    }

    /// Entry for `position` if it is still inside the window.
    pub fn get(&self, position: usize) -> Option<u64> {
        let width = self.slots.len();
        if position >= self.next || position.saturating_add(width) < self.next {
            return None;
        }
        self.slots[position % width]
    }

    /// Most recently computed entry.
    pub fn last(&self) -> Option<u64> {
        self.get(self.next - 1)
    }
}

/// Advance `frontier` by one position: compute the entry for
/// `frontier.position()` and slide the window.
pub fn forward_step<M>(model: &M, offsets: &Offsets, frontier: &mut Frontier) -> Result<()>
where
    M: CostModel + ?Sized,
{
    let i = frontier.next;
    let mut best: Option<u64> = None;
    for j in offsets.predecessors(i) {
        let Some(dj) = frontier.get(j) else {
            continue;
        };
        let cand = dj
            .checked_add(hop_cost(model, j, i)?)
            .ok_or(InvalidInput::CostOverflow { at: i })?;
        if best.map_or(true, |b| cand < b) {
            best = Some(cand);
        }
    }
    let width = frontier.slots.len();
    frontier.slots[i % width] = best;
    frontier.next += 1;
    Ok(())
}

/// Minimum cost to reach the last position, without building tables.
///
/// Fails with [`InvalidInput::Unreachable`] when the offsets cannot reach the
/// last position, and with the same errors as
/// [`build_table`](crate::table::build_table) otherwise.
pub fn min_cost<M>(model: &M, offsets: &Offsets) -> Result<u64>
where
    M: CostModel + ?Sized,
{
    let n = model.len();
    if n == 0 {
        return Err(InvalidInput::EmptySequence.into());
    }
    // An offset >= n never yields a predecessor, so n slots always suffice.
    let mut frontier = Frontier::new(offsets.max().min(n));
    while frontier.position() < n {
        forward_step(model, offsets, &mut frontier)?;
    }
    frontier
        .last()
        .ok_or_else(|| InvalidInput::Unreachable { terminal: n - 1 }.into())
}
