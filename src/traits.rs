//! Core trait definitions for hop-path dynamic programs.
//!
//! To plug a new cost function into the solver, implement [`CostModel`] for a
//! struct that owns your instance data (heights, weights, coordinates, ...).
//!
//! The solver only ever asks two things of a model:
//! - how many positions exist (`len`), and
//! - what a single hop between two positions costs (`cost`).
//!
//! Everything else (which hops are allowed, table construction, reconstruction)
//! is driven by the solver and its [`Offsets`](crate::offsets::Offsets).

/// Cost of hopping between positions of a fixed instance.
///
/// Semantics:
/// - Positions are indexed `0..len()`; index 0 is the start, `len() - 1` the goal.
/// - `cost(from, to)` is queried only with `from < to < len()`.
/// - Implementations must be total and deterministic over that domain.
/// - Costs must be non-negative. A negative value is not silently accepted:
///   the table builder rejects it with
///   [`InvalidInput::NegativeCost`](crate::error::InvalidInput::NegativeCost).
pub trait CostModel {
    /// Number of positions `N` in the instance.
    fn len(&self) -> usize;

    /// Cost of a single hop from position `from` to position `to`.
    fn cost(&self, from: usize, to: usize) -> i64;

    /// Returns true if the instance has no positions.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<M: CostModel + ?Sized> CostModel for &M {
    fn len(&self) -> usize {
        (**self).len()
    }

    fn cost(&self, from: usize, to: usize) -> i64 {
        (**self).cost(from, to)
    }
}

impl<M: CostModel + ?Sized> CostModel for Box<M> {
    fn len(&self) -> usize {
        (**self).len()
    }

    fn cost(&self, from: usize, to: usize) -> i64 {
        (**self).cost(from, to)
    }
}
