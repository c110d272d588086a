//! Height-based hop costs.
//!
//! Positions carry a scalar height and a hop from `j` to `i` costs a function
//! of `h[i] - h[j]`. With offsets `{1, 2}` and [`AbsDiff`] this is the classic
//! "frog" problem.

use crate::error::{InvalidInput, Result};
use crate::traits::CostModel;
use std::ops::Deref;

/// Immutable, non-empty sequence of position values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Positions {
    values: Vec<i64>,
}

impl Positions {
    pub fn new(values: Vec<i64>) -> Result<Self> {
        if values.is_empty() {
            return Err(InvalidInput::EmptySequence.into());
        }
        Ok(Self { values })
    }

    #[inline]
    pub fn values(&self) -> &[i64] {
        &self.values
    }

    /// Absolute height gap, saturating at `i64::MAX`.
    #[inline]
    fn gap(&self, from: usize, to: usize) -> u64 {
        self.values[to].abs_diff(self.values[from])
    }
}

impl Deref for Positions {
    type Target = [i64];

    fn deref(&self) -> &[i64] {
        &self.values
    }
}

/// `cost(j, i) = |h[i] - h[j]|`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbsDiff {
    positions: Positions,
}

impl AbsDiff {
    pub fn new(positions: Positions) -> Self {
        Self { positions }
    }

    /// Shorthand for `AbsDiff::new(Positions::new(heights)?)`.
    pub fn from_heights(heights: Vec<i64>) -> Result<Self> {
        Ok(Self::new(Positions::new(heights)?))
    }

    pub fn positions(&self) -> &Positions {
        &self.positions
    }
}

impl CostModel for AbsDiff {
    fn len(&self) -> usize {
        self.positions.len()
    }

    fn cost(&self, from: usize, to: usize) -> i64 {
        i64::try_from(self.positions.gap(from, to)).unwrap_or(i64::MAX)
    }
}

/// `cost(j, i) = (h[i] - h[j])^2`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SquaredDiff {
    positions: Positions,
}

impl SquaredDiff {
    pub fn new(positions: Positions) -> Self {
        Self { positions }
    }

    pub fn from_heights(heights: Vec<i64>) -> Result<Self> {
        Ok(Self::new(Positions::new(heights)?))
    }

    pub fn positions(&self) -> &Positions {
        &self.positions
    }
}

impl CostModel for SquaredDiff {
    fn len(&self) -> usize {
        self.positions.len()
    }

    fn cost(&self, from: usize, to: usize) -> i64 {
        let gap = self.positions.gap(from, to);
        gap.checked_mul(gap)
            .and_then(|sq| i64::try_from(sq).ok())
            .unwrap_or(i64::MAX)
    }
}
