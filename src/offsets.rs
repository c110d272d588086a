//! Backward offsets that define which earlier positions may precede a position.

use crate::error::{InvalidInput, Result};
use std::fmt;
use std::str::FromStr;

/// Ordered, de-duplicated, non-empty set of positive backward offsets.
///
/// Offsets are kept in ascending order; the table builder evaluates them in
/// that order and only replaces its current best on a strictly cheaper
/// candidate, so ties resolve to the nearest predecessor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Offsets {
    steps: Vec<usize>,
}

impl Offsets {
    /// Validate and normalise a list of offsets.
    pub fn new<I>(steps: I) -> Result<Self>
    where
        I: IntoIterator<Item = usize>,
    {
        let mut steps: Vec<usize> = steps.into_iter().collect();
        if steps.is_empty() {
            return Err(InvalidInput::EmptyOffsets.into());
        }
        if steps.contains(&0) {
            return Err(InvalidInput::ZeroOffset.into());
        }
        steps.sort_unstable();
        steps.dedup();
        Ok(Self { steps })
    }

    /// Offsets in evaluation order.
    #[inline]
    pub fn as_slice(&self) -> &[usize] {
        &self.steps
    }

    /// Largest offset; also the width of the rolling frontier.
    #[inline]
    pub fn max(&self) -> usize {
        // Non-empty by construction.
        self.steps[self.steps.len() - 1]
    }

    /// Predecessors of `position` permitted by these offsets, nearest first.
    pub fn predecessors(&self, position: usize) -> impl Iterator<Item = usize> + '_ {
        self.steps
            .iter()
            .filter_map(move |&step| position.checked_sub(step))
    }
}

impl Default for Offsets {
    /// The classic one-or-two step hop.
    fn default() -> Self {
        Self { steps: vec![1, 2] }
    }
}

impl fmt::Display for Offsets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for step in &self.steps {
            if !first {
                f.write_str(",")?;
            }
            write!(f, "{step}")?;
            first = false;
        }
        Ok(())
    }
}

impl FromStr for Offsets {
    type Err = String;

    /// Parse a comma-separated list such as `"1,2,3"`.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let steps = s
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| {
                part.parse::<usize>()
                    .map_err(|_| format!("offset '{part}' is not a non-negative integer"))
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Offsets::new(steps).map_err(|err| err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn default_is_one_and_two() {
        assert_eq!(Offsets::default().as_slice(), &[1, 2]);
        assert_eq!(Offsets::default().max(), 2);
    }

    #[test]
    fn normalises_order_and_duplicates() {
        let offsets = Offsets::new([3, 1, 3, 2]).unwrap();
        assert_eq!(offsets.as_slice(), &[1, 2, 3]);
        assert_eq!(offsets.to_string(), "1,2,3");
    }

    #[test]
    fn rejects_empty_and_zero() {
        assert_eq!(
            Offsets::new(Vec::new()),
            Err(Error::InvalidInput(InvalidInput::EmptyOffsets))
        );
        assert_eq!(
            Offsets::new([1, 0]),
            Err(Error::InvalidInput(InvalidInput::ZeroOffset))
        );
    }

    #[test]
    fn predecessors_skip_negative_indices() {
        let offsets = Offsets::new([1, 3]).unwrap();
        assert_eq!(offsets.predecessors(0).collect::<Vec<_>>(), Vec::<usize>::new());
        assert_eq!(offsets.predecessors(2).collect::<Vec<_>>(), vec![1]);
        assert_eq!(offsets.predecessors(5).collect::<Vec<_>>(), vec![4, 2]);
    }

    #[test]
    fn parses_comma_lists() {
        assert_eq!("2, 1".parse::<Offsets>().unwrap().as_slice(), &[1, 2]);
        assert!("1,x".parse::<Offsets>().is_err());
        assert!("0".parse::<Offsets>().is_err());
        assert!("".parse::<Offsets>().is_err());
    }
}
