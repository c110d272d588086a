//! Backward walk over predecessor links.

use crate::error::{BrokenInvariant, Result};

/// Recover the path ending at `terminal` from a predecessor table.
///
/// Starting at `terminal`, follow `preds` until an entry is `None`, then
/// reverse so the path runs start → terminal. Every link must stay in range
/// and point strictly backwards, so a cycle shows up as a non-decreasing link
/// and the walk visits at most `terminal + 1` positions. Violations are
/// reported as a [`BrokenInvariant`] instead of looping or indexing out of
/// bounds.
///
/// The returned path is non-empty and its indices are unique and strictly
/// increasing (links may skip positions).
pub fn reconstruct(preds: &[Option<usize>], terminal: usize) -> Result<Vec<usize>> {
    let len = preds.len();
    if terminal >= len {
        return Err(BrokenInvariant::PredecessorOutOfRange {
            at: terminal,
            pred: terminal,
            len,
        }
        .into());
    }

    let mut path = Vec::new();
    let mut current = terminal;
    loop {
        path.push(current);
        match preds[current] {
            None => break,
            Some(pred) if pred >= len => {
                return Err(BrokenInvariant::PredecessorOutOfRange {
                    at: current,
                    pred,
                    len,
                }
                .into());
            }
            Some(pred) if pred >= current => {
                #[cfg(feature = "tracing")]
                tracing::warn!(at = current, pred, "predecessor does not precede position");
                return Err(BrokenInvariant::NonDecreasingLink { at: current, pred }.into());
            }
            Some(pred) => current = pred,
        }
    }

    path.reverse();
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn follows_links_and_reverses() {
        let preds = [None, Some(0), Some(0), Some(1), Some(2), Some(4)];
        assert_eq!(reconstruct(&preds, 5).unwrap(), vec![0, 2, 4, 5]);
    }

    #[test]
    fn single_element_path() {
        assert_eq!(reconstruct(&[None], 0).unwrap(), vec![0]);
    }

    #[test]
    fn self_link_is_broken_invariant() {
        let preds = [None, Some(1)];
        assert_eq!(
            reconstruct(&preds, 1).unwrap_err(),
            Error::BrokenInvariant(BrokenInvariant::NonDecreasingLink { at: 1, pred: 1 })
        );
    }

    #[test]
    fn forward_cycle_is_broken_invariant() {
        let preds = [None, Some(2), Some(1)];
        assert!(matches!(
            reconstruct(&preds, 2).unwrap_err(),
            Error::BrokenInvariant(BrokenInvariant::NonDecreasingLink { at: 1, pred: 2 })
        ));
    }

    #[test]
    fn out_of_range_link_is_broken_invariant() {
        let preds = [None, Some(9)];
        assert_eq!(
            reconstruct(&preds, 1).unwrap_err(),
            Error::BrokenInvariant(BrokenInvariant::PredecessorOutOfRange {
                at: 1,
                pred: 9,
                len: 2
            })
        );
        assert!(reconstruct(&preds, 2).is_err());
    }

    #[test]
    fn walk_may_stop_before_index_zero() {
        // An unreached position has no predecessor; the walk stops there and
        // the caller decides whether that is acceptable.
        let preds = [None, None, Some(1)];
        assert_eq!(reconstruct(&preds, 2).unwrap(), vec![1, 2]);
    }
}
