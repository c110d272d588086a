//! Error taxonomy for the hop-path pipeline.
//!
//! Every fallible operation in the crate returns [`Result`]. Errors fall into
//! three families:
//! - [`ParseError`]: the textual input could not be read as `N` followed by `N`
//!   integers.
//! - [`InvalidInput`]: the input was well-formed but cannot be solved (empty
//!   sequence, bad offsets, negative costs, unreachable terminal).
//! - [`BrokenInvariant`]: the tables produced by the builder are inconsistent.
//!   These are unreachable with a correct builder and are treated as fatal.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error returned by the solver and the input parser.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("malformed input: {0}")]
    Parse(#[from] ParseError),
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),
    #[error("internal invariant violated: {0}")]
    BrokenInvariant(#[from] BrokenInvariant),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("missing sequence length")]
    MissingLength,
    #[error("token {index} ('{token}') is not an integer")]
    NotAnInteger { index: usize, token: String },
    #[error("sequence length {0} is below the minimum of 1")]
    LengthTooSmall(i64),
    #[error("expected {expected} values, found {found}")]
    CountMismatch { expected: usize, found: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInput {
    #[error("position sequence is empty")]
    EmptySequence,
    #[error("offset set is empty")]
    EmptyOffsets,
    #[error("offset 0 would make a position its own predecessor")]
    ZeroOffset,
    #[error("cost from {from} to {to} is negative ({cost})")]
    NegativeCost { from: usize, to: usize, cost: i64 },
    #[error("accumulated cost overflows at position {at}")]
    CostOverflow { at: usize },
    #[error("position {terminal} cannot be reached with the configured offsets")]
    Unreachable { terminal: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BrokenInvariant {
    /// A self or forward link; this is how a predecessor cycle is detected.
    #[error("predecessor {pred} of position {at} does not precede it")]
    NonDecreasingLink { at: usize, pred: usize },
    #[error("predecessor {pred} of position {at} is outside a table of length {len}")]
    PredecessorOutOfRange { at: usize, pred: usize, len: usize },
    #[error("reconstructed path starts at {start} instead of 0")]
    DetachedStart { start: usize },
    #[error("path cost {path_cost} differs from table cost {table_cost}")]
    CostMismatch { path_cost: u64, table_cost: u64 },
}
