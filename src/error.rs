//! Error types for parameter construction and permutation calls.
//!
//! Every error here is a contract violation caught at or near the call
//! site: either a malformed parameter set (rejected at construction,
//! never at hash time) or a caller handing the permutation a state of
//! the wrong width. The hash path itself performs only field arithmetic
//! and table lookups, so there are no transient failures and nothing is
//! ever retried.

use thiserror::Error;

/// Errors reported by parameter-set construction and the checked
/// permutation entry point.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PoseidonError {
    /// The S-box exponent shares a factor with `p - 1`, so `x ^ alpha`
    /// is not a bijection on the field.
    #[error("s-box exponent {alpha} is not invertible modulo p - 1")]
    NonInvertibleSbox {
        /// The rejected exponent.
        alpha: u64,
    },

    /// The round-constant table does not provide one row per round.
    #[error("round constant table has {got} rows, expected {expected}")]
    RoundConstantRows {
        /// Rows required by the round schedule.
        expected: usize,
        /// Rows actually supplied.
        got: usize,
    },

    /// The full rounds cannot be split into two equal blocks around the
    /// partial-round block.
    #[error("full round count {full_rounds} is not even")]
    OddFullRounds {
        /// The rejected count.
        full_rounds: usize,
    },

    /// A state slice of the wrong length was passed to the permutation.
    #[error("state width {got} does not match permutation width {expected}")]
    WidthMismatch {
        /// The fixed permutation width.
        expected: usize,
        /// Length of the slice the caller supplied.
        got: usize,
    },

    /// A string could not be parsed as a field element.
    #[error("invalid field element encoding: {0:?}")]
    InvalidEncoding(String),
}

/// Result type for fallible operations in this crate.
pub type PoseidonResult<T> = Result<T, PoseidonError>;
