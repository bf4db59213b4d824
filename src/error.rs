//! Error types reported by the range minimum query structures. Every fallible operation
//! returns a distinct, inspectable error kind; no failure is silently downgraded and the
//! library never retries internally.

use crate::rmq::Algorithm;

/// Errors reported by preprocessing, queries and updates.
///
/// Validation errors are raised before any state is mutated. Preprocessing errors leave
/// the instance indistinguishable from a freshly constructed one.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum RmqError {
    /// The input sequence is empty or exceeds the supported maximum length.
    #[error("invalid input sequence of length {len}: expected between 1 and {max} elements")]
    InvalidData {
        /// Length of the offending input sequence.
        len: usize,
        /// Maximum supported sequence length.
        max: usize,
    },

    /// The query range is inverted, i.e. the left bound exceeds the right bound.
    #[error("invalid query range [{left}, {right}]: left bound exceeds right bound")]
    InvalidQuery {
        /// Left bound of the offending query.
        left: usize,
        /// Right bound of the offending query.
        right: usize,
    },

    /// An index or range bound lies beyond the end of the sequence.
    #[error("index {index} is out of bounds for sequence of length {len}")]
    OutOfBounds {
        /// The offending index (the right bound for range queries).
        index: usize,
        /// Length of the sequence.
        len: usize,
    },

    /// The operation requires successful preprocessing first.
    #[error("{algorithm} has not been preprocessed, call preprocess() first")]
    NotPreprocessed {
        /// The strategy that was queried prematurely.
        algorithm: Algorithm,
    },

    /// The precomputed structure would exceed (or did exceed) the memory budget.
    #[error("precomputed structure requires {required} bytes, exceeding the budget of {budget} bytes")]
    AllocationFailure {
        /// Number of bytes the structure would occupy.
        required: usize,
        /// The fixed budget the estimate was compared against.
        budget: usize,
    },

    /// An internal invariant of a strategy was violated.
    #[error("internal error in {algorithm}: {reason}")]
    AlgorithmFailure {
        /// The strategy that detected the violation.
        algorithm: Algorithm,
        /// Human-readable description of the violated invariant.
        reason: &'static str,
    },

    /// The operation is not supported by this strategy.
    #[error("operation '{operation}' is not supported by {algorithm}")]
    Unsupported {
        /// Name of the rejected operation.
        operation: &'static str,
        /// The strategy that rejects the operation.
        algorithm: Algorithm,
    },
}
