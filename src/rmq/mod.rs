//! Range minimum query strategies. Every strategy implements the [`RangeMinimum`]
//! trait and answers the same question, the minimum value (and the first index
//! attaining it) in an inclusive range of a sequence, but with different
//! preprocessing/query/update trade-offs. The implementations are located in the
//! [naive][naive], [dp][dp], [sparse][sparse], [block][block] and
//! [cartesian][cartesian] modules.

use std::fmt;
use std::time::{Duration, Instant};

use crate::error::RmqError;

pub mod block;
pub mod cartesian;
pub mod dp;
pub mod naive;
pub mod sparse;

/// Maximum supported sequence length, shared by all strategies. Larger inputs are
/// rejected with [`RmqError::InvalidData`] before any state is touched.
pub const MAX_SEQUENCE_LEN: usize = 1_000_000;

/// Identifies one of the five strategies. Returned by [`RangeMinimum::algorithm`]
/// and by the workload-based selection in the [select][crate::select] module.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    /// Linear scan without precomputation.
    Naive,
    /// Full O(n²) dynamic-programming table.
    DpTable,
    /// Binary-lifting sparse table.
    SparseTable,
    /// Sqrt-decomposition with update support.
    BlockDecomposition,
    /// Cartesian tree with binary-lifting LCA.
    CartesianLca,
}

impl Algorithm {
    /// Returns the human-readable name of the strategy.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Naive => "Naive",
            Algorithm::DpTable => "Dynamic Programming",
            Algorithm::SparseTable => "Sparse Table",
            Algorithm::BlockDecomposition => "Block Decomposition",
            Algorithm::CartesianLca => "Cartesian Tree LCA",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Informational asymptotic-complexity descriptors for a strategy. The strings are
/// purely descriptive and intended for diagnostics and strategy selection tooling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ComplexityInfo {
    /// Time complexity of preprocessing.
    pub preprocessing_time: &'static str,
    /// Additional space used during preprocessing.
    pub preprocessing_space: &'static str,
    /// Time complexity of a single query.
    pub query_time: &'static str,
    /// Additional space used by a single query.
    pub query_space: &'static str,
    /// Total space held by the preprocessed structure.
    pub total_space: &'static str,
}

/// Result of a detailed query: the minimum value, the first index attaining it and
/// the elapsed wall time of the lookup. The timing is diagnostic only and is returned
/// here instead of being recorded in the instance, so queries never mutate state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QueryResult {
    /// The minimum value in the queried range.
    pub value: i64,
    /// The lowest sequence index attaining the minimum.
    pub index: usize,
    /// Elapsed wall time of the lookup that produced this result.
    pub query_time: Duration,
}

/// Common capability interface for all range minimum query strategies.
///
/// The lifecycle is `preprocess` → arbitrarily many `query`/`query_detailed` →
/// optional `clear`. Strategies reporting [`supports_update`] additionally accept
/// point and batch updates that re-derive only the affected precomputed aggregates.
///
/// Queries take `&self` and mutate nothing, so read-only queries against an instance
/// that is not concurrently preprocessed or updated are safe; the mutating operations
/// take `&mut self`, which lets the borrow checker enforce the required exclusion.
///
/// [`supports_update`]: RangeMinimum::supports_update
pub trait RangeMinimum {
    /// Takes ownership of the sequence and builds the strategy's precomputed
    /// structure. On success the instance becomes queryable; on failure it is reset
    /// to the state of a freshly constructed instance before the error is returned.
    ///
    /// # Errors
    /// [`RmqError::InvalidData`] if the sequence is empty or longer than
    /// [`MAX_SEQUENCE_LEN`]; [`RmqError::AllocationFailure`] if the precomputed
    /// structure would exceed the strategy's memory budget.
    fn preprocess(&mut self, data: Vec<i64>) -> Result<(), RmqError>;

    /// Returns the minimum value in the inclusive range `[left, right]`.
    ///
    /// # Errors
    /// [`RmqError::NotPreprocessed`] before a successful [`preprocess`];
    /// [`RmqError::InvalidQuery`] if `left > right`; [`RmqError::OutOfBounds`] if
    /// `right` is not a valid index.
    ///
    /// [`preprocess`]: RangeMinimum::preprocess
    fn query(&self, left: usize, right: usize) -> Result<i64, RmqError>;

    /// Like [`query`], but additionally reports the first index attaining the
    /// minimum (ties resolve to the lowest index) and the elapsed wall time of
    /// the lookup.
    ///
    /// # Errors
    /// Same failure modes as [`query`].
    ///
    /// [`query`]: RangeMinimum::query
    fn query_detailed(&self, left: usize, right: usize) -> Result<QueryResult, RmqError>;

    /// Discards the sequence and all precomputed structures, resetting the instance
    /// to its unpreprocessed state. Calling `clear` on an unpreprocessed instance is
    /// a no-op. The configuration is retained.
    fn clear(&mut self);

    /// Reports whether this strategy accepts [`update`] and [`batch_update`].
    ///
    /// [`update`]: RangeMinimum::update
    /// [`batch_update`]: RangeMinimum::batch_update
    fn supports_update(&self) -> bool {
        false
    }

    /// Replaces the element at `index` and re-derives the affected precomputed
    /// aggregates.
    ///
    /// # Errors
    /// [`RmqError::Unsupported`] for strategies without update support;
    /// [`RmqError::NotPreprocessed`] before preprocessing;
    /// [`RmqError::OutOfBounds`] for an invalid index.
    fn update(&mut self, index: usize, value: i64) -> Result<(), RmqError> {
        let _ = (index, value);
        Err(RmqError::Unsupported {
            operation: "update",
            algorithm: self.algorithm(),
        })
    }

    /// Applies several point updates at once. All indices are validated before any
    /// element is written, so a failing batch leaves the sequence completely
    /// unmodified. Each affected aggregate is re-derived once, not once per element.
    ///
    /// # Errors
    /// Same failure modes as [`update`].
    ///
    /// [`update`]: RangeMinimum::update
    fn batch_update(&mut self, updates: &[(usize, i64)]) -> Result<(), RmqError> {
        let _ = updates;
        Err(RmqError::Unsupported {
            operation: "batch_update",
            algorithm: self.algorithm(),
        })
    }

    /// Returns the identifier of this strategy.
    fn algorithm(&self) -> Algorithm;

    /// Returns the informational complexity descriptors of this strategy.
    fn complexity(&self) -> ComplexityInfo;

    /// Returns an estimate of the heap memory used by the sequence and the
    /// precomputed structures, in bytes. Does not include space allocated but not in
    /// use (e.g. unused capacity of vectors).
    fn heap_size(&self) -> usize;

    /// Reports whether a sequence has been successfully preprocessed.
    fn is_preprocessed(&self) -> bool;

    /// Returns the length of the preprocessed sequence, or 0 if unpreprocessed.
    fn len(&self) -> usize;

    /// Reports whether no sequence is currently held.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Validates an input sequence against the shared size bounds.
pub(crate) fn validate_data(data: &[i64]) -> Result<(), RmqError> {
    if data.is_empty() || data.len() > MAX_SEQUENCE_LEN {
        return Err(RmqError::InvalidData {
            len: data.len(),
            max: MAX_SEQUENCE_LEN,
        });
    }
    Ok(())
}

/// Validates an inclusive query range against a sequence length.
pub(crate) fn validate_query(left: usize, right: usize, len: usize) -> Result<(), RmqError> {
    if left > right {
        return Err(RmqError::InvalidQuery { left, right });
    }
    if right >= len {
        return Err(RmqError::OutOfBounds { index: right, len });
    }
    Ok(())
}

/// Validates a single element index against a sequence length.
pub(crate) fn validate_index(index: usize, len: usize) -> Result<(), RmqError> {
    if index >= len {
        return Err(RmqError::OutOfBounds { index, len });
    }
    Ok(())
}

/// Returns a `NotPreprocessed` error unless the flag is set.
pub(crate) fn ensure_preprocessed(preprocessed: bool, algorithm: Algorithm) -> Result<(), RmqError> {
    if preprocessed {
        Ok(())
    } else {
        Err(RmqError::NotPreprocessed { algorithm })
    }
}

/// Runs the closure and reports its elapsed wall time alongside its result.
pub(crate) fn timed<T>(lookup: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let result = lookup();
    (result, start.elapsed())
}

#[cfg(test)]
mod tests;
