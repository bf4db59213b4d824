//! Full dynamic-programming table. Every one of the n² inclusive ranges is
//! precomputed, so queries are single table lookups. The quadratic table makes this
//! strategy viable only for small sequences, which the memory budget enforces up
//! front.

use std::mem::size_of;

use crate::config::RmqConfig;
use crate::error::RmqError;
use crate::rmq::{
    ensure_preprocessed, timed, validate_data, validate_query, Algorithm, ComplexityInfo,
    QueryResult, RangeMinimum,
};

/// Memory budget for the two quadratic tables. Sequences whose tables would exceed
/// this are rejected with an `AllocationFailure` before anything is allocated,
/// distinct from the generic input-size ceiling.
const DP_MEMORY_BUDGET: usize = 512 * 1024 * 1024;

/// Range minimum queries backed by a fully precomputed O(n²) table.
///
/// The minima and argmin tables are stored as flat row-major arrays indexed by
/// `left * n + right`; only the upper triangle (`left <= right`) is meaningful.
/// Queries are O(1) lookups. Updates are not supported since any element change
/// invalidates up to n² entries.
///
/// # Example
/// ```rust
/// use rangemin::{DpRmq, RangeMinimum};
///
/// let mut rmq = DpRmq::new();
/// rmq.preprocess(vec![4, 10, 3, 11, 2, 12]).unwrap();
///
/// assert_eq!(rmq.query(0, 1).unwrap(), 4);
/// assert_eq!(rmq.query(0, 3).unwrap(), 3);
/// assert_eq!(rmq.query_detailed(0, 5).unwrap().index, 4);
/// ```
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DpRmq {
    data: Vec<i64>,

    // flat n*n row-major tables; storing argmin indices as u32 halves the index
    // table size, which matters for a structure that is quadratic to begin with
    // (the input ceiling keeps all indices well below 2^32)
    table: Vec<i64>,
    argmin: Vec<u32>,

    preprocessed: bool,
    config: RmqConfig,
}

impl DpRmq {
    /// Creates an empty instance with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty instance with the given configuration.
    #[must_use]
    pub fn with_config(config: RmqConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Returns the configuration this instance was constructed with.
    #[must_use]
    pub fn config(&self) -> &RmqConfig {
        &self.config
    }

    /// Returns the number of entries in the minima table (n², or 0 before
    /// preprocessing).
    #[must_use]
    pub fn table_entries(&self) -> usize {
        self.table.len()
    }

    /// Estimates the table bytes for a sequence of length `n` and rejects sizes
    /// that would blow the budget, before any allocation happens.
    fn check_budget(n: usize) -> Result<(), RmqError> {
        let entry_size = size_of::<i64>() + size_of::<u32>();
        let required = n
            .checked_mul(n)
            .and_then(|entries| entries.checked_mul(entry_size))
            .unwrap_or(usize::MAX);
        if required > DP_MEMORY_BUDGET {
            return Err(RmqError::AllocationFailure {
                required,
                budget: DP_MEMORY_BUDGET,
            });
        }
        Ok(())
    }

    /// Fills both tables bottom-up by increasing range length. The `<=` comparison
    /// carries the earlier argmin forward, so ties resolve to the lowest index.
    fn build(&mut self) {
        let n = self.data.len();
        self.table = vec![0; n * n];
        self.argmin = vec![0; n * n];

        for i in 0..n {
            self.table[i * n + i] = self.data[i];
            self.argmin[i * n + i] = i as u32;
        }

        for length in 2..=n {
            for i in 0..=n - length {
                let j = i + length - 1;
                if self.table[i * n + (j - 1)] <= self.data[j] {
                    self.table[i * n + j] = self.table[i * n + (j - 1)];
                    self.argmin[i * n + j] = self.argmin[i * n + (j - 1)];
                } else {
                    self.table[i * n + j] = self.data[j];
                    self.argmin[i * n + j] = j as u32;
                }
            }
        }
    }
}

impl RangeMinimum for DpRmq {
    fn preprocess(&mut self, data: Vec<i64>) -> Result<(), RmqError> {
        validate_data(&data)?;
        // a blown budget is a construction failure, not a validation failure, so
        // it resets the instance instead of preserving any previous sequence
        Self::check_budget(data.len()).map_err(|error| {
            self.clear();
            error
        })?;
        self.clear();
        self.data = data;
        self.build();
        self.preprocessed = true;
        Ok(())
    }

    fn query(&self, left: usize, right: usize) -> Result<i64, RmqError> {
        ensure_preprocessed(self.preprocessed, self.algorithm())?;
        validate_query(left, right, self.data.len())?;
        Ok(self.table[left * self.data.len() + right])
    }

    fn query_detailed(&self, left: usize, right: usize) -> Result<QueryResult, RmqError> {
        ensure_preprocessed(self.preprocessed, self.algorithm())?;
        validate_query(left, right, self.data.len())?;
        let n = self.data.len();
        let ((value, index), query_time) = timed(|| {
            (
                self.table[left * n + right],
                self.argmin[left * n + right] as usize,
            )
        });
        Ok(QueryResult {
            value,
            index,
            query_time,
        })
    }

    fn clear(&mut self) {
        self.data = Vec::new();
        self.table = Vec::new();
        self.argmin = Vec::new();
        self.preprocessed = false;
    }

    fn algorithm(&self) -> Algorithm {
        Algorithm::DpTable
    }

    fn complexity(&self) -> ComplexityInfo {
        ComplexityInfo {
            preprocessing_time: "O(n^2)",
            preprocessing_space: "O(n^2)",
            query_time: "O(1)",
            query_space: "O(1)",
            total_space: "O(n^2)",
        }
    }

    fn heap_size(&self) -> usize {
        self.data.len() * size_of::<i64>()
            + self.table.len() * size_of::<i64>()
            + self.argmin.len() * size_of::<u32>()
    }

    fn is_preprocessed(&self) -> bool {
        self.preprocessed
    }

    fn len(&self) -> usize {
        self.data.len()
    }
}
