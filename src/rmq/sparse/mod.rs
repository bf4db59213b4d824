//! Binary-lifting sparse table. The minimum of every power-of-two window is
//! precomputed level by level; a query covers its range with the two overlapping
//! level-k windows, which is harmless for minimum. This yields constant-time
//! queries with O(n log n) space overhead.

use std::mem::size_of;

use crate::config::RmqConfig;
use crate::error::RmqError;
use crate::rmq::{
    ensure_preprocessed, timed, validate_data, validate_query, Algorithm, ComplexityInfo,
    QueryResult, RangeMinimum,
};

/// Range minimum queries backed by a binary-lifting sparse table.
///
/// Level k holds, for every start index where a 2^k window fits, the minimum (and
/// its first index) of that window. The levels are stored in a flat row-major array
/// with one row of `levels` entries per start index, which avoids a dynamic second
/// dimension and the page faults it costs on large inputs. A precomputed floor-log2
/// table gives O(1) level selection at query time. Updates are not supported.
///
/// # Example
/// ```rust
/// use rangemin::{RangeMinimum, SparseRmq};
///
/// let mut rmq = SparseRmq::new();
/// rmq.preprocess(vec![4, 10, 3, 11, 2, 12]).unwrap();
///
/// assert_eq!(rmq.query(0, 1).unwrap(), 4);
/// assert_eq!(rmq.query(1, 3).unwrap(), 3);
/// assert_eq!(rmq.query_detailed(0, 5).unwrap().index, 4);
/// ```
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SparseRmq {
    data: Vec<i64>,

    // row-major [start * levels + level]; indices are stored as u32 since the
    // input ceiling keeps them well below 2^32, halving the index table
    values: Vec<i64>,
    indices: Vec<u32>,
    levels: usize,

    // floor(log2(length)) for every range length up to n
    log_table: Vec<u32>,

    preprocessed: bool,
    config: RmqConfig,
}

impl SparseRmq {
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

    /// Returns the number of levels in the table, floor(log2 n) + 1, or 0 before
    /// preprocessing.
    #[must_use]
    pub fn level_count(&self) -> usize {
        self.levels
    }

    fn build(&mut self) {
        let n = self.data.len();
        self.levels = self.data.len().ilog2() as usize + 1;

        self.values = vec![0; n * self.levels];
        self.indices = vec![0; n * self.levels];

        // level 0 holds the singletons
        for (i, &value) in self.data.iter().enumerate() {
            self.values[i * self.levels] = value;
            self.indices[i * self.levels] = i as u32;
        }

        // level k merges the two 2^(k-1) half windows; `<=` prefers the left half,
        // so each window entry carries the first occurrence of its minimum
        for k in 1..self.levels {
            let width = 1usize << k;
            let half = width >> 1;
            for i in 0..=n - width {
                let left = i * self.levels + (k - 1);
                let right = (i + half) * self.levels + (k - 1);
                let target = i * self.levels + k;
                if self.values[left] <= self.values[right] {
                    self.values[target] = self.values[left];
                    self.indices[target] = self.indices[left];
                } else {
                    self.values[target] = self.values[right];
                    self.indices[target] = self.indices[right];
                }
            }
        }

        self.log_table = vec![0; n + 1];
        for i in 2..=n {
            self.log_table[i] = self.log_table[i / 2] + 1;
        }
    }

    /// Combines the two overlapping level-k windows covering `[left, right]`. On an
    /// exact tie the left window wins, which equals the lowest-index tie-break: the
    /// first occurrence of the range minimum lies either inside the left window
    /// (whose entry already is the first occurrence) or strictly beyond it, in which
    /// case the windows cannot tie.
    fn lookup(&self, left: usize, right: usize) -> (i64, usize) {
        let k = self.log_table[right - left + 1] as usize;
        let width = 1usize << k;
        let a = left * self.levels + k;
        let b = (right + 1 - width) * self.levels + k;
        if self.values[a] <= self.values[b] {
            (self.values[a], self.indices[a] as usize)
        } else {
            (self.values[b], self.indices[b] as usize)
        }
    }
}

impl RangeMinimum for SparseRmq {
    fn preprocess(&mut self, data: Vec<i64>) -> Result<(), RmqError> {
        validate_data(&data)?;
        self.clear();
        self.data = data;
        self.build();
        self.preprocessed = true;
        Ok(())
    }

    fn query(&self, left: usize, right: usize) -> Result<i64, RmqError> {
        ensure_preprocessed(self.preprocessed, self.algorithm())?;
        validate_query(left, right, self.data.len())?;
        Ok(self.lookup(left, right).0)
    }

    fn query_detailed(&self, left: usize, right: usize) -> Result<QueryResult, RmqError> {
        ensure_preprocessed(self.preprocessed, self.algorithm())?;
        validate_query(left, right, self.data.len())?;
        let ((value, index), query_time) = timed(|| self.lookup(left, right));
        Ok(QueryResult {
            value,
            index,
            query_time,
        })
    }

    fn clear(&mut self) {
        self.data = Vec::new();
        self.values = Vec::new();
        self.indices = Vec::new();
        self.log_table = Vec::new();
        self.levels = 0;
        self.preprocessed = false;
    }

    fn algorithm(&self) -> Algorithm {
        Algorithm::SparseTable
    }

    fn complexity(&self) -> ComplexityInfo {
        ComplexityInfo {
            preprocessing_time: "O(n log n)",
            preprocessing_space: "O(n log n)",
            query_time: "O(1)",
            query_space: "O(1)",
            total_space: "O(n log n)",
        }
    }

    fn heap_size(&self) -> usize {
        self.data.len() * size_of::<i64>()
            + self.values.len() * size_of::<i64>()
            + self.indices.len() * size_of::<u32>()
            + self.log_table.len() * size_of::<u32>()
    }

    fn is_preprocessed(&self) -> bool {
        self.preprocessed
    }

    fn len(&self) -> usize {
        self.data.len()
    }
}
