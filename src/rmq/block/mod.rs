//! Sqrt-decomposition of the sequence into fixed-length blocks with precomputed
//! per-block minima. Queries combine at most two partial block scans with O(1)
//! lookups for the fully covered blocks in between. This is the only strategy that
//! supports point and batch updates, since an element change invalidates exactly one
//! block aggregate.

use std::mem::size_of;

use crate::config::RmqConfig;
use crate::error::RmqError;
use crate::rmq::{
    ensure_preprocessed, timed, validate_data, validate_index, validate_query, Algorithm,
    ComplexityInfo, QueryResult, RangeMinimum,
};

/// Range minimum queries backed by block decomposition.
///
/// The block length defaults to floor(sqrt(n)) + 1 and can be overridden via
/// [`RmqConfig::with_block_size`] (clamped to the sequence length). Queries run in
/// O(sqrt(n)), point updates in O(block length).
///
/// # Example
/// ```rust
/// use rangemin::{BlockRmq, RangeMinimum};
///
/// let mut rmq = BlockRmq::new();
/// rmq.preprocess(vec![5, 2, 8, 1, 9, 3]).unwrap();
/// assert_eq!(rmq.query(0, 5).unwrap(), 1);
///
/// rmq.update(3, 10).unwrap();
/// assert_eq!(rmq.query(0, 5).unwrap(), 2);
/// ```
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockRmq {
    data: Vec<i64>,

    block_size: usize,
    block_min: Vec<i64>,
    // u32 argmins, the input ceiling keeps indices well below 2^32
    block_argmin: Vec<u32>,

    preprocessed: bool,
    config: RmqConfig,
}

impl BlockRmq {
    /// Creates an empty instance with the default configuration (automatic
    /// sqrt(n) block sizing).
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

    /// Returns the block length in use, or 0 before preprocessing.
    #[must_use]
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Returns the number of blocks, or 0 before preprocessing.
    #[must_use]
    pub fn block_count(&self) -> usize {
        self.block_min.len()
    }

    /// Re-derives every block aggregate from the current sequence content. Intended
    /// for callers that mutated the backing sequence outside the update API (e.g.
    /// through a serde round trip of a modified instance).
    ///
    /// # Errors
    /// [`RmqError::NotPreprocessed`] if no sequence has been preprocessed.
    pub fn rebuild_blocks(&mut self) -> Result<(), RmqError> {
        ensure_preprocessed(self.preprocessed, self.algorithm())?;
        for block in 0..self.block_min.len() {
            self.recompute_block(block);
        }
        Ok(())
    }

    fn resolve_block_size(&self, n: usize) -> usize {
        match self.config.block_size {
            // a configured length is clamped to the sequence length
            Some(size) if size > 0 => size.min(n),
            _ => (n as f64).sqrt() as usize + 1,
        }
    }

    fn block_bounds(&self, block: usize) -> (usize, usize) {
        let start = block * self.block_size;
        let end = ((block + 1) * self.block_size - 1).min(self.data.len() - 1);
        (start, end)
    }

    /// Rescans one block and stores its minimum and first argmin.
    fn recompute_block(&mut self, block: usize) {
        let (start, end) = self.block_bounds(block);
        let (min_value, min_index) = self.scan(start, end);
        self.block_min[block] = min_value;
        self.block_argmin[block] = min_index as u32;
    }

    /// Direct scan of `[left, right]`, used for partial blocks.
    fn scan(&self, left: usize, right: usize) -> (i64, usize) {
        let mut min_value = self.data[left];
        let mut min_index = left;
        for i in left + 1..=right {
            if self.data[i] < min_value {
                min_value = self.data[i];
                min_index = i;
            }
        }
        (min_value, min_index)
    }

    /// Combines partial left block, fully covered middle blocks and partial right
    /// block. Strict `<` comparisons keep the earliest index on value ties, since
    /// candidates are considered in sequence order.
    fn lookup(&self, left: usize, right: usize) -> (i64, usize) {
        let left_block = left / self.block_size;
        let right_block = right / self.block_size;

        if left_block == right_block {
            return self.scan(left, right);
        }

        let (_, left_block_end) = self.block_bounds(left_block);
        let (mut min_value, mut min_index) = self.scan(left, left_block_end);

        for block in left_block + 1..right_block {
            if self.block_min[block] < min_value {
                min_value = self.block_min[block];
                min_index = self.block_argmin[block] as usize;
            }
        }

        let (right_block_start, _) = self.block_bounds(right_block);
        let (partial_value, partial_index) = self.scan(right_block_start, right);
        if partial_value < min_value {
            min_value = partial_value;
            min_index = partial_index;
        }

        (min_value, min_index)
    }
}

impl RangeMinimum for BlockRmq {
    fn preprocess(&mut self, data: Vec<i64>) -> Result<(), RmqError> {
        validate_data(&data)?;
        self.clear();

        self.block_size = self.resolve_block_size(data.len());
        let blocks = (data.len() + self.block_size - 1) / self.block_size;
        self.data = data;
        self.block_min = vec![0; blocks];
        self.block_argmin = vec![0; blocks];
        for block in 0..blocks {
            self.recompute_block(block);
        }

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
        self.block_min = Vec::new();
        self.block_argmin = Vec::new();
        self.block_size = 0;
        self.preprocessed = false;
    }

    fn supports_update(&self) -> bool {
        true
    }

    fn update(&mut self, index: usize, value: i64) -> Result<(), RmqError> {
        ensure_preprocessed(self.preprocessed, self.algorithm())?;
        validate_index(index, self.data.len())?;
        self.data[index] = value;
        self.recompute_block(index / self.block_size);
        Ok(())
    }

    fn batch_update(&mut self, updates: &[(usize, i64)]) -> Result<(), RmqError> {
        ensure_preprocessed(self.preprocessed, self.algorithm())?;

        // validate the whole batch before the first write, so a bad index leaves
        // the sequence untouched
        for &(index, _) in updates {
            validate_index(index, self.data.len())?;
        }

        let mut dirty = vec![false; self.block_min.len()];
        for &(index, value) in updates {
            self.data[index] = value;
            dirty[index / self.block_size] = true;
        }

        // each affected block is rescanned once, not once per updated element
        for block in 0..dirty.len() {
            if dirty[block] {
                self.recompute_block(block);
            }
        }
        Ok(())
    }

    fn algorithm(&self) -> Algorithm {
        Algorithm::BlockDecomposition
    }

    fn complexity(&self) -> ComplexityInfo {
        ComplexityInfo {
            preprocessing_time: "O(n)",
            preprocessing_space: "O(sqrt n)",
            query_time: "O(sqrt n)",
            query_space: "O(1)",
            total_space: "O(n + sqrt n)",
        }
    }

    fn heap_size(&self) -> usize {
        self.data.len() * size_of::<i64>()
            + self.block_min.len() * size_of::<i64>()
            + self.block_argmin.len() * size_of::<u32>()
    }

    fn is_preprocessed(&self) -> bool {
        self.preprocessed
    }

    fn len(&self) -> usize {
        self.data.len()
    }
}
