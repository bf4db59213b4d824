//! Linear-scan baseline without precomputation. It serves as the correctness oracle
//! for the other strategies and is the cheapest choice for rarely-queried sequences.

use std::mem::size_of;

use crate::config::RmqConfig;
use crate::error::RmqError;
use crate::rmq::{
    ensure_preprocessed, timed, validate_data, validate_index, validate_query, Algorithm,
    ComplexityInfo, QueryResult, RangeMinimum,
};

/// Naive range minimum queries by linear scan. O(1) preprocessing, O(r - l) query.
/// Updates are plain element writes since there is no derived state to invalidate.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NaiveRmq {
    data: Vec<i64>,
    preprocessed: bool,
    config: RmqConfig,
}

impl NaiveRmq {
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

    /// Scans `[left, right]` for the minimum and the first index attaining it.
    fn scan(&self, left: usize, right: usize) -> (i64, usize) {
        let mut min_value = self.data[left];
        let mut min_index = left;
        for (i, &value) in self.data[left + 1..=right].iter().enumerate() {
            if value < min_value {
                min_value = value;
                min_index = left + 1 + i;
            }
        }
        (min_value, min_index)
    }
}

impl RangeMinimum for NaiveRmq {
    fn preprocess(&mut self, data: Vec<i64>) -> Result<(), RmqError> {
        validate_data(&data)?;
        self.clear();
        self.data = data;
        self.preprocessed = true;
        Ok(())
    }

    fn query(&self, left: usize, right: usize) -> Result<i64, RmqError> {
        ensure_preprocessed(self.preprocessed, self.algorithm())?;
        validate_query(left, right, self.data.len())?;
        Ok(self.scan(left, right).0)
    }

    fn query_detailed(&self, left: usize, right: usize) -> Result<QueryResult, RmqError> {
        ensure_preprocessed(self.preprocessed, self.algorithm())?;
        validate_query(left, right, self.data.len())?;
        let ((value, index), query_time) = timed(|| self.scan(left, right));
        Ok(QueryResult {
            value,
            index,
            query_time,
        })
    }

    fn clear(&mut self) {
        self.data = Vec::new();
        self.preprocessed = false;
    }

    fn supports_update(&self) -> bool {
        true
    }

    fn update(&mut self, index: usize, value: i64) -> Result<(), RmqError> {
        ensure_preprocessed(self.preprocessed, self.algorithm())?;
        validate_index(index, self.data.len())?;
        self.data[index] = value;
        Ok(())
    }

    fn batch_update(&mut self, updates: &[(usize, i64)]) -> Result<(), RmqError> {
        ensure_preprocessed(self.preprocessed, self.algorithm())?;
        for &(index, _) in updates {
            validate_index(index, self.data.len())?;
        }
        for &(index, value) in updates {
            self.data[index] = value;
        }
        Ok(())
    }

    fn algorithm(&self) -> Algorithm {
        Algorithm::Naive
    }

    fn complexity(&self) -> ComplexityInfo {
        ComplexityInfo {
            preprocessing_time: "O(1)",
            preprocessing_space: "O(1)",
            query_time: "O(n)",
            query_space: "O(1)",
            total_space: "O(n)",
        }
    }

    fn heap_size(&self) -> usize {
        self.data.len() * size_of::<i64>()
    }

    fn is_preprocessed(&self) -> bool {
        self.preprocessed
    }

    fn len(&self) -> usize {
        self.data.len()
    }
}
