//! Workload-based strategy selection. A pure decision table maps the shape of a
//! workload (sequence length, expected query volume, update requirement,
//! optimization goal) to the strategy identifier best suited for it. The table only
//! recommends; constructing and preprocessing the chosen strategy stays with the
//! caller.

use crate::rmq::Algorithm;

/// What the caller wants the chosen strategy to optimize for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OptimizationGoal {
    /// Fastest possible queries, preprocessing cost be damned.
    QueryTime,
    /// Cheapest possible preprocessing.
    PreprocessingTime,
    /// Smallest memory footprint.
    Memory,
    /// Point/batch update support is required.
    UpdateSupport,
    /// Balance preprocessing, query time and memory.
    #[default]
    Balanced,
}

/// Describes the expected workload for strategy selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Workload {
    /// Length of the sequence to preprocess.
    pub len: usize,
    /// Expected number of queries over the lifetime of the instance.
    pub expected_queries: usize,
    /// Whether the sequence will be mutated through the update API.
    pub needs_updates: bool,
    /// The optimization goal.
    pub goal: OptimizationGoal,
}

/// Recommends a strategy for the given workload.
///
/// # Example
/// ```rust
/// use rangemin::{select_algorithm, Algorithm, OptimizationGoal, Workload};
///
/// let workload = Workload {
///     len: 100_000,
///     expected_queries: 10_000_000,
///     needs_updates: false,
///     goal: OptimizationGoal::QueryTime,
/// };
/// assert_eq!(select_algorithm(&workload), Algorithm::SparseTable);
/// ```
#[must_use]
pub fn select_algorithm(workload: &Workload) -> Algorithm {
    match workload.goal {
        OptimizationGoal::QueryTime => {
            if workload.len <= 1000 {
                Algorithm::DpTable
            } else {
                Algorithm::SparseTable
            }
        }
        OptimizationGoal::PreprocessingTime => Algorithm::Naive,
        OptimizationGoal::Memory => {
            if workload.expected_queries < workload.len / 10 {
                Algorithm::Naive
            } else {
                Algorithm::BlockDecomposition
            }
        }
        OptimizationGoal::UpdateSupport => {
            if workload.expected_queries < workload.len {
                Algorithm::Naive
            } else {
                Algorithm::BlockDecomposition
            }
        }
        OptimizationGoal::Balanced => recommend_balanced(workload),
    }
}

/// The balanced decision table: updates constrain the choice to the two mutable
/// strategies, tiny inputs favor the dense table, query-starved workloads stay
/// naive, query-heavy static workloads get the sparse table and everything else
/// lands on block decomposition.
fn recommend_balanced(workload: &Workload) -> Algorithm {
    let len = workload.len as f64;
    let queries = workload.expected_queries as f64;

    if workload.needs_updates {
        return if workload.expected_queries < workload.len / 10 {
            Algorithm::Naive
        } else {
            Algorithm::BlockDecomposition
        };
    }

    if workload.len <= 100 {
        return Algorithm::DpTable;
    }
    if workload.len <= 1000 && workload.expected_queries > workload.len * 10 {
        return Algorithm::DpTable;
    }
    if queries < len.sqrt() {
        return Algorithm::Naive;
    }
    if queries > len * len.log2() {
        return Algorithm::SparseTable;
    }

    Algorithm::BlockDecomposition
}

#[cfg(test)]
mod tests {
    use super::*;

    fn workload(len: usize, expected_queries: usize, needs_updates: bool, goal: OptimizationGoal) -> Workload {
        Workload {
            len,
            expected_queries,
            needs_updates,
            goal,
        }
    }

    #[test]
    fn query_time_goal() {
        let w = workload(500, 1000, false, OptimizationGoal::QueryTime);
        assert_eq!(select_algorithm(&w), Algorithm::DpTable);
        let w = workload(100_000, 1000, false, OptimizationGoal::QueryTime);
        assert_eq!(select_algorithm(&w), Algorithm::SparseTable);
    }

    #[test]
    fn preprocessing_time_goal() {
        let w = workload(100_000, 5, false, OptimizationGoal::PreprocessingTime);
        assert_eq!(select_algorithm(&w), Algorithm::Naive);
    }

    #[test]
    fn memory_goal() {
        let w = workload(100_000, 10, false, OptimizationGoal::Memory);
        assert_eq!(select_algorithm(&w), Algorithm::Naive);
        let w = workload(100_000, 1_000_000, false, OptimizationGoal::Memory);
        assert_eq!(select_algorithm(&w), Algorithm::BlockDecomposition);
    }

    #[test]
    fn update_goal_picks_mutable_strategies() {
        let w = workload(10_000, 100, true, OptimizationGoal::UpdateSupport);
        assert_eq!(select_algorithm(&w), Algorithm::Naive);
        let w = workload(10_000, 100_000, true, OptimizationGoal::UpdateSupport);
        assert_eq!(select_algorithm(&w), Algorithm::BlockDecomposition);

        let chosen = select_algorithm(&workload(10_000, 100_000, true, OptimizationGoal::Balanced));
        assert_eq!(chosen, Algorithm::BlockDecomposition);
    }

    #[test]
    fn balanced_goal_covers_the_table() {
        // tiny input
        let w = workload(50, 50, false, OptimizationGoal::Balanced);
        assert_eq!(select_algorithm(&w), Algorithm::DpTable);
        // small input, query-heavy
        let w = workload(800, 10_000, false, OptimizationGoal::Balanced);
        assert_eq!(select_algorithm(&w), Algorithm::DpTable);
        // barely any queries
        let w = workload(1_000_000, 10, false, OptimizationGoal::Balanced);
        assert_eq!(select_algorithm(&w), Algorithm::Naive);
        // query-heavy static data
        let w = workload(100_000, 100_000_000, false, OptimizationGoal::Balanced);
        assert_eq!(select_algorithm(&w), Algorithm::SparseTable);
        // the middle ground
        let w = workload(100_000, 50_000, false, OptimizationGoal::Balanced);
        assert_eq!(select_algorithm(&w), Algorithm::BlockDecomposition);
    }
}
