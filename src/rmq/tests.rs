use crate::error::RmqError;
use crate::rmq::block::BlockRmq;
use crate::rmq::cartesian::CartesianRmq;
use crate::rmq::dp::DpRmq;
use crate::rmq::naive::NaiveRmq;
use crate::rmq::sparse::SparseRmq;
use crate::rmq::{Algorithm, RangeMinimum, MAX_SEQUENCE_LEN};
use rand::Rng;

fn all_strategies() -> Vec<Box<dyn RangeMinimum>> {
    vec![
        Box::new(NaiveRmq::new()),
        Box::new(DpRmq::new()),
        Box::new(SparseRmq::new()),
        Box::new(BlockRmq::new()),
        Box::new(CartesianRmq::new()),
    ]
}

/// First-occurrence oracle by direct scan.
fn scan_min(data: &[i64], left: usize, right: usize) -> (i64, usize) {
    let mut min_value = data[left];
    let mut min_index = left;
    for (i, &value) in data.iter().enumerate().take(right + 1).skip(left + 1) {
        if value < min_value {
            min_value = value;
            min_index = i;
        }
    }
    (min_value, min_index)
}

#[test]
fn cross_strategy_equivalence() {
    let data = vec![9, 6, 10, 4, 0, 8, 3, 7, 1, 2, 5];
    for mut rmq in all_strategies() {
        rmq.preprocess(data.clone()).unwrap();
        for left in 0..data.len() {
            for right in left..data.len() {
                let (value, index) = scan_min(&data, left, right);
                assert_eq!(
                    rmq.query(left, right).unwrap(),
                    value,
                    "{}: [{}, {}]",
                    rmq.algorithm(),
                    left,
                    right
                );
                let detailed = rmq.query_detailed(left, right).unwrap();
                assert_eq!(detailed.value, value);
                assert_eq!(
                    detailed.index,
                    index,
                    "{}: argmin in [{}, {}]",
                    rmq.algorithm(),
                    left,
                    right
                );
            }
        }
    }
}

#[test]
fn randomized_cross_strategy_equivalence() {
    let mut rng = rand::thread_rng();
    const L: usize = 150;

    let mut data = Vec::with_capacity(L);
    for _ in 0..L {
        // a narrow value range forces plenty of duplicate minima
        data.push(rng.gen_range(-20..20));
    }

    for mut rmq in all_strategies() {
        rmq.preprocess(data.clone()).unwrap();
        for left in 0..L {
            for right in left..L {
                let (value, index) = scan_min(&data, left, right);
                let detailed = rmq.query_detailed(left, right).unwrap();
                assert_eq!(
                    (detailed.value, detailed.index),
                    (value, index),
                    "{}: [{}, {}]",
                    rmq.algorithm(),
                    left,
                    right
                );
            }
        }
    }
}

#[test]
fn first_occurrence_tie_break() {
    for mut rmq in all_strategies() {
        rmq.preprocess(vec![7, 2, 5, 2, 9, 1, 3]).unwrap();
        let result = rmq.query_detailed(0, 3).unwrap();
        assert_eq!(result.value, 2, "{}", rmq.algorithm());
        assert_eq!(result.index, 1, "{}", rmq.algorithm());
    }
}

#[test]
fn boundary_single_element() {
    for mut rmq in all_strategies() {
        rmq.preprocess(vec![42]).unwrap();
        assert_eq!(rmq.query(0, 0).unwrap(), 42);
        assert_eq!(rmq.query_detailed(0, 0).unwrap().index, 0);
        assert!(matches!(
            rmq.query(0, 1),
            Err(RmqError::OutOfBounds { index: 1, len: 1 })
        ));
    }
}

#[test]
fn inverted_range_is_invalid_query() {
    for mut rmq in all_strategies() {
        rmq.preprocess(vec![1, 2, 3]).unwrap();
        assert!(matches!(
            rmq.query(2, 1),
            Err(RmqError::InvalidQuery { left: 2, right: 1 })
        ));
        // inversion is checked before bounds
        assert!(matches!(
            rmq.query(5, 4),
            Err(RmqError::InvalidQuery { .. })
        ));
    }
}

#[test]
fn empty_input_is_rejected_without_state_change() {
    for mut rmq in all_strategies() {
        assert!(matches!(
            rmq.preprocess(Vec::new()),
            Err(RmqError::InvalidData { len: 0, .. })
        ));
        assert!(!rmq.is_preprocessed());
        assert!(rmq.is_empty());
    }
}

#[test]
fn oversized_input_is_rejected() {
    let mut rmq = NaiveRmq::new();
    let result = rmq.preprocess(vec![0; MAX_SEQUENCE_LEN + 1]);
    assert!(matches!(result, Err(RmqError::InvalidData { .. })));
    assert!(!rmq.is_preprocessed());
}

#[test]
fn query_before_preprocess_fails() {
    for rmq in all_strategies() {
        assert!(matches!(
            rmq.query(0, 0),
            Err(RmqError::NotPreprocessed { .. })
        ));
        assert!(matches!(
            rmq.query_detailed(0, 0),
            Err(RmqError::NotPreprocessed { .. })
        ));
    }
}

#[test]
fn clear_is_idempotent() {
    for mut rmq in all_strategies() {
        rmq.preprocess(vec![3, 1, 2]).unwrap();
        assert!(rmq.is_preprocessed());

        rmq.clear();
        assert!(!rmq.is_preprocessed());
        assert_eq!(rmq.len(), 0);
        assert!(matches!(
            rmq.query(0, 0),
            Err(RmqError::NotPreprocessed { .. })
        ));

        // a second clear is a no-op
        rmq.clear();
        assert!(!rmq.is_preprocessed());
    }
}

#[test]
fn preprocess_replaces_previous_sequence() {
    for mut rmq in all_strategies() {
        rmq.preprocess(vec![5, 4, 3]).unwrap();
        rmq.preprocess(vec![7, 1]).unwrap();
        assert_eq!(rmq.len(), 2);
        assert_eq!(rmq.query(0, 1).unwrap(), 1);
        assert!(matches!(rmq.query(0, 2), Err(RmqError::OutOfBounds { .. })));
    }
}

#[test]
fn update_capability_is_reported_and_enforced() {
    for mut rmq in all_strategies() {
        rmq.preprocess(vec![4, 2, 6]).unwrap();
        let supports = matches!(
            rmq.algorithm(),
            Algorithm::Naive | Algorithm::BlockDecomposition
        );
        assert_eq!(rmq.supports_update(), supports);

        if supports {
            rmq.update(0, -1).unwrap();
            assert_eq!(rmq.query(0, 2).unwrap(), -1);
        } else {
            assert!(matches!(
                rmq.update(0, -1),
                Err(RmqError::Unsupported {
                    operation: "update",
                    ..
                })
            ));
            assert!(matches!(
                rmq.batch_update(&[(0, -1)]),
                Err(RmqError::Unsupported {
                    operation: "batch_update",
                    ..
                })
            ));
            // the rejected update must not have touched the sequence
            assert_eq!(rmq.query(0, 2).unwrap(), 2);
        }
    }
}

#[test]
fn introspection_surface() {
    for mut rmq in all_strategies() {
        assert!(!rmq.algorithm().name().is_empty());
        let complexity = rmq.complexity();
        assert!(!complexity.query_time.is_empty());
        assert!(!complexity.total_space.is_empty());

        rmq.preprocess(vec![1, 2, 3, 4]).unwrap();
        assert_eq!(rmq.len(), 4);
        assert!(!rmq.is_empty());
        assert!(rmq.heap_size() >= 4 * std::mem::size_of::<i64>());
    }
}
