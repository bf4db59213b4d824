#![warn(missing_docs)]

//! This crate provides range minimum query (RMQ) structures: given a sequence of
//! comparable values, they report the minimum value and its first position within an
//! arbitrary inclusive sub-range. Five interchangeable strategies cover different
//! preprocessing/query/update trade-offs, all behind the common
//! [`RangeMinimum`][rmq::RangeMinimum] trait:
//!
//! - [`NaiveRmq`][rmq::naive::NaiveRmq]: linear scan, no preprocessing, O(1) updates.
//! - [`DpRmq`][rmq::dp::DpRmq]: full O(n²) table, O(1) queries, small inputs only.
//! - [`SparseRmq`][rmq::sparse::SparseRmq]: binary-lifting windows, O(1) queries.
//! - [`BlockRmq`][rmq::block::BlockRmq]: sqrt-decomposition, O(√n) queries and
//!   point/batch updates that re-derive only the affected block aggregates.
//! - [`CartesianRmq`][rmq::cartesian::CartesianRmq]: Cartesian tree plus
//!   binary-lifting LCA, O(log n) queries.
//!
//! The [select] module recommends a strategy from a workload description.
//!
//! # Lifecycle and failure behavior
//! A strategy instance is constructed empty (optionally with an
//! [`RmqConfig`][config::RmqConfig]), fed a sequence once via `preprocess`, and then
//! queried arbitrarily often. All operations run synchronously on the caller's
//! thread. Validation failures never mutate state, and a failed preprocess resets
//! the instance so it is indistinguishable from a freshly constructed one; see
//! [`RmqError`][error::RmqError] for the error taxonomy. Memory ceilings are checked
//! against the expected structure size before allocation.
//!
//! # Serialization
//! With the `serde` feature enabled, all strategies and their precomputed
//! structures implement `Serialize` and `Deserialize`.

pub use crate::config::RmqConfig;
pub use crate::error::RmqError;
pub use crate::rmq::block::BlockRmq;
pub use crate::rmq::cartesian::CartesianRmq;
pub use crate::rmq::dp::DpRmq;
pub use crate::rmq::naive::NaiveRmq;
pub use crate::rmq::sparse::SparseRmq;
pub use crate::rmq::{Algorithm, ComplexityInfo, QueryResult, RangeMinimum, MAX_SEQUENCE_LEN};
pub use crate::select::{select_algorithm, OptimizationGoal, Workload};

pub mod config;
pub mod error;
pub mod rmq;
pub mod select;
