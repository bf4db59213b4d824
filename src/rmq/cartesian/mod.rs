//! Cartesian tree with binary-lifting LCA. The tree is a min-heap by value whose
//! in-order traversal reproduces the input sequence, so the minimum of `[left,
//! right]` sits exactly at the lowest common ancestor of the nodes for positions
//! `left` and `right`. Preprocessing builds the tree in O(n) amortized time with a
//! monotonic stack and then fills a 2^k-ancestor table; queries resolve the LCA in
//! O(log n) jumps.

use std::mem::size_of;

use crate::config::RmqConfig;
use crate::error::RmqError;
use crate::rmq::{
    ensure_preprocessed, timed, validate_data, validate_query, Algorithm, ComplexityInfo,
    QueryResult, RangeMinimum,
};

/// Sentinel for an absent node link (no child, no parent, no ancestor).
const NIL: u32 = u32::MAX;

/// One node of the Cartesian tree. All links are indices into the flat node arena;
/// node i corresponds to sequence position i, so the arena doubles as the
/// index-to-node map and stays relocation-safe without reference cycles.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
struct Node {
    value: i64,
    left: u32,
    right: u32,
    parent: u32,
    depth: u32,
}

/// Range minimum queries via lowest common ancestors on a Cartesian tree.
///
/// The ancestor table is stored as a flat row-major array with one row of
/// `max_log` entries per node, where `ancestors[node][k]` is the 2^k-th ancestor
/// (or the sentinel beyond the root). Updates are not supported since an element change
/// can restructure the whole tree.
///
/// # Example
/// ```rust
/// use rangemin::{CartesianRmq, RangeMinimum};
///
/// let mut rmq = CartesianRmq::new();
/// rmq.preprocess(vec![3, 1, 4, 1, 5]).unwrap();
///
/// assert_eq!(rmq.query(0, 4).unwrap(), 1);
/// assert_eq!(rmq.query_detailed(0, 4).unwrap().index, 1);
/// assert_eq!(rmq.query(2, 4).unwrap(), 1);
/// ```
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CartesianRmq {
    data: Vec<i64>,

    nodes: Vec<Node>,
    root: u32,

    // flat row-major [node * max_log + k]
    ancestors: Vec<u32>,
    max_log: usize,

    preprocessed: bool,
    config: RmqConfig,
}

impl Default for CartesianRmq {
    fn default() -> Self {
        Self::new()
    }
}

impl CartesianRmq {
    /// Creates an empty instance with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(RmqConfig::default())
    }

    /// Creates an empty instance with the given configuration.
    #[must_use]
    pub fn with_config(config: RmqConfig) -> Self {
        Self {
            data: Vec::new(),
            nodes: Vec::new(),
            root: NIL,
            ancestors: Vec::new(),
            max_log: 0,
            preprocessed: false,
            config,
        }
    }

    /// Returns the configuration this instance was constructed with.
    #[must_use]
    pub fn config(&self) -> &RmqConfig {
        &self.config
    }

    /// Returns the number of nodes in the Cartesian tree (one per sequence
    /// element), or 0 before preprocessing.
    #[must_use]
    pub fn tree_size(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the maximum node depth of the Cartesian tree, or 0 before
    /// preprocessing.
    #[must_use]
    pub fn tree_depth(&self) -> usize {
        self.nodes.iter().map(|node| node.depth as usize).max().unwrap_or(0)
    }

    /// Checks the structural invariants of the tree: exactly one parentless root,
    /// consistent parent/child links, and the min-heap property (no child smaller
    /// than its parent). Intended for diagnostics.
    #[must_use]
    pub fn verify_tree(&self) -> bool {
        if self.nodes.is_empty() || self.root == NIL {
            return false;
        }

        let roots = self.nodes.iter().filter(|node| node.parent == NIL).count();
        if roots != 1 {
            return false;
        }

        for (i, node) in self.nodes.iter().enumerate() {
            for child in [node.left, node.right] {
                if child == NIL {
                    continue;
                }
                let Some(child_node) = self.nodes.get(child as usize) else {
                    return false;
                };
                if child_node.parent != i as u32 || child_node.value < node.value {
                    return false;
                }
            }
        }
        true
    }

    /// Builds the tree in a single left-to-right pass. The stack holds the current
    /// rightmost path; each new node pops all strictly greater entries, adopts the
    /// last popped one as its left child and hangs itself below the surviving top.
    fn build_tree(&mut self) {
        let n = self.data.len();
        self.nodes = self
            .data
            .iter()
            .map(|&value| Node {
                value,
                left: NIL,
                right: NIL,
                parent: NIL,
                depth: 0,
            })
            .collect();

        let mut rightmost_path: Vec<u32> = Vec::new();
        for i in 0..n as u32 {
            let mut last_popped = NIL;
            while let Some(&top) = rightmost_path.last() {
                if self.nodes[top as usize].value > self.nodes[i as usize].value {
                    last_popped = top;
                    rightmost_path.pop();
                } else {
                    break;
                }
            }

            if let Some(&top) = rightmost_path.last() {
                self.nodes[top as usize].right = i;
                self.nodes[i as usize].parent = top;
            }
            if last_popped != NIL {
                self.nodes[i as usize].left = last_popped;
                self.nodes[last_popped as usize].parent = i;
            }

            rightmost_path.push(i);
        }

        // the bottom of the surviving rightmost path is the unique parentless root
        self.root = rightmost_path[0];
        debug_assert_eq!(self.nodes[self.root as usize].parent, NIL);

        self.compute_depths();
    }

    /// Assigns depths by an explicit-stack traversal from the root, keeping the
    /// build free of recursion regardless of how degenerate the tree is.
    fn compute_depths(&mut self) {
        let mut pending = vec![(self.root, 0u32)];
        while let Some((node, depth)) = pending.pop() {
            self.nodes[node as usize].depth = depth;
            let Node { left, right, .. } = self.nodes[node as usize];
            if left != NIL {
                pending.push((left, depth + 1));
            }
            if right != NIL {
                pending.push((right, depth + 1));
            }
        }
    }

    /// Fills the binary-lifting table bottom-up from the immediate parents.
    fn build_lca(&mut self) {
        let n = self.nodes.len();

        self.max_log = 0;
        while (1usize << self.max_log) < n {
            self.max_log += 1;
        }
        self.max_log += 1;

        self.ancestors = vec![NIL; n * self.max_log];
        for i in 0..n {
            self.ancestors[i * self.max_log] = self.nodes[i].parent;
        }
        for k in 1..self.max_log {
            for i in 0..n {
                let halfway = self.ancestors[i * self.max_log + (k - 1)];
                if halfway != NIL {
                    self.ancestors[i * self.max_log + k] =
                        self.ancestors[halfway as usize * self.max_log + (k - 1)];
                }
            }
        }
    }

    /// Returns the k-th ancestor of `node`, or [`NIL`] if the walk leaves the tree.
    fn ancestor_at(&self, mut node: u32, mut k: usize) -> u32 {
        let mut level = 0;
        while k > 0 && node != NIL {
            if k & 1 == 1 {
                node = self.ancestors[node as usize * self.max_log + level];
            }
            k >>= 1;
            level += 1;
        }
        node
    }

    /// Lowest common ancestor by binary lifting: equalize depths, then descend the
    /// lifting levels while the ancestors still differ; the shared parent one level
    /// below is the LCA.
    fn lca(&self, mut u: u32, mut v: u32) -> u32 {
        if self.nodes[u as usize].depth < self.nodes[v as usize].depth {
            std::mem::swap(&mut u, &mut v);
        }

        let depth_diff = self.nodes[u as usize].depth - self.nodes[v as usize].depth;
        u = self.ancestor_at(u, depth_diff as usize);
        if u == v {
            return u;
        }
        if u == NIL {
            return NIL;
        }

        for k in (0..self.max_log).rev() {
            let up = self.ancestors[u as usize * self.max_log + k];
            let vp = self.ancestors[v as usize * self.max_log + k];
            if up != vp {
                u = up;
                v = vp;
            }
        }

        self.ancestors[u as usize * self.max_log]
    }

    /// Maps the range bounds to their tree nodes (identity mapping, one node per
    /// position) and reads value and position off their LCA.
    fn lookup(&self, left: usize, right: usize) -> Result<(i64, usize), RmqError> {
        let lca = self.lca(left as u32, right as u32);
        if lca == NIL {
            // the tree is connected, so two valid nodes always share an ancestor
            return Err(RmqError::AlgorithmFailure {
                algorithm: self.algorithm(),
                reason: "LCA resolution produced no common ancestor",
            });
        }
        Ok((self.nodes[lca as usize].value, lca as usize))
    }
}

impl RangeMinimum for CartesianRmq {
    fn preprocess(&mut self, data: Vec<i64>) -> Result<(), RmqError> {
        validate_data(&data)?;
        self.clear();
        self.data = data;
        self.build_tree();
        self.build_lca();
        self.preprocessed = true;
        Ok(())
    }

    fn query(&self, left: usize, right: usize) -> Result<i64, RmqError> {
        ensure_preprocessed(self.preprocessed, self.algorithm())?;
        validate_query(left, right, self.data.len())?;
        Ok(self.lookup(left, right)?.0)
    }

    fn query_detailed(&self, left: usize, right: usize) -> Result<QueryResult, RmqError> {
        ensure_preprocessed(self.preprocessed, self.algorithm())?;
        validate_query(left, right, self.data.len())?;
        let (result, query_time) = timed(|| self.lookup(left, right));
        let (value, index) = result?;
        Ok(QueryResult {
            value,
            index,
            query_time,
        })
    }

    fn clear(&mut self) {
        self.data = Vec::new();
        self.nodes = Vec::new();
        self.ancestors = Vec::new();
        self.root = NIL;
        self.max_log = 0;
        self.preprocessed = false;
    }

    fn algorithm(&self) -> Algorithm {
        Algorithm::CartesianLca
    }

    fn complexity(&self) -> ComplexityInfo {
        ComplexityInfo {
            preprocessing_time: "O(n log n)",
            preprocessing_space: "O(n log n)",
            query_time: "O(log n)",
            query_space: "O(1)",
            total_space: "O(n log n)",
        }
    }

    fn heap_size(&self) -> usize {
        self.data.len() * size_of::<i64>()
            + self.nodes.len() * size_of::<Node>()
            + self.ancestors.len() * size_of::<u32>()
    }

    fn is_preprocessed(&self) -> bool {
        self.preprocessed
    }

    fn len(&self) -> usize {
        self.data.len()
    }
}
