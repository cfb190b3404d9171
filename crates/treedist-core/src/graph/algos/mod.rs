//! Per-root distance aggregation
//!
//! - `bfs`: single breadth-first pass per root over a shared graph
//! - `dfs`: one depth-first path search per (root, target) pair, kept as a
//!   cross-check for the BFS totals

pub mod bfs;
pub mod dfs;

use serde::Serialize;

use super::types::NodeId;

pub use bfs::{bfs_distances, bfs_sum};
pub use dfs::dfs_sum;

/// Distance total for a single root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RootSum {
    pub root: NodeId,
    /// Sum of distances to every reached node
    pub total: u64,
    /// Nodes reached from `root`, excluding `root` itself
    pub reached: usize,
}
