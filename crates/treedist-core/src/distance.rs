//! Sum of distances from every node to all other nodes
//!
//! Input is a node count and a flat list of undirected edges; output holds
//! one total per node id. Permissive mode tolerates malformed edges and
//! disconnected input (unreachable nodes add nothing to a total). Strict mode
//! rejects both.

use std::time::Instant;

use serde::Serialize;
use tracing::{debug, warn};

use crate::config::DistanceConfig;
use crate::error::{Result, TreedistError};
use crate::graph::algos::{bfs_sum, dfs_sum, RootSum};
use crate::graph::builder::{build_forest, build_graph, BuildOptions, SkippedEdge};
use crate::graph::{Graph, Strategy};
use crate::trace_time;

/// Options for a distance computation
#[derive(Debug, Clone, Copy, Default)]
pub struct DistanceOptions {
    pub strategy: Strategy,
    /// Reject malformed edges and disconnected graphs
    pub strict: bool,
}

impl From<&DistanceConfig> for DistanceOptions {
    fn from(config: &DistanceConfig) -> Self {
        Self {
            strategy: config.strategy,
            strict: config.strict_mode,
        }
    }
}

/// Result of a distance computation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistanceReport {
    pub strategy: Strategy,
    /// `sums[i]` is the total distance from node `i` to every other node
    pub sums: Vec<u64>,
    /// Input edges left out of the graph
    pub skipped_edges: Vec<SkippedEdge>,
    /// Ordered (root, target) pairs with no connecting path
    pub unreachable_pairs: usize,
}

/// Per-node distance sums using BFS in permissive mode.
///
/// Malformed edges are skipped and unreachable nodes contribute 0.
pub fn sum_distances(total_nodes: usize, edges: &[Vec<i64>]) -> Vec<u64> {
    match compute(total_nodes, edges, &DistanceOptions::default()) {
        Ok(report) => report.sums,
        Err(e) => {
            warn!(error = %e, nodes = total_nodes, "permissive distance computation failed");
            vec![0; total_nodes]
        }
    }
}

/// Per-node distance sums with an explicit strategy and strictness
pub fn compute(
    total_nodes: usize,
    edges: &[Vec<i64>],
    opts: &DistanceOptions,
) -> Result<DistanceReport> {
    let start = Instant::now();
    let build_opts = BuildOptions {
        strict: opts.strict,
    };

    let (per_root, skipped_edges) = match opts.strategy {
        Strategy::Bfs => {
            let outcome = build_graph(total_nodes, edges, build_opts)?;
            if opts.strict {
                ensure_connected(&outcome.graph, total_nodes)?;
            }
            let sums: Vec<RootSum> = (0..total_nodes)
                .map(|root| bfs_sum(&outcome.graph, root))
                .collect();
            (sums, outcome.skipped)
        }
        Strategy::Dfs => {
            let forest = build_forest(total_nodes, edges, build_opts)?;
            if opts.strict {
                if let Some(graph) = forest.get(0) {
                    ensure_connected(graph, total_nodes)?;
                }
            }
            let sums: Vec<RootSum> = forest.iter().map(|(root, tree)| dfs_sum(tree, root)).collect();
            (sums, forest.skipped)
        }
    };

    let others = total_nodes.saturating_sub(1);
    let unreachable_pairs: usize = per_root.iter().map(|s| others - s.reached).sum();
    let sums: Vec<u64> = per_root.iter().map(|s| s.total).collect();

    debug!(
        nodes = total_nodes,
        strategy = %opts.strategy,
        skipped = skipped_edges.len(),
        unreachable_pairs,
        "compute_distances"
    );
    trace_time!(start, "compute_distances");

    Ok(DistanceReport {
        strategy: opts.strategy,
        sums,
        skipped_edges,
        unreachable_pairs,
    })
}

/// Fail unless every node is reachable from node 0
fn ensure_connected(graph: &Graph, total_nodes: usize) -> Result<()> {
    if total_nodes == 0 {
        return Ok(());
    }
    let reach = bfs_sum(graph, 0);
    let unreachable = total_nodes - 1 - reach.reached;
    if unreachable > 0 {
        return Err(TreedistError::Disconnected {
            root: 0,
            unreachable,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests;
