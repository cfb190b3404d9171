use tracing::trace;

use super::RootSum;
use crate::graph::path::find_path;
use crate::graph::traversal::GraphProvider;
use crate::graph::types::NodeId;

/// Sum of path lengths from `root` to every other registered node.
///
/// Each target runs its own depth-first search; targets without a path
/// contribute 0. On trees this agrees with [`super::bfs_sum`]. On graphs with
/// cycles the depth-first path need not be the shortest one.
pub fn dfs_sum(provider: &dyn GraphProvider, root: NodeId) -> RootSum {
    let mut total = 0u64;
    let mut reached = 0usize;

    for target in provider.node_ids() {
        if target == root {
            continue;
        }
        let result = find_path(provider, root, target);
        if result.found {
            reached += 1;
        }
        trace!(root, target, distance = result.distance(), "dfs_distance");
        total += result.distance() as u64;
    }

    RootSum {
        root,
        total,
        reached,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::algos::bfs_sum;
    use crate::graph::builder::{build_graph, BuildOptions};
    use crate::graph::Graph;

    fn graph(n: usize, raw: &[[i64; 2]]) -> Graph {
        let edges: Vec<Vec<i64>> = raw.iter().map(|e| e.to_vec()).collect();
        build_graph(n, &edges, BuildOptions::default()).unwrap().graph
    }

    #[test]
    fn test_dfs_sum_sample_tree() {
        let g = graph(6, &[[0, 1], [0, 2], [2, 3], [2, 4], [2, 5]]);
        let totals: Vec<u64> = (0..6).map(|root| dfs_sum(&g, root).total).collect();
        assert_eq!(totals, vec![8, 12, 6, 10, 10, 10]);
    }

    #[test]
    fn test_dfs_matches_bfs_on_star_and_chain() {
        let star = graph(5, &[[0, 1], [0, 2], [0, 3], [0, 4]]);
        let chain = graph(5, &[[0, 1], [1, 2], [2, 3], [3, 4]]);
        for g in [&star, &chain] {
            for root in 0..5 {
                assert_eq!(dfs_sum(g, root), bfs_sum(g, root));
            }
        }
    }

    #[test]
    fn test_dfs_unreachable_contributes_zero() {
        let g = graph(4, &[[0, 1], [2, 3]]);
        let sum = dfs_sum(&g, 0);
        assert_eq!(sum.total, 1);
        assert_eq!(sum.reached, 1);
    }

    #[test]
    fn test_dfs_terminates_on_cycle() {
        let g = graph(3, &[[0, 1], [1, 2], [2, 0]]);
        let sum = dfs_sum(&g, 0);
        assert_eq!(sum.reached, 2);
    }

    #[test]
    fn test_dfs_empty_graph() {
        let g = Graph::new();
        assert_eq!(dfs_sum(&g, 0).total, 0);
    }
}
