//! Depth-first visitation with a caller-supplied callback

use std::collections::HashSet;

use super::traversal::GraphProvider;
use super::types::NodeId;

/// Visit every node reachable from `root` once, in depth-first preorder.
///
/// `visit` receives each node with its depth below `root`. Neighbors are
/// explored in adjacency order.
pub fn visit_depth_first<F>(provider: &dyn GraphProvider, root: NodeId, mut visit: F)
where
    F: FnMut(NodeId, usize),
{
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut stack: Vec<(NodeId, usize)> = vec![(root, 0)];

    while let Some((node, depth)) = stack.pop() {
        if !visited.insert(node) {
            continue;
        }
        visit(node, depth);

        for edge in provider.neighbors(node).iter().rev() {
            if !visited.contains(&edge.to) {
                stack.push((edge.to, depth + 1));
            }
        }
    }
}

/// Sum of depths of all nodes reachable from `root`.
///
/// On a tree this equals the sum of distances from `root` to every node.
pub fn total_depth(provider: &dyn GraphProvider, root: NodeId) -> u64 {
    let mut total = 0u64;
    visit_depth_first(provider, root, |_, depth| total += depth as u64);
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::builder::{build_graph, BuildOptions};
    use crate::graph::Graph;

    fn sample() -> Graph {
        let edges: Vec<Vec<i64>> = [[0, 1], [0, 2], [2, 3], [2, 4], [2, 5]]
            .iter()
            .map(|e| e.to_vec())
            .collect();
        build_graph(6, &edges, BuildOptions::default()).unwrap().graph
    }

    #[test]
    fn test_preorder_with_depths() {
        let graph = sample();
        let mut seen = Vec::new();
        visit_depth_first(&graph, 0, |node, depth| seen.push((node, depth)));
        assert_eq!(
            seen,
            vec![(0, 0), (1, 1), (2, 1), (3, 2), (4, 2), (5, 2)]
        );
    }

    #[test]
    fn test_visit_from_leaf() {
        let graph = sample();
        let mut seen = Vec::new();
        visit_depth_first(&graph, 4, |node, depth| seen.push((node, depth)));
        assert_eq!(
            seen,
            vec![(4, 0), (2, 1), (0, 2), (1, 3), (3, 2), (5, 2)]
        );
    }

    #[test]
    fn test_total_depth_matches_distance_sums() {
        let graph = sample();
        let totals: Vec<u64> = (0..6).map(|root| total_depth(&graph, root)).collect();
        assert_eq!(totals, vec![8, 12, 6, 10, 10, 10]);
    }

    #[test]
    fn test_visit_terminates_on_cycle() {
        let mut graph = Graph::new();
        for (a, b) in [(0, 1), (1, 2), (2, 0)] {
            graph.add_edge(a, b);
            graph.add_edge(b, a);
        }
        let mut count = 0;
        visit_depth_first(&graph, 0, |_, _| count += 1);
        assert_eq!(count, 3);
    }

    #[test]
    fn test_visit_isolated_root() {
        let graph = Graph::new();
        let mut seen = Vec::new();
        visit_depth_first(&graph, 7, |node, depth| seen.push((node, depth)));
        assert_eq!(seen, vec![(7, 0)]);
    }
}
