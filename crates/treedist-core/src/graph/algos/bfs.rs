use std::collections::VecDeque;

use tracing::trace;

use super::RootSum;
use crate::graph::traversal::GraphProvider;
use crate::graph::types::NodeId;

/// Hop distance from `root` to every node, indexed by node id.
///
/// Entries for nodes the search never reaches are `None`. A root at or past
/// `id_bound()` is isolated and gets no slot of its own.
pub fn bfs_distances(provider: &dyn GraphProvider, root: NodeId) -> Vec<Option<u64>> {
    let mut distances: Vec<Option<u64>> = vec![None; provider.id_bound()];
    let mut queue: VecDeque<NodeId> = VecDeque::new();

    let Some(root_slot) = distances.get_mut(root) else {
        trace!(root, "root outside graph");
        return distances;
    };
    *root_slot = Some(0);
    queue.push_back(root);

    while let Some(current) = queue.pop_front() {
        let Some(current_distance) = distances[current] else {
            continue;
        };
        for edge in provider.neighbors(current) {
            // Targets that were never registered carry no distance slot
            let Some(slot) = distances.get_mut(edge.to) else {
                continue;
            };
            if slot.is_none() {
                *slot = Some(current_distance + 1);
                queue.push_back(edge.to);
            }
        }
    }

    distances
}

/// Sum of BFS distances from `root`; unreached nodes contribute nothing
pub fn bfs_sum(provider: &dyn GraphProvider, root: NodeId) -> RootSum {
    let distances = bfs_distances(provider, root);
    let (total, reached) = distances
        .iter()
        .enumerate()
        .filter(|(id, _)| *id != root)
        .filter_map(|(_, d)| *d)
        .fold((0u64, 0usize), |(total, reached), d| (total + d, reached + 1));

    trace!(root, total, reached, "bfs_sum");
    RootSum {
        root,
        total,
        reached,
    }
}
