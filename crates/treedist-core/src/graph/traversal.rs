use super::adjacency::Graph;
use super::types::{Edge, NodeId};

/// Read-only adjacency view that traversal algorithms run against
pub trait GraphProvider {
    fn neighbors(&self, id: NodeId) -> &[Edge];
    fn is_child(&self, child: NodeId, parent: NodeId) -> bool;
    fn node_ids(&self) -> Vec<NodeId>;
    fn id_bound(&self) -> usize;
}

impl GraphProvider for Graph {
    fn neighbors(&self, id: NodeId) -> &[Edge] {
        Graph::neighbors(self, id)
    }

    fn is_child(&self, child: NodeId, parent: NodeId) -> bool {
        Graph::is_child(self, child, parent)
    }

    fn node_ids(&self) -> Vec<NodeId> {
        Graph::node_ids(self).collect()
    }

    fn id_bound(&self) -> usize {
        Graph::id_bound(self)
    }
}
