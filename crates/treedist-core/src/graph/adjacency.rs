//! Adjacency-list graph
//!
//! Nodes map to an ordered list of outgoing edges. Operations on unregistered
//! nodes never fail: queries return empty/false instead.

use std::collections::BTreeMap;
use std::fmt;

use super::types::{Edge, NodeId};

/// Directed adjacency-list graph with at most one edge per ordered pair
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    vertices: BTreeMap<NodeId, Vec<Edge>>,
    has_weight: bool,
}

impl Graph {
    /// Create an unweighted graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a graph whose rendering includes edge weights
    pub fn weighted() -> Self {
        Self {
            vertices: BTreeMap::new(),
            has_weight: true,
        }
    }

    pub fn is_weighted(&self) -> bool {
        self.has_weight
    }

    /// Register a node with an empty edge list. Idempotent.
    pub fn add_node(&mut self, id: NodeId) {
        self.vertices.entry(id).or_default();
    }

    /// Add an unweighted edge `from -> to`
    pub fn add_edge(&mut self, from: NodeId, to: NodeId) -> bool {
        self.add_weighted_edge(from, to, 0)
    }

    /// Add an edge `from -> to`, registering `from` if needed.
    ///
    /// Only `from`'s list is touched; undirected callers add the reverse edge
    /// themselves. Returns `false` when the edge already existed.
    pub fn add_weighted_edge(&mut self, from: NodeId, to: NodeId, weight: i64) -> bool {
        let edges = self.vertices.entry(from).or_default();
        if edges.iter().any(|e| e.to == to) {
            return false;
        }
        edges.push(Edge::new(to, weight));
        true
    }

    /// O(out-degree of `from`)
    pub fn has_edge(&self, from: NodeId, to: NodeId) -> bool {
        self.neighbors(from).iter().any(|e| e.to == to)
    }

    /// True iff an edge `parent -> child` exists
    pub fn is_child(&self, child: NodeId, parent: NodeId) -> bool {
        self.has_edge(parent, child)
    }

    /// Outgoing edges of `id`, empty when unregistered
    pub fn neighbors(&self, id: NodeId) -> &[Edge] {
        self.vertices.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.vertices.contains_key(&id)
    }

    pub fn node_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of stored directed edges
    pub fn edge_count(&self) -> usize {
        self.vertices.values().map(Vec::len).sum()
    }

    /// Registered node ids in ascending order
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.vertices.keys().copied()
    }

    /// One past the largest registered id; sizes index-based traversal state
    pub fn id_bound(&self) -> usize {
        self.vertices
            .last_key_value()
            .map(|(id, _)| id.saturating_add(1))
            .unwrap_or(0)
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (id, edges) in &self.vertices {
            write!(f, "{id}: [")?;
            for edge in edges {
                if self.has_weight {
                    write!(f, "{edge} ")?;
                } else {
                    write!(f, "{} ", edge.to)?;
                }
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_node_idempotent() {
        let mut graph = Graph::new();
        graph.add_node(3);
        graph.add_edge(3, 1);
        graph.add_node(3);
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.neighbors(3), &[Edge::unweighted(1)]);
    }

    #[test]
    fn test_add_edge_suppresses_duplicates() {
        let mut graph = Graph::new();
        assert!(graph.add_edge(0, 1));
        assert!(!graph.add_edge(0, 1));
        assert!(!graph.add_weighted_edge(0, 1, 5));
        assert_eq!(graph.neighbors(0).len(), 1);
        assert_eq!(graph.neighbors(0)[0].weight, 0);
    }

    #[test]
    fn test_add_edge_is_directed() {
        let mut graph = Graph::new();
        graph.add_node(0);
        graph.add_node(1);
        graph.add_edge(0, 1);
        assert!(graph.has_edge(0, 1));
        assert!(!graph.has_edge(1, 0));
        assert!(graph.is_child(1, 0));
        assert!(!graph.is_child(0, 1));
    }

    #[test]
    fn test_add_edge_auto_registers_source_only() {
        let mut graph = Graph::new();
        graph.add_edge(2, 7);
        assert!(graph.contains(2));
        assert!(!graph.contains(7));
    }

    #[test]
    fn test_unregistered_queries_are_empty() {
        let graph = Graph::new();
        assert!(graph.neighbors(42).is_empty());
        assert!(!graph.has_edge(42, 0));
        assert!(!graph.is_child(0, 42));
        assert_eq!(graph.id_bound(), 0);
    }

    #[test]
    fn test_edge_order_is_insertion_order() {
        let mut graph = Graph::new();
        graph.add_edge(0, 5);
        graph.add_edge(0, 2);
        graph.add_edge(0, 9);
        let targets: Vec<NodeId> = graph.neighbors(0).iter().map(|e| e.to).collect();
        assert_eq!(targets, vec![5, 2, 9]);
    }

    #[test]
    fn test_counts_and_bound() {
        let mut graph = Graph::new();
        for id in 0..4 {
            graph.add_node(id);
        }
        graph.add_edge(0, 1);
        graph.add_edge(1, 0);
        graph.add_edge(3, 2);
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.id_bound(), 4);
        assert_eq!(graph.node_ids().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_display_unweighted() {
        let mut graph = Graph::new();
        graph.add_node(1);
        graph.add_edge(0, 1);
        graph.add_edge(0, 2);
        assert_eq!(graph.to_string(), "0: [1 2 ]1: []");
    }

    #[test]
    fn test_display_weighted() {
        let mut graph = Graph::weighted();
        graph.add_weighted_edge(0, 1, 4);
        assert!(graph.is_weighted());
        assert_eq!(graph.to_string(), "0: [1:4 ]");
    }
}
