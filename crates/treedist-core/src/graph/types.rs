use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TreedistError;

/// Node identifier. Nodes carry no payload beyond identity.
pub type NodeId = usize;

/// Outgoing edge stored in the source node's adjacency list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Edge {
    /// Target node
    pub to: NodeId,
    /// Edge weight (ignored by distance computations)
    pub weight: i64,
}

impl Edge {
    pub fn new(to: NodeId, weight: i64) -> Self {
        Self { to, weight }
    }

    pub fn unweighted(to: NodeId) -> Self {
        Self::new(to, 0)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.to, self.weight)
    }
}

/// Aggregation strategy for distance sums
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Breadth-first accumulation over a shared graph, O(V+E) per root
    #[default]
    Bfs,
    /// Depth-first path search per (root, target) pair over a per-root forest
    Dfs,
}

impl FromStr for Strategy {
    type Err = TreedistError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bfs" => Ok(Strategy::Bfs),
            "dfs" => Ok(Strategy::Dfs),
            other => crate::bail_unsupported!("strategy", other, "bfs, dfs"),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Bfs => write!(f, "bfs"),
            Strategy::Dfs => write!(f, "dfs"),
        }
    }
}

/// Outcome of a root-to-target path search
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathResult {
    pub root: NodeId,
    pub target: NodeId,
    pub found: bool,
    /// Nodes from root to target inclusive; only meaningful when `found`
    pub path: Vec<NodeId>,
}

impl PathResult {
    /// Number of hops along the path, or 0 when no path exists
    pub fn distance(&self) -> usize {
        if self.found {
            self.path.len().saturating_sub(1)
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_parse() {
        assert_eq!("BFS".parse::<Strategy>().unwrap(), Strategy::Bfs);
        assert_eq!("dfs".parse::<Strategy>().unwrap(), Strategy::Dfs);
        let err = "dijkstra".parse::<Strategy>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unsupported strategy: dijkstra (supported: bfs, dfs)"
        );
    }

    #[test]
    fn test_path_distance_not_found_is_zero() {
        let result = PathResult {
            root: 0,
            target: 3,
            found: false,
            path: vec![0, 1, 2],
        };
        assert_eq!(result.distance(), 0);
    }

    #[test]
    fn test_path_distance_found() {
        let result = PathResult {
            root: 0,
            target: 2,
            found: true,
            path: vec![0, 1, 2],
        };
        assert_eq!(result.distance(), 2);
    }

    #[test]
    fn test_edge_display() {
        assert_eq!(Edge::new(4, 7).to_string(), "4:7");
    }
}
