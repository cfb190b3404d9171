//! Undirected graph construction from flat edge lists
//!
//! Every input edge `[u, v]` is wired in both directions. Edges that do not
//! have exactly two endpoints, or that name a node outside `[0, total_nodes)`,
//! are skipped with a warning in permissive mode and rejected in strict mode.

use serde::Serialize;
use tracing::{debug, warn};

use super::adjacency::Graph;
use super::types::NodeId;
use crate::error::{Result, TreedistError};

/// Options controlling how malformed input is treated
#[derive(Debug, Clone, Copy, Default)]
pub struct BuildOptions {
    /// Fail on the first malformed edge instead of skipping it
    pub strict: bool,
}

/// Why an input edge was left out of the graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum SkipReason {
    /// Edge did not have exactly two endpoints
    Arity { arity: usize },
    /// An endpoint was negative or not below the node count
    OutOfRange { node: i64 },
}

/// An input edge that was skipped during permissive construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SkippedEdge {
    /// Position of the edge in the input list
    pub index: usize,
    #[serde(flatten)]
    pub reason: SkipReason,
}

/// A single shared graph plus the edges that were dropped while building it
#[derive(Debug, Clone)]
pub struct BuildOutcome {
    pub graph: Graph,
    pub skipped: Vec<SkippedEdge>,
}

/// One independent graph per root, each a full copy of the same tree
#[derive(Debug, Clone)]
pub struct Forest {
    graphs: Vec<Graph>,
    pub skipped: Vec<SkippedEdge>,
}

impl Forest {
    /// Graph owned by `root`
    pub fn get(&self, root: NodeId) -> Option<&Graph> {
        self.graphs.get(root)
    }

    pub fn len(&self) -> usize {
        self.graphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graphs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Graph)> {
        self.graphs.iter().enumerate()
    }
}

fn to_node(raw: i64, total_nodes: usize) -> Option<NodeId> {
    usize::try_from(raw).ok().filter(|id| *id < total_nodes)
}

fn skip_or_fail(
    index: usize,
    reason: SkipReason,
    total_nodes: usize,
    opts: BuildOptions,
    skipped: &mut Vec<SkippedEdge>,
) -> Result<()> {
    if opts.strict {
        return Err(match reason {
            SkipReason::Arity { arity } => TreedistError::MalformedEdge { index, arity },
            SkipReason::OutOfRange { node } => TreedistError::NodeOutOfRange {
                index,
                node,
                total_nodes,
            },
        });
    }

    match reason {
        SkipReason::Arity { arity } => {
            warn!(index, arity, "invalid edge length, expected 2; skipping");
        }
        SkipReason::OutOfRange { node } => {
            warn!(index, node, total_nodes, "edge endpoint out of range; skipping");
        }
    }
    skipped.push(SkippedEdge { index, reason });
    Ok(())
}

/// Validate raw edges into endpoint pairs, collecting skipped entries
fn validate_edges(
    total_nodes: usize,
    edges: &[Vec<i64>],
    opts: BuildOptions,
) -> Result<(Vec<(NodeId, NodeId)>, Vec<SkippedEdge>)> {
    let mut pairs = Vec::with_capacity(edges.len());
    let mut skipped = Vec::new();

    for (index, edge) in edges.iter().enumerate() {
        let &[u, v] = edge.as_slice() else {
            let reason = SkipReason::Arity { arity: edge.len() };
            skip_or_fail(index, reason, total_nodes, opts, &mut skipped)?;
            continue;
        };

        match (to_node(u, total_nodes), to_node(v, total_nodes)) {
            (Some(from), Some(to)) => pairs.push((from, to)),
            (None, _) => {
                let reason = SkipReason::OutOfRange { node: u };
                skip_or_fail(index, reason, total_nodes, opts, &mut skipped)?;
            }
            (_, None) => {
                let reason = SkipReason::OutOfRange { node: v };
                skip_or_fail(index, reason, total_nodes, opts, &mut skipped)?;
            }
        }
    }

    Ok((pairs, skipped))
}

fn wire(total_nodes: usize, pairs: &[(NodeId, NodeId)]) -> Graph {
    let mut graph = Graph::new();
    for id in 0..total_nodes {
        graph.add_node(id);
    }
    for &(from, to) in pairs {
        graph.add_edge(from, to);
        graph.add_edge(to, from);
    }
    graph
}

/// Build one shared undirected graph over nodes `0..total_nodes`
pub fn build_graph(
    total_nodes: usize,
    edges: &[Vec<i64>],
    opts: BuildOptions,
) -> Result<BuildOutcome> {
    let (pairs, skipped) = validate_edges(total_nodes, edges, opts)?;
    let graph = wire(total_nodes, &pairs);

    debug!(
        nodes = graph.node_count(),
        edges = pairs.len(),
        skipped = skipped.len(),
        "build_graph"
    );

    Ok(BuildOutcome { graph, skipped })
}

/// Build `total_nodes` independent copies of the undirected graph, one per root
pub fn build_forest(total_nodes: usize, edges: &[Vec<i64>], opts: BuildOptions) -> Result<Forest> {
    let (pairs, skipped) = validate_edges(total_nodes, edges, opts)?;
    let graphs: Vec<Graph> = (0..total_nodes).map(|_| wire(total_nodes, &pairs)).collect();

    debug!(
        trees = graphs.len(),
        edges = pairs.len(),
        skipped = skipped.len(),
        "build_forest"
    );

    Ok(Forest { graphs, skipped })
}
