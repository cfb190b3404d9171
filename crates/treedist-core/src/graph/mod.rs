//! Graph construction and traversal
//!
//! Provides the building blocks for per-node distance aggregation:
//! - `adjacency`: ordered adjacency-list graph
//! - `builder`: undirected graph (or per-root forest) construction from edge lists
//! - `path`: depth-first root-to-target path finding
//! - `visit`: depth-first visitation with a callback
//! - `algos`: BFS and DFS-path distance sums
//! - `traversal`: read-only provider trait the algorithms run against

pub mod adjacency;
pub mod algos;
pub mod builder;
pub mod path;
pub mod traversal;
pub mod types;
pub mod visit;

pub use adjacency::Graph;
pub use algos::{bfs_sum, dfs_sum, RootSum};
pub use builder::{build_forest, build_graph, BuildOptions, BuildOutcome, Forest, SkippedEdge};
pub use path::find_path;
pub use traversal::GraphProvider;
pub use types::{Edge, NodeId, PathResult, Strategy};
pub use visit::{total_depth, visit_depth_first};
