use std::path::PathBuf;

use super::parse::parse_strategy;
use clap::Args;
use treedist_core::graph::Strategy;

/// Where the node count and edge list come from
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// JSON input file (`{"nodes": N, "edges": [[u, v], ...]}`); `-` reads stdin
    #[arg(long, short, conflicts_with_all = ["nodes", "edges"])]
    pub input: Option<PathBuf>,

    /// Node count for inline input
    #[arg(long, short = 'n')]
    pub nodes: Option<usize>,

    /// Inline edges as `u:v` pairs, comma separated (e.g. `0:1,0:2`)
    #[arg(long, short, requires = "nodes", allow_hyphen_values = true)]
    pub edges: Option<String>,
}

/// Aggregation settings; unset values fall back to the config file
#[derive(Args, Debug, Clone)]
pub struct ComputeArgs {
    /// Aggregation strategy: bfs or dfs
    #[arg(long, short, value_parser = parse_strategy)]
    pub strategy: Option<Strategy>,

    /// Reject malformed edges and disconnected graphs
    #[arg(long)]
    pub strict: bool,
}
