//! Tree input documents
//!
//! JSON form: `{"nodes": 6, "edges": [[0, 1], [0, 2]]}`.
//! Inline form: a node count plus `"0:1,0:2"`, pairs separated by commas
//! and endpoints by colons.
//!
//! Edges are kept as raw integer lists so that malformed entries reach the
//! builder, which decides whether to skip or reject them.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TreedistError};

/// Node count plus raw edge list, as received from a caller
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeInput {
    pub nodes: usize,
    #[serde(default)]
    pub edges: Vec<Vec<i64>>,
}

impl TreeInput {
    pub fn new(nodes: usize, edges: Vec<Vec<i64>>) -> Self {
        Self { nodes, edges }
    }

    /// Decode a JSON document
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Build from a node count and an inline edge list
    pub fn from_inline(nodes: usize, edges: &str) -> Result<Self> {
        Ok(Self::new(nodes, parse_edge_list(edges)?))
    }
}

/// Parse `"0:1,1:2"` into raw edges. Empty input yields no edges.
pub fn parse_edge_list(list: &str) -> Result<Vec<Vec<i64>>> {
    list.split(',')
        .map(str::trim)
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            pair.split(':')
                .map(|endpoint| {
                    endpoint.trim().parse::<i64>().map_err(|_| {
                        TreedistError::invalid_input(format!(
                            "edge '{}' has non-integer endpoint '{}'",
                            pair, endpoint
                        ))
                    })
                })
                .collect()
        })
        .collect()
}
