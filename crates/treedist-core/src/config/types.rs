//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::format::OutputFormat;
use crate::graph::Strategy;

/// Distance computation configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistanceConfig {
    /// Fail fast on malformed edges and disconnected graphs
    #[serde(default)]
    pub strict_mode: bool,

    /// Aggregation strategy
    #[serde(default)]
    pub strategy: Strategy,

    /// Output defaults
    #[serde(default)]
    pub output: OutputConfig,
}

/// Output configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Format used when `--format` is not given
    #[serde(default)]
    pub format: OutputFormat,
}
