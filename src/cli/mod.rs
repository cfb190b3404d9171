//! CLI argument parsing for treedist
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json, --config

pub mod args;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{ComputeArgs, InputArgs};
use parse::parse_format;
use treedist_core::format::OutputFormat;

/// Treedist - tree distance sums and graph traversal
#[derive(Parser, Debug)]
#[command(name = "treedist")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format: human, json, or records (default from config, else human)
    #[arg(long, global = true, value_parser = parse_format)]
    pub format: Option<OutputFormat>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (overrides --verbose)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Configuration file (default: $TREEDIST_CONFIG_DIR/config.toml)
    #[arg(long, global = true, env = "TREEDIST_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sum of distances from every node to all other nodes
    Sum {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        compute: ComputeArgs,
    },

    /// Depth-first path from a root to a target node
    Path {
        /// Start node
        root: usize,

        /// Node to reach
        target: usize,

        #[command(flatten)]
        input: InputArgs,

        /// Reject malformed edges instead of skipping them
        #[arg(long)]
        strict: bool,
    },

    /// Print the adjacency list built from the input
    Show {
        #[command(flatten)]
        input: InputArgs,

        /// Reject malformed edges instead of skipping them
        #[arg(long)]
        strict: bool,
    },

    /// Depth-first visit order and depths from a root
    Visit {
        /// Start node
        root: usize,

        #[command(flatten)]
        input: InputArgs,

        /// Reject malformed edges instead of skipping them
        #[arg(long)]
        strict: bool,
    },

    /// Reflected binary Gray code sequence
    GrayCode {
        /// Bit width (0-32)
        bits: u32,

        /// Also list values up to the sequence maximum that differ from this one in one bit
        #[arg(long)]
        neighbors_of: Option<u64>,
    },

    /// Length of the longest contiguous subarray shared by two lists
    CommonSubarray {
        /// First list, comma separated
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        left: Vec<i64>,

        /// Second list, comma separated
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        right: Vec<i64>,
    },
}
