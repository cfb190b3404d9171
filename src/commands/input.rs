//! Loading node/edge input for graph commands

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use crate::cli::InputArgs;
use treedist_core::error::{Result, TreedistError};
use treedist_core::graph::builder::{build_graph, BuildOptions, BuildOutcome};
use treedist_core::TreeInput;

fn read_stdin() -> Result<String> {
    let mut content = String::new();
    io::stdin().read_to_string(&mut content)?;
    Ok(content)
}

fn read_file(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(TreedistError::not_found("input file", path.display()));
    }
    Ok(fs::read_to_string(path)?)
}

/// Resolve input from `--input`, inline `--nodes/--edges`, or stdin
pub fn load_input(args: &InputArgs) -> Result<TreeInput> {
    if let Some(nodes) = args.nodes {
        return TreeInput::from_inline(nodes, args.edges.as_deref().unwrap_or(""));
    }

    let content = match &args.input {
        Some(path) if path.as_os_str() == "-" => read_stdin()?,
        Some(path) => read_file(path)?,
        None => read_stdin()?,
    };

    if content.trim().is_empty() {
        treedist_core::bail_usage!("no input: pass --input, --nodes/--edges, or JSON on stdin");
    }

    TreeInput::from_json(&content)
}

/// Load input and build the shared undirected graph
pub fn load_graph(args: &InputArgs, strict: bool) -> Result<(TreeInput, BuildOutcome)> {
    let input = load_input(args)?;
    let outcome = build_graph(input.nodes, &input.edges, BuildOptions { strict })?;
    Ok((input, outcome))
}

/// Reject a node id outside the input's range
pub fn check_node(input: &TreeInput, id: usize) -> Result<()> {
    if id >= input.nodes {
        return Err(TreedistError::not_found("node", id));
    }
    Ok(())
}
