//! Path command: depth-first path from root to target

use super::dispatch::CommandContext;
use super::input::{check_node, load_graph};
use crate::cli::InputArgs;
use treedist_core::error::Result;
use treedist_core::format::OutputFormat;
use treedist_core::graph::{find_path, PathResult};

/// Execute the path command
pub fn execute(
    ctx: &CommandContext,
    input_args: &InputArgs,
    root: usize,
    target: usize,
    strict: bool,
) -> Result<()> {
    let strict = ctx.strict(strict);
    let (input, outcome) = load_graph(input_args, strict)?;

    if strict {
        check_node(&input, root)?;
        check_node(&input, target)?;
    }

    let result = find_path(&outcome.graph, root, target);

    match ctx.format() {
        OutputFormat::Human => output_human(&result),
        OutputFormat::Json => output_json(&result)?,
        OutputFormat::Records => output_records(&result),
    }

    Ok(())
}

fn join_path(path: &[usize], separator: &str) -> String {
    path.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(separator)
}

fn output_human(result: &PathResult) {
    if result.found {
        println!(
            "{} (distance {})",
            join_path(&result.path, " -> "),
            result.distance()
        );
    } else {
        println!("no path from {} to {}", result.root, result.target);
    }
}

fn output_json(result: &PathResult) -> Result<()> {
    let path: &[usize] = if result.found { &result.path } else { &[] };
    let output = serde_json::json!({
        "root": result.root,
        "target": result.target,
        "found": result.found,
        "path": path,
        "distance": result.distance(),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn output_records(result: &PathResult) {
    println!(
        "H treedist=1 records=1 mode=path root={} target={} found={} distance={}",
        result.root,
        result.target,
        result.found,
        result.distance()
    );
    if result.found {
        println!("P {}", join_path(&result.path, " "));
    }
}
