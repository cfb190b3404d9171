//! Visit command: depth-first preorder with depths

use super::dispatch::CommandContext;
use super::input::{check_node, load_graph};
use crate::cli::InputArgs;
use treedist_core::error::Result;
use treedist_core::format::OutputFormat;
use treedist_core::graph::{total_depth, visit_depth_first};

/// Execute the visit command
pub fn execute(ctx: &CommandContext, input_args: &InputArgs, root: usize, strict: bool) -> Result<()> {
    let strict = ctx.strict(strict);
    let (input, outcome) = load_graph(input_args, strict)?;
    if strict {
        check_node(&input, root)?;
    }

    let mut order: Vec<(usize, usize)> = Vec::new();
    visit_depth_first(&outcome.graph, root, |node, depth| order.push((node, depth)));
    let total = total_depth(&outcome.graph, root);

    match ctx.format() {
        OutputFormat::Human => {
            for (node, depth) in &order {
                println!("{}{}", "  ".repeat(*depth), node);
            }
            if !ctx.cli.quiet {
                println!("total depth: {}", total);
            }
        }
        OutputFormat::Json => {
            let visits: Vec<serde_json::Value> = order
                .iter()
                .map(|(node, depth)| serde_json::json!({ "node": node, "depth": depth }))
                .collect();
            let output = serde_json::json!({
                "root": root,
                "visits": visits,
                "total_depth": total,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Records => {
            println!(
                "H treedist=1 records=1 mode=visit root={} visited={} total_depth={}",
                root,
                order.len(),
                total
            );
            for (node, depth) in &order {
                println!("V {} depth={}", node, depth);
            }
        }
    }

    Ok(())
}
