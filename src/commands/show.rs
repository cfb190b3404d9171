//! Show command: adjacency list of the built graph

use super::dispatch::CommandContext;
use super::input::load_graph;
use crate::cli::InputArgs;
use treedist_core::error::Result;
use treedist_core::format::OutputFormat;
use treedist_core::graph::Graph;
use tracing::debug;

/// Execute the show command
pub fn execute(ctx: &CommandContext, input_args: &InputArgs, strict: bool) -> Result<()> {
    let (_, outcome) = load_graph(input_args, ctx.strict(strict))?;
    let graph = &outcome.graph;
    debug!(graph = %graph, "show");

    match ctx.format() {
        OutputFormat::Human => output_human(graph),
        OutputFormat::Json => output_json(graph)?,
        OutputFormat::Records => output_records(graph, outcome.skipped.len()),
    }

    Ok(())
}

fn neighbor_ids(graph: &Graph, id: usize) -> Vec<usize> {
    graph.neighbors(id).iter().map(|e| e.to).collect()
}

fn output_human(graph: &Graph) {
    for id in graph.node_ids() {
        let neighbors = neighbor_ids(graph, id)
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        println!("{}: [{}]", id, neighbors);
    }
}

fn output_json(graph: &Graph) -> Result<()> {
    let nodes: Vec<serde_json::Value> = graph
        .node_ids()
        .map(|id| {
            serde_json::json!({
                "id": id,
                "neighbors": neighbor_ids(graph, id),
            })
        })
        .collect();
    let output = serde_json::json!({
        "node_count": graph.node_count(),
        "edge_count": graph.edge_count(),
        "nodes": nodes,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn output_records(graph: &Graph, skipped: usize) {
    println!(
        "H treedist=1 records=1 mode=show nodes={} edges={} skipped={}",
        graph.node_count(),
        graph.edge_count(),
        skipped
    );
    for id in graph.node_ids() {
        for to in neighbor_ids(graph, id) {
            println!("E {} {}", id, to);
        }
    }
}
