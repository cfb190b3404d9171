//! Sum command: per-node distance totals

use super::dispatch::CommandContext;
use super::input::load_input;
use crate::cli::{ComputeArgs, InputArgs};
use treedist_core::distance::{compute, DistanceOptions, DistanceReport};
use treedist_core::error::Result;
use treedist_core::format::OutputFormat;
use treedist_core::graph::builder::SkipReason;
use treedist_core::trace_time;

/// Execute the sum command
pub fn execute(ctx: &CommandContext, input_args: &InputArgs, args: &ComputeArgs) -> Result<()> {
    let input = load_input(input_args)?;
    trace_time!(ctx.start, "load_input", nodes = input.nodes);

    let mut opts = DistanceOptions::from(&ctx.config);
    if let Some(strategy) = args.strategy {
        opts.strategy = strategy;
    }
    opts.strict = ctx.strict(args.strict);

    let report = compute(input.nodes, &input.edges, &opts)?;

    match ctx.format() {
        OutputFormat::Human => output_human(ctx, &report),
        OutputFormat::Json => output_json(input.nodes, &report)?,
        OutputFormat::Records => output_records(input.nodes, &report),
    }

    Ok(())
}

fn output_human(ctx: &CommandContext, report: &DistanceReport) {
    for (node, sum) in report.sums.iter().enumerate() {
        println!("{}: {}", node, sum);
    }

    if ctx.cli.quiet {
        return;
    }
    if !report.skipped_edges.is_empty() {
        eprintln!(
            "note: skipped {} malformed edge(s)",
            report.skipped_edges.len()
        );
    }
    if report.unreachable_pairs > 0 {
        eprintln!(
            "note: {} unreachable node pair(s) counted as distance 0",
            report.unreachable_pairs
        );
    }
}

fn output_json(nodes: usize, report: &DistanceReport) -> Result<()> {
    let output = serde_json::json!({
        "nodes": nodes,
        "strategy": report.strategy,
        "sums": report.sums,
        "skipped_edges": report.skipped_edges,
        "unreachable_pairs": report.unreachable_pairs,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn output_records(nodes: usize, report: &DistanceReport) {
    println!(
        "H treedist=1 records=1 mode=sum nodes={} strategy={} skipped={} unreachable={}",
        nodes,
        report.strategy,
        report.skipped_edges.len(),
        report.unreachable_pairs
    );
    for (node, sum) in report.sums.iter().enumerate() {
        println!("N {} sum={}", node, sum);
    }
    for skipped in &report.skipped_edges {
        match skipped.reason {
            SkipReason::Arity { arity } => println!("S {} reason=arity arity={}", skipped.index, arity),
            SkipReason::OutOfRange { node } => {
                println!("S {} reason=out_of_range node={}", skipped.index, node)
            }
        }
    }
}
