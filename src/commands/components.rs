//! `graphwalk components` command

use std::path::Path;
use std::time::Instant;

use graphwalk_core::config::Strategy;
use graphwalk_core::error::Result;
use graphwalk_core::graph::{
    count_components_iterative, count_components_with_limit, GraphProvider,
};
use graphwalk_core::io::load_graph;
use graphwalk_core::trace_time;

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;

/// Execute the components command
pub fn execute(ctx: &CommandContext, file: &Path) -> Result<()> {
    let start = Instant::now();
    let graph = load_graph(file)?;
    trace_time!(start, "load_graph", vertices = graph.vertex_count());

    let strategy = ctx.strategy();
    let count = match strategy {
        Strategy::Recursive => count_components_with_limit(&graph, ctx.recursion_limit())?,
        Strategy::Iterative => count_components_iterative(&graph)?,
    };

    if ctx.cli.verbose {
        tracing::debug!(elapsed = ?ctx.start.elapsed(), "count_components");
    }

    match ctx.cli.format {
        OutputFormat::Human => println!("{}", count),
        OutputFormat::Json => {
            let output = serde_json::json!({
                "kind": graph.kind(),
                "vertices": graph.vertex_count(),
                "strategy": strategy.to_string(),
                "components": count,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
