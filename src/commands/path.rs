//! `graphwalk path` command

use std::path::Path;
use std::time::Instant;

use graphwalk_core::error::Result;
use graphwalk_core::graph::{dijkstra_path, shortest_path_with_limit, GraphProvider, PathResult};
use graphwalk_core::io::load_graph;
use graphwalk_core::trace_time;

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;

/// Execute the path command
pub fn execute(
    ctx: &CommandContext,
    file: &Path,
    from: usize,
    to: usize,
    dijkstra: bool,
) -> Result<()> {
    let start = Instant::now();
    let graph = load_graph(file)?;
    trace_time!(start, "load_graph", vertices = graph.vertex_count());

    let (algorithm, result) = if dijkstra {
        ("dijkstra", dijkstra_path(&graph, from, to)?)
    } else {
        (
            "dfs",
            shortest_path_with_limit(&graph, from, to, ctx.recursion_limit())?,
        )
    };

    if ctx.cli.verbose {
        tracing::debug!(elapsed = ?ctx.start.elapsed(), algorithm, "find_path");
    }

    match ctx.cli.format {
        OutputFormat::Human => print_human(ctx, &result),
        OutputFormat::Json => {
            let output = serde_json::json!({
                "source": result.source,
                "destination": result.destination,
                "algorithm": algorithm,
                "found": result.found(),
                "distance": result.distance_or_sentinel(),
                "path": result.path,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}

fn print_human(ctx: &CommandContext, result: &PathResult) {
    println!("{}", result.distance_or_sentinel());
    if ctx.cli.quiet {
        return;
    }
    if result.found() {
        let hops: Vec<String> = result.path.iter().map(|v| v.to_string()).collect();
        println!("{}", hops.join(" -> "));
    } else {
        println!("no path from {} to {}", result.source, result.destination);
    }
}
