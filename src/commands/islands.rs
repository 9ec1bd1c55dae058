//! `graphwalk islands` command

use std::path::Path;
use std::time::Instant;

use graphwalk_core::config::Strategy;
use graphwalk_core::error::Result;
use graphwalk_core::grid::{
    count_islands_iterative, count_islands_preserving, count_islands_with_limit,
};
use graphwalk_core::io::load_grid;
use graphwalk_core::trace_time;

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;

/// Execute the islands command
pub fn execute(ctx: &CommandContext, file: &Path, preserve: bool) -> Result<()> {
    let start = Instant::now();
    let mut grid = load_grid(file)?;
    trace_time!(start, "load_grid", rows = grid.rows(), cols = grid.cols());

    let (rows, cols) = (grid.rows(), grid.cols());
    let strategy = ctx.strategy();
    let count = if preserve {
        count_islands_preserving(&grid)
    } else {
        match strategy {
            Strategy::Recursive => count_islands_with_limit(&mut grid, ctx.recursion_limit())?,
            Strategy::Iterative => count_islands_iterative(&mut grid),
        }
    };

    if ctx.cli.verbose {
        tracing::debug!(elapsed = ?ctx.start.elapsed(), "count_islands");
    }

    match ctx.cli.format {
        OutputFormat::Human => println!("{}", count),
        OutputFormat::Json => {
            let mode = if preserve {
                "preserving".to_string()
            } else {
                strategy.to_string()
            };
            let output = serde_json::json!({
                "rows": rows,
                "cols": cols,
                "strategy": mode,
                "islands": count,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
