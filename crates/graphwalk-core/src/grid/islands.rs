use crate::config::DEFAULT_RECURSION_LIMIT;
use crate::error::{GraphError, Result};
use crate::grid::{Cell, Grid};

/// Count islands of 4-connected land by recursive flood fill.
///
/// Consumes the grid: every land cell reached is rewritten to
/// [`Cell::Visited`], so a second call on the same grid returns 0. Copy the
/// grid first, or use [`count_islands_preserving`], to keep it intact.
/// Fails with `DepthExceeded` past [`DEFAULT_RECURSION_LIMIT`], leaving the
/// grid partially marked.
pub fn count_islands(grid: &mut Grid) -> Result<usize> {
    count_islands_with_limit(grid, DEFAULT_RECURSION_LIMIT)
}

/// [`count_islands`] with an explicit recursion ceiling
#[tracing::instrument(skip(grid), fields(rows = grid.rows(), cols = grid.cols()))]
pub fn count_islands_with_limit(grid: &mut Grid, limit: usize) -> Result<usize> {
    let mut count = 0;
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            if grid.get(row, col) == Some(Cell::Land) {
                count += 1;
                sink(grid, row, col, 0, limit)?;
            }
        }
    }

    tracing::debug!(count, "islands counted");
    Ok(count)
}

fn sink(grid: &mut Grid, row: usize, col: usize, depth: usize, limit: usize) -> Result<()> {
    if depth >= limit {
        return Err(GraphError::depth_exceeded("flood fill", limit));
    }
    grid.set(row, col, Cell::Visited);

    let neighbors: Vec<_> = grid.neighbors(row, col).collect();
    for (r, c) in neighbors {
        if grid.get(r, c) == Some(Cell::Land) {
            sink(grid, r, c, depth + 1, limit)?;
        }
    }
    Ok(())
}

/// Count islands with an explicit stack of coordinates.
///
/// Same contract as [`count_islands`] without a depth ceiling. Cells are
/// marked when pushed, so no cell is pushed twice.
#[tracing::instrument(skip(grid), fields(rows = grid.rows(), cols = grid.cols()))]
pub fn count_islands_iterative(grid: &mut Grid) -> usize {
    let mut count = 0;
    let mut stack = Vec::new();

    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            if grid.get(row, col) != Some(Cell::Land) {
                continue;
            }
            count += 1;
            grid.set(row, col, Cell::Visited);
            stack.push((row, col));

            while let Some((r, c)) = stack.pop() {
                for (nr, nc) in grid.neighbors(r, c) {
                    if grid.get(nr, nc) == Some(Cell::Land) {
                        grid.set(nr, nc, Cell::Visited);
                        stack.push((nr, nc));
                    }
                }
            }
        }
    }

    tracing::debug!(count, "islands counted");
    count
}

/// Count islands without touching the grid, tracking visits in a side table
#[tracing::instrument(skip(grid), fields(rows = grid.rows(), cols = grid.cols()))]
pub fn count_islands_preserving(grid: &Grid) -> usize {
    let cols = grid.cols();
    let mut visited = vec![false; grid.rows() * cols];
    let mut count = 0;
    let mut stack = Vec::new();

    for row in 0..grid.rows() {
        for col in 0..cols {
            if visited[row * cols + col] || grid.get(row, col) != Some(Cell::Land) {
                continue;
            }
            count += 1;
            visited[row * cols + col] = true;
            stack.push((row, col));

            while let Some((r, c)) = stack.pop() {
                for (nr, nc) in grid.neighbors(r, c) {
                    let index = nr * cols + nc;
                    if !visited[index] && grid.get(nr, nc) == Some(Cell::Land) {
                        visited[index] = true;
                        stack.push((nr, nc));
                    }
                }
            }
        }
    }

    tracing::debug!(count, "islands counted");
    count
}
