//! Land/water grids and island counting
//!
//! A grid is a rectangular array of cells holding `1` (land), `0` (water) or
//! `-1` (land already claimed by an island). The destructive counters rewrite
//! land to `-1` in place, so a grid is consumed by a count.

pub mod islands;

use serde::Deserialize;

use crate::error::{GraphError, Result};

pub use islands::{
    count_islands, count_islands_iterative, count_islands_preserving, count_islands_with_limit,
};

/// Up, down, left, right
static DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// One grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "i32")]
pub enum Cell {
    /// Land that has already been counted (`-1`)
    Visited,
    /// Water (`0`)
    Water,
    /// Unclaimed land (`1`)
    Land,
}

impl TryFrom<i32> for Cell {
    type Error = GraphError;

    fn try_from(value: i32) -> Result<Self> {
        match value {
            -1 => Ok(Cell::Visited),
            0 => Ok(Cell::Water),
            1 => Ok(Cell::Land),
            value => Err(GraphError::InvalidCell { value }),
        }
    }
}

impl From<Cell> for i32 {
    fn from(cell: Cell) -> i32 {
        match cell {
            Cell::Visited => -1,
            Cell::Water => 0,
            Cell::Land => 1,
        }
    }
}

/// Rectangular grid of cells, row-major
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Vec<Vec<Cell>>")]
pub struct Grid {
    cells: Vec<Vec<Cell>>,
}

impl Grid {
    /// Wrap rows of cells, rejecting ragged input
    pub fn new(cells: Vec<Vec<Cell>>) -> Result<Self> {
        let expected = cells.first().map_or(0, Vec::len);
        if let Some((row, cells_in_row)) = cells
            .iter()
            .enumerate()
            .find(|(_, cells_in_row)| cells_in_row.len() != expected)
        {
            return Err(GraphError::RaggedGrid {
                row,
                len: cells_in_row.len(),
                expected,
            });
        }
        Ok(Grid { cells })
    }

    /// Build a grid from raw `-1` / `0` / `1` values
    pub fn from_values(values: Vec<Vec<i32>>) -> Result<Self> {
        let cells = values
            .into_iter()
            .map(|row| row.into_iter().map(Cell::try_from).collect::<Result<Vec<_>>>())
            .collect::<Result<Vec<_>>>()?;
        Self::new(cells)
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn cols(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row][col] = cell;
    }

    /// Number of cells still holding unclaimed land
    pub fn land_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == Cell::Land)
            .count()
    }

    pub fn to_values(&self) -> Vec<Vec<i32>> {
        self.cells
            .iter()
            .map(|row| row.iter().map(|&cell| i32::from(cell)).collect())
            .collect()
    }

    /// In-bounds 4-neighbors of `(row, col)` in up, down, left, right order
    pub(crate) fn neighbors(&self, row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> {
        let (rows, cols) = (self.rows(), self.cols());
        DIRECTIONS.iter().filter_map(move |&(dr, dc)| {
            let r = row.checked_add_signed(dr).filter(|&r| r < rows)?;
            let c = col.checked_add_signed(dc).filter(|&c| c < cols)?;
            Some((r, c))
        })
    }
}

impl TryFrom<Vec<Vec<Cell>>> for Grid {
    type Error = GraphError;

    fn try_from(cells: Vec<Vec<Cell>>) -> Result<Self> {
        Grid::new(cells)
    }
}
