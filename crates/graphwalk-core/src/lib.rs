//! Graphwalk Core Library
//!
//! Connected components, depth-first shortest paths and grid island counting
//! over adjacency lists, adjacency matrices and land/water grids.

pub mod config;
pub mod error;
pub mod graph;
pub mod grid;
pub mod io;
pub mod logging;

#[cfg(test)]
mod test_support;
