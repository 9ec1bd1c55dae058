//! Graph algorithm implementations
//!
//! Contains concrete implementations of graph algorithms:
//! - `components`: Connected component counting and labelling
//! - `dfs_path`: Memoized depth-first shortest path
//! - `dijkstra`: Weighted shortest path with a min-heap

pub mod components;
pub mod dfs_path;
pub mod dijkstra;

pub use components::{
    component_labels, count_components, count_components_iterative, count_components_with_limit,
};
pub use dfs_path::{shortest_distance, shortest_path, shortest_path_with_limit};
pub use dijkstra::dijkstra_path;
