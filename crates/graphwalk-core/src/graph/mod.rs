//! Graph representations and traversal algorithms
//!
//! Provides the two graph representations and the queries run over them:
//! - Adjacency lists with weighted, directed edges
//! - Adjacency matrices with implicit unit weights
//! - Component counting (recursive and explicit-stack)
//! - Memoized depth-first shortest path, plus Dijkstra for true minima
//! - Graph provider trait shared by both representations

pub mod algos;
pub mod traversal;
pub mod types;

pub use algos::{
    component_labels, count_components, count_components_iterative,
    count_components_with_limit, dijkstra_path, shortest_distance, shortest_path,
    shortest_path_with_limit,
};
pub use traversal::GraphProvider;
pub use types::{AdjacencyList, AdjacencyMatrix, Edge, Graph, PathResult};
