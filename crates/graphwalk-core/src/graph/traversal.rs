use crate::graph::types::{AdjacencyList, AdjacencyMatrix, Edge, Graph};

/// Trait for providing vertex count and outgoing adjacency
pub trait GraphProvider {
    fn vertex_count(&self) -> usize;
    fn outbound_edges(&self, vertex: usize) -> Vec<Edge>;
}

impl GraphProvider for AdjacencyList {
    fn vertex_count(&self) -> usize {
        AdjacencyList::vertex_count(self)
    }

    fn outbound_edges(&self, vertex: usize) -> Vec<Edge> {
        self.edges(vertex).to_vec()
    }
}

impl GraphProvider for AdjacencyMatrix {
    fn vertex_count(&self) -> usize {
        self.size()
    }

    /// Columns holding `1` in the vertex's row, in column order, each with weight 1
    fn outbound_edges(&self, vertex: usize) -> Vec<Edge> {
        self.rows()
            .get(vertex)
            .map(|row| {
                row.iter()
                    .enumerate()
                    .filter(|(_, &entry)| entry == 1)
                    .map(|(column, _)| Edge::new(column, 1))
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl GraphProvider for Graph {
    fn vertex_count(&self) -> usize {
        match self {
            Graph::List(list) => GraphProvider::vertex_count(list),
            Graph::Matrix(matrix) => GraphProvider::vertex_count(matrix),
        }
    }

    fn outbound_edges(&self, vertex: usize) -> Vec<Edge> {
        match self {
            Graph::List(list) => list.outbound_edges(vertex),
            Graph::Matrix(matrix) => matrix.outbound_edges(vertex),
        }
    }
}
