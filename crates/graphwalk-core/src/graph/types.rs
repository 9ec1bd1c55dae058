use crate::ensure_vertex;
use crate::error::{GraphError, Result};
use crate::graph::GraphProvider;
use serde::Deserialize;

/// A directed edge owned by its source vertex's edge list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub destination: usize,
    pub weight: u32,
}

impl Edge {
    pub fn new(destination: usize, weight: u32) -> Self {
        Edge {
            destination,
            weight,
        }
    }
}

/// Directed, weighted graph stored as one ordered edge list per vertex.
///
/// Vertices are the indices `0..vertex_count`. A vertex with no outgoing
/// edges simply has an empty list. Every edge destination is checked
/// against the vertex count when the edge is added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyList {
    adjacency: Vec<Vec<Edge>>,
}

impl AdjacencyList {
    /// Create a graph with `vertex_count` vertices and no edges
    pub fn new(vertex_count: usize) -> Self {
        AdjacencyList {
            adjacency: vec![Vec::new(); vertex_count],
        }
    }

    /// Build a graph from `(from, to, weight)` triples, in list order
    pub fn from_edges(
        vertex_count: usize,
        edges: impl IntoIterator<Item = (usize, usize, u32)>,
    ) -> Result<Self> {
        let mut graph = Self::new(vertex_count);
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight)?;
        }
        Ok(graph)
    }

    /// Append an edge `from -> to` to the end of `from`'s edge list
    pub fn add_edge(&mut self, from: usize, to: usize, weight: u32) -> Result<()> {
        let bound = self.vertex_count();
        ensure_vertex!("edge source", from, bound);
        ensure_vertex!("edge destination", to, bound);
        self.adjacency[from].push(Edge::new(to, weight));
        Ok(())
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Outgoing edges of `vertex`; empty for unknown vertices
    pub fn edges(&self, vertex: usize) -> &[Edge] {
        self.adjacency.get(vertex).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Square 0/1 matrix where `matrix[i][j] == 1` is an edge `i -> j` of weight 1.
///
/// Entries other than `1` are treated as "no edge".
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Vec<Vec<u8>>")]
pub struct AdjacencyMatrix {
    rows: Vec<Vec<u8>>,
}

impl AdjacencyMatrix {
    /// Wrap a row-major matrix, rejecting it unless it is square
    pub fn new(rows: Vec<Vec<u8>>) -> Result<Self> {
        let expected = rows.len();
        if let Some((row, entries)) = rows
            .iter()
            .enumerate()
            .find(|(_, entries)| entries.len() != expected)
        {
            return Err(GraphError::NonSquareMatrix {
                row,
                len: entries.len(),
                expected,
            });
        }
        Ok(AdjacencyMatrix { rows })
    }

    pub fn size(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Vec<u8>] {
        &self.rows
    }
}

impl TryFrom<Vec<Vec<u8>>> for AdjacencyMatrix {
    type Error = GraphError;

    fn try_from(rows: Vec<Vec<u8>>) -> Result<Self> {
        AdjacencyMatrix::new(rows)
    }
}

/// A graph in either representation, as loaded from an input file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Graph {
    List(AdjacencyList),
    Matrix(AdjacencyMatrix),
}

impl Graph {
    pub fn kind(&self) -> &'static str {
        match self {
            Graph::List(_) => "list",
            Graph::Matrix(_) => "matrix",
        }
    }
}

/// Outcome of a shortest-path query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResult {
    pub source: usize,
    pub destination: usize,
    /// Sum of edge weights along `path`; `None` when the destination was not reached
    pub distance: Option<u64>,
    /// Vertices from source to destination inclusive; empty when not reached
    pub path: Vec<usize>,
}

impl PathResult {
    pub(crate) fn unreachable(source: usize, destination: usize) -> Self {
        PathResult {
            source,
            destination,
            distance: None,
            path: Vec::new(),
        }
    }

    pub fn found(&self) -> bool {
        self.distance.is_some()
    }

    /// Distance with `-1` standing in for "unreachable"
    pub fn distance_or_sentinel(&self) -> i64 {
        self.distance
            .and_then(|d| i64::try_from(d).ok())
            .unwrap_or(-1)
    }

    /// Re-walk `path` through `provider`, summing the cheapest edge of each hop.
    ///
    /// Returns `None` if a hop has no matching edge.
    pub fn total_weight(&self, provider: &dyn GraphProvider) -> Option<u64> {
        self.path.windows(2).try_fold(0u64, |total, hop| {
            provider
                .outbound_edges(hop[0])
                .iter()
                .filter(|edge| edge.destination == hop[1])
                .map(|edge| u64::from(edge.weight))
                .min()
                .map(|weight| total + weight)
        })
    }
}
