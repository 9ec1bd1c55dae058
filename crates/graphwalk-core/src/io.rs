//! Loading graphs and grids from JSON input files
//!
//! Graph files are tagged by `kind`:
//!
//! ```json
//! {"kind": "list", "vertices": 3, "edges": [{"from": 0, "to": 1, "weight": 2}]}
//! {"kind": "matrix", "matrix": [[0, 1], [1, 0]]}
//! ```
//!
//! Grid files are a bare 2-D array of `-1`, `0` and `1`.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{GraphError, Result};
use crate::graph::{AdjacencyList, AdjacencyMatrix, Graph};
use crate::grid::Grid;

#[derive(Debug, Deserialize)]
struct EdgeRecord {
    from: usize,
    to: usize,
    #[serde(default = "default_weight")]
    weight: u32,
}

fn default_weight() -> u32 {
    1
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
enum GraphFile {
    List {
        vertices: usize,
        #[serde(default)]
        edges: Vec<EdgeRecord>,
    },
    Matrix {
        matrix: AdjacencyMatrix,
    },
}

impl GraphFile {
    fn into_graph(self) -> Result<Graph> {
        match self {
            GraphFile::List { vertices, edges } => {
                let list = AdjacencyList::from_edges(
                    vertices,
                    edges.into_iter().map(|e| (e.from, e.to, e.weight)),
                )?;
                Ok(Graph::List(list))
            }
            GraphFile::Matrix { matrix } => Ok(Graph::Matrix(matrix)),
        }
    }
}

/// Parse a graph document
pub fn parse_graph(content: &str) -> Result<Graph> {
    let file: GraphFile = serde_json::from_str(content)?;
    file.into_graph()
}

/// Parse a grid document
pub fn parse_grid(content: &str) -> Result<Grid> {
    Ok(serde_json::from_str(content)?)
}

/// Read and validate a graph file
pub fn load_graph(path: &Path) -> Result<Graph> {
    let content = fs::read_to_string(path).map_err(|e| GraphError::invalid_input(path, e))?;
    let graph = parse_graph(&content).map_err(|e| match e {
        GraphError::Json(json) => GraphError::invalid_input(path, json),
        other => other,
    })?;
    tracing::debug!(path = %path.display(), kind = graph.kind(), "loaded graph");
    Ok(graph)
}

/// Read and validate a grid file
pub fn load_grid(path: &Path) -> Result<Grid> {
    let content = fs::read_to_string(path).map_err(|e| GraphError::invalid_input(path, e))?;
    let grid = parse_grid(&content).map_err(|e| GraphError::invalid_input(path, e))?;
    tracing::debug!(path = %path.display(), rows = grid.rows(), cols = grid.cols(), "loaded grid");
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Edge, GraphProvider};
    use tempfile::tempdir;

    #[test]
    fn test_parse_list() {
        let graph = parse_graph(
            r#"{"kind": "list", "vertices": 3,
                "edges": [{"from": 0, "to": 1, "weight": 2}, {"from": 1, "to": 2}]}"#,
        )
        .unwrap();
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.outbound_edges(0), vec![Edge::new(1, 2)]);
        assert_eq!(graph.outbound_edges(1), vec![Edge::new(2, 1)]);
    }

    #[test]
    fn test_parse_list_without_edges() {
        let graph = parse_graph(r#"{"kind": "list", "vertices": 4}"#).unwrap();
        assert_eq!(graph.vertex_count(), 4);
    }

    #[test]
    fn test_parse_list_rejects_dangling_edge() {
        let err = parse_graph(r#"{"kind": "list", "vertices": 2, "edges": [{"from": 0, "to": 2}]}"#)
            .unwrap_err();
        assert!(matches!(err, GraphError::OutOfRange { index: 2, .. }));
    }

    #[test]
    fn test_parse_matrix() {
        let graph = parse_graph(r#"{"kind": "matrix", "matrix": [[0, 1], [0, 0]]}"#).unwrap();
        assert_eq!(graph.kind(), "matrix");
        assert_eq!(graph.outbound_edges(0), vec![Edge::new(1, 1)]);
    }

    #[test]
    fn test_parse_matrix_rejects_non_square() {
        assert!(parse_graph(r#"{"kind": "matrix", "matrix": [[0, 1]]}"#).is_err());
    }

    #[test]
    fn test_parse_unknown_kind() {
        assert!(parse_graph(r#"{"kind": "tree"}"#).is_err());
    }

    #[test]
    fn test_load_grid_reports_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("grid.json");
        fs::write(&path, "[[1, 0], [0, 3]]").unwrap();

        let err = load_grid(&path).unwrap_err();
        assert!(matches!(err, GraphError::InvalidInput { .. }));
        assert!(err.to_string().contains("grid.json"));
    }

    #[test]
    fn test_load_graph_missing_file() {
        let dir = tempdir().unwrap();
        let err = load_graph(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, GraphError::InvalidInput { .. }));
    }

    #[test]
    fn test_load_graph_from_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("graph.json");
        fs::write(&path, r#"{"kind": "matrix", "matrix": [[0]]}"#).unwrap();
        assert_eq!(load_graph(&path).unwrap().vertex_count(), 1);
    }
}
