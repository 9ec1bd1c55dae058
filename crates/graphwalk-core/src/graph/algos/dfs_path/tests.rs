use super::*;
use crate::graph::{dijkstra_path, AdjacencyList, AdjacencyMatrix, Edge};

fn triangle() -> AdjacencyList {
    AdjacencyList::from_edges(3, [(0, 1, 2), (1, 2, 3), (0, 2, 10)]).unwrap()
}

/// Cheap route to 3 is 0 -> 2 -> 1 -> 3, but 2 is first expanded while 1 is
/// still on the stack, so its memoized distance only knows 2 -> 3.
fn reconvergent() -> AdjacencyList {
    AdjacencyList::from_edges(
        4,
        [
            (0, 1, 100),
            (0, 2, 1),
            (1, 2, 1),
            (1, 3, 1),
            (2, 1, 1),
            (2, 3, 10),
        ],
    )
    .unwrap()
}

#[test]
fn test_triangle_prefers_two_hop_route() {
    let result = shortest_path(&triangle(), 0, 2).unwrap();
    assert_eq!(result.distance, Some(5));
    assert_eq!(result.path, vec![0, 1, 2]);
    assert_eq!(shortest_distance(&triangle(), 0, 2).unwrap(), Some(5));
}

#[test]
fn test_no_outgoing_edges_is_unreachable() {
    let result = shortest_path(&triangle(), 2, 0).unwrap();
    assert_eq!(result.distance, None);
    assert_eq!(result.distance_or_sentinel(), -1);
    assert!(result.path.is_empty());
}

#[test]
fn test_source_equals_destination() {
    let graph = triangle();
    for vertex in 0..3 {
        let result = shortest_path(&graph, vertex, vertex).unwrap();
        assert_eq!(result.distance, Some(0));
        assert_eq!(result.path, vec![vertex]);
    }
}

#[test]
fn test_cycle_without_destination_terminates() {
    let graph = AdjacencyList::from_edges(3, [(0, 1, 1), (1, 0, 1)]).unwrap();
    assert_eq!(shortest_distance(&graph, 0, 2).unwrap(), None);
}

#[test]
fn test_ties_keep_first_explored_edge() {
    let graph =
        AdjacencyList::from_edges(4, [(0, 1, 1), (0, 2, 1), (1, 3, 1), (2, 3, 1)]).unwrap();
    let result = shortest_path(&graph, 0, 3).unwrap();
    assert_eq!(result.distance, Some(2));
    assert_eq!(result.path, vec![0, 1, 3]);
}

#[test]
fn test_visited_vertex_is_not_reexplored() {
    let graph = reconvergent();
    let result = shortest_path(&graph, 0, 3).unwrap();
    assert_eq!(result.distance, Some(11));
    assert_eq!(result.path, vec![0, 2, 3]);

    let exact = dijkstra_path(&graph, 0, 3).unwrap();
    assert_eq!(exact.distance, Some(3));
    assert_eq!(exact.path, vec![0, 2, 1, 3]);
}

#[test]
fn test_matrix_chain_uses_unit_weights() {
    let matrix = AdjacencyMatrix::new(vec![
        vec![0, 1, 0, 0],
        vec![0, 0, 1, 0],
        vec![0, 0, 0, 1],
        vec![0, 0, 0, 0],
    ])
    .unwrap();
    let result = shortest_path(&matrix, 0, 3).unwrap();
    assert_eq!(result.distance, Some(3));
    assert_eq!(result.path, vec![0, 1, 2, 3]);
    assert_eq!(shortest_distance(&matrix, 3, 0).unwrap(), None);
}

#[test]
fn test_matrix_shortcut() {
    let matrix = AdjacencyMatrix::new(vec![
        vec![0, 1, 0, 1],
        vec![0, 0, 1, 0],
        vec![0, 0, 0, 1],
        vec![0, 0, 0, 0],
    ])
    .unwrap();
    let result = shortest_path(&matrix, 0, 3).unwrap();
    assert_eq!(result.distance, Some(1));
    assert_eq!(result.path, vec![0, 3]);
}

#[test]
fn test_out_of_range_endpoints() {
    let graph = triangle();
    assert!(matches!(
        shortest_path(&graph, 3, 0).unwrap_err(),
        GraphError::OutOfRange { index: 3, bound: 3, .. }
    ));
    assert!(matches!(
        shortest_path(&graph, 0, 7).unwrap_err(),
        GraphError::OutOfRange { index: 7, bound: 3, .. }
    ));

    let matrix = AdjacencyMatrix::new(vec![vec![0]]).unwrap();
    assert!(shortest_path(&matrix, 1, 0).is_err());
}

#[test]
fn test_path_weight_matches_distance_for_every_pair() {
    let graphs = [triangle(), reconvergent()];
    for graph in &graphs {
        let n = graph.vertex_count();
        for source in 0..n {
            for destination in 0..n {
                let result = shortest_path(graph, source, destination).unwrap();
                if let Some(distance) = result.distance {
                    assert_eq!(result.path.first(), Some(&source));
                    assert_eq!(result.path.last(), Some(&destination));
                    assert_eq!(
                        result.total_weight(graph),
                        Some(distance),
                        "{} -> {}",
                        source,
                        destination
                    );
                }
            }
        }
    }
}

#[test]
fn test_recursion_limit_is_enforced() {
    let chain = AdjacencyList::from_edges(30, (0..29).map(|i| (i, i + 1, 1))).unwrap();
    let err = shortest_path_with_limit(&chain, 0, 29, 5).unwrap_err();
    assert!(matches!(err, GraphError::DepthExceeded { limit: 5, .. }));
    assert_eq!(
        shortest_path_with_limit(&chain, 0, 29, 64).unwrap().distance,
        Some(29)
    );
}

struct Dangling;

impl GraphProvider for Dangling {
    fn vertex_count(&self) -> usize {
        2
    }

    fn outbound_edges(&self, vertex: usize) -> Vec<Edge> {
        if vertex == 0 {
            vec![Edge::new(4, 1)]
        } else {
            Vec::new()
        }
    }
}

#[test]
fn test_dangling_edge_fails_fast() {
    assert!(matches!(
        shortest_path(&Dangling, 0, 1).unwrap_err(),
        GraphError::OutOfRange { index: 4, .. }
    ));
}

#[test]
fn test_long_chain_path_is_rebuilt_from_next_hops() {
    let n = 500;
    let chain = AdjacencyList::from_edges(n, (0..n - 1).map(|i| (i, i + 1, 2))).unwrap();
    let result = shortest_path(&chain, 0, n - 1).unwrap();
    assert_eq!(result.distance, Some(2 * (n as u64 - 1)));
    assert_eq!(result.path, (0..n).collect::<Vec<_>>());

    let tail = shortest_path(&chain, 250, n - 1).unwrap();
    assert_eq!(tail.path, (250..n).collect::<Vec<_>>());
}

#[test]
fn test_next_hop_follows_memoized_vertex() {
    // 2 and 1 finish under 0's first edge; the direct 0 -> 1 edge costs more
    let graph = AdjacencyList::from_edges(4, [(0, 2, 1), (2, 1, 1), (1, 3, 1), (0, 1, 5)]).unwrap();
    let result = shortest_path(&graph, 0, 3).unwrap();
    assert_eq!(result.distance, Some(3));
    assert_eq!(result.path, vec![0, 2, 1, 3]);
    assert_eq!(result.total_weight(&graph), Some(3));
}

#[test]
fn test_default_limit_fits_small_stack() {
    let distance = crate::test_support::on_small_stack(|| {
        let n = DEFAULT_RECURSION_LIMIT;
        let chain = AdjacencyList::from_edges(n, (0..n - 1).map(|i| (i, i + 1, 1))).unwrap();
        shortest_path(&chain, 0, n - 1).unwrap().distance
    });
    assert_eq!(distance, Some(DEFAULT_RECURSION_LIMIT as u64 - 1));
}
