use crate::ensure_vertex;
use crate::error::Result;
use crate::graph::types::PathResult;
use crate::graph::GraphProvider;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Wrapper for BinaryHeap to use as min-heap (ordered by accumulated cost)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HeapEntry {
    cost: u64,
    vertex: usize,
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.cost
            .cmp(&other.cost)
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

/// True minimum-weight path from `source` to `destination` (Dijkstra).
///
/// Unlike [`super::shortest_path`], vertices are settled in cost order, so
/// reconvergent routes are handled correctly. Edge weights are non-negative
/// by construction.
#[tracing::instrument(skip(provider), fields(vertices = provider.vertex_count()))]
pub fn dijkstra_path(
    provider: &dyn GraphProvider,
    source: usize,
    destination: usize,
) -> Result<PathResult> {
    let vertex_count = provider.vertex_count();
    ensure_vertex!("source vertex", source, vertex_count);
    ensure_vertex!("destination vertex", destination, vertex_count);

    let mut best: Vec<Option<u64>> = vec![None; vertex_count];
    let mut predecessor: Vec<Option<usize>> = vec![None; vertex_count];
    let mut heap = BinaryHeap::new();

    best[source] = Some(0);
    heap.push(Reverse(HeapEntry {
        cost: 0,
        vertex: source,
    }));

    while let Some(Reverse(HeapEntry { cost, vertex })) = heap.pop() {
        if vertex == destination {
            break;
        }
        // Stale entry superseded by a cheaper push
        if best[vertex].is_some_and(|known| cost > known) {
            continue;
        }

        for edge in provider.outbound_edges(vertex) {
            ensure_vertex!("edge destination", edge.destination, vertex_count);
            let next_cost = cost + u64::from(edge.weight);
            if best[edge.destination].is_none_or(|known| next_cost < known) {
                best[edge.destination] = Some(next_cost);
                predecessor[edge.destination] = Some(vertex);
                heap.push(Reverse(HeapEntry {
                    cost: next_cost,
                    vertex: edge.destination,
                }));
            }
        }
    }

    let Some(distance) = best[destination] else {
        tracing::debug!("destination unreachable");
        return Ok(PathResult::unreachable(source, destination));
    };

    let mut path = vec![destination];
    let mut current = destination;
    while let Some(previous) = predecessor[current] {
        path.push(previous);
        current = previous;
    }
    path.reverse();

    tracing::debug!(distance, path = ?path, "dijkstra path");
    Ok(PathResult {
        source,
        destination,
        distance: Some(distance),
        path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{AdjacencyList, AdjacencyMatrix};

    #[test]
    fn test_heap_entry_ordering() {
        let cheap = HeapEntry { cost: 1, vertex: 4 };
        let dear = HeapEntry { cost: 2, vertex: 0 };
        assert_eq!(cheap.cmp(&dear), std::cmp::Ordering::Less);

        let mut heap = BinaryHeap::new();
        heap.push(Reverse(dear));
        heap.push(Reverse(cheap));
        assert_eq!(heap.pop(), Some(Reverse(cheap)));
    }

    #[test]
    fn test_matches_dfs_on_triangle() {
        let graph = AdjacencyList::from_edges(3, [(0, 1, 2), (1, 2, 3), (0, 2, 10)]).unwrap();
        let result = dijkstra_path(&graph, 0, 2).unwrap();
        assert_eq!(result.distance, Some(5));
        assert_eq!(result.path, vec![0, 1, 2]);
    }

    #[test]
    fn test_unreachable() {
        let graph = AdjacencyList::from_edges(3, [(0, 1, 2)]).unwrap();
        let result = dijkstra_path(&graph, 0, 2).unwrap();
        assert!(!result.found());
        assert!(result.path.is_empty());
    }

    #[test]
    fn test_source_is_destination() {
        let matrix = AdjacencyMatrix::new(vec![vec![0, 1], vec![1, 0]]).unwrap();
        let result = dijkstra_path(&matrix, 1, 1).unwrap();
        assert_eq!(result.distance, Some(0));
        assert_eq!(result.path, vec![1]);
    }

    #[test]
    fn test_zero_weight_edges() {
        let graph = AdjacencyList::from_edges(3, [(0, 1, 0), (1, 2, 0), (0, 2, 1)]).unwrap();
        let result = dijkstra_path(&graph, 0, 2).unwrap();
        assert_eq!(result.distance, Some(0));
        assert_eq!(result.total_weight(&graph), Some(0));
    }

    #[test]
    fn test_out_of_range() {
        let graph = AdjacencyList::new(2);
        assert!(dijkstra_path(&graph, 0, 2).is_err());
    }
}
