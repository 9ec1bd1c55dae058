use crate::config::DEFAULT_RECURSION_LIMIT;
use crate::ensure_vertex;
use crate::error::{GraphError, Result};
use crate::graph::types::PathResult;
use crate::graph::GraphProvider;

/// Per-query state threaded through the recursive descent
struct PathSearch<'a> {
    provider: &'a dyn GraphProvider,
    destination: usize,
    limit: usize,
    visited: Vec<bool>,
    /// Best known distance from each vertex to `destination`; `None` = unreached
    distances: Vec<Option<u64>>,
    /// Next hop on each vertex's best known route to `destination`
    next: Vec<Option<usize>>,
}

impl<'a> PathSearch<'a> {
    fn new(provider: &'a dyn GraphProvider, destination: usize, limit: usize) -> Self {
        let vertex_count = provider.vertex_count();
        Self {
            provider,
            destination,
            limit,
            visited: vec![false; vertex_count],
            distances: vec![None; vertex_count],
            next: vec![None; vertex_count],
        }
    }

    fn descend(&mut self, vertex: usize, depth: usize) -> Result<Option<u64>> {
        if vertex == self.destination {
            return Ok(Some(0));
        }
        // Visited vertices are never re-expanded, even when reached by a cheaper edge
        if self.visited[vertex] {
            return Ok(self.distances[vertex]);
        }
        if depth >= self.limit {
            return Err(GraphError::depth_exceeded("shortest path search", self.limit));
        }
        self.visited[vertex] = true;

        let mut shortest: Option<u64> = None;
        for edge in self.provider.outbound_edges(vertex) {
            ensure_vertex!("edge destination", edge.destination, self.visited.len());
            let Some(child) = self.descend(edge.destination, depth + 1)? else {
                continue;
            };
            let candidate = child + u64::from(edge.weight);
            if shortest.is_none_or(|best| candidate < best) {
                shortest = Some(candidate);
                self.next[vertex] = Some(edge.destination);
            }
        }

        self.distances[vertex] = shortest;
        Ok(shortest)
    }

    /// Follow successor links from `source`. Links only point at vertices
    /// whose descent has finished, so the walk cannot cycle.
    fn route_from(&self, source: usize) -> Vec<usize> {
        let mut path = vec![source];
        let mut current = source;
        while current != self.destination {
            let Some(hop) = self.next[current] else {
                break;
            };
            path.push(hop);
            current = hop;
        }
        path
    }
}

/// Memoized depth-first shortest path from `source` to `destination`.
///
/// Edges are explored in list order (column order for matrices). Each vertex
/// is expanded at most once per query and its result memoized, so this is
/// not a general shortest-path algorithm: when two routes reach the same
/// intermediate vertex, only the one explored first is considered, and the
/// reported distance can exceed the true minimum on graphs with such
/// reconvergent paths. Use [`super::dijkstra_path`] for a true minimum.
///
/// The path is logged at debug level and returned in the result.
pub fn shortest_path(
    provider: &dyn GraphProvider,
    source: usize,
    destination: usize,
) -> Result<PathResult> {
    shortest_path_with_limit(provider, source, destination, DEFAULT_RECURSION_LIMIT)
}

/// [`shortest_path`] with an explicit recursion ceiling
#[tracing::instrument(skip(provider), fields(vertices = provider.vertex_count()))]
pub fn shortest_path_with_limit(
    provider: &dyn GraphProvider,
    source: usize,
    destination: usize,
    limit: usize,
) -> Result<PathResult> {
    let vertex_count = provider.vertex_count();
    ensure_vertex!("source vertex", source, vertex_count);
    ensure_vertex!("destination vertex", destination, vertex_count);

    let mut search = PathSearch::new(provider, destination, limit);
    let Some(distance) = search.descend(source, 0)? else {
        tracing::debug!("destination unreachable");
        return Ok(PathResult::unreachable(source, destination));
    };

    let path = search.route_from(source);
    tracing::debug!(distance, path = ?path, "shortest path");
    Ok(PathResult {
        source,
        destination,
        distance: Some(distance),
        path,
    })
}

/// Distance-only form of [`shortest_path`]; `None` when unreachable
pub fn shortest_distance(
    provider: &dyn GraphProvider,
    source: usize,
    destination: usize,
) -> Result<Option<u64>> {
    Ok(shortest_path(provider, source, destination)?.distance)
}

#[cfg(test)]
mod tests;
