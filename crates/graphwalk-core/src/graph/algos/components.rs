use crate::config::DEFAULT_RECURSION_LIMIT;
use crate::ensure_vertex;
use crate::error::{GraphError, Result};
use crate::graph::GraphProvider;

/// Count connected components with call-stack depth-first search.
///
/// Vertices are tried as roots in index order; each unvisited root starts a
/// new component and everything reachable from it along outgoing edges is
/// absorbed. Fails with `DepthExceeded` past [`DEFAULT_RECURSION_LIMIT`].
pub fn count_components(provider: &dyn GraphProvider) -> Result<usize> {
    count_components_with_limit(provider, DEFAULT_RECURSION_LIMIT)
}

/// [`count_components`] with an explicit recursion ceiling
#[tracing::instrument(skip(provider), fields(vertices = provider.vertex_count()))]
pub fn count_components_with_limit(provider: &dyn GraphProvider, limit: usize) -> Result<usize> {
    let vertex_count = provider.vertex_count();
    let mut visited = vec![false; vertex_count];
    let mut count = 0;

    for root in 0..vertex_count {
        if !visited[root] {
            count += 1;
            tracing::trace!(root, component = count, "new component");
            mark_reachable(provider, root, &mut visited, 0, limit)?;
        }
    }

    tracing::debug!(count, "components counted");
    Ok(count)
}

fn mark_reachable(
    provider: &dyn GraphProvider,
    vertex: usize,
    visited: &mut [bool],
    depth: usize,
    limit: usize,
) -> Result<()> {
    if visited[vertex] {
        return Ok(());
    }
    if depth >= limit {
        return Err(GraphError::depth_exceeded("component search", limit));
    }
    visited[vertex] = true;

    for edge in provider.outbound_edges(vertex) {
        ensure_vertex!("edge destination", edge.destination, visited.len());
        mark_reachable(provider, edge.destination, visited, depth + 1, limit)?;
    }
    Ok(())
}

/// Count connected components with an explicit stack.
///
/// Same root order and reachability as [`count_components`], so both return
/// the same count; neighbors are marked visited when pushed.
#[tracing::instrument(skip(provider), fields(vertices = provider.vertex_count()))]
pub fn count_components_iterative(provider: &dyn GraphProvider) -> Result<usize> {
    let vertex_count = provider.vertex_count();
    let mut visited = vec![false; vertex_count];
    let mut count = 0;

    for root in 0..vertex_count {
        if !visited[root] {
            count += 1;
            tracing::trace!(root, component = count, "new component");
            fill_from(provider, root, &mut visited, |_| {})?;
        }
    }

    tracing::debug!(count, "components counted");
    Ok(count)
}

/// Component id of every vertex, numbered from 0 in root order
pub fn component_labels(provider: &dyn GraphProvider) -> Result<Vec<usize>> {
    let vertex_count = provider.vertex_count();
    let mut visited = vec![false; vertex_count];
    let mut labels = vec![0; vertex_count];
    let mut next_label = 0;

    for root in 0..vertex_count {
        if !visited[root] {
            fill_from(provider, root, &mut visited, |vertex| {
                labels[vertex] = next_label
            })?;
            next_label += 1;
        }
    }

    Ok(labels)
}

fn fill_from(
    provider: &dyn GraphProvider,
    root: usize,
    visited: &mut [bool],
    mut on_visit: impl FnMut(usize),
) -> Result<()> {
    visited[root] = true;
    let mut stack = vec![root];

    while let Some(vertex) = stack.pop() {
        on_visit(vertex);
        for edge in provider.outbound_edges(vertex) {
            ensure_vertex!("edge destination", edge.destination, visited.len());
            if !visited[edge.destination] {
                visited[edge.destination] = true;
                stack.push(edge.destination);
            }
        }
    }
    Ok(())
}
