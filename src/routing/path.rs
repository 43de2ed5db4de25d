use tracing::debug;

use crate::{Distance, Graph, PredecessorMap, RoutingError, shortest_paths};

/// Shortest route from a source to a reachable target.
#[derive(Debug, Clone, PartialEq)]
pub struct Route<'g> {
    pub distance: Distance,
    /// Nodes from source to target, both included.
    pub nodes: Vec<&'g str>,
}

/// Unpacks the path to the target by following the predecessors back to the source.
///
/// The returned nodes are ordered from source to target. If the target cannot be reached the
/// walk stops immediately and the path is just `[target]`, which is not a route: callers should
/// check the target distance before using the sequence.
///
/// Fails if the target doesn't belong to the graph.
pub fn build_path<'g>(
    predecessors: &PredecessorMap<'g>,
    target: &str,
) -> Result<Vec<&'g str>, RoutingError> {
    let graph = predecessors.graph();
    let target = graph
        .index_of(target)
        .ok_or_else(|| RoutingError::UnknownNode(target.to_owned()))?;

    let mut path = vec![graph.label(target)];
    let mut next = target;

    while let Some(previous) = predecessors.previous(next) {
        debug_assert!(path.len() <= graph.node_count(), "predecessor cycle at {path:?}");
        next = previous;
        path.push(graph.label(previous));
    }

    path.reverse();
    Ok(path)
}

/// Computes the shortest route between source and target.
/// Returns None if the target cannot be reached from the source.
pub fn shortest_route<'g>(
    graph: &'g Graph,
    source: &str,
    target: &str,
) -> Result<Option<Route<'g>>, RoutingError> {
    let (distances, predecessors) = shortest_paths(graph, source)?;

    let distance = distances
        .get(target)
        .ok_or_else(|| RoutingError::UnknownNode(target.to_owned()))?;

    if !distance.is_finite() {
        debug!("No route from {source:?} to {target:?}");
        return Ok(None);
    }

    let nodes = build_path(&predecessors, target)?;
    Ok(Some(Route { distance, nodes }))
}
