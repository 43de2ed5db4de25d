use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::{debug, trace};

use crate::{Distance, Graph, RoutingError};

pub mod path;

#[derive(Debug, Clone, Copy)]
pub struct ShortestPathConfig {
    /// Nodes farther than this distance from the source are left unreached.
    pub max_distance: Distance,
}

impl Default for ShortestPathConfig {
    fn default() -> Self {
        Self {
            max_distance: Distance::INFINITY,
        }
    }
}

/// Minimum distance from a fixed source to every node of the graph.
/// Nodes that cannot be reached have an infinite distance.
#[derive(Debug, Clone)]
pub struct DistanceMap<'g> {
    graph: &'g Graph,
    distances: Vec<Distance>,
}

impl<'g> DistanceMap<'g> {
    /// Gets the distance of the node, None if the node doesn't belong to the graph.
    pub fn get(&self, node: &str) -> Option<Distance> {
        self.graph.index_of(node).map(|index| self.distances[index])
    }

    pub fn is_reachable(&self, node: &str) -> bool {
        self.get(node).is_some_and(|distance| distance.is_finite())
    }

    /// Gets an iterator over every node with its distance, in graph node order.
    pub fn iter(&self) -> impl Iterator<Item = (&'g str, Distance)> {
        self.graph.nodes().zip(self.distances.iter().copied())
    }
}

/// Node immediately preceding each node on its best known path from a fixed source.
/// The source and the nodes that cannot be reached have no predecessor.
#[derive(Debug, Clone)]
pub struct PredecessorMap<'g> {
    graph: &'g Graph,
    previous: Vec<Option<usize>>,
}

impl<'g> PredecessorMap<'g> {
    /// Gets the predecessor of the node.
    /// Returns None if the node doesn't belong to the graph, Some(None) if it has no predecessor.
    pub fn get(&self, node: &str) -> Option<Option<&'g str>> {
        self.graph
            .index_of(node)
            .map(|index| self.previous[index].map(|p| self.graph.label(p)))
    }

    /// Gets an iterator over every node with its predecessor, in graph node order.
    pub fn iter(&self) -> impl Iterator<Item = (&'g str, Option<&'g str>)> {
        let graph = self.graph;
        graph
            .nodes()
            .zip(self.previous.iter().map(move |p| p.map(|p| graph.label(p))))
    }

    pub(crate) fn graph(&self) -> &'g Graph {
        self.graph
    }

    pub(crate) fn previous(&self, index: usize) -> Option<usize> {
        self.previous[index]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HeapElement {
    /// Tentative distance from the source to this vertex.
    distance: Distance,
    vertex: usize,
}

// The priority queue depends on the implementation of the Ord trait.
// By default std::BinaryHeap is a max heap.
// Explicitly implement the trait so the queue becomes a min heap.
impl Ord for HeapElement {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .cmp(&self.distance)
            // equal distances pop in vertex order
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl PartialOrd for HeapElement {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Computes the shortest distance and the predecessor of every node from the source.
/// See [`shortest_paths_with`].
pub fn shortest_paths<'g>(
    graph: &'g Graph,
    source: &str,
) -> Result<(DistanceMap<'g>, PredecessorMap<'g>), RoutingError> {
    shortest_paths_with(&ShortestPathConfig::default(), graph, source)
}

/// Computes the shortest distance and the predecessor of every node from the source using
/// Dijkstra's algorithm with a lazily pruned binary heap.
///
/// Edge weights must be non-negative, otherwise the distances are not guaranteed to be minimal.
/// When several paths share the same minimal distance only one of them is recorded.
///
/// Fails if the source doesn't belong to the graph. A source without outgoing edges is valid
/// and results in every other node being unreachable.
pub fn shortest_paths_with<'g>(
    config: &ShortestPathConfig,
    graph: &'g Graph,
    source: &str,
) -> Result<(DistanceMap<'g>, PredecessorMap<'g>), RoutingError> {
    debug!("Computing shortest paths from {source:?} with {config:?}");

    let origin = graph
        .index_of(source)
        .ok_or_else(|| RoutingError::UnknownNode(source.to_owned()))?;

    // (current) shortest distance from the source to each vertex
    let mut distances = vec![Distance::INFINITY; graph.node_count()];
    distances[origin] = Distance::ZERO;

    // previous vertex on the current best known path from the source to each vertex
    let mut previous: Vec<Option<usize>> = vec![None; graph.node_count()];

    // priority queue of discovered vertices that may need to be visited
    let mut frontier = BinaryHeap::from([HeapElement {
        distance: Distance::ZERO,
        vertex: origin,
    }]);

    while let Some(element) = frontier.pop() {
        // a cheaper way to this vertex was found after the element was pushed
        if element.distance > distances[element.vertex] {
            continue;
        }

        for &(vertex_to, weight) in graph.exiting_edges(element.vertex) {
            let distance = element.distance + weight;
            if distance > config.max_distance {
                continue;
            }

            // check if we can follow the current path to reach the neighbor in a cheaper way
            if distance < distances[vertex_to] {
                trace!(
                    "Relaxing {} -> {}: {} -> {distance}",
                    graph.label(element.vertex),
                    graph.label(vertex_to),
                    distances[vertex_to],
                );

                distances[vertex_to] = distance;
                previous[vertex_to] = Some(element.vertex);
                frontier.push(HeapElement {
                    distance,
                    vertex: vertex_to,
                });
            }
        }
    }

    Ok((
        DistanceMap { graph, distances },
        PredecessorMap { graph, previous },
    ))
}
