use std::slice;

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::{Distance, Edge};

/// Immutable directed weighted graph of labelled nodes.
///
/// Nodes are auto-created the first time an edge references them and are listed in that
/// first-seen order. Outgoing edges of a node keep their insertion order.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    labels: Vec<Box<str>>,
    indices: FxHashMap<Box<str>, usize>,
    adjacency: Vec<Vec<(usize, Distance)>>,
}

impl Graph {
    /// Builds the graph from a list of directed edges.
    ///
    /// Edge weights must be non-negative. If the same (from, to) pair is given more than once
    /// the last weight wins, while the neighbor keeps the position of its first occurrence.
    pub fn from_edges<'a>(edges: impl IntoIterator<Item = Edge<'a>>) -> Self {
        let mut graph = Self::default();

        for Edge { from, to, weight } in edges {
            debug_assert!(!weight.is_negative(), "{from} -> {to} has negative weight {weight}");

            let from = graph.insert_node(from);
            let to = graph.insert_node(to);
            let exiting = &mut graph.adjacency[from];

            match exiting.iter_mut().find(|(v, _)| *v == to) {
                Some((_, w)) => {
                    debug!(
                        "Replacing weight {w} with {weight} on {} -> {}",
                        graph.labels[from], graph.labels[to]
                    );
                    *w = weight;
                }
                None => exiting.push((to, weight)),
            }
        }

        graph
    }

    fn insert_node(&mut self, label: &str) -> usize {
        if let Some(&index) = self.indices.get(label) {
            return index;
        }

        let index = self.labels.len();
        self.labels.push(label.into());
        self.indices.insert(label.into(), index);
        self.adjacency.push(vec![]);
        index
    }

    /// Gets an iterator over every node of the graph, in first-seen order.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = &str> {
        self.labels.iter().map(|label| &**label)
    }

    pub fn contains(&self, node: &str) -> bool {
        self.indices.contains_key(node)
    }

    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Gets an iterator over the nodes directly reachable from the given node.
    /// Returns an empty iterator if the node has no outgoing edges or doesn't belong to the graph.
    pub fn neighbors(&self, node: &str) -> Neighbors<'_> {
        let edges = self
            .index_of(node)
            .map(|index| self.adjacency[index].as_slice())
            .unwrap_or_default();

        Neighbors {
            graph: self,
            edges: edges.iter(),
        }
    }

    /// Number of outgoing edges of the node, zero if the node doesn't belong to the graph.
    pub fn out_degree(&self, node: &str) -> usize {
        self.neighbors(node).len()
    }

    /// Gets the weight of the directed edge, None if there is no such edge.
    pub fn weight(&self, from: &str, to: &str) -> Option<Distance> {
        let to = self.index_of(to)?;
        self.index_of(from)
            .and_then(|from| self.adjacency[from].iter().find(|(v, _)| *v == to))
            .map(|&(_, weight)| weight)
    }

    /// Gets an iterator over all the edges, grouped by start node in node order.
    pub fn edges(&self) -> impl Iterator<Item = Edge<'_>> {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(move |(from, exiting)| {
                exiting.iter().map(move |&(to, weight)| Edge {
                    from: self.label(from),
                    to: self.label(to),
                    weight,
                })
            })
    }

    pub(crate) fn index_of(&self, node: &str) -> Option<usize> {
        self.indices.get(node).copied()
    }

    pub(crate) fn label(&self, index: usize) -> &str {
        &self.labels[index]
    }

    pub(crate) fn exiting_edges(&self, index: usize) -> &[(usize, Distance)] {
        &self.adjacency[index]
    }
}

/// Iterator over the nodes at the end of the outgoing edges of a node.
#[derive(Debug, Clone)]
pub struct Neighbors<'g> {
    graph: &'g Graph,
    edges: slice::Iter<'g, (usize, Distance)>,
}

impl<'g> Iterator for Neighbors<'g> {
    type Item = &'g str;

    fn next(&mut self) -> Option<Self::Item> {
        self.edges.next().map(|&(to, _)| self.graph.label(to))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.edges.size_hint()
    }
}

impl ExactSizeIterator for Neighbors<'_> {}

pub mod landmarks;
pub mod path;
