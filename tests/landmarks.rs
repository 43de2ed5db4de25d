mod graph;

use landmark_routes::{Distance, Edge, Graph, LANDMARK_EDGES, build_graph};
use test_log::test;

use crate::graph::LANDMARK_GRAPH;

#[test]
fn landmarks_graph_001() {
    let graph: &Graph = &LANDMARK_GRAPH;

    // every edge endpoint is a node, and every node is an edge endpoint
    for node in graph.nodes() {
        assert!(
            LANDMARK_EDGES
                .iter()
                .any(|edge| edge.from == node || edge.to == node)
        );
    }
    for edge in LANDMARK_EDGES {
        assert!(graph.contains(edge.from) && graph.contains(edge.to));
    }
}

#[test]
fn landmarks_graph_002() {
    // node listing is stable across constructions
    let first = build_graph();
    let second = build_graph();

    assert_eq!(
        first.nodes().collect::<Vec<_>>(),
        second.nodes().collect::<Vec<_>>()
    );
    assert_eq!(
        first.edges().collect::<Vec<_>>(),
        second.edges().collect::<Vec<_>>()
    );
}

#[test]
fn landmarks_graph_003() {
    let graph: &Graph = &LANDMARK_GRAPH;

    assert_eq!(
        graph.neighbors("Merdeka 118").collect::<Vec<_>>(),
        ["Berjaya Times Square", "Exchange 106 @ TRX"]
    );
    assert_eq!(
        graph.neighbors("KL Tower").collect::<Vec<_>>(),
        ["Tabung Haji Tower"]
    );
    assert!(graph.neighbors("Tabung Haji Tower").next().is_none());
}

#[test]
fn landmarks_graph_004() {
    let graph: &Graph = &LANDMARK_GRAPH;

    let edges: Vec<_> = graph.edges().filter(|e| e.from == "Berjaya Times Square").collect();
    assert_eq!(
        edges,
        [
            Edge::new("Berjaya Times Square", "Petronas Twin Towers", 20.0),
            Edge::new("Berjaya Times Square", "Bukit Bintang", 10.0),
        ]
    );

    let total: Distance = graph.edges().map(|e| e.weight).sum();
    assert_eq!(total, Distance::from_units(216.0));
}
