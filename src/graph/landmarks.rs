//! The fixed network of Kuala Lumpur landmarks.

use crate::{Edge, Graph};

/// Directed road links between landmarks, weighted in abstract distance units.
pub const LANDMARK_EDGES: [Edge<'static>; 13] = [
    Edge::new("KLIA", "Putrajaya", 30.0),
    Edge::new("Putrajaya", "Berjaya Times Square", 30.0),
    Edge::new("Putrajaya", "Merdeka 118", 15.0),
    Edge::new("Merdeka 118", "Berjaya Times Square", 10.0),
    Edge::new("Merdeka 118", "Exchange 106 @ TRX", 8.0),
    Edge::new("Berjaya Times Square", "Petronas Twin Towers", 20.0),
    Edge::new("Petronas Twin Towers", "Merdeka Square", 20.0),
    Edge::new("Merdeka Square", "KL Tower", 15.0),
    Edge::new("Berjaya Times Square", "Bukit Bintang", 10.0),
    Edge::new("Bukit Bintang", "Exchange 106 @ TRX", 5.0),
    Edge::new("Bukit Bintang", "Merdeka Square", 3.0),
    Edge::new("Exchange 106 @ TRX", "Tabung Haji Tower", 20.0),
    Edge::new("KL Tower", "Tabung Haji Tower", 30.0),
];

/// Builds the landmark graph from [`LANDMARK_EDGES`].
pub fn build_graph() -> Graph {
    Graph::from_edges(LANDMARK_EDGES)
}
