#![doc = include_str!("../README.md")]

mod error;
mod graph;
mod model;
mod routing;

pub use error::RoutingError;
pub use graph::landmarks::{LANDMARK_EDGES, build_graph};
pub use graph::path::{is_path_connected, path_distance};
pub use graph::{Graph, Neighbors};
pub use model::{Distance, Edge};
pub use routing::path::{Route, build_path, shortest_route};
pub use routing::{
    DistanceMap, PredecessorMap, ShortestPathConfig, shortest_paths, shortest_paths_with,
};
