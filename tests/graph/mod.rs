use std::sync::LazyLock;

use landmark_routes::{Graph, build_graph};

pub static LANDMARK_GRAPH: LazyLock<Graph> = LazyLock::new(build_graph);
