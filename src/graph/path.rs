use crate::{Distance, Graph};

/// Returns true only if all the nodes of the path are sequentially connected by a directed edge
/// in the given graph. Empty and single node paths are trivially connected.
pub fn is_path_connected(graph: &Graph, path: &[&str]) -> bool {
    path_distance(graph, path).is_some()
}

/// Gets the sum of the edge weights along the path.
/// Returns None if any two consecutive nodes of the path are not joined by an edge.
pub fn path_distance(graph: &Graph, path: &[&str]) -> Option<Distance> {
    path.windows(2)
        .map(|window| graph.weight(window[0], window[1]))
        .sum()
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::graph::tests::LANDMARK_GRAPH;

    #[test]
    fn path_distance_001() {
        let graph: &Graph = &LANDMARK_GRAPH;

        let path = [
            "KLIA",
            "Putrajaya",
            "Merdeka 118",
            "Berjaya Times Square",
            "Bukit Bintang",
            "Merdeka Square",
            "KL Tower",
        ];
        assert_eq!(path_distance(graph, &path), Some(Distance::from_units(83.0)));
        assert!(is_path_connected(graph, &path));
    }

    #[test]
    fn path_distance_002() {
        let graph: &Graph = &LANDMARK_GRAPH;

        let path = [
            "KLIA",
            "Putrajaya",
            "Berjaya Times Square",
            "Petronas Twin Towers",
            "Merdeka Square",
            "KL Tower",
        ];
        assert_eq!(path_distance(graph, &path), Some(Distance::from_units(115.0)));
    }

    #[test]
    fn path_distance_003() {
        let graph: &Graph = &LANDMARK_GRAPH;

        assert_eq!(path_distance(graph, &[]), Some(Distance::ZERO));
        assert_eq!(path_distance(graph, &["KLIA"]), Some(Distance::ZERO));
        assert!(is_path_connected(graph, &["Batu Caves"]));
    }

    #[test]
    fn path_distance_004() {
        let graph: &Graph = &LANDMARK_GRAPH;

        // against the edge direction
        assert_eq!(path_distance(graph, &["Putrajaya", "KLIA"]), None);
        assert!(!is_path_connected(graph, &["Putrajaya", "KLIA"]));

        // skipping a node
        assert!(!is_path_connected(graph, &["KLIA", "Merdeka 118"]));
    }
}
