use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum RoutingError {
    #[error("Node {0:?} does not belong to the graph")]
    UnknownNode(String),
}
