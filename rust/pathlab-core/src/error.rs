use thiserror::Error;

/// Failures raised by a search invocation.
///
/// Exhausting the frontier is not an error; it is reported as
/// [`Outcome::NotFound`](crate::result::Outcome::NotFound).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    #[error("node not found in graph: {0}")]
    NodeNotFound(String),
    #[error("no edge from {from} to {to}")]
    MissingEdge { from: String, to: String },
    #[error("no heuristic estimate for node {0}")]
    MissingHeuristic(String),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Failures raised while building or loading a graph and its heuristic.
#[derive(Error, Debug)]
pub enum GraphError {
    #[error("edge {from} -> {to} has invalid weight {weight}")]
    InvalidWeight { from: String, to: String, weight: f64 },
    #[error("undirected graph is asymmetric at {from} -> {to}")]
    Asymmetric { from: String, to: String },
    #[error("unknown node: {0}")]
    UnknownNode(String),
    #[error("heuristic for {node} has invalid value {value}")]
    InvalidHeuristic { node: String, value: f64 },
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SearchError>;
