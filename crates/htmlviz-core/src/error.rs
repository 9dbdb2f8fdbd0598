use thiserror::Error;

/// Caller-input errors raised by the graph model. All are synchronous and
/// non-recoverable by the model itself; a failed call leaves the graph
/// collections unchanged.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("negative radius not allowed: {0}")]
    NegativeRadius(f64),

    #[error("infinite radius not allowed: {0}")]
    InfiniteRadius(f64),

    #[error("edge weight must be finite (default is 1.0): {0}")]
    NonFiniteWeight(f64),

    #[error("edge must have at least one vertex")]
    DetachedEdge,

    #[error("{slot} vertex of edge not in graph: {vertex}")]
    VertexNotInGraph { slot: &'static str, vertex: String },

    #[error("both query endpoints cannot be absent")]
    EmptyEndpointQuery,
}
