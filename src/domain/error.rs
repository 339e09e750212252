use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("unknown airport: {0}")]
    UnknownLabel(String),

    #[error("vertex {vertex} is out of range for {vertex_count} registered airports")]
    OutOfRange { vertex: usize, vertex_count: usize },
}
