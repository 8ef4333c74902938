use thiserror::Error;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("invalid graph JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{what} count {count} exceeds limit {limit}")]
    CapsExceeded { what: &'static str, count: usize, limit: usize },
    #[error("{field} of {item} is out of bounds")]
    OutOfBounds { item: String, field: &'static str },
    #[error("edge {edge} references missing vertex index {index}")]
    DanglingVertex { edge: usize, index: usize },
    #[error("no {kind} with id {id}")]
    InvalidId { kind: &'static str, id: u32 },
    #[error("load request {token} was superseded")]
    StaleLoad { token: u64 },
}

impl GraphError {
    /// Stable identifier surfaced to hosts.
    pub fn code(&self) -> &'static str {
        match self {
            GraphError::Parse(_) => "json_parse",
            GraphError::CapsExceeded { .. } => "caps_exceeded",
            GraphError::OutOfBounds { .. } => "out_of_bounds",
            GraphError::DanglingVertex { .. } => "dangling_vertex",
            GraphError::InvalidId { .. } => "invalid_id",
            GraphError::StaleLoad { .. } => "stale_load",
        }
    }
}

pub type Result<T> = std::result::Result<T, GraphError>;
