//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::NodeId;

/// Domain errors represent violations of the chain structure or of a lookup request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("hop count {requested} out of range: chain ends after {available} hop(s)")]
    OutOfRange { requested: usize, available: usize },

    #[error("invalid hop count: {0} (must be non-negative)")]
    InvalidArgument(i64),

    #[error("node not found: {0}")]
    NodeNotFound(NodeId),

    #[error("cycle detected: linking {node} -> {successor} closes a loop")]
    CycleDetected { node: NodeId, successor: NodeId },
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
