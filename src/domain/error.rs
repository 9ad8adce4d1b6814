//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::arena::NodeId;

/// Domain errors represent violations of the graph construction rules.
/// Failing to find a path or key is not an error; queries return `None`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("entry #{position} '{key}' names parent '{parent}' which has not been seen yet")]
    MissingParent {
        key: String,
        parent: String,
        position: usize,
    },

    #[error("cycle detected: '{parent}' is already reachable from '{key}'")]
    CycleDetected { key: String, parent: String },

    #[error("unknown node: {0:?}")]
    UnknownNode(NodeId),
}

/// Result type for graph operations.
pub type DomainResult<T> = Result<T, DomainError>;
