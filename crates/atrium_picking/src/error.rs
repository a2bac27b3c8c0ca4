//! Picking error types

use thiserror::Error;

use crate::scene::NodeId;

/// Scene graph errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PickError {
    #[error("Node not found: {0}")]
    NodeNotFound(NodeId),

    #[error("Invalid node shape for '{name}': {reason}")]
    InvalidShape { name: String, reason: String },
}

/// Picking result type
pub type Result<T> = std::result::Result<T, PickError>;
