//! Error types for the movement system

use thiserror::Error;

/// Movement and collision errors
#[derive(Debug, Error)]
pub enum PhysicsError {
    /// A movement constant is negative, zero where it must not be, or not finite
    #[error("Invalid movement configuration: {0}")]
    InvalidConfig(String),

    /// A wall volume has a degenerate or non-finite shape
    #[error("Invalid wall #{index}: {reason}")]
    InvalidWall { index: usize, reason: String },
}

/// Result type for movement operations
pub type Result<T> = std::result::Result<T, PhysicsError>;
