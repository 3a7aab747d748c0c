//! Error types for circuit entities

use thiserror::Error;

/// Circuit entity errors
#[derive(Debug, Error)]
pub enum CircuitError {
    /// Entity data could not be parsed
    #[error("Invalid fuse box data: {0}")]
    LevelData(#[from] serde_json::Error),
}

/// Result type for circuit operations
pub type Result<T> = std::result::Result<T, CircuitError>;
