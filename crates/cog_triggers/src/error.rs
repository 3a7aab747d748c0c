//! Error types for trigger checks

use thiserror::Error;

/// Boxed error returned by contact callbacks
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Trigger check errors
#[derive(Debug, Error)]
pub enum TriggerError {
    /// The contact callback reported a failure. The actor's shape has
    /// already been restored when this is returned.
    #[error("Contact callback failed: {0}")]
    Callback(#[source] BoxError),
}

/// Result type for trigger operations
pub type Result<T> = std::result::Result<T, TriggerError>;
