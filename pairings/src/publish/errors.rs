//! Publish error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors reported by a [`Publisher`](super::Publisher)
#[derive(Debug, Error)]
pub enum PublishError {
    /// The rendered file could not be read or copied locally
    #[error("Failed to access {path}: {source}")]
    Local {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The remote side rejected the transfer
    #[error("Transfer to {destination} failed: {reason}")]
    Transfer { destination: String, reason: String },

    /// The transfer task did not run to completion
    #[error("Publish task failed: {0}")]
    Task(String),
}

/// Result type for publish operations
pub type PublishResult<T> = Result<T, PublishError>;
