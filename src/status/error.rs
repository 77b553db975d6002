//! Error handling for status buffer access

use std::path::PathBuf;
use thiserror::Error;

/// Failures reported by a [`StatusProvider`](super::StatusProvider).
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The status buffer for the requested instance does not exist.
    #[error("status buffer {} does not exist", path.display())]
    NotFound { path: PathBuf },

    /// I/O failure while opening or reading a status buffer.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The buffer exists but its contents are not a valid status record.
    #[error("malformed status buffer: {0}")]
    Malformed(String),
}

/// Errors surfaced by the [`StatusSource`](super::StatusSource).
#[derive(Debug, Error)]
pub enum StatusError {
    /// Attaching to an instance failed.
    #[error("Error connecting to status buffer instance {instance_id}: {source}")]
    ConnectionFailure {
        instance_id: u32,
        #[source]
        source: ProviderError,
    },

    /// Attach succeeded earlier but reading the buffer now fails.
    #[error("Error reading status buffer instance {instance_id}: {source}")]
    ReadFailure {
        instance_id: u32,
        #[source]
        source: ProviderError,
    },

    /// The requested id is outside the range of valid instance ids.
    #[error("No status buffer for instance {requested}")]
    InvalidInstanceRequest { requested: i64 },
}

impl StatusError {
    /// The instance id this error refers to, as the user asked for it.
    pub fn requested_instance(&self) -> i64 {
        match self {
            StatusError::ConnectionFailure { instance_id, .. }
            | StatusError::ReadFailure { instance_id, .. } => i64::from(*instance_id),
            StatusError::InvalidInstanceRequest { requested } => *requested,
        }
    }
}
