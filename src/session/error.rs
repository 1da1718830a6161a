use thiserror::Error;

/// Errors from the durable session storage.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Session storage I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Session serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Session storage lock poisoned")]
    Poisoned,
}
