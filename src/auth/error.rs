use thiserror::Error;

/// Errors that can occur while authenticating.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Registration failed: {0}")]
    RegistrationFailed(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
