use tokio::sync::oneshot;

use crate::auth::AuthError;
use crate::domain::{LoginRequest, RegisterRequest, User};

/// Generic type aliases for service communication
pub type ServiceResult<T, E> = std::result::Result<T, E>;
pub type ServiceResponse<T, E> = oneshot::Sender<ServiceResult<T, E>>;

/// Typed messages for the hand-written services. Each variant carries its
/// parameters and a oneshot channel for the reply.
#[derive(Debug)]
pub enum AuthRequest {
    Login {
        request: LoginRequest,
        respond_to: ServiceResponse<User, AuthError>,
    },
    Register {
        request: RegisterRequest,
        respond_to: ServiceResponse<User, AuthError>,
    },
    Shutdown,
    #[cfg(test)]
    GetKnownEmailCount {
        respond_to: ServiceResponse<usize, AuthError>,
    },
}
