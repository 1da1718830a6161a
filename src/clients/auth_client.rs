use tokio::sync::mpsc;
use tracing::{debug, instrument};

use crate::auth::AuthError;
use crate::domain::{LoginRequest, RegisterRequest, User};
use crate::messages::AuthRequest;

/// Client for the authentication provider.
#[derive(Clone)]
pub struct AuthClient {
    sender: mpsc::Sender<AuthRequest>,
}

impl AuthClient {
    pub fn new(sender: mpsc::Sender<AuthRequest>) -> Self {
        Self { sender }
    }

    pub async fn login(
        &self,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<User, AuthError> {
        self.submit_login(LoginRequest {
            email: email.into(),
            password: password.into(),
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), AuthError> {
        debug!("Sending shutdown request");
        self.sender
            .send(AuthRequest::Shutdown)
            .await
            .map_err(|e| AuthError::ActorCommunicationError(e.to_string()))
    }
}

client_method!(AuthClient => fn submit_login(request: LoginRequest) -> User as AuthRequest::Login, Error = AuthError);
client_method!(AuthClient => fn register(request: RegisterRequest) -> User as AuthRequest::Register, Error = AuthError);

#[cfg(test)]
client_method!(AuthClient => fn get_known_email_count() -> usize as AuthRequest::GetKnownEmailCount, Error = AuthError);
