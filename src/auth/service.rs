use std::collections::HashMap;

use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

use super::AuthError;
use crate::clients::AuthClient;
use crate::domain::{LoginRequest, RegisterRequest, Role, User};
use crate::messages::{AuthRequest, ServiceResponse};

/// Macro for clean error response handling
macro_rules! send_error {
    ($respond_to:expr, $error:expr) => {{
        let _ = $respond_to.send(Err($error));
        return;
    }};
}

/// Stand-in for the remote authentication provider.
///
/// Accepts any non-empty credentials. The role is decided here and handed out
/// as a [`Role`]; nothing downstream looks at the email again.
pub struct AuthService {
    receiver: mpsc::Receiver<AuthRequest>,
    admin_email: String,
    // Same email, same id, for the lifetime of the process.
    known_emails: HashMap<String, String>,
    next_id: u64,
}

impl AuthService {
    pub fn new(buffer_size: usize, admin_email: impl Into<String>) -> (Self, AuthClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self {
            receiver,
            admin_email: admin_email.into(),
            known_emails: HashMap::new(),
            next_id: 1,
        };
        (service, AuthClient::new(sender))
    }

    #[instrument(name = "auth_service", skip(self))]
    pub async fn run(mut self) {
        info!("AuthService starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                AuthRequest::Login { request, respond_to } => {
                    self.handle_login(request, respond_to);
                }
                AuthRequest::Register { request, respond_to } => {
                    self.handle_register(request, respond_to);
                }
                AuthRequest::Shutdown => {
                    info!("AuthService shutting down");
                    break;
                }
                #[cfg(test)]
                AuthRequest::GetKnownEmailCount { respond_to } => {
                    let _ = respond_to.send(Ok(self.known_emails.len()));
                }
            }
        }

        info!("AuthService stopped");
    }

    fn id_for(&mut self, email: &str, fresh: bool) -> String {
        if !fresh {
            if let Some(id) = self.known_emails.get(email) {
                return id.clone();
            }
        }
        let id = format!("user_{}", self.next_id);
        self.next_id += 1;
        self.known_emails.insert(email.to_string(), id.clone());
        id
    }

    /// **Security:** the password is never logged.
    #[instrument(fields(email = %request.email), skip(self, request, respond_to))]
    fn handle_login(&mut self, request: LoginRequest, respond_to: ServiceResponse<User, AuthError>) {
        debug!("Processing login request");

        let email = request.email.trim();
        if email.is_empty() || request.password.is_empty() {
            warn!("Login rejected: missing credentials");
            send_error!(respond_to, AuthError::InvalidCredentials);
        }

        let (name, role) = if email == self.admin_email.trim() {
            ("Admin", Role::Admin)
        } else {
            ("User", Role::User)
        };
        let user = User::new(self.id_for(email, false), name, email, role);

        info!(user_id = %user.id, role = ?user.role, "Login successful");
        let _ = respond_to.send(Ok(user));
    }

    /// Registration hands back exactly the requested role. No uniqueness check:
    /// registering a known email issues a new id.
    #[instrument(fields(email = %request.email, role = ?request.role), skip(self, request, respond_to))]
    fn handle_register(
        &mut self,
        request: RegisterRequest,
        respond_to: ServiceResponse<User, AuthError>,
    ) {
        debug!("Processing register request");

        let email = request.email.trim();
        let name = request.name.trim();
        if email.is_empty() || name.is_empty() || request.password.is_empty() {
            warn!("Registration rejected: missing fields");
            send_error!(
                respond_to,
                AuthError::RegistrationFailed("name, email and password are required".to_string())
            );
        }

        let user = User::new(self.id_for(email, true), name, email, request.role);

        info!(user_id = %user.id, "Registration successful");
        let _ = respond_to.send(Ok(user));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::DEFAULT_ADMIN_EMAIL;

    fn spawn_auth() -> AuthClient {
        let (service, client) = AuthService::new(10, DEFAULT_ADMIN_EMAIL);
        tokio::spawn(service.run());
        client
    }

    #[tokio::test]
    async fn test_admin_email_yields_admin_role() {
        let client = spawn_auth();

        let admin = client
            .login("admin@foodfrenzy.com", "anything")
            .await
            .unwrap();
        assert_eq!(admin.role, Role::Admin);
        assert_eq!(admin.name, "Admin");

        let user = client.login("jane@example.com", "pw").await.unwrap();
        assert_eq!(user.role, Role::User);
        assert_eq!(user.email, "jane@example.com");
    }

    #[tokio::test]
    async fn test_admin_match_is_exact() {
        let client = spawn_auth();

        let shouted = client.login("ADMIN@FOODFRENZY.COM", "pw").await.unwrap();
        assert_eq!(shouted.role, Role::User);
        assert_eq!(shouted.name, "User");

        let padded = client.login("  admin@foodfrenzy.com ", "pw").await.unwrap();
        assert_eq!(padded.role, Role::Admin);
    }

    #[tokio::test]
    async fn test_login_reuses_the_id_for_an_email() {
        let client = spawn_auth();

        let first = client.login("jane@example.com", "pw").await.unwrap();
        let again = client.login("jane@example.com", "other").await.unwrap();
        let other = client.login("bob@example.com", "pw").await.unwrap();

        assert_eq!(first.id, again.id);
        assert_ne!(first.id, other.id);
        assert_eq!(client.get_known_email_count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_empty_credentials_fail() {
        let client = spawn_auth();

        let result = client.login("  ", "pw").await;
        assert_eq!(result, Err(AuthError::InvalidCredentials));

        let result = client.login("jane@example.com", "").await;
        assert_eq!(result, Err(AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_register_keeps_requested_role() {
        let client = spawn_auth();

        let request = RegisterRequest::new("Chef", "chef@example.com", "pw", Role::Admin);
        let user = client.register(request).await.unwrap();
        assert_eq!(user.role, Role::Admin);
        assert_eq!(user.name, "Chef");

        let request = RegisterRequest::new("", "x@example.com", "pw", Role::User);
        assert!(matches!(
            client.register(request).await,
            Err(AuthError::RegistrationFailed(_))
        ));
    }
}
