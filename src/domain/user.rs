use std::fmt;

use serde::{Deserialize, Serialize};

/// Access level of an authenticated identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    #[default]
    User,
    Admin,
}

/// An authenticated identity as returned by the auth provider.
///
/// Immutable once issued; the session store replaces it wholesale on login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl User {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            role,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Payload for a login attempt.
///
/// Implements `Debug` manually to redact the password.
#[derive(Clone)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Payload for creating a new account.
#[derive(Clone)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("role", &self.role)
            .finish()
    }
}

impl RegisterRequest {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_wire_format() {
        let user = User::new("user_1", "Admin", "admin@foodfrenzy.com", Role::Admin);
        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("\"role\":\"ADMIN\""));

        let back: User = serde_json::from_str(&json).unwrap();
        assert_eq!(back, user);
        assert!(back.is_admin());
    }

    #[test]
    fn test_debug_hides_password() {
        let request = LoginRequest {
            email: "jane@example.com".to_string(),
            password: "hunter2".to_string(),
        };
        let printed = format!("{:?}", request);
        assert!(printed.contains("jane@example.com"));
        assert!(!printed.contains("hunter2"));
    }
}
