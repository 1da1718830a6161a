//! The authenticated identity, persisted across restarts under one key.

pub mod error;
pub mod storage;

pub use error::*;
pub use storage::*;

use tracing::{debug, error, info, instrument, warn};

use crate::domain::User;

/// Storage key holding the serialized identity.
pub const SESSION_KEY: &str = "foodfrenzy_user";

/// Holds the current identity and writes every change through to storage.
///
/// The identity is trusted as given; whoever authenticated it is responsible
/// for its shape.
pub struct SessionStore<S: SessionStorage> {
    storage: S,
    user: Option<User>,
}

impl<S: SessionStorage> SessionStore<S> {
    /// Loads the persisted identity, if any.
    ///
    /// Missing, unreadable, or corrupt data all mean "logged out"; this never fails.
    #[instrument(name = "session_restore", skip(storage))]
    pub fn restore(storage: S) -> Self {
        let user = match storage.load(SESSION_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<User>(&raw) {
                Ok(user) => {
                    info!(user_id = %user.id, role = ?user.role, "Session restored");
                    Some(user)
                }
                Err(e) => {
                    warn!(error = %e, "Stored session is corrupt, starting logged out");
                    None
                }
            },
            Ok(None) => {
                debug!("No stored session");
                None
            }
            Err(e) => {
                warn!(error = %e, "Session storage unreadable, starting logged out");
                None
            }
        };
        Self { storage, user }
    }

    /// Replaces the current identity and persists it.
    ///
    /// The in-memory identity is replaced even if persisting fails.
    #[instrument(fields(user_id = %user.id, email = %user.email), skip(self, user))]
    pub fn login(&mut self, user: User) -> Result<(), SessionError> {
        let serialized = serde_json::to_string(&user);
        self.user = Some(user);

        let result = serialized
            .map_err(SessionError::from)
            .and_then(|raw| self.storage.store(SESSION_KEY, &raw));
        match &result {
            Ok(()) => info!("Session started"),
            Err(e) => error!(error = %e, "Failed to persist session"),
        }
        result
    }

    /// Clears the identity in memory and in storage.
    #[instrument(skip(self))]
    pub fn logout(&mut self) -> Result<(), SessionError> {
        self.user = None;
        let result = self.storage.remove(SESSION_KEY);
        match &result {
            Ok(()) => info!("Session ended"),
            Err(e) => error!(error = %e, "Failed to clear persisted session"),
        }
        result
    }

    pub fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(User::is_admin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Role;
    use tempfile::tempdir;

    fn admin() -> User {
        User::new("user_1", "Admin", "admin@foodfrenzy.com", Role::Admin)
    }

    #[test]
    fn test_login_survives_restart() {
        let storage = MemoryStorage::new();
        let mut session = SessionStore::restore(storage.clone());
        assert!(!session.is_authenticated());

        session.login(admin()).unwrap();
        assert!(session.is_authenticated());
        assert!(session.is_admin());
        drop(session);

        let restored = SessionStore::restore(storage);
        assert_eq!(restored.current_user(), Some(&admin()));
        assert!(restored.is_admin());
    }

    #[test]
    fn test_logout_clears_memory_and_storage() {
        let storage = MemoryStorage::new();
        let mut session = SessionStore::restore(storage.clone());
        session
            .login(User::new("user_2", "User", "jane@example.com", Role::User))
            .unwrap();
        assert!(!session.is_admin());

        session.logout().unwrap();
        assert!(!session.is_authenticated());
        assert_eq!(storage.load(SESSION_KEY).unwrap(), None);
        assert!(!SessionStore::restore(storage).is_authenticated());
    }

    #[test]
    fn test_corrupt_session_fails_open() {
        let mut storage = MemoryStorage::new();
        storage.store(SESSION_KEY, "{not json").unwrap();

        let session = SessionStore::restore(storage);
        assert!(!session.is_authenticated());
        assert!(!session.is_admin());
    }

    #[test]
    fn test_file_backed_session_persists() {
        let dir = tempdir().unwrap();

        let mut session = SessionStore::restore(FileStorage::new(dir.path()));
        session.login(admin()).unwrap();

        let restored = SessionStore::restore(FileStorage::new(dir.path()));
        assert_eq!(restored.current_user().map(|u| u.id.as_str()), Some("user_1"));
    }

    struct BrokenStorage;

    impl SessionStorage for BrokenStorage {
        fn load(&self, _key: &str) -> Result<Option<String>, SessionError> {
            Err(std::io::Error::other("disk on fire").into())
        }
        fn store(&mut self, _key: &str, _value: &str) -> Result<(), SessionError> {
            Err(std::io::Error::other("disk on fire").into())
        }
        fn remove(&mut self, _key: &str) -> Result<(), SessionError> {
            Ok(())
        }
    }

    #[test]
    fn test_storage_failures() {
        let mut session = SessionStore::restore(BrokenStorage);
        assert!(!session.is_authenticated());

        let result = session.login(admin());
        assert!(matches!(result, Err(SessionError::Io(_))));
        assert!(session.is_admin());
    }
}
