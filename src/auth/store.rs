use std::sync::{Arc, RwLock};

use tracing::{debug, warn};

use crate::models::User;
use crate::storage::{Storage, TOKEN_KEY, USER_KEY};

#[derive(Debug, Default, Clone)]
struct SessionState {
    token: Option<String>,
    user: Option<User>,
}

/// Process-wide session store.
///
/// Mutations write durable storage first, then swap the in-memory state
/// under a single write guard, so readers never observe a token without
/// its user or vice versa. Both `logout` paths - explicit user action and
/// the API client's 401 handler - converge here.
pub struct SessionStore {
    storage: Arc<dyn Storage>,
    state: RwLock<SessionState>,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            storage,
            state: RwLock::new(SessionState::default()),
        }
    }

    /// Populate the session from durable storage. Only a token paired
    /// with a parseable user counts; anything else leaves the session
    /// unauthenticated. Idempotent.
    pub fn init(&self) {
        let token = self.storage.get(TOKEN_KEY);
        let user = self.storage.get(USER_KEY).and_then(|raw| {
            match serde_json::from_str::<User>(&raw) {
                Ok(user) => Some(user),
                Err(e) => {
                    warn!(error = %e, "Failed to parse stored user profile");
                    None
                }
            }
        });

        if let (Some(token), Some(user)) = (token, user) {
            debug!(user = %user.name, "Restored session from storage");
            let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
            *state = SessionState {
                token: Some(token),
                user: Some(user),
            };
        }
    }

    /// Persist the credentials, then replace the in-memory session
    /// wholesale. No token-shape validation happens here.
    pub fn login(&self, user: User, token: String) {
        self.storage.set(TOKEN_KEY, &token);
        match serde_json::to_string(&user) {
            Ok(raw) => self.storage.set(USER_KEY, &raw),
            Err(e) => warn!(error = %e, "Failed to serialize user profile"),
        }

        debug!(user = %user.name, "Session established");
        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
        *state = SessionState {
            token: Some(token),
            user: Some(user),
        };
    }

    /// Remove the credentials from durable storage, then clear the
    /// in-memory session wholesale.
    pub fn logout(&self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(USER_KEY);

        debug!("Session cleared");
        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
        *state = SessionState::default();
    }

    /// The current user, if authenticated.
    pub fn user(&self) -> Option<User> {
        let state = self.state.read().unwrap_or_else(|e| e.into_inner());
        state.user.clone()
    }

    /// The in-memory bearer token, if authenticated.
    pub fn token(&self) -> Option<String> {
        let state = self.state.read().unwrap_or_else(|e| e.into_inner());
        state.token.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        let state = self.state.read().unwrap_or_else(|e| e.into_inner());
        state.token.is_some()
    }

    /// Read the bearer token directly from durable storage. The API
    /// client uses this on every outgoing request.
    pub fn stored_token(&self) -> Option<String> {
        self.storage.get(TOKEN_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn alice() -> User {
        User {
            id: 1,
            name: "alice".to_string(),
            email: None,
            created_at: "2025-01-01T00:00:00Z".to_string(),
            updated_at: "2025-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_login_is_immediately_observable() {
        let storage = Arc::new(MemoryStorage::new());
        let store = SessionStore::new(storage.clone());

        assert!(!store.is_authenticated());
        store.login(alice(), "abc".to_string());

        assert!(store.is_authenticated());
        assert_eq!(store.user().unwrap().name, "alice");
        assert_eq!(store.token().as_deref(), Some("abc"));
        // Durable storage holds both entries
        assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("abc"));
        assert!(storage.get(USER_KEY).is_some());
    }

    #[test]
    fn test_logout_is_immediately_observable() {
        let storage = Arc::new(MemoryStorage::new());
        let store = SessionStore::new(storage.clone());

        store.login(alice(), "abc".to_string());
        store.logout();

        assert!(!store.is_authenticated());
        assert!(store.user().is_none());
        assert!(store.token().is_none());
        assert!(storage.get(TOKEN_KEY).is_none());
        assert!(storage.get(USER_KEY).is_none());
    }

    #[test]
    fn test_init_restores_persisted_session() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set(TOKEN_KEY, "abc");
        storage.set(USER_KEY, &serde_json::to_string(&alice()).unwrap());

        let store = SessionStore::new(storage);
        assert!(!store.is_authenticated());

        store.init();
        assert!(store.is_authenticated());
        assert_eq!(store.user().unwrap().id, 1);

        // Idempotent
        store.init();
        assert!(store.is_authenticated());
    }

    #[test]
    fn test_init_requires_both_entries() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set(TOKEN_KEY, "abc");

        let store = SessionStore::new(storage);
        store.init();
        assert!(!store.is_authenticated());
        assert!(store.user().is_none());
    }

    #[test]
    fn test_init_rejects_unparseable_user() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set(TOKEN_KEY, "abc");
        storage.set(USER_KEY, "not json");

        let store = SessionStore::new(storage);
        store.init();
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_login_replaces_previous_session() {
        let storage = Arc::new(MemoryStorage::new());
        let store = SessionStore::new(storage.clone());

        store.login(alice(), "abc".to_string());
        let bob = User {
            id: 2,
            name: "bob".to_string(),
            ..alice()
        };
        store.login(bob, "def".to_string());

        assert_eq!(store.user().unwrap().name, "bob");
        assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("def"));
    }

    #[test]
    fn test_stored_token_reads_storage_directly() {
        let storage = Arc::new(MemoryStorage::new());
        let store = SessionStore::new(storage.clone());

        assert!(store.stored_token().is_none());
        storage.set(TOKEN_KEY, "external");
        assert_eq!(store.stored_token().as_deref(), Some("external"));
    }
}
