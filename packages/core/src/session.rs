//! Client-side session: the bearer token and the signed-in user.
//!
//! The session lives in a synchronous key-value store ([`KeyValueStore`])
//! under three slots (see [`keys`]). [`Session`] owns a store and is the only
//! place that reads or writes those slots, so the "token and user are cleared
//! together" rule is enforced in one spot.
//!
//! | Implementation | When to use |
//! |----------------|-------------|
//! | [`MemoryStore`] | Tests, throwaway clients |
//! | `FileStore` (in `paintshop-client`) | Durable sessions for the CLI |

use std::collections::HashMap;
use std::sync::RwLock;

use serde_json::Value;
use thiserror::Error;

/// Storage slot names.
pub mod keys {
    pub const AUTH_TOKEN: &str = "auth_token";
    pub const USER: &str = "user";
    pub const ADMIN_LOGGED_IN: &str = "adminLoggedIn";
}

/// Errors a [`KeyValueStore`] can return.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("session store I/O failed: {0}")]
    Io(String),

    #[error("session store is corrupt: {0}")]
    Corrupt(String),
}

/// A synchronous string key-value store.
///
/// Implementations use interior mutability so a store can be shared behind
/// an `Arc`. Removing a missing key is not an error.
pub trait KeyValueStore: Send + Sync + 'static {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// In-memory [`KeyValueStore`]; contents are lost when dropped.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let map = self.inner.read().map_err(|e| StoreError::Io(e.to_string()))?;
        Ok(map.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut map = self.inner.write().map_err(|e| StoreError::Io(e.to_string()))?;
        map.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut map = self.inner.write().map_err(|e| StoreError::Io(e.to_string()))?;
        map.remove(key);
        Ok(())
    }
}

/// The authenticated identity held between requests.
pub struct Session {
    store: Box<dyn KeyValueStore>,
}

impl Session {
    pub fn new(store: impl KeyValueStore) -> Self {
        Self {
            store: Box::new(store),
        }
    }

    /// A session backed by a fresh [`MemoryStore`].
    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new())
    }

    /// The stored bearer token, if any.
    pub fn token(&self) -> Result<Option<String>, StoreError> {
        self.store.get(keys::AUTH_TOKEN)
    }

    pub fn set_token(&self, token: &str) -> Result<(), StoreError> {
        self.store.set(keys::AUTH_TOKEN, token)
    }

    /// The stored user object, decoded from its JSON slot.
    pub fn user(&self) -> Result<Option<Value>, StoreError> {
        match self.store.get(keys::USER)? {
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|e| StoreError::Corrupt(format!("user slot: {e}"))),
            None => Ok(None),
        }
    }

    pub fn set_user(&self, user: &Value) -> Result<(), StoreError> {
        self.store.set(keys::USER, &user.to_string())
    }

    /// `true` when a token is stored.
    pub fn is_authenticated(&self) -> bool {
        matches!(self.token(), Ok(Some(_)))
    }

    /// `true` when the admin console marker is set.
    pub fn is_admin(&self) -> bool {
        matches!(self.store.get(keys::ADMIN_LOGGED_IN), Ok(Some(_)))
    }

    pub fn mark_admin(&self) -> Result<(), StoreError> {
        self.store.set(keys::ADMIN_LOGGED_IN, "true")
    }

    /// Store the token and user of a successful login in one step.
    pub fn establish(&self, token: &str, user: &Value) -> Result<(), StoreError> {
        self.set_token(token)?;
        self.set_user(user)
    }

    /// Remove the token and the user together.
    pub fn clear(&self) -> Result<(), StoreError> {
        self.store.remove(keys::AUTH_TOKEN)?;
        self.store.remove(keys::USER)
    }

    /// [`clear`](Self::clear) plus the admin marker.
    pub fn clear_admin(&self) -> Result<(), StoreError> {
        self.clear()?;
        self.store.remove(keys::ADMIN_LOGGED_IN)
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .field("admin", &self.is_admin())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_session_is_anonymous() {
        let s = Session::in_memory();
        assert_eq!(s.token().unwrap(), None);
        assert_eq!(s.user().unwrap(), None);
        assert!(!s.is_authenticated());
    }

    #[test]
    fn establish_then_clear() {
        let s = Session::in_memory();
        s.establish("tok-1", &json!({"id": 7, "name": "Ada"})).unwrap();
        assert!(s.is_authenticated());
        assert_eq!(s.user().unwrap().unwrap()["name"], "Ada");

        s.clear().unwrap();
        assert_eq!(s.token().unwrap(), None);
        assert_eq!(s.user().unwrap(), None);
    }

    #[test]
    fn clear_leaves_admin_marker_but_clear_admin_removes_it() {
        let s = Session::in_memory();
        s.set_token("t").unwrap();
        s.mark_admin().unwrap();

        s.clear().unwrap();
        assert!(s.is_admin());

        s.clear_admin().unwrap();
        assert!(!s.is_admin());
    }

    #[test]
    fn corrupt_user_slot_is_reported() {
        let store = MemoryStore::new();
        store.set(keys::USER, "{not json").unwrap();
        let s = Session::new(store);
        assert!(matches!(s.user(), Err(StoreError::Corrupt(_))));
    }

    #[test]
    fn debug_does_not_leak_token() {
        let s = Session::in_memory();
        s.set_token("secret-token").unwrap();
        assert!(!format!("{s:?}").contains("secret-token"));
    }
}
