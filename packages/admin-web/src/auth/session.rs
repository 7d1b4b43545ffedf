//! Persisted session: bearer token plus the cached administrator object
//!
//! Every read and write of the stored credentials goes through [`Session`].

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::types::AdminUser;

const TOKEN_KEY: &str = "token";
const USER_KEY: &str = "usuario";

/// Error type for storage operations
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Storage unavailable")]
    Unavailable,

    #[error("Storage write failed for key {0}")]
    Write(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Key-value storage that survives a page reload.
pub trait TokenStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str);
}

/// In-process storage, used outside the browser and in tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// `window.localStorage`
#[cfg(feature = "web")]
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserStorage;

#[cfg(feature = "web")]
impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

#[cfg(feature = "web")]
impl TokenStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = Self::storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|_| StorageError::Write(key.to_string()))
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// Typed access to the stored credentials.
#[derive(Clone)]
pub struct Session {
    store: Rc<dyn TokenStore>,
}

impl Session {
    pub fn new(store: Rc<dyn TokenStore>) -> Self {
        Self { store }
    }

    /// Session backed by the platform's persistent storage.
    pub fn platform() -> Self {
        #[cfg(feature = "web")]
        {
            Self::new(Rc::new(BrowserStorage))
        }
        #[cfg(not(feature = "web"))]
        {
            Self::new(Rc::new(MemoryStorage::new()))
        }
    }

    /// The bearer token, if one is stored and non-empty.
    pub fn token(&self) -> Option<String> {
        self.store.get(TOKEN_KEY).filter(|t| !t.trim().is_empty())
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// The cached administrator; unreadable entries are treated as absent.
    pub fn user(&self) -> Option<AdminUser> {
        let raw = self.store.get(USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!(error = %e, "Discarding unreadable cached user");
                None
            }
        }
    }

    pub fn persist(&self, token: &str, user: &AdminUser) -> Result<(), StorageError> {
        let user_json = serde_json::to_string(user)?;
        self.store.set(TOKEN_KEY, token)?;
        self.store.set(USER_KEY, &user_json)?;
        Ok(())
    }

    pub fn clear(&self) {
        self.store.remove(TOKEN_KEY);
        self.store.remove(USER_KEY);
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

impl PartialEq for Session {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.store, &other.store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(Rc::new(MemoryStorage::new()))
    }

    #[test]
    fn test_persist_then_clear() {
        let session = session();
        let user = AdminUser {
            email: Some("admin@multigremial.cl".into()),
            ..Default::default()
        };

        session.persist("abc.def.ghi", &user).unwrap();
        assert!(session.is_authenticated());
        assert_eq!(session.token().as_deref(), Some("abc.def.ghi"));
        assert_eq!(session.user(), Some(user));

        session.clear();
        assert!(!session.is_authenticated());
        assert_eq!(session.user(), None);
    }

    #[test]
    fn test_blank_token_is_not_authenticated() {
        let store = Rc::new(MemoryStorage::new());
        store.set(TOKEN_KEY, "   ").unwrap();

        assert!(!Session::new(store).is_authenticated());
    }

    #[test]
    fn test_corrupt_user_is_ignored() {
        let store = Rc::new(MemoryStorage::new());
        store.set(USER_KEY, "{not json").unwrap();

        assert_eq!(Session::new(store).user(), None);
    }
}
