use std::{cell::RefCell, collections::HashMap, rc::Rc};

use secrecy::{ExposeSecret, SecretString};
use types::{API_KEY_STORAGE_KEY, Result, Session, USER_STORAGE_KEY, UserProfile};

/// String key/value storage with synchronous access, like `localStorage`.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// Process-local storage. Nothing survives a reload.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// The browser's `localStorage`.
#[cfg(feature = "web")]
pub struct BrowserStorage(web_sys::Storage);

#[cfg(feature = "web")]
impl BrowserStorage {
    /// `None` when storage is disabled (private mode, sandboxed iframe).
    pub fn local() -> Option<Self> {
        web_sys::window()?.local_storage().ok()?.map(Self)
    }
}

#[cfg(feature = "web")]
impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.0.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.0
            .set_item(key, value)
            .map_err(|e| types::Error::Storage(format!("failed to write '{key}': {e:?}")))
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.0
            .remove_item(key)
            .map_err(|e| types::Error::Storage(format!("failed to remove '{key}': {e:?}")))
    }
}

/// The only reader and writer of the persisted session.
///
/// Two entries make up a session: the raw bearer token under `apiKey` and the
/// JSON profile under `user`. They are written and cleared together.
#[derive(Clone)]
pub struct SessionStore {
    storage: Rc<dyn KeyValueStore>,
}

impl SessionStore {
    pub fn new(storage: Rc<dyn KeyValueStore>) -> Self {
        Self { storage }
    }

    pub fn in_memory() -> Self {
        Self::new(Rc::new(MemoryStorage::default()))
    }

    /// Backed by `localStorage`, falling back to memory when it is unavailable.
    #[cfg(feature = "web")]
    pub fn browser() -> Self {
        match BrowserStorage::local() {
            Some(storage) => Self::new(Rc::new(storage)),
            None => {
                tracing::warn!("localStorage unavailable; session will not survive a reload");
                Self::in_memory()
            }
        }
    }

    pub fn api_key(&self) -> Option<SecretString> {
        self.storage
            .get(API_KEY_STORAGE_KEY)
            .filter(|key| !key.is_empty())
            .map(SecretString::from)
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key().is_some()
    }

    /// The stored profile. An entry that no longer parses counts as absent.
    pub fn user(&self) -> Option<UserProfile> {
        let raw = self.storage.get(USER_STORAGE_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(err) => {
                tracing::warn!(error = %err, "Ignoring unreadable stored user profile");
                None
            }
        }
    }

    /// Both halves of the session, or nothing.
    pub fn load(&self) -> Option<Session> {
        Some(Session {
            api_key: self.api_key()?,
            user: self.user()?,
        })
    }

    /// Persist a fresh session. On error the previously stored entries are
    /// left as they were.
    pub fn save(&self, session: &Session) -> Result<()> {
        let user = serde_json::to_string(&session.user)?;
        let previous_user = self.storage.get(USER_STORAGE_KEY);

        // Profile first: a token on its own would route to a dashboard that
        // immediately bounces back to login.
        self.storage.set(USER_STORAGE_KEY, &user)?;
        if let Err(err) = self
            .storage
            .set(API_KEY_STORAGE_KEY, session.api_key.expose_secret())
        {
            self.restore_user(previous_user.as_deref());
            return Err(err);
        }
        Ok(())
    }

    fn restore_user(&self, previous: Option<&str>) {
        let restored = match previous {
            Some(raw) => self.storage.set(USER_STORAGE_KEY, raw),
            None => self.storage.remove(USER_STORAGE_KEY),
        };
        if let Err(err) = restored {
            tracing::warn!(error = %err, "Failed to restore stored user profile");
        }
    }

    /// Remove both entries. Safe to call when already logged out.
    pub fn clear(&self) {
        for key in [API_KEY_STORAGE_KEY, USER_STORAGE_KEY] {
            if let Err(err) = self.storage.remove(key) {
                tracing::warn!(key, error = %err, "Failed to clear session entry");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{admin_session, store_with};
    use types::Error;

    /// Memory storage that refuses to write the token.
    #[derive(Default)]
    struct ReadOnlyKeyStorage(MemoryStorage);

    impl KeyValueStore for ReadOnlyKeyStorage {
        fn get(&self, key: &str) -> Option<String> {
            self.0.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<()> {
            if key == API_KEY_STORAGE_KEY {
                return Err(Error::Storage("quota exceeded".into()));
            }
            self.0.set(key, value)
        }

        fn remove(&self, key: &str) -> Result<()> {
            self.0.remove(key)
        }
    }

    fn seeded(entries: &[(&str, &str)]) -> (SessionStore, Rc<ReadOnlyKeyStorage>) {
        let storage = Rc::new(ReadOnlyKeyStorage::default());
        for (key, value) in entries {
            storage.0.set(key, value).unwrap();
        }
        (SessionStore::new(storage.clone()), storage)
    }

    #[test]
    fn empty_storage_has_no_session() {
        let (store, _) = store_with(&[]);
        assert!(!store.has_api_key());
        assert!(store.user().is_none());
        assert!(store.load().is_none());
    }

    #[test]
    fn save_writes_both_entries() {
        let (store, storage) = store_with(&[]);
        store.save(&admin_session()).unwrap();

        assert_eq!(storage.get("apiKey").as_deref(), Some("tok123"));
        assert_eq!(storage.get("user").as_deref(), Some(r#"{"name":"Admin"}"#));

        let loaded = store.load().unwrap();
        assert_eq!(loaded.api_key.expose_secret(), "tok123");
        assert_eq!(loaded.user.name.as_deref(), Some("Admin"));
    }

    #[test]
    fn failed_token_write_restores_previous_profile() {
        let (store, storage) = seeded(&[("apiKey", "old"), ("user", r#"{"name":"Previous"}"#)]);

        let err = store.save(&admin_session()).unwrap_err();

        assert!(matches!(err, Error::Storage(_)));
        assert_eq!(storage.get("apiKey").as_deref(), Some("old"));
        assert_eq!(storage.get("user").as_deref(), Some(r#"{"name":"Previous"}"#));
        assert_eq!(store.load().unwrap().user.name.as_deref(), Some("Previous"));
    }

    #[test]
    fn failed_token_write_leaves_no_profile_behind() {
        let (store, storage) = seeded(&[]);

        assert!(store.save(&admin_session()).is_err());
        assert!(storage.0.is_empty());
    }

    #[test]
    fn empty_key_counts_as_absent() {
        let (store, _) = store_with(&[("apiKey", ""), ("user", "{}")]);
        assert!(!store.has_api_key());
        assert!(store.load().is_none());
    }

    #[test]
    fn key_without_profile_is_not_a_session() {
        let (store, _) = store_with(&[("apiKey", "tok123")]);
        assert!(store.has_api_key());
        assert!(store.load().is_none());
    }

    #[test]
    fn corrupt_profile_is_ignored() {
        let (store, _) = store_with(&[("apiKey", "tok123"), ("user", "not json")]);
        assert!(store.user().is_none());
        assert!(store.load().is_none());
    }

    #[test]
    fn clear_is_idempotent() {
        let (store, storage) = store_with(&[("apiKey", "tok123"), ("user", "{}")]);
        store.clear();
        assert!(storage.is_empty());
        store.clear();
        assert!(storage.is_empty());
    }

    #[test]
    fn clear_leaves_unrelated_keys() {
        let (store, storage) = store_with(&[("apiKey", "tok123"), ("theme", "dark")]);
        store.clear();
        assert_eq!(storage.get("theme").as_deref(), Some("dark"));
    }
}
