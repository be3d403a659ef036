//! Persisted session slots in browser localStorage.
//!
//! DESIGN
//! ======
//! Two fixed keys hold the session token and the JSON-serialized cached
//! profile. Access goes through [`StoragePort`] so the auth lifecycle can be
//! exercised against an in-memory store; [`BrowserStorage`] is the real
//! localStorage-backed port and safely no-ops outside the browser.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::User;

/// localStorage key for the session token slot.
pub const TOKEN_KEY: &str = "auth_token";
/// localStorage key for the cached-profile slot.
pub const USER_KEY: &str = "auth_user";

/// Minimal key-value storage surface the session layer needs.
pub trait StoragePort {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Browser localStorage port. Reads and writes are best-effort; a missing
/// `window` or storage denial behaves like an empty store.
pub struct BrowserStorage;

impl StoragePort for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
                let _ = storage.set_item(key, value);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

/// Read both slots. Returns `None` unless the token is present and the
/// cached profile decodes; a torn or partial session is treated as absent.
pub fn load_session(storage: &dyn StoragePort) -> Option<(String, User)> {
    let token = storage.get(TOKEN_KEY)?;
    let raw = storage.get(USER_KEY)?;
    let user = serde_json::from_str(&raw).ok()?;
    Some((token, user))
}

/// Replace both slots with a fresh session.
pub fn save_session(storage: &dyn StoragePort, token: &str, user: &User) {
    storage.set(TOKEN_KEY, token);
    save_user(storage, user);
}

/// Replace only the cached-profile slot; the token slot is untouched.
pub fn save_user(storage: &dyn StoragePort, user: &User) {
    if let Ok(raw) = serde_json::to_string(user) {
        storage.set(USER_KEY, &raw);
    }
}

/// Remove both slots unconditionally.
pub fn clear_session(storage: &dyn StoragePort) {
    storage.remove(TOKEN_KEY);
    storage.remove(USER_KEY);
}

/// In-memory port for exercising the session lifecycle in unit tests.
#[cfg(test)]
pub(crate) struct MemoryStorage(std::cell::RefCell<std::collections::HashMap<String, String>>);

#[cfg(test)]
impl MemoryStorage {
    pub(crate) fn new() -> Self {
        Self(std::cell::RefCell::new(std::collections::HashMap::new()))
    }
}

#[cfg(test)]
impl StoragePort for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.0.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.0.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.0.borrow_mut().remove(key);
    }
}
