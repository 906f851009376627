//! # Browser `localStorage` backend
//!
//! [`LocalStorage`] is the [`SessionStorage`] used on the **web platform**. It is a
//! zero-size handle: every call looks up `window.localStorage` afresh, so clones are
//! free and always observe the same origin-scoped store.
//!
//! A missing `window` (e.g. inside a worker) or a storage access denied by the browser
//! (private mode quotas, disabled cookies) degrades to "no session" rather than
//! failing the caller.

use crate::storage::SessionStorage;

/// `window.localStorage`-backed SessionStorage for the web platform.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl SessionStorage for LocalStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            tracing::warn!("localStorage unavailable, dropping {}", key);
            return;
        };
        if storage.set_item(key, value).is_err() {
            tracing::warn!("localStorage rejected write to {}", key);
        }
    }

    fn remove_item(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}
