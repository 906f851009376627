//! # Key-value storage contract behind a [`Session`](crate::Session)
//!
//! [`SessionStorage`] is the smallest surface the session layer needs from a durable
//! store: string values under string keys, with get / set / remove. It mirrors the
//! browser `localStorage` API so the web backend is a direct mapping, while the
//! in-memory and filesystem backends make the rest of the stack testable and usable
//! off the browser.
//!
//! | Backend | Platform | Module |
//! |---------|----------|--------|
//! | [`MemoryStorage`](crate::MemoryStorage) | any | `memory` |
//! | [`FileStorage`](crate::FileStorage) | native | `file_storage` |
//! | `LocalStorage` | wasm32 + `web` feature | `local` |
//!
//! ## Failure model
//!
//! None of the methods return errors. A backend that cannot read reports the key as
//! absent, and a backend that cannot write drops the write. Implementations log these
//! cases at `warn` so they remain visible without ever failing the caller.

/// Durable string key-value store used to persist session state.
///
/// Implementations are expected to be cheap to clone and to share their underlying
/// state between clones, so that the HTTP client and the consumer observe the same
/// token.
pub trait SessionStorage: Clone {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str);
    /// Removing a missing key is a no-op.
    fn remove_item(&self, key: &str);
}
