//! # Session: typed accessors over a [`SessionStorage`]
//!
//! [`Session`] is the single source of truth for "who is signed in" on this client. It
//! owns no state itself: the bearer token and the cached [`UserProfile`] live in the
//! injected storage under two fixed keys, so every clone of a `Session` (and every
//! clone of the storage behind it) sees the same values.
//!
//! | Key | Value |
//! |-----|-------|
//! | [`TOKEN_KEY`] (`"token"`) | raw bearer token |
//! | [`PROFILE_KEY`] (`"userData"`) | [`UserProfile`] serialised as JSON |
//!
//! ## Lifecycle
//!
//! A session is created by the consumer after a successful login or registration
//! ([`Session::establish`]), read by the HTTP client on every outgoing request, and
//! destroyed on logout ([`Session::clear`]). The token is never validated or refreshed
//! here; [`Session::is_authenticated`] only checks that a non-empty one is present.
//! An empty stored token counts as signed out and is never sent to the backend.
//!
//! ## Corrupt profile text
//!
//! If the stored profile cannot be parsed, [`Session::get_user_profile`] logs a warning
//! and reports no profile. The corrupt value is left in place; the next
//! [`Session::set_user_profile`] or [`Session::clear`] overwrites it.

use crate::models::UserProfile;
use crate::storage::SessionStorage;

/// Storage key for the bearer token.
pub const TOKEN_KEY: &str = "token";
/// Storage key for the serialised user profile.
pub const PROFILE_KEY: &str = "userData";

/// Authentication state persisted in a [`SessionStorage`].
#[derive(Clone, Debug, Default)]
pub struct Session<S: SessionStorage> {
    storage: S,
}

impl<S: SessionStorage> Session<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Current bearer token, if any.
    pub fn get_token(&self) -> Option<String> {
        self.storage.get_item(TOKEN_KEY)
    }

    /// Store a bearer token, replacing any previous one.
    pub fn set_token(&self, token: &str) {
        self.storage.set_item(TOKEN_KEY, token);
    }

    pub fn remove_token(&self) {
        self.storage.remove_item(TOKEN_KEY);
    }

    /// Cached profile of the signed-in user. Unparsable stored text reads as `None`.
    pub fn get_user_profile(&self) -> Option<UserProfile> {
        let raw = self.storage.get_item(PROFILE_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(profile) => Some(profile),
            Err(e) => {
                tracing::warn!("Ignoring malformed stored user profile: {}", e);
                None
            }
        }
    }

    pub fn set_user_profile(&self, profile: &UserProfile) {
        match serde_json::to_string(profile) {
            Ok(json) => self.storage.set_item(PROFILE_KEY, &json),
            Err(e) => tracing::warn!("Failed to serialise user profile: {}", e),
        }
    }

    pub fn remove_user_profile(&self) {
        self.storage.remove_item(PROFILE_KEY);
    }

    /// Token to present to the backend: the stored token unless it is empty.
    pub fn bearer_token(&self) -> Option<String> {
        self.get_token().filter(|token| !token.is_empty())
    }

    /// True when a non-empty token is present. No expiry or server-side check.
    pub fn is_authenticated(&self) -> bool {
        self.bearer_token().is_some()
    }

    /// Record a successful login or registration: token and profile are set together.
    pub fn establish(&self, token: &str, profile: &UserProfile) {
        self.set_token(token);
        self.set_user_profile(profile);
    }

    /// Log out: token and profile are removed together. Safe to call when signed out.
    pub fn clear(&self) {
        self.remove_token();
        self.remove_user_profile();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStorage;

    fn session() -> Session<MemoryStorage> {
        Session::new(MemoryStorage::new())
    }

    #[test]
    fn test_token_lifecycle() {
        let session = session();
        assert!(session.get_token().is_none());
        assert!(!session.is_authenticated());

        for token in ["abc", "eyJhbGciOiJIUzI1NiJ9.e30.sig", "with spaces"] {
            session.set_token(token);
            assert_eq!(session.get_token(), Some(token.to_string()));
            assert!(session.is_authenticated());

            session.remove_token();
            assert!(session.get_token().is_none());
            assert!(!session.is_authenticated());
        }
    }

    #[test]
    fn test_empty_token_is_signed_out() {
        let session = session();
        session.set_token("");
        assert_eq!(session.get_token(), Some(String::new()));
        assert!(session.bearer_token().is_none());
        assert!(!session.is_authenticated());

        session.set_token("abc");
        assert_eq!(session.bearer_token(), Some("abc".to_string()));
    }

    #[test]
    fn test_set_token_overwrites() {
        let session = session();
        session.set_token("first");
        session.set_token("second");
        assert_eq!(session.get_token(), Some("second".to_string()));
    }

    #[test]
    fn test_profile_roundtrip() {
        let session = session();
        assert!(session.get_user_profile().is_none());

        let mut profile = UserProfile::new("A", "a@b.com", "USER").with_phone("+1 555 0100");
        profile.set_extra("id", serde_json::Value::from(42));
        // Modelled keys cannot shadow the typed fields
        assert!(!profile.set_extra("name", serde_json::Value::from("B")));
        assert!(!profile.set_extra("phone", serde_json::Value::from("555")));
        session.set_user_profile(&profile);
        assert_eq!(session.get_user_profile(), Some(profile.clone()));

        let replacement = UserProfile::new("B", "b@c.com", "ADMIN");
        session.set_user_profile(&replacement);
        assert_eq!(session.get_user_profile(), Some(replacement));
    }

    #[test]
    fn test_malformed_profile_reads_as_absent() {
        let session = session();
        session.storage().set_item(PROFILE_KEY, "{not json");
        assert!(session.get_user_profile().is_none());

        session.storage().set_item(PROFILE_KEY, r#"{"name":"missing fields"}"#);
        assert!(session.get_user_profile().is_none());
    }

    #[test]
    fn test_profile_does_not_affect_authentication() {
        let session = session();
        session.set_user_profile(&UserProfile::new("A", "a@b.com", "USER"));
        assert!(!session.is_authenticated());

        session.set_token("abc");
        session.remove_user_profile();
        assert!(session.is_authenticated());
    }

    #[test]
    fn test_remove_is_idempotent() {
        let session = session();
        session.set_token("abc");
        session.set_user_profile(&UserProfile::new("A", "a@b.com", "USER"));

        session.remove_token();
        session.remove_token();
        session.remove_user_profile();
        session.remove_user_profile();

        assert!(session.get_token().is_none());
        assert!(session.get_user_profile().is_none());
        assert!(session.storage().is_empty());
    }

    #[test]
    fn test_establish_and_clear() {
        let session = session();
        let profile = UserProfile::new("A", "a@b.com", "USER");

        session.establish("abc", &profile);
        assert_eq!(session.get_token(), Some("abc".to_string()));
        assert_eq!(session.get_user_profile(), Some(profile));

        session.clear();
        session.clear();
        assert!(!session.is_authenticated());
        assert!(session.get_user_profile().is_none());
    }

    #[test]
    fn test_clones_share_storage() {
        let session = session();
        let other = session.clone();
        session.set_token("abc");
        assert!(other.is_authenticated());
    }
}
