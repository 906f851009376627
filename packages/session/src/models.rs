//! # Cached profile of the signed-in user
//!
//! [`UserProfile`] is what the consumer stores next to the bearer token after a
//! successful login or registration: every field of the backend's auth response except
//! the token itself. It is persisted as JSON text under [`crate::PROFILE_KEY`].
//!
//! The backend returns `name`, `email` and `role`; `phone` is only known when the user
//! registered from this client. Any other field the backend adds is kept in
//! [`UserProfile::extra`] so that a stored profile reads back exactly as it was written.
//! The extra map never holds a modelled key (`name`, `email`, `phone`, `role`), so the
//! flattened JSON has no duplicates.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Profile fields of an authenticated user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Backend role name, e.g. `"USER"`.
    pub role: String,
    #[serde(flatten)]
    extra: BTreeMap<String, serde_json::Value>,
}

/// Keys owned by the typed fields of [`UserProfile`].
const MODELLED_KEYS: [&str; 4] = ["name", "email", "phone", "role"];

impl UserProfile {
    pub fn new(name: impl Into<String>, email: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: None,
            role: role.into(),
            extra: BTreeMap::new(),
        }
    }

    /// Builder method to set the phone number.
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Fields the backend sent that this client does not model.
    pub fn extra(&self) -> &BTreeMap<String, serde_json::Value> {
        &self.extra
    }

    /// Set an unmodelled field. Modelled keys are refused and `false` is returned.
    pub fn set_extra(&mut self, key: impl Into<String>, value: serde_json::Value) -> bool {
        let key = key.into();
        if MODELLED_KEYS.contains(&key.as_str()) {
            return false;
        }
        self.extra.insert(key, value);
        true
    }

    /// Get display name, falling back to email if name is empty.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.email
        } else {
            &self.name
        }
    }
}
