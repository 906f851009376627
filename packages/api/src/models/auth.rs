use serde::{Deserialize, Serialize};
use session::UserProfile;

/// Body of `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Body of `POST /auth/register`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

/// Successful login or registration: a bearer token plus the user's profile fields.
///
/// The wire shape is flat (`{token, name, email, role, ...}`); the profile part is
/// exactly what a consumer stores with [`session::Session::establish`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    #[serde(flatten)]
    pub profile: UserProfile,
}

impl AuthResponse {
    /// Split into the token and the profile to persist next to it.
    pub fn into_parts(self) -> (String, UserProfile) {
        (self.token, self.profile)
    }
}
