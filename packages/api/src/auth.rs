//! Authentication endpoints.

use session::SessionStorage;

use crate::client::HttpClient;
use crate::error::Result;
use crate::models::{AuthResponse, Credentials, Registration};

/// `/auth/*` calls.
///
/// These only talk to the backend. Persisting the returned token and profile is the
/// caller's job, typically via [`session::Session::establish`] with
/// [`AuthResponse::into_parts`].
pub struct AuthApi<'a, S: SessionStorage> {
    http: &'a HttpClient<S>,
}

impl<'a, S: SessionStorage> AuthApi<'a, S> {
    pub(crate) fn new(http: &'a HttpClient<S>) -> Self {
        Self { http }
    }

    /// Sign in with email and password.
    pub async fn login(&self, credentials: &Credentials) -> Result<AuthResponse> {
        let response = self.http.post("/auth/login", credentials).await?;
        Ok(response.into_data())
    }

    /// Create an account. The backend signs the new user in immediately.
    pub async fn register(&self, user: &Registration) -> Result<AuthResponse> {
        let response = self.http.post("/auth/register", user).await?;
        Ok(response.into_data())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use serde_json::json;
    use session::{MemoryStorage, Session};
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_login_returns_token_without_touching_session() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .and(body_json(json!({"email": "a@b.com", "password": "x"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "token": "abc",
                "name": "A",
                "email": "a@b.com",
                "role": "USER"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let storage = MemoryStorage::new();
        let client = HttpClient::new(server.uri(), Session::new(storage.clone())).unwrap();

        let response = client
            .auth()
            .login(&Credentials::new("a@b.com", "x"))
            .await
            .unwrap();
        assert_eq!(response.token, "abc");
        assert_eq!(response.profile.name, "A");
        assert_eq!(response.profile.role, "USER");

        // Nothing was persisted by the resource client
        assert!(storage.is_empty());
        assert!(!client.session().is_authenticated());
    }

    #[tokio::test]
    async fn test_register_then_establish_session() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/register"))
            .and(body_json(json!({
                "name": "Ada",
                "email": "ada@example.com",
                "phone": "555-0100",
                "password": "secret"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "token": "jwt-1",
                "name": "Ada",
                "email": "ada@example.com",
                "role": "USER"
            })))
            .mount(&server)
            .await;

        let client = HttpClient::new(server.uri(), Session::new(MemoryStorage::new())).unwrap();
        let registration = Registration {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            phone: "555-0100".to_string(),
            password: "secret".to_string(),
        };

        let (token, profile) = client.auth().register(&registration).await.unwrap().into_parts();
        client.session().establish(&token, &profile);

        assert_eq!(client.session().get_token(), Some("jwt-1".to_string()));
        assert_eq!(client.session().get_user_profile(), Some(profile));
    }

    #[tokio::test]
    async fn test_login_failure_passes_backend_message_through() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(json!({"message": "Bad credentials"})),
            )
            .mount(&server)
            .await;

        let client = HttpClient::new(server.uri(), Session::new(MemoryStorage::new())).unwrap();
        let err = client
            .auth()
            .login(&Credentials::new("a@b.com", "wrong"))
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(401));
        assert_eq!(err.user_message("Login failed"), "Bad credentials");
        assert!(matches!(err, ApiError::Backend { .. }));
    }
}
