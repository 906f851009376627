//! # HTTP client: the single dispatcher for every backend call
//!
//! [`HttpClient`] owns one configured [`reqwest::Client`] (default header
//! `Content-Type: application/json`), the backend base address, and a handle to the
//! injected [`Session`]. The content type is a client-wide default, so body-less GETs
//! carry it too; the backend ignores it there. Resource clients ([`AuthApi`], [`DangerZoneApi`],
//! [`RouteApi`]) borrow it and only decide the method, path and payload.
//!
//! ## Token injection
//!
//! `HttpClient::authorize` runs for every request at the moment it is dispatched. It
//! reads the current token from the session and adds `Authorization: Bearer <token>`;
//! without a token, or with an empty one, no `Authorization` header is sent at all. Because the lookup happens
//! at send time, a token stored after the client was built is picked up by the next
//! request, and a request already in flight keeps whichever token it was sent with.
//!
//! ## Responses
//!
//! | Outcome | Result |
//! |---------|--------|
//! | 2xx with a body matching `T` | `Ok(ApiResponse { status, data })` |
//! | 2xx with a body not matching `T` | [`ApiError::Decode`] |
//! | non-2xx | [`ApiError::Backend`] with the status and parsed error body |
//! | no response | [`ApiError::Transport`] |
//!
//! There is no retry, timeout or caching at this layer; each call is a single
//! request/response exchange.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use session::{Session, SessionStorage};

use crate::auth::AuthApi;
use crate::config::ClientConfig;
use crate::danger_zones::DangerZoneApi;
use crate::error::{ApiError, Result};
use crate::routes::RouteApi;

/// A successful backend response.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiResponse<T> {
    /// HTTP status code (always 2xx).
    pub status: u16,
    /// Decoded response body.
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn into_data(self) -> T {
        self.data
    }
}

/// Configured dispatcher for SafePath backend calls.
#[derive(Clone, Debug)]
pub struct HttpClient<S: SessionStorage> {
    base_url: String,
    http: Client,
    session: Session<S>,
}

impl<S: SessionStorage> HttpClient<S> {
    /// Create a client for the given base address, reading tokens from `session`.
    pub fn new(base_url: impl Into<String>, session: Session<S>) -> Result<Self> {
        let base_url = base_url.into();
        Url::parse(&base_url).map_err(|e| ApiError::Config(format!("invalid base URL {base_url:?}: {e}")))?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let http = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(ApiError::Transport)?;

        Ok(Self {
            base_url,
            http,
            session,
        })
    }

    /// Create a client from a loaded [`ClientConfig`].
    pub fn from_config(config: &ClientConfig, session: Session<S>) -> Result<Self> {
        Self::new(config.api.base_url.clone(), session)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The session this client reads its token from.
    pub fn session(&self) -> &Session<S> {
        &self.session
    }

    pub fn auth(&self) -> AuthApi<'_, S> {
        AuthApi::new(self)
    }

    pub fn danger_zones(&self) -> DangerZoneApi<'_, S> {
        DangerZoneApi::new(self)
    }

    pub fn routes(&self) -> RouteApi<'_, S> {
        RouteApi::new(self)
    }

    fn url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }

    /// Attach the current bearer token, if any. Runs once per outgoing request.
    fn authorize(&self, builder: RequestBuilder) -> (RequestBuilder, bool) {
        match self.session.bearer_token() {
            Some(token) => (builder.header(AUTHORIZATION, format!("Bearer {token}")), true),
            None => (builder, false),
        }
    }

    /// `GET {base}{path}?{query}`.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<ApiResponse<T>> {
        let builder = self.http.get(self.url(path)).query(query);
        self.send(Method::GET, path, builder).await
    }

    /// `POST {base}{path}` with a JSON body.
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<ApiResponse<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self.http.post(self.url(path)).json(body);
        self.send(Method::POST, path, builder).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        builder: RequestBuilder,
    ) -> Result<ApiResponse<T>> {
        let (builder, authorized) = self.authorize(builder);
        tracing::debug!(%method, path, authorized, "Dispatching request");

        let response = builder.send().await.map_err(|e| {
            tracing::warn!(%method, path, "Request failed: {}", e);
            ApiError::Transport(e)
        })?;
        let status = response.status().as_u16();
        let text = response.text().await?;

        if !(200..300).contains(&status) {
            let err = ApiError::backend(status, &text);
            tracing::warn!(%method, path, status, "Backend rejected request: {}", err);
            return Err(err);
        }

        let data = serde_json::from_str(&text).map_err(|source| {
            tracing::warn!(%method, path, status, "Malformed response body: {}", source);
            ApiError::Decode { status, source }
        })?;
        Ok(ApiResponse { status, data })
    }
}
