//! Safe-route endpoint.

use session::SessionStorage;

use crate::client::HttpClient;
use crate::error::Result;
use crate::models::{RouteRequest, RouteResult};

/// `/routes/*` calls.
pub struct RouteApi<'a, S: SessionStorage> {
    http: &'a HttpClient<S>,
}

impl<'a, S: SessionStorage> RouteApi<'a, S> {
    pub(crate) fn new(http: &'a HttpClient<S>) -> Self {
        Self { http }
    }

    /// Ask the backend for the safest route between two points.
    pub async fn get_safe_route(&self, request: &RouteRequest) -> Result<RouteResult> {
        let response = self.http.post("/routes/safe-route", request).await?;
        Ok(response.into_data())
    }
}
