//! Danger-zone endpoints.

use session::SessionStorage;

use crate::client::HttpClient;
use crate::error::Result;
use crate::models::{DangerZone, DangerZoneReport};

/// `/danger-zones/*` calls.
pub struct DangerZoneApi<'a, S: SessionStorage> {
    http: &'a HttpClient<S>,
}

impl<'a, S: SessionStorage> DangerZoneApi<'a, S> {
    pub(crate) fn new(http: &'a HttpClient<S>) -> Self {
        Self { http }
    }

    /// Report a hazard. Returns the record the backend stored.
    pub async fn report(&self, report: &DangerZoneReport) -> Result<DangerZone> {
        let response = self.http.post("/danger-zones/report", report).await?;
        Ok(response.into_data())
    }

    /// Danger zones within `radius_km` of a point, in the order the backend returns them.
    pub async fn get_by_radius(&self, lat: f64, lng: f64, radius_km: f64) -> Result<Vec<DangerZone>> {
        let query = [
            ("lat", lat.to_string()),
            ("lng", lng.to_string()),
            ("radius", radius_km.to_string()),
        ];
        let response = self.http.get("/danger-zones/radius", &query).await?;
        Ok(response.into_data())
    }
}
