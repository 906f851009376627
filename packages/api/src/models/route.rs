use serde::{Deserialize, Serialize};

use super::{parse_coordinate, DangerCategory, MAX_LATITUDE, MAX_LONGITUDE};

/// Body of `POST /routes/safe-route`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteRequest {
    pub source_lat: f64,
    pub source_lng: f64,
    pub dest_lat: f64,
    pub dest_lng: f64,
}

impl RouteRequest {
    pub fn new(source: (f64, f64), dest: (f64, f64)) -> Self {
        Self {
            source_lat: source.0,
            source_lng: source.1,
            dest_lat: dest.0,
            dest_lng: dest.1,
        }
    }

    /// Build a request from user-entered text. Every field must be present and numeric.
    pub fn parse(
        source_lat: &str,
        source_lng: &str,
        dest_lat: &str,
        dest_lng: &str,
    ) -> crate::Result<Self> {
        Ok(Self {
            source_lat: parse_coordinate("sourceLat", source_lat, MAX_LATITUDE)?,
            source_lng: parse_coordinate("sourceLng", source_lng, MAX_LONGITUDE)?,
            dest_lat: parse_coordinate("destLat", dest_lat, MAX_LATITUDE)?,
            dest_lng: parse_coordinate("destLng", dest_lng, MAX_LONGITUDE)?,
        })
    }
}

/// Safe route computed by the backend, passed through as received.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteResult {
    /// 0 (most dangerous) to 10 (safest).
    pub safety_score: f64,
    /// Kilometres.
    pub estimated_distance: f64,
    pub route_description: String,
    /// Danger zones the backend considered along the route.
    #[serde(default)]
    pub danger_zones: Vec<RouteDangerZone>,
}

/// Danger zone summary embedded in a [`RouteResult`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteDangerZone {
    pub latitude: f64,
    pub longitude: f64,
    pub category: DangerCategory,
    #[serde(default)]
    pub severity_score: Option<i32>,
}
