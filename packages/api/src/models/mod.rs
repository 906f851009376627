//! Request and response payloads exchanged with the SafePath backend.

mod auth;
mod danger_zone;
mod route;

pub use auth::{AuthResponse, Credentials, Registration};
pub use danger_zone::{DangerCategory, DangerZone, DangerZoneReport};
pub use route::{RouteDangerZone, RouteRequest, RouteResult};

use crate::error::{ApiError, Result};

/// Parse a user-entered coordinate, rejecting empty, non-numeric and out-of-range input.
pub(crate) fn parse_coordinate(field: &str, raw: &str, limit: f64) -> Result<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ApiError::Precondition(format!("{field} is required")));
    }
    let value: f64 = trimmed
        .parse()
        .map_err(|_| ApiError::Precondition(format!("{field} must be a number, got {trimmed:?}")))?;
    if !value.is_finite() || value.abs() > limit {
        return Err(ApiError::Precondition(format!(
            "{field} must be between -{limit} and {limit}"
        )));
    }
    Ok(value)
}

/// Parse a user-entered `(latitude, longitude)` pair.
pub fn parse_point(lat: &str, lng: &str) -> Result<(f64, f64)> {
    Ok((
        parse_coordinate("latitude", lat, MAX_LATITUDE)?,
        parse_coordinate("longitude", lng, MAX_LONGITUDE)?,
    ))
}

pub(crate) const MAX_LATITUDE: f64 = 90.0;
pub(crate) const MAX_LONGITUDE: f64 = 180.0;
