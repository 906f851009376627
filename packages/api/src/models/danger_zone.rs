//! # Danger-zone payloads
//!
//! | Type | Direction | Endpoint |
//! |------|-----------|----------|
//! | [`DangerZoneReport`] | request | `POST /danger-zones/report` |
//! | [`DangerZone`] | response | `POST /danger-zones/report` (the stored record), `GET /danger-zones/radius` (array) |
//!
//! [`DangerCategory`] is the closed set of hazard kinds the backend accepts. It
//! serialises as the backend's upper snake case names and exposes the labels the map
//! legend uses. A name this client does not know reads as [`DangerCategory::Unknown`]
//! so one new hazard kind on the backend does not fail a whole radius lookup.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{parse_coordinate, MAX_LATITUDE, MAX_LONGITUDE};
use crate::error::ApiError;

/// Kind of hazard reported at a location.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DangerCategory {
    Pothole,
    AccidentSpot,
    PoorlyLitRoad,
    CrimeProne,
    /// Any category name this client does not recognise. Never parsed from user input.
    #[serde(other)]
    Unknown,
}

impl DangerCategory {
    pub const ALL: [DangerCategory; 4] = [
        DangerCategory::Pothole,
        DangerCategory::AccidentSpot,
        DangerCategory::PoorlyLitRoad,
        DangerCategory::CrimeProne,
    ];

    /// Wire name, e.g. `"ACCIDENT_SPOT"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            DangerCategory::Pothole => "POTHOLE",
            DangerCategory::AccidentSpot => "ACCIDENT_SPOT",
            DangerCategory::PoorlyLitRoad => "POORLY_LIT_ROAD",
            DangerCategory::CrimeProne => "CRIME_PRONE",
            DangerCategory::Unknown => "UNKNOWN",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            DangerCategory::Pothole => "Pothole",
            DangerCategory::AccidentSpot => "Accident Spot",
            DangerCategory::PoorlyLitRoad => "Poorly Lit Road",
            DangerCategory::CrimeProne => "Crime Prone Area",
            DangerCategory::Unknown => "Unknown Hazard",
        }
    }
}

impl fmt::Display for DangerCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DangerCategory {
    type Err = ApiError;

    /// Accepts wire names in any case, with `-` or `_` separators.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == normalized)
            .ok_or_else(|| {
                ApiError::Precondition(format!(
                    "unknown danger category {s:?}, expected one of {}",
                    Self::ALL.map(|c| c.as_str()).join(", ")
                ))
            })
    }
}

/// Body of `POST /danger-zones/report`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DangerZoneReport {
    pub latitude: f64,
    pub longitude: f64,
    pub category: DangerCategory,
}

impl DangerZoneReport {
    pub fn new(latitude: f64, longitude: f64, category: DangerCategory) -> Self {
        Self {
            latitude,
            longitude,
            category,
        }
    }

    /// Build a report from user-entered text, rejecting missing or invalid fields
    /// before anything is sent.
    pub fn parse(latitude: &str, longitude: &str, category: &str) -> crate::Result<Self> {
        if category.trim().is_empty() {
            return Err(ApiError::Precondition(
                "Please select a location and danger category".to_string(),
            ));
        }
        Ok(Self {
            latitude: parse_coordinate("latitude", latitude, MAX_LATITUDE)?,
            longitude: parse_coordinate("longitude", longitude, MAX_LONGITUDE)?,
            category: category.parse()?,
        })
    }
}

/// A stored danger zone as returned by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DangerZone {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub latitude: f64,
    pub longitude: f64,
    pub category: DangerCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity_score: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Fields the backend sent that this client does not model.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_wire_names() {
        assert_eq!(
            serde_json::to_string(&DangerCategory::PoorlyLitRoad).unwrap(),
            "\"POORLY_LIT_ROAD\""
        );
        for category in DangerCategory::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.as_str()));
            assert_eq!(category.as_str().parse::<DangerCategory>().unwrap(), category);
        }
        assert_eq!(DangerCategory::CrimeProne.label(), "Crime Prone Area");
    }

    #[test]
    fn test_category_from_str_is_lenient() {
        assert_eq!(
            "accident-spot".parse::<DangerCategory>().unwrap(),
            DangerCategory::AccidentSpot
        );
        assert_eq!(" pothole ".parse::<DangerCategory>().unwrap(), DangerCategory::Pothole);
        assert!(matches!(
            "flood".parse::<DangerCategory>(),
            Err(ApiError::Precondition(_))
        ));
        assert!("unknown".parse::<DangerCategory>().is_err());
    }

    #[test]
    fn test_unrecognised_category_reads_as_unknown() {
        let zones: Vec<DangerZone> = serde_json::from_str(
            r#"[{"latitude":1.0,"longitude":2.0,"category":"FLOODED_ROAD"},
                {"latitude":3.0,"longitude":4.0,"category":"POTHOLE"}]"#,
        )
        .unwrap();
        assert_eq!(zones[0].category, DangerCategory::Unknown);
        assert_eq!(zones[1].category, DangerCategory::Pothole);
    }

    #[test]
    fn test_report_parse() {
        let report = DangerZoneReport::parse("40.7128", " -74.0060", "CRIME_PRONE").unwrap();
        assert_eq!(report, DangerZoneReport::new(40.7128, -74.006, DangerCategory::CrimeProne));

        assert!(matches!(
            DangerZoneReport::parse("40.7", "-74.0", ""),
            Err(ApiError::Precondition(_))
        ));
        assert!(matches!(
            DangerZoneReport::parse("", "-74.0", "POTHOLE"),
            Err(ApiError::Precondition(_))
        ));
        assert!(matches!(
            DangerZoneReport::parse("91", "-74.0", "POTHOLE"),
            Err(ApiError::Precondition(_))
        ));
        assert!(matches!(
            DangerZoneReport::parse("abc", "-74.0", "POTHOLE"),
            Err(ApiError::Precondition(_))
        ));
    }

    #[test]
    fn test_danger_zone_record() {
        let json = r#"{
            "id": 7,
            "latitude": 40.71,
            "longitude": -74.0,
            "category": "POTHOLE",
            "severityScore": 1,
            "createdAt": "2024-05-01T10:00:00",
            "reportedBy": null
        }"#;
        let zone: DangerZone = serde_json::from_str(json).unwrap();
        assert_eq!(zone.id, Some(7));
        assert_eq!(zone.category, DangerCategory::Pothole);
        assert_eq!(zone.severity_score, Some(1));
        assert_eq!(zone.extra["reportedBy"], serde_json::Value::Null);

        let minimal: DangerZone =
            serde_json::from_str(r#"{"latitude":1.0,"longitude":2.0,"category":"CRIME_PRONE"}"#)
                .unwrap();
        assert!(minimal.id.is_none());
        assert!(minimal.extra.is_empty());
    }
}
