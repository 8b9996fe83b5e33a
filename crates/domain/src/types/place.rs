//! External place-search types
//!
//! Shapes returned by the places-search endpoint (OSM-derived descriptors).

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

/// One place descriptor from the search endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceResult {
    #[serde(default)]
    pub external_id: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
    #[serde(default)]
    pub cuisine: Option<String>,
    #[serde(default)]
    pub amenity: Option<String>,
    #[serde(default)]
    pub housenumber: Option<String>,
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub postcode: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub opening_hours: Option<String>,
    /// Amenity flags arrive as OSM-style "yes"/"no" strings.
    #[serde(default)]
    pub takeaway: Option<String>,
    #[serde(default)]
    pub delivery: Option<String>,
    #[serde(default)]
    pub drive_through: Option<String>,
    /// Attached client-side when the user's location is known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_from_user_mi: Option<f64>,
}

impl PlaceResult {
    /// Stable id preferring the upstream external id.
    pub fn place_id(&self) -> Option<&str> {
        self.external_id.as_deref().or(self.id.as_deref()).filter(|id| !id.is_empty())
    }

    /// Coordinates when both components are present.
    pub fn location(&self) -> Option<GeoPoint> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Some(GeoPoint { lat, lon }),
            _ => None,
        }
    }
}

/// Response document from the places-search endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceSearchResponse {
    #[serde(default)]
    pub center: Option<GeoPoint>,
    #[serde(default)]
    pub count: usize,
    #[serde(default)]
    pub places: Vec<PlaceResult>,
}
