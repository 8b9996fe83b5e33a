//! Restaurant records and the canonical list status
//!
//! Records are owned by the backend; this client treats each fetched batch
//! as an authoritative snapshot. The wire shape is loosely typed for
//! compatibility with older writers (legacy status synonyms, a boolean
//! `visited` flag, and the favorite flag mirrored under two names), so the
//! typed record converts through a wire struct on both directions.

use serde::{Deserialize, Serialize};

use crate::constants::FALLBACK_PROFILE_ID;

/// Canonical two-valued list membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListStatus {
    Tried,
    Want,
}

impl ListStatus {
    /// Normalize a loosely-typed upstream status.
    ///
    /// Accepts the canonical values plus legacy synonyms ("visited",
    /// "to-try", "to try", "to_try") and the boolean `visited` flag used by
    /// the oldest writers. Anything unrecognized or empty is `Want`, the
    /// documented default.
    pub fn normalize(raw: Option<&str>, visited: Option<bool>) -> Self {
        let s = raw.unwrap_or("").trim().to_lowercase();
        match s.as_str() {
            "tried" | "visited" => Self::Tried,
            "want" | "to-try" | "to try" | "to_try" => Self::Want,
            "" if visited == Some(true) => Self::Tried,
            _ => Self::Want,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tried => "tried",
            Self::Want => "want",
        }
    }
}

impl std::fmt::Display for ListStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A restaurant saved to one of the active profile's lists.
///
/// Mutations are full-record overwrites; there is no patch endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "WireRestaurantRecord", into = "WireRestaurantRecord")]
pub struct RestaurantRecord {
    /// Unique id; generated client-side (`r_<millis>_<rand>`) when a place
    /// is first saved.
    pub restaurant_id: String,
    /// Partition key scoping the record to a profile.
    pub profile_id: String,
    /// Id of the upstream place this record was saved from, when any.
    pub external_id: Option<String>,
    pub name: String,
    pub city: String,
    pub address: Option<String>,
    pub cuisine: String,
    pub status: ListStatus,
    /// Orthogonal overlay on any saved record, independently toggleable.
    pub favorite: bool,
    pub rating: Option<f64>,
    pub notes: Option<String>,
    pub price: Option<f64>,
    pub updated_at: Option<i64>,
}

impl Default for RestaurantRecord {
    fn default() -> Self {
        Self {
            restaurant_id: String::new(),
            profile_id: String::new(),
            external_id: None,
            name: String::new(),
            city: String::new(),
            address: None,
            cuisine: String::new(),
            status: ListStatus::Want,
            favorite: false,
            rating: None,
            notes: None,
            price: None,
            updated_at: None,
        }
    }
}

impl RestaurantRecord {
    /// Profile this record belongs to. Rows written before profiles
    /// existed carry no partition key and belong to the default profile.
    pub fn owner_profile(&self) -> &str {
        let id = self.profile_id.trim();
        if id.is_empty() { FALLBACK_PROFILE_ID } else { id }
    }
}

/// Loosely-typed wire shape accepted from and produced for the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireRestaurantRecord {
    #[serde(default)]
    restaurant_id: Option<String>,
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    profile_id: Option<String>,
    #[serde(default)]
    external_id: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    address: Option<String>,
    #[serde(default)]
    cuisine: Option<String>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default, skip_serializing)]
    visited: Option<bool>,
    #[serde(default)]
    favorite: Option<bool>,
    #[serde(default)]
    is_favorite: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    updated_at: Option<i64>,
}

impl From<WireRestaurantRecord> for RestaurantRecord {
    fn from(wire: WireRestaurantRecord) -> Self {
        let status = ListStatus::normalize(wire.status.as_deref(), wire.visited);
        Self {
            restaurant_id: wire.restaurant_id.or(wire.id).unwrap_or_default(),
            profile_id: wire.profile_id.unwrap_or_default(),
            external_id: wire.external_id,
            name: wire.name.unwrap_or_default(),
            city: wire.city.unwrap_or_default(),
            address: wire.address,
            cuisine: wire.cuisine.unwrap_or_default(),
            status,
            favorite: wire.favorite.or(wire.is_favorite).unwrap_or(false),
            rating: wire.rating,
            notes: wire.notes,
            price: wire.price,
            updated_at: wire.updated_at,
        }
    }
}

impl From<RestaurantRecord> for WireRestaurantRecord {
    fn from(record: RestaurantRecord) -> Self {
        Self {
            restaurant_id: Some(record.restaurant_id),
            id: None,
            profile_id: Some(record.profile_id),
            external_id: record.external_id,
            name: Some(record.name),
            city: Some(record.city),
            address: record.address,
            cuisine: Some(record.cuisine),
            status: Some(record.status.as_str().to_string()),
            visited: None,
            // Mirrored under both names for older readers.
            favorite: Some(record.favorite),
            is_favorite: Some(record.favorite),
            rating: record.rating,
            notes: record.notes,
            price: record.price,
            updated_at: record.updated_at,
        }
    }
}
