use async_trait::async_trait;
use biterec_domain::{
    PlaceSearchResponse, RemoteProfile, RestaurantRecord, Result,
};

/// Server-side filters for listing a profile's saved restaurants. Empty
/// fields are omitted from the request entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    /// Free-text search.
    pub q: String,
    /// Canonical list status, `"tried"` or `"want"`.
    pub status: String,
    /// Cuisine tag.
    pub tag: String,
}

impl ListQuery {
    pub fn with_status(status: impl Into<String>) -> Self {
        Self { status: status.into(), ..Self::default() }
    }
}

/// Port to the remote restaurant/profile API.
///
/// Implementations live in the infra layer; view services and commands
/// depend only on this trait so tests can substitute doubles.
#[async_trait]
pub trait RestaurantApi: Send + Sync {
    /// Fetch the remote profile document, tolerating a loose shape.
    async fn fetch_profile(&self) -> Result<RemoteProfile>;

    /// Persist the remote profile document.
    async fn save_profile(&self, profile: &RemoteProfile) -> Result<()>;

    /// List saved restaurants for a profile, optionally filtered.
    async fn fetch_restaurants(
        &self,
        profile_id: &str,
        query: &ListQuery,
    ) -> Result<Vec<RestaurantRecord>>;

    /// Create or update a saved restaurant.
    async fn save_restaurant(&self, record: &RestaurantRecord) -> Result<RestaurantRecord>;

    /// Remove a saved restaurant for a profile.
    async fn delete_restaurant(&self, restaurant_id: &str, profile_id: &str) -> Result<()>;
}

/// Port to the nearby-place discovery service.
#[async_trait]
pub trait PlaceSearch: Send + Sync {
    /// Search for places around a ZIP code, optionally filtered by a
    /// free-text query.
    async fn search(&self, zip: &str, query: &str) -> Result<PlaceSearchResponse>;
}
