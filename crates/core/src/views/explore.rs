//! Explore page service
//!
//! Nearby-place search scoped to a ZIP plus free text, with distances
//! attached when the user's location is known, and save actions that turn
//! a search result into a saved restaurant record.

use std::sync::Arc;

use biterec_domain::utils::geo::distance_miles;
use biterec_domain::{
    BiteRecError, GeoPoint, ListStatus, PlaceResult, RestaurantRecord, Result,
};
use chrono::Utc;
use parking_lot::Mutex;
use tracing::warn;

use super::ActionState;
use crate::profile::store::ProfileStore;
use crate::remote::ports::{PlaceSearch, RestaurantApi};

/// Data view for the explore page.
#[derive(Debug, Clone, Default)]
pub struct ExploreView {
    pub zip: String,
    pub query: String,
    pub center: Option<GeoPoint>,
    pub count: usize,
    pub places: Vec<PlaceResult>,
}

/// Which list a search result is saved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveAction {
    Want,
    Tried,
    /// Favorite implies tried.
    Favorite,
}

/// Resolved state of a save action, rendered inline next to the result.
#[derive(Debug, Clone)]
pub struct SaveOutcome {
    pub state: ActionState,
    pub record: Option<RestaurantRecord>,
    pub message: String,
}

/// The most recent search, kept for restore when the page re-renders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LastSearch {
    pub zip: String,
    pub query: String,
}

/// Explore page view-model service.
pub struct ExploreService {
    places: Arc<dyn PlaceSearch>,
    api: Arc<dyn RestaurantApi>,
    profiles: Arc<ProfileStore>,
    last_search: Mutex<Option<LastSearch>>,
}

impl ExploreService {
    pub fn new(
        places: Arc<dyn PlaceSearch>,
        api: Arc<dyn RestaurantApi>,
        profiles: Arc<ProfileStore>,
    ) -> Self {
        Self { places, api, profiles, last_search: Mutex::new(None) }
    }

    /// Search places around a ZIP. An empty ZIP never reaches the remote
    /// client.
    pub async fn search(
        &self,
        zip: &str,
        query: &str,
        user_location: Option<GeoPoint>,
    ) -> Result<ExploreView> {
        let zip = zip.trim();
        if zip.is_empty() {
            return Err(BiteRecError::InvalidInput("ZIP code is required".to_string()));
        }
        let query = query.trim();

        let response = self.places.search(zip, query).await?;

        let mut places = response.places;
        if let Some(user) = user_location {
            for place in &mut places {
                place.distance_from_user_mi =
                    place.location().map(|loc| distance_miles(user, loc));
            }
        }

        *self.last_search.lock() =
            Some(LastSearch { zip: zip.to_string(), query: query.to_string() });

        Ok(ExploreView {
            zip: zip.to_string(),
            query: query.to_string(),
            center: response.center,
            count: response.count,
            places,
        })
    }

    /// ZIP to pre-fill the search form with: the last search, else the
    /// active profile's default.
    pub fn initial_zip(&self) -> String {
        self.last_search
            .lock()
            .as_ref()
            .map_or_else(|| self.profiles.default_zip(), |s| s.zip.clone())
    }

    /// The remembered search, when any.
    pub fn last_search(&self) -> Option<LastSearch> {
        self.last_search.lock().clone()
    }

    /// Save a search result to a list. Failures are caught here and
    /// rendered as a failed action state; the prior view data stays as is.
    pub async fn save_from_result(
        &self,
        action: SaveAction,
        place: &PlaceResult,
        profile_id: Option<&str>,
    ) -> SaveOutcome {
        let profile_id = match profile_id {
            Some(id) if !id.trim().is_empty() => id.to_string(),
            _ => self.profiles.active_profile_id(),
        };

        let (status, favorite) = match action {
            SaveAction::Want => (ListStatus::Want, false),
            SaveAction::Tried => (ListStatus::Tried, false),
            SaveAction::Favorite => (ListStatus::Tried, true),
        };

        // Keyed by the upstream place id so repeated saves of the same
        // place upsert one record; the client only generates an id when
        // the place has none.
        let record = RestaurantRecord {
            restaurant_id: place.place_id().unwrap_or_default().to_string(),
            profile_id,
            external_id: place.place_id().map(ToString::to_string),
            name: place.name.clone().unwrap_or_else(|| "Unnamed place".to_string()),
            city: place.city.clone().unwrap_or_default(),
            address: street_address(place),
            cuisine: place.cuisine.clone().unwrap_or_default(),
            status,
            favorite,
            updated_at: Some(Utc::now().timestamp_millis()),
            ..RestaurantRecord::default()
        };

        match self.api.save_restaurant(&record).await {
            Ok(saved) => SaveOutcome {
                state: ActionState::Committed,
                record: Some(saved),
                message: match action {
                    SaveAction::Want => "Added to To-Try".to_string(),
                    SaveAction::Tried => "Marked as Tried".to_string(),
                    SaveAction::Favorite => "Saved as Favorite".to_string(),
                },
            },
            Err(err) => {
                warn!(error = %err, name = %record.name, "failed to save place");
                SaveOutcome {
                    state: ActionState::Failed,
                    record: None,
                    message: "Could not save. Try again.".to_string(),
                }
            }
        }
    }
}

fn street_address(place: &PlaceResult) -> Option<String> {
    let line = [place.housenumber.as_deref(), place.street.as_deref()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ");
    if line.is_empty() { None } else { Some(line) }
}
