//! Place detail page service
//!
//! Builds the detail view (header, chips, address, contact, hours, amenity
//! flags) from the place descriptor carried in the page parameters, and
//! saves the place onto a list with an optional rating.

use std::sync::Arc;

use biterec_domain::utils::geo::distance_label;
use biterec_domain::utils::hours::pretty_hours;
use biterec_domain::{ListStatus, PlaceResult, RestaurantRecord, Result};
use chrono::Utc;

use crate::profile::store::ProfileStore;
use crate::remote::ports::RestaurantApi;

/// Parameters handed to the detail page by the navigating page.
#[derive(Debug, Clone, Default)]
pub struct PlaceParams {
    pub place: PlaceResult,
    /// Distance from the user, pre-computed by the navigating page.
    pub distance_mi: Option<f64>,
}

/// Fully rendered data view for the detail page.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceDetailView {
    pub title: String,
    /// Cuisine and city joined, or a generic fallback.
    pub subtitle: String,
    pub cuisine_chip: Option<String>,
    /// Hidden when it duplicates the cuisine or is the generic "restaurant".
    pub amenity_chip: Option<String>,
    pub distance_chip: Option<String>,
    pub address_lines: Vec<String>,
    pub contact_line: Option<String>,
    pub hours: Option<String>,
    /// "Takeaway" / "Delivery" / "Drive-through" for "yes" flags, labeled
    /// values for anything else, "no" suppressed.
    pub amenities: Vec<String>,
}

/// Detail page view-model service.
pub struct PlaceDetailService {
    api: Arc<dyn RestaurantApi>,
    profiles: Arc<ProfileStore>,
}

impl PlaceDetailService {
    pub fn new(api: Arc<dyn RestaurantApi>, profiles: Arc<ProfileStore>) -> Self {
        Self { api, profiles }
    }

    /// Build the view; purely local, never fails.
    pub fn build_view(&self, params: &PlaceParams) -> PlaceDetailView {
        let place = &params.place;
        let title =
            place.name.clone().filter(|n| !n.is_empty()).unwrap_or_else(|| "Restaurant".to_string());

        let cuisine = place.cuisine.as_deref().unwrap_or("").trim();
        let city = place.city.as_deref().unwrap_or("").trim();

        let subtitle_bits: Vec<&str> =
            [cuisine, city].into_iter().filter(|s| !s.is_empty()).collect();
        let subtitle = if subtitle_bits.is_empty() {
            "Restaurant".to_string()
        } else {
            subtitle_bits.join(" • ")
        };

        let cuisine_chip =
            if cuisine.is_empty() { None } else { Some(cuisine.to_string()) };
        let amenity_chip = amenity_chip(place.amenity.as_deref(), cuisine);
        let distance_chip =
            distance_label(params.distance_mi).map(|label| format!("{label} away"));

        let mut address_lines = Vec::new();
        let line1 = join_present(&[place.housenumber.as_deref(), place.street.as_deref()], " ");
        if let Some(line) = line1 {
            address_lines.push(line);
        }
        let line2 = join_present(
            &[place.city.as_deref(), place.state.as_deref(), place.postcode.as_deref()],
            " ",
        );
        if let Some(line) = line2 {
            address_lines.push(line);
        }

        let phone = place.phone.as_deref().filter(|p| !p.is_empty()).map(|p| format!("Phone: {p}"));
        let website = place.website.clone().filter(|w| !w.is_empty());
        let contact_line = match (phone, website) {
            (Some(p), Some(w)) => Some(format!("{p} • {w}")),
            (Some(p), None) => Some(p),
            (None, Some(w)) => Some(w),
            (None, None) => None,
        };

        let hours = place
            .opening_hours
            .as_deref()
            .filter(|h| !h.trim().is_empty())
            .map(|h| pretty_hours(h).unwrap_or_else(|| h.to_string()));

        let amenities = [
            ("Takeaway", place.takeaway.as_deref()),
            ("Delivery", place.delivery.as_deref()),
            ("Drive-through", place.drive_through.as_deref()),
        ]
        .into_iter()
        .filter_map(|(label, value)| yes_no_label(label, value))
        .collect();

        PlaceDetailView {
            title,
            subtitle,
            cuisine_chip,
            amenity_chip,
            distance_chip,
            address_lines,
            contact_line,
            hours,
            amenities,
        }
    }

    /// Save the place onto a list. The rating is attached only when marking
    /// as tried; a to-try save never carries one.
    pub async fn add_to_list(
        &self,
        params: &PlaceParams,
        status: ListStatus,
        rating: Option<f64>,
        profile_id: Option<&str>,
    ) -> Result<RestaurantRecord> {
        let place = &params.place;
        let profile_id = match profile_id {
            Some(id) if !id.trim().is_empty() => id.to_string(),
            _ => self.profiles.active_profile_id(),
        };

        let cuisine = place
            .cuisine
            .clone()
            .filter(|c| !c.is_empty())
            .or_else(|| place.amenity.clone().filter(|a| !a.is_empty()))
            .unwrap_or_else(|| "Restaurant".to_string());

        // Same id scheme as the explore page: keyed by the upstream place
        // id so a to-try save followed by a tried save upserts one record.
        let record = RestaurantRecord {
            restaurant_id: place.place_id().unwrap_or_default().to_string(),
            profile_id,
            external_id: place.place_id().map(ToString::to_string),
            name: place
                .name
                .clone()
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| "Restaurant".to_string()),
            city: place.city.clone().unwrap_or_default(),
            cuisine,
            status,
            rating: if status == ListStatus::Tried { rating } else { None },
            updated_at: Some(Utc::now().timestamp_millis()),
            ..RestaurantRecord::default()
        };
        self.api.save_restaurant(&record).await
    }
}

/// The amenity chip is shown only when it adds information beyond the
/// cuisine chip.
fn amenity_chip(amenity: Option<&str>, cuisine: &str) -> Option<String> {
    let raw = amenity?.trim();
    if raw.is_empty() {
        return None;
    }
    let clean = raw.replace('_', " ");
    let lowered = clean.to_lowercase();
    if lowered == "restaurant" || lowered == cuisine.to_lowercase() {
        return None;
    }
    Some(clean)
}

fn yes_no_label(label: &str, value: Option<&str>) -> Option<String> {
    let value = value?.trim();
    match value.to_lowercase().as_str() {
        "" | "no" => None,
        "yes" => Some(label.to_string()),
        _ => Some(format!("{label}: {value}")),
    }
}

fn join_present(parts: &[Option<&str>], sep: &str) -> Option<String> {
    let joined = parts
        .iter()
        .filter_map(|p| p.map(str::trim).filter(|s| !s.is_empty()))
        .collect::<Vec<_>>()
        .join(sep);
    if joined.is_empty() { None } else { Some(joined) }
}
