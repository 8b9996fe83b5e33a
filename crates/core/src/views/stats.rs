//! Saved-list counts for the home hero and the profile page.

use std::sync::Arc;

use biterec_domain::{ListStatus, Result};

use crate::profile::store::ProfileStore;
use crate::remote::ports::{ListQuery, RestaurantApi};

/// Counts over the active profile's saved restaurants. Every record lands
/// in exactly one of `tried`/`to_try` under the canonical status rule;
/// `favorites` is the orthogonal overlay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsView {
    pub saved: usize,
    pub tried: usize,
    pub to_try: usize,
    pub favorites: usize,
}

pub struct StatsService {
    api: Arc<dyn RestaurantApi>,
    profiles: Arc<ProfileStore>,
}

impl StatsService {
    pub fn new(api: Arc<dyn RestaurantApi>, profiles: Arc<ProfileStore>) -> Self {
        Self { api, profiles }
    }

    pub async fn load(&self, profile_id: Option<&str>) -> Result<StatsView> {
        let profile_id = match profile_id {
            Some(id) if !id.trim().is_empty() => id.to_string(),
            _ => self.profiles.active_profile_id(),
        };
        let records = self.api.fetch_restaurants(&profile_id, &ListQuery::default()).await?;

        let mut view = StatsView::default();
        for record in &records {
            if record.owner_profile() != profile_id {
                continue;
            }
            view.saved += 1;
            match record.status {
                ListStatus::Tried => view.tried += 1,
                ListStatus::Want => view.to_try += 1,
            }
            if record.favorite {
                view.favorites += 1;
            }
        }
        Ok(view)
    }
}
