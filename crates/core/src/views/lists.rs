//! Lists page service
//!
//! Loads the active profile's saved restaurants, buckets them into the
//! three rendered lists, and applies mutations as full-record overwrites.
//! Reloads are tagged with a sequence counter so a slow earlier response
//! never clobbers a faster later one.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use biterec_domain::{BiteRecError, ListStatus, RestaurantRecord, Result};
use chrono::Utc;
use tracing::debug;

use crate::profile::store::ProfileStore;
use crate::remote::ports::{ListQuery, RestaurantApi};

/// Data view for the lists page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListsView {
    pub profile_id: String,
    pub tried: Vec<RestaurantRecord>,
    pub to_try: Vec<RestaurantRecord>,
    /// Favorites overlay; records here also appear in their status bucket.
    pub favorites: Vec<RestaurantRecord>,
}

/// User input for the manual add form.
#[derive(Debug, Clone, Default)]
pub struct ManualEntry {
    pub name: String,
    pub cuisine: String,
    pub city: String,
    pub status: Option<ListStatus>,
}

/// Lists page view-model service.
pub struct ListsService {
    api: Arc<dyn RestaurantApi>,
    profiles: Arc<ProfileStore>,
    load_seq: AtomicU64,
}

impl ListsService {
    pub fn new(api: Arc<dyn RestaurantApi>, profiles: Arc<ProfileStore>) -> Self {
        Self { api, profiles, load_seq: AtomicU64::new(0) }
    }

    /// Fetch and bucket the saved restaurants for a profile.
    ///
    /// Returns `Ok(None)` when a newer load was issued while this one was
    /// in flight; the caller must discard the stale result. There is no
    /// cancellation of the underlying request, only the sequence check.
    pub async fn load(
        &self,
        profile_id: Option<&str>,
        query: &ListQuery,
    ) -> Result<Option<ListsView>> {
        let profile_id = self.resolve_profile(profile_id);
        let seq = self.load_seq.fetch_add(1, Ordering::SeqCst) + 1;

        let records = self.api.fetch_restaurants(&profile_id, query).await?;

        if self.load_seq.load(Ordering::SeqCst) != seq {
            debug!(seq, "discarding stale list response");
            return Ok(None);
        }

        let mut view = ListsView { profile_id: profile_id.clone(), ..ListsView::default() };
        for record in records {
            // Rows written before profiles existed carry no partition key
            // and belong to the default profile.
            if record.owner_profile() != profile_id {
                continue;
            }
            if record.favorite {
                view.favorites.push(record.clone());
            }
            match record.status {
                ListStatus::Tried => view.tried.push(record),
                ListStatus::Want => view.to_try.push(record),
            }
        }
        Ok(Some(view))
    }

    /// Save a restaurant entered by hand. The id is generated downstream
    /// when the record reaches the remote client.
    pub async fn add_manual(
        &self,
        entry: ManualEntry,
        profile_id: Option<&str>,
    ) -> Result<RestaurantRecord> {
        let name = entry.name.trim();
        if name.is_empty() {
            return Err(BiteRecError::InvalidInput("Restaurant name is required".to_string()));
        }

        let record = RestaurantRecord {
            profile_id: self.resolve_profile(profile_id),
            name: name.to_string(),
            cuisine: entry.cuisine.trim().to_string(),
            city: entry.city.trim().to_string(),
            status: entry.status.unwrap_or(ListStatus::Want),
            updated_at: Some(Utc::now().timestamp_millis()),
            ..RestaurantRecord::default()
        };
        self.api.save_restaurant(&record).await
    }

    /// Overwrite the record with a new rating.
    pub async fn set_rating(
        &self,
        record: &RestaurantRecord,
        rating: Option<f64>,
    ) -> Result<RestaurantRecord> {
        let mut next = record.clone();
        next.rating = rating;
        self.overwrite(next).await
    }

    /// Overwrite the record with new notes.
    pub async fn set_notes(
        &self,
        record: &RestaurantRecord,
        notes: &str,
    ) -> Result<RestaurantRecord> {
        let mut next = record.clone();
        next.notes = if notes.trim().is_empty() { None } else { Some(notes.to_string()) };
        self.overwrite(next).await
    }

    /// Flip the favorite overlay.
    pub async fn toggle_favorite(&self, record: &RestaurantRecord) -> Result<RestaurantRecord> {
        let mut next = record.clone();
        next.favorite = !next.favorite;
        self.overwrite(next).await
    }

    /// Promote a to-try record onto the tried list.
    pub async fn move_to_tried(&self, record: &RestaurantRecord) -> Result<RestaurantRecord> {
        let mut next = record.clone();
        next.status = ListStatus::Tried;
        self.overwrite(next).await
    }

    /// Remove a record, terminal for both lists.
    pub async fn remove(&self, restaurant_id: &str, profile_id: Option<&str>) -> Result<()> {
        let profile_id = self.resolve_profile(profile_id);
        self.api.delete_restaurant(restaurant_id, &profile_id).await
    }

    async fn overwrite(&self, mut record: RestaurantRecord) -> Result<RestaurantRecord> {
        if record.profile_id.is_empty() {
            record.profile_id = self.profiles.active_profile_id();
        }
        record.updated_at = Some(Utc::now().timestamp_millis());
        self.api.save_restaurant(&record).await
    }

    fn resolve_profile(&self, profile_id: Option<&str>) -> String {
        match profile_id {
            Some(id) if !id.trim().is_empty() => id.to_string(),
            _ => self.profiles.active_profile_id(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicUsize;

    use async_trait::async_trait;
    use biterec_domain::RemoteProfile;
    use parking_lot::Mutex;
    use tokio::sync::Notify;

    use super::*;
    use crate::testing::profile_store;

    fn record(name: &str, status: ListStatus, favorite: bool) -> RestaurantRecord {
        RestaurantRecord {
            restaurant_id: format!("r_{name}"),
            profile_id: "household-main".to_string(),
            name: name.to_string(),
            status,
            favorite,
            ..RestaurantRecord::default()
        }
    }

    /// Fixed-response api double recording saves and deletes.
    #[derive(Default)]
    struct StubApi {
        restaurants: Mutex<Vec<RestaurantRecord>>,
        saved: Mutex<Vec<RestaurantRecord>>,
        deleted: Mutex<Vec<(String, String)>>,
    }

    #[async_trait]
    impl RestaurantApi for StubApi {
        async fn fetch_profile(&self) -> Result<RemoteProfile> {
            Ok(RemoteProfile::default())
        }

        async fn save_profile(&self, _profile: &RemoteProfile) -> Result<()> {
            Ok(())
        }

        async fn fetch_restaurants(
            &self,
            _profile_id: &str,
            _query: &ListQuery,
        ) -> Result<Vec<RestaurantRecord>> {
            Ok(self.restaurants.lock().clone())
        }

        async fn save_restaurant(&self, record: &RestaurantRecord) -> Result<RestaurantRecord> {
            self.saved.lock().push(record.clone());
            Ok(record.clone())
        }

        async fn delete_restaurant(&self, restaurant_id: &str, profile_id: &str) -> Result<()> {
            self.deleted.lock().push((restaurant_id.to_string(), profile_id.to_string()));
            Ok(())
        }
    }

    /// Api double whose first fetch blocks until released, for overlap
    /// tests.
    struct GatedApi {
        gate: Notify,
        calls: AtomicUsize,
        first: Vec<RestaurantRecord>,
        second: Vec<RestaurantRecord>,
    }

    #[async_trait]
    impl RestaurantApi for GatedApi {
        async fn fetch_profile(&self) -> Result<RemoteProfile> {
            Ok(RemoteProfile::default())
        }

        async fn save_profile(&self, _profile: &RemoteProfile) -> Result<()> {
            Ok(())
        }

        async fn fetch_restaurants(
            &self,
            _profile_id: &str,
            _query: &ListQuery,
        ) -> Result<Vec<RestaurantRecord>> {
            if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
                self.gate.notified().await;
                Ok(self.first.clone())
            } else {
                Ok(self.second.clone())
            }
        }

        async fn save_restaurant(&self, record: &RestaurantRecord) -> Result<RestaurantRecord> {
            Ok(record.clone())
        }

        async fn delete_restaurant(&self, _restaurant_id: &str, _profile_id: &str) -> Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn load_buckets_records_by_status_and_favorite() {
        let api = Arc::new(StubApi::default());
        *api.restaurants.lock() = vec![
            record("fork", ListStatus::Tried, true),
            record("bar-gernika", ListStatus::Tried, false),
            record("ramen-sho", ListStatus::Want, true),
        ];

        let service = ListsService::new(api, profile_store());
        let view = service.load(None, &ListQuery::default()).await.unwrap().unwrap();

        assert_eq!(view.profile_id, "household-main");
        assert_eq!(view.tried.len(), 2);
        assert_eq!(view.to_try.len(), 1);
        assert_eq!(view.favorites.len(), 2);
    }

    #[tokio::test]
    async fn load_drops_rows_scoped_to_another_profile() {
        let api = Arc::new(StubApi::default());
        let mut other = record("elsewhere", ListStatus::Tried, false);
        other.profile_id = "jess-kim".to_string();
        let mut unscoped = record("legacy", ListStatus::Want, false);
        unscoped.profile_id = String::new();
        *api.restaurants.lock() = vec![record("fork", ListStatus::Tried, false), other, unscoped];

        let service = ListsService::new(api, profile_store());
        let view = service.load(None, &ListQuery::default()).await.unwrap().unwrap();

        assert_eq!(view.tried.len(), 1);
        assert_eq!(view.to_try.len(), 1, "unscoped legacy rows belong to the default profile");
    }

    #[tokio::test]
    async fn unscoped_rows_stay_out_of_non_default_profiles() {
        let api = Arc::new(StubApi::default());
        let mut unscoped = record("legacy", ListStatus::Tried, false);
        unscoped.profile_id = String::new();
        *api.restaurants.lock() = vec![unscoped];

        let service = ListsService::new(api, profile_store());
        let view = service.load(Some("jess-kim"), &ListQuery::default()).await.unwrap().unwrap();

        assert!(view.tried.is_empty(), "legacy rows must not leak into other profiles");
        assert!(view.to_try.is_empty());
        assert!(view.favorites.is_empty());
    }

    #[tokio::test]
    async fn stale_response_is_discarded() {
        let api = Arc::new(GatedApi {
            gate: Notify::new(),
            calls: AtomicUsize::new(0),
            first: vec![record("slow", ListStatus::Tried, false)],
            second: vec![record("fast", ListStatus::Tried, false)],
        });
        let service = Arc::new(ListsService::new(
            Arc::clone(&api) as Arc<dyn RestaurantApi>,
            profile_store(),
        ));

        let slow = tokio::spawn({
            let service = Arc::clone(&service);
            async move { service.load(None, &ListQuery::default()).await }
        });
        // Let the first load reach the api before issuing the second.
        while api.calls.load(Ordering::SeqCst) == 0 {
            tokio::task::yield_now().await;
        }

        let fast = service.load(None, &ListQuery::default()).await.unwrap();
        api.gate.notify_one();
        let slow = slow.await.unwrap().unwrap();

        assert!(slow.is_none(), "earlier request resolving later must be dropped");
        let fast = fast.unwrap();
        assert_eq!(fast.tried[0].name, "fast");
    }

    #[tokio::test]
    async fn add_manual_requires_a_name() {
        let service = ListsService::new(Arc::new(StubApi::default()), profile_store());
        let err = service
            .add_manual(ManualEntry { name: "   ".to_string(), ..ManualEntry::default() }, None)
            .await
            .unwrap_err();
        assert!(matches!(err, BiteRecError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn add_manual_scopes_to_the_active_profile() {
        let api = Arc::new(StubApi::default());
        let service = ListsService::new(Arc::clone(&api) as Arc<dyn RestaurantApi>, profile_store());

        let saved = service
            .add_manual(
                ManualEntry {
                    name: " Fork ".to_string(),
                    cuisine: "American".to_string(),
                    city: "Boise".to_string(),
                    status: None,
                },
                None,
            )
            .await
            .unwrap();

        assert_eq!(saved.profile_id, "household-main");
        assert_eq!(saved.name, "Fork");
        assert_eq!(saved.status, ListStatus::Want);
        assert_eq!(api.saved.lock().len(), 1);
    }

    #[tokio::test]
    async fn mutations_are_full_record_overwrites() {
        let api = Arc::new(StubApi::default());
        let service = ListsService::new(Arc::clone(&api) as Arc<dyn RestaurantApi>, profile_store());
        let original = record("fork", ListStatus::Want, false);

        let promoted = service.move_to_tried(&original).await.unwrap();
        assert_eq!(promoted.status, ListStatus::Tried);
        assert_eq!(promoted.name, original.name);

        let favored = service.toggle_favorite(&promoted).await.unwrap();
        assert!(favored.favorite);

        let rated = service.set_rating(&favored, Some(4.5)).await.unwrap();
        assert_eq!(rated.rating, Some(4.5));

        // Each mutation shipped the whole record.
        assert_eq!(api.saved.lock().len(), 3);
    }

    #[tokio::test]
    async fn remove_resolves_the_active_profile() {
        let api = Arc::new(StubApi::default());
        let service = ListsService::new(Arc::clone(&api) as Arc<dyn RestaurantApi>, profile_store());

        service.remove("r_fork", None).await.unwrap();
        assert_eq!(
            api.deleted.lock().as_slice(),
            &[("r_fork".to_string(), "household-main".to_string())]
        );
    }
}
