//! Application context - dependency injection container

use std::sync::Arc;

use biterec_core::{
    ExploreService, ListsService, PlaceDetailService, PlaceSearch, ProfileEvents,
    ProfilePageService, ProfileStore, RestaurantApi, StatsService,
};
use biterec_domain::{Config, Result};
use biterec_infra::{BiteRecApiClient, DbManager, PlaceSearchClient, SqliteProfileStorage};
use tracing::info;

/// Application context - holds all services and dependencies.
///
/// Everything is injected explicitly; there is no ambient global. Pages
/// receive the context and call commands against it.
pub struct AppContext {
    pub config: Config,
    pub db: Arc<DbManager>,
    pub events: ProfileEvents,
    pub profiles: Arc<ProfileStore>,
    pub api: Arc<dyn RestaurantApi>,
    pub place_search: Arc<dyn PlaceSearch>,
    pub explore: Arc<ExploreService>,
    pub lists: Arc<ListsService>,
    pub place_detail: Arc<PlaceDetailService>,
    pub stats: Arc<StatsService>,
    pub profile_page: Arc<ProfilePageService>,
}

impl AppContext {
    /// Build the context from the ambient configuration sources.
    pub fn new() -> Result<Self> {
        let config = biterec_infra::config::load()?;
        Self::with_config(config)
    }

    /// Build the context from an explicit configuration (tests inject a
    /// temp database and a mock backend this way).
    pub fn with_config(config: Config) -> Result<Self> {
        let db = Arc::new(DbManager::new(&config.database.path, config.database.pool_size)?);
        db.run_migrations()?;

        let storage = Arc::new(SqliteProfileStorage::new(Arc::clone(&db)));
        let events = ProfileEvents::new();
        let profiles = Arc::new(ProfileStore::new(storage, events.clone())?);

        let api: Arc<dyn RestaurantApi> = Arc::new(BiteRecApiClient::new(&config.api)?);
        let place_search: Arc<dyn PlaceSearch> = Arc::new(PlaceSearchClient::new(&config.api)?);

        let explore = Arc::new(ExploreService::new(
            Arc::clone(&place_search),
            Arc::clone(&api),
            Arc::clone(&profiles),
        ));
        let lists = Arc::new(ListsService::new(Arc::clone(&api), Arc::clone(&profiles)));
        let place_detail =
            Arc::new(PlaceDetailService::new(Arc::clone(&api), Arc::clone(&profiles)));
        let stats = Arc::new(StatsService::new(Arc::clone(&api), Arc::clone(&profiles)));
        let profile_page =
            Arc::new(ProfilePageService::new(Arc::clone(&api), Arc::clone(&profiles)));

        info!(
            db_path = %config.database.path,
            api_base = %config.api.base_url,
            active_profile = %profiles.active_profile_id(),
            "application context initialised"
        );

        Ok(Self {
            config,
            db,
            events,
            profiles,
            api,
            place_search,
            explore,
            lists,
            place_detail,
            stats,
            profile_page,
        })
    }
}
