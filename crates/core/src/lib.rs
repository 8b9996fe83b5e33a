//! # BiteRec Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port/adapter interfaces (traits) for storage and the remote API
//! - The persisted profile store and its change-notification bus
//! - Per-page view-model services
//!
//! ## Architecture Principles
//! - Only depends on `biterec-domain`
//! - No database or HTTP code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod profile;
pub mod remote;
pub mod views;

#[cfg(test)]
pub(crate) mod testing;

// Re-export specific items to avoid ambiguity
pub use profile::events::{ProfileEvents, Subscription};
pub use profile::ports::ProfileStorage;
pub use profile::store::ProfileStore;
pub use remote::ports::{ListQuery, PlaceSearch, RestaurantApi};
pub use views::explore::{ExploreService, ExploreView, LastSearch, SaveAction, SaveOutcome};
pub use views::lists::{ListsService, ListsView, ManualEntry};
pub use views::place::{PlaceDetailService, PlaceDetailView, PlaceParams};
pub use views::profile_page::{
    ImportSummary, ProfileExport, ProfilePageService, ProfileSettingsForm,
};
pub use views::stats::{StatsService, StatsView};
pub use views::ActionState;
