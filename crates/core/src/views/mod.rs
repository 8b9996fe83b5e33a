//! Per-page view-model services
//!
//! Each service is constructed with its ports plus the profile store,
//! resolves the active profile id when the caller supplies none, and
//! produces plain data views for the rendering sink. No service holds a
//! global; everything is injected.

pub mod explore;
pub mod lists;
pub mod place;
pub mod profile_page;
pub mod stats;

use serde::{Deserialize, Serialize};

/// Three-state outcome of a user-initiated mutation.
///
/// A failed mutation has a defined rendered state instead of an ad hoc
/// reverted label; the view re-fetches rather than trusting an optimistic
/// update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionState {
    Pending,
    Committed,
    Failed,
}
