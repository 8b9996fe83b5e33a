//! Explore page commands

use std::time::Instant;

use biterec_core::{ExploreView, SaveAction, SaveOutcome};
use biterec_domain::{GeoPoint, PlaceResult};

use super::finish;
use crate::context::AppContext;
use crate::utils::logging::log_command_execution;

/// Search nearby places by ZIP and free text.
pub async fn search_places(
    ctx: &AppContext,
    zip: &str,
    query: &str,
    user_location: Option<GeoPoint>,
) -> Result<ExploreView, String> {
    let start = Instant::now();
    let result = ctx.explore.search(zip, query, user_location).await;
    finish("explore::search_places", start, result)
}

/// Save a search result to a list. Always resolves to an outcome; failures
/// surface as a failed action state rather than an error.
pub async fn save_place(
    ctx: &AppContext,
    action: SaveAction,
    place: &PlaceResult,
) -> SaveOutcome {
    let start = Instant::now();
    let outcome = ctx.explore.save_from_result(action, place, None).await;
    log_command_execution(
        "explore::save_place",
        start.elapsed(),
        outcome.state != biterec_core::ActionState::Failed,
    );
    outcome
}

/// ZIP to pre-fill the search form with.
pub fn get_initial_zip(ctx: &AppContext) -> String {
    ctx.explore.initial_zip()
}
