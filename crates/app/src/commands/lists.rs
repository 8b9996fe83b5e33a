//! Lists page commands

use std::time::Instant;

use biterec_core::{ListQuery, ListsView, ManualEntry};
use biterec_domain::RestaurantRecord;

use super::finish;
use crate::context::AppContext;

/// Load the active profile's lists. `Ok(None)` means a newer load
/// superseded this one and the caller should keep the current view.
pub async fn load_lists(
    ctx: &AppContext,
    query: &ListQuery,
) -> Result<Option<ListsView>, String> {
    let start = Instant::now();
    let result = ctx.lists.load(None, query).await;
    finish("lists::load_lists", start, result)
}

/// Save a restaurant entered by hand.
pub async fn add_manual_restaurant(
    ctx: &AppContext,
    entry: ManualEntry,
) -> Result<RestaurantRecord, String> {
    let start = Instant::now();
    let result = ctx.lists.add_manual(entry, None).await;
    finish("lists::add_manual_restaurant", start, result)
}

/// Overwrite a record with a new rating.
pub async fn set_restaurant_rating(
    ctx: &AppContext,
    record: &RestaurantRecord,
    rating: Option<f64>,
) -> Result<RestaurantRecord, String> {
    let start = Instant::now();
    let result = ctx.lists.set_rating(record, rating).await;
    finish("lists::set_restaurant_rating", start, result)
}

/// Overwrite a record with new notes.
pub async fn set_restaurant_notes(
    ctx: &AppContext,
    record: &RestaurantRecord,
    notes: &str,
) -> Result<RestaurantRecord, String> {
    let start = Instant::now();
    let result = ctx.lists.set_notes(record, notes).await;
    finish("lists::set_restaurant_notes", start, result)
}

/// Flip the favorite overlay on a record.
pub async fn toggle_favorite(
    ctx: &AppContext,
    record: &RestaurantRecord,
) -> Result<RestaurantRecord, String> {
    let start = Instant::now();
    let result = ctx.lists.toggle_favorite(record).await;
    finish("lists::toggle_favorite", start, result)
}

/// Promote a to-try record onto the tried list.
pub async fn move_to_tried(
    ctx: &AppContext,
    record: &RestaurantRecord,
) -> Result<RestaurantRecord, String> {
    let start = Instant::now();
    let result = ctx.lists.move_to_tried(record).await;
    finish("lists::move_to_tried", start, result)
}

/// Remove a record from both lists.
pub async fn remove_restaurant(ctx: &AppContext, restaurant_id: &str) -> Result<(), String> {
    let start = Instant::now();
    let result = ctx.lists.remove(restaurant_id, None).await;
    finish("lists::remove_restaurant", start, result)
}
