//! Place detail page commands

use std::time::Instant;

use biterec_core::{PlaceDetailView, PlaceParams};
use biterec_domain::{ListStatus, RestaurantRecord};

use super::finish;
use crate::context::AppContext;
use crate::utils::logging::log_command_execution;

/// Build the detail view from the navigation parameters. Purely local.
pub fn get_place_view(ctx: &AppContext, params: &PlaceParams) -> PlaceDetailView {
    let start = Instant::now();
    let view = ctx.place_detail.build_view(params);
    log_command_execution("place::get_place_view", start.elapsed(), true);
    view
}

/// Save the place onto a list, with a rating when marking as tried.
pub async fn add_place_to_list(
    ctx: &AppContext,
    params: &PlaceParams,
    status: ListStatus,
    rating: Option<f64>,
) -> Result<RestaurantRecord, String> {
    let start = Instant::now();
    let result = ctx.place_detail.add_to_list(params, status, rating, None).await;
    finish("place::add_place_to_list", start, result)
}
