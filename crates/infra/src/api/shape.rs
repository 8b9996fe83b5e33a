//! Compatibility shim for legacy restaurant-list payloads.
//!
//! The current backend returns a bare JSON array, but older deployments
//! wrapped it under a conventional key. This shim is the single place that
//! knowledge lives; everything past the client boundary sees typed records.

use biterec_domain::RestaurantRecord;
use serde_json::Value;
use tracing::warn;

/// Wrapper keys tried in priority order.
const WRAPPER_KEYS: [&str; 3] = ["restaurants", "items", "data"];

/// Extract the restaurant list from a payload of any supported vintage:
/// a bare array, an object wrapping one under a known key, or failing
/// that the first array-valued property. Anything else is an empty list.
pub fn restaurant_list(payload: Value) -> Vec<RestaurantRecord> {
    let array = match payload {
        Value::Array(items) => Some(items),
        Value::Object(map) => {
            let by_key = WRAPPER_KEYS.iter().find_map(|key| match map.get(*key) {
                Some(Value::Array(items)) => Some(items.clone()),
                _ => None,
            });
            by_key.or_else(|| {
                // Document order; serde_json's preserve_order feature keeps
                // the map from reordering keys alphabetically.
                map.into_iter().find_map(|(_, value)| match value {
                    Value::Array(items) => Some(items),
                    _ => None,
                })
            })
        }
        _ => None,
    };

    let Some(items) = array else {
        warn!("restaurant payload had no recognizable list, treating as empty");
        return Vec::new();
    };

    items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<RestaurantRecord>(item) {
            Ok(record) => Some(record),
            Err(err) => {
                warn!(error = %err, "skipping malformed restaurant entry");
                None
            }
        })
        .collect()
}
