//! Integration tests for the lists commands against a mocked backend.

mod support;

use biterec_app::commands::{lists, profile};
use biterec_core::{ListQuery, ManualEntry};
use biterec_domain::ListStatus;
use serde_json::json;
use support::setup_test_context;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn load_lists_buckets_a_bare_array_payload() {
    let t = setup_test_context().await;

    Mock::given(method("GET"))
        .and(path("/restaurants"))
        .and(query_param("profileId", "household-main"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "restaurantId": "r_1", "name": "Fork", "status": "tried" },
            { "restaurantId": "r_2", "name": "Lemon Tree", "status": "want" },
            { "restaurantId": "r_3", "name": "Bar Gernika", "status": "tried", "favorite": true },
            { "restaurantId": "r_4", "name": "Elsewhere", "status": "tried", "profileId": "other" }
        ])))
        .mount(&t.server)
        .await;

    let view = lists::load_lists(&t.ctx, &ListQuery::default())
        .await
        .unwrap()
        .expect("load was not superseded");

    assert_eq!(view.profile_id, "household-main");
    assert_eq!(view.tried.len(), 2);
    assert_eq!(view.to_try.len(), 1);
    assert_eq!(view.to_try[0].name, "Lemon Tree");
    // Favorites overlay the status buckets without leaving them.
    assert_eq!(view.favorites.len(), 1);
    assert_eq!(view.favorites[0].name, "Bar Gernika");
}

#[tokio::test]
async fn load_lists_accepts_a_wrapped_payload() {
    let t = setup_test_context().await;

    Mock::given(method("GET"))
        .and(path("/restaurants"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "restaurants": [
                { "id": "legacy-1", "name": "Old Writer", "visited": true }
            ]
        })))
        .mount(&t.server)
        .await;

    let view = lists::load_lists(&t.ctx, &ListQuery::default()).await.unwrap().unwrap();
    assert_eq!(view.tried.len(), 1);
    assert_eq!(view.tried[0].restaurant_id, "legacy-1");
    assert!(view.to_try.is_empty());
}

#[tokio::test]
async fn add_manual_restaurant_requires_a_name() {
    let t = setup_test_context().await;

    let entry = ManualEntry {
        name: "   ".to_string(),
        cuisine: "basque".to_string(),
        city: "Boise".to_string(),
        status: None,
    };
    let err = lists::add_manual_restaurant(&t.ctx, entry).await.unwrap_err();
    assert!(err.contains("required"), "unexpected message: {err}");
}

#[tokio::test]
async fn add_manual_restaurant_saves_a_scoped_record() {
    let t = setup_test_context().await;

    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&t.server)
        .await;

    let entry = ManualEntry {
        name: "Goldy's".to_string(),
        cuisine: "breakfast".to_string(),
        city: "Boise".to_string(),
        status: Some(ListStatus::Tried),
    };
    let saved = lists::add_manual_restaurant(&t.ctx, entry).await.unwrap();

    assert!(saved.restaurant_id.starts_with("r_"), "missing generated id: {}", saved.restaurant_id);
    assert_eq!(saved.profile_id, "household-main");
    assert_eq!(saved.status, ListStatus::Tried);

    let requests = t.server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].url.path().starts_with("/restaurants/r_"));
}

#[tokio::test]
async fn remove_restaurant_sends_the_active_profile() {
    let t = setup_test_context().await;
    profile::create_profile(&t.ctx, "Jess Kim", "", "97201").unwrap();

    Mock::given(method("DELETE"))
        .and(path("/restaurants/r_gone"))
        .and(query_param("profileId", "jess-kim"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&t.server)
        .await;

    lists::remove_restaurant(&t.ctx, "r_gone").await.unwrap();
}

#[tokio::test]
async fn backend_failures_surface_as_command_errors() {
    let t = setup_test_context().await;

    Mock::given(method("GET"))
        .and(path("/restaurants"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&t.server)
        .await;

    let err = lists::load_lists(&t.ctx, &ListQuery::default()).await.unwrap_err();
    assert!(err.contains("Network"), "unexpected message: {err}");
}

#[tokio::test]
async fn profile_stats_count_every_saved_record_once() {
    let t = setup_test_context().await;

    Mock::given(method("GET"))
        .and(path("/restaurants"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "restaurantId": "r_1", "name": "Fork", "status": "tried", "favorite": true },
            { "restaurantId": "r_2", "name": "Lemon Tree", "status": "want" },
            { "restaurantId": "r_3", "name": "Zen Bento" }
        ])))
        .mount(&t.server)
        .await;

    let stats = profile::get_profile_stats(&t.ctx).await.unwrap();
    assert_eq!(stats.saved, 3);
    assert_eq!(stats.tried, 1);
    assert_eq!(stats.to_try, 2);
    assert_eq!(stats.favorites, 1);
    assert_eq!(stats.tried + stats.to_try, stats.saved);
}
