//! Integration tests for the home page command.

mod support;

use biterec_app::commands::{home, profile};
use serde_json::json;
use support::setup_test_context;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn home_view_combines_the_profile_pill_and_stats() {
    let t = setup_test_context().await;
    profile::create_profile(&t.ctx, "Jess Kim", "", "97201").unwrap();

    Mock::given(method("GET"))
        .and(path("/restaurants"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "restaurantId": "r_1", "name": "Fork", "status": "tried", "profileId": "jess-kim" },
            { "restaurantId": "r_2", "name": "Lemon Tree", "profileId": "jess-kim" }
        ])))
        .mount(&t.server)
        .await;

    let view = home::get_home_view(&t.ctx).await.unwrap();
    assert_eq!(view.profile_label, "Jess Kim");
    assert_eq!(view.initials, "JE");
    assert_eq!(view.default_zip, "97201");
    assert_eq!(view.stats.saved, 2);
    assert_eq!(view.stats.tried, 1);
    assert_eq!(view.stats.to_try, 1);
}

#[tokio::test]
async fn home_view_surfaces_backend_failures() {
    let t = setup_test_context().await;

    Mock::given(method("GET"))
        .and(path("/restaurants"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&t.server)
        .await;

    let err = home::get_home_view(&t.ctx).await.unwrap_err();
    assert!(err.contains("Network"), "unexpected message: {err}");
}
