use axum::http::header::LOCATION;
use test_utils::builder::TestBuilder;

use super::*;

/// Tests the status endpoint with authentication disabled.
///
/// Expected: 200 with `enabled: false` and no user
#[tokio::test]
async fn user_reports_auth_disabled() {
    let test = TestBuilder::new().build().await.unwrap();
    let app = app(test.db.as_ref().unwrap());

    let (status, body) = send(&app, get("/api/auth/user")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["enabled"], false);
    assert!(body["data"].get("user").is_none());
}

/// Tests that login without a provider skips straight to the book list.
///
/// Expected: redirect to /home
#[tokio::test]
async fn login_without_provider_redirects_home() {
    let test = TestBuilder::new().build().await.unwrap();
    let app = app(test.db.as_ref().unwrap());

    let response = app.oneshot(get("/api/auth/login")).await.unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers().get(LOCATION).unwrap(), "/home");
}

/// Tests that logout without a provider goes to the book list like login does.
///
/// Expected: redirect to /home
#[tokio::test]
async fn logout_without_provider_redirects_home() {
    let test = TestBuilder::new().build().await.unwrap();
    let app = app(test.db.as_ref().unwrap());

    let response = app.oneshot(get("/api/auth/logout")).await.unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers().get(LOCATION).unwrap(), "/home");
}
