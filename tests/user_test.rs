//! Integration tests for user registration.

mod helpers;

use http::StatusCode;

use helpers::{STRONG_PASSWORD, TestApp, unique_name};

macro_rules! test_app {
    () => {
        match TestApp::new().await {
            Some(app) => app,
            None => {
                eprintln!("skipping: set NOTEHUB_TEST_DATABASE_URL to run integration tests");
                return;
            }
        }
    };
}

#[tokio::test]
async fn register_returns_user_without_password_hash() {
    let app = test_app!();
    let username = unique_name("register_ok");

    let response = app
        .request(
            "POST",
            "/api/users",
            Some(serde_json::json!({
                "username": username,
                "password": STRONG_PASSWORD,
                "full_name": "Integration Tester",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.body["data"]["username"], username.as_str());
    assert_eq!(response.body["data"]["full_name"], "Integration Tester");
    assert!(response.body["data"]["id"].is_i64());
    assert!(response.body["data"].get("hashed_password").is_none());
}

#[tokio::test]
async fn duplicate_username_is_a_conflict_and_original_survives() {
    let app = test_app!();
    let username = unique_name("register_dup");
    app.register(&username, STRONG_PASSWORD).await;

    let response = app
        .request(
            "POST",
            "/api/users",
            Some(serde_json::json!({
                "username": username,
                "password": "another sufficiently strong passphrase",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["error"], "CONFLICT");

    // The original credentials still work; the record was not modified.
    app.login(&username, STRONG_PASSWORD).await;
}

#[tokio::test]
async fn weak_password_is_rejected() {
    let app = test_app!();

    let response = app
        .request(
            "POST",
            "/api/users",
            Some(serde_json::json!({
                "username": unique_name("register_weak"),
                "password": "password",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn short_username_is_rejected() {
    let app = test_app!();

    let response = app
        .request(
            "POST",
            "/api/users",
            Some(serde_json::json!({
                "username": "ab",
                "password": STRONG_PASSWORD,
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}
