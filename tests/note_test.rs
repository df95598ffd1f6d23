//! Integration tests for note CRUD, authorization, and the public surface.

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

async fn registered_user(app: &TestApp, prefix: &str) -> (String, String) {
    let username = unique_name(prefix);
    app.register(&username, STRONG_PASSWORD).await;
    let token = app.login(&username, STRONG_PASSWORD).await;
    (username, token)
}

#[tokio::test]
async fn create_note_forces_author_to_caller() {
    let app = test_app!();
    let (username, token) = registered_user(&app, "note_author").await;

    // The request tries to smuggle in a different author; the field is not
    // part of the request shape and must be ignored.
    let response = app
        .request(
            "POST",
            "/api/notes",
            Some(serde_json::json!({
                "title": "my title",
                "content": "my content",
                "public": false,
                "author": "someone_else",
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.body["data"]["author"], username.as_str());
    assert_eq!(response.body["data"]["title"], "my title");
    assert_eq!(response.body["data"]["content"], "my content");
    assert_eq!(response.body["data"]["public"], false);
}

#[tokio::test]
async fn create_note_requires_authentication() {
    let app = test_app!();

    let response = app
        .request(
            "POST",
            "/api/notes",
            Some(serde_json::json!({
                "title": "t",
                "content": "c",
                "public": true,
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn get_after_create_returns_identical_fields() {
    let app = test_app!();
    let (username, token) = registered_user(&app, "note_get").await;

    let created = app
        .create_note(&token, "round trip", "round trip body", false)
        .await;
    let id = created["id"].as_i64().unwrap();

    let response = app
        .request("GET", &format!("/api/notes/{id}"), None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let note = &response.body["data"];
    assert_eq!(note["id"], created["id"]);
    assert_eq!(note["title"], "round trip");
    assert_eq!(note["content"], "round trip body");
    assert_eq!(note["public"], false);
    assert_eq!(note["author"], username.as_str());
}

#[tokio::test]
async fn get_missing_note_is_not_found() {
    let app = test_app!();
    let (_, token) = registered_user(&app, "note_missing").await;

    let response = app
        .request("GET", "/api/notes/999999999", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_replaces_fields_but_not_author_or_id() {
    let app = test_app!();
    let (username, token) = registered_user(&app, "note_update").await;

    let created = app.create_note(&token, "before", "old body", false).await;
    let id = created["id"].as_i64().unwrap();

    let response = app
        .request(
            "PUT",
            &format!("/api/notes/{id}"),
            Some(serde_json::json!({
                "title": "after",
                "content": "new body",
                "public": true,
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    let note = &response.body["data"];
    assert_eq!(note["id"].as_i64().unwrap(), id);
    assert_eq!(note["author"], username.as_str());
    assert_eq!(note["title"], "after");
    assert_eq!(note["content"], "new body");
    assert_eq!(note["public"], true);

    // A follow-up read reflects the update.
    let read_back = app
        .request("GET", &format!("/api/notes/{id}"), None, Some(&token))
        .await;
    assert_eq!(read_back.body["data"]["title"], "after");
}

#[tokio::test]
async fn delete_returns_prior_record_and_note_is_gone() {
    let app = test_app!();
    let (_, token) = registered_user(&app, "note_delete").await;

    let created = app.create_note(&token, "doomed", "doomed body", false).await;
    let id = created["id"].as_i64().unwrap();

    let response = app
        .request("DELETE", &format!("/api/notes/{id}"), None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["title"], "doomed");

    let read_back = app
        .request("GET", &format!("/api/notes/{id}"), None, Some(&token))
        .await;
    assert_eq!(read_back.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn other_users_private_note_is_forbidden_not_missing() {
    let app = test_app!();
    let (_, owner_token) = registered_user(&app, "note_owner").await;
    let (_, intruder_token) = registered_user(&app, "note_intruder").await;

    let created = app
        .create_note(&owner_token, "private", "secret", false)
        .await;
    let id = created["id"].as_i64().unwrap();

    let read = app
        .request("GET", &format!("/api/notes/{id}"), None, Some(&intruder_token))
        .await;
    assert_eq!(read.status, StatusCode::FORBIDDEN);

    let update = app
        .request(
            "PUT",
            &format!("/api/notes/{id}"),
            Some(serde_json::json!({
                "title": "hijacked",
                "content": "hijacked",
                "public": true,
            })),
            Some(&intruder_token),
        )
        .await;
    assert_eq!(update.status, StatusCode::FORBIDDEN);

    let delete = app
        .request(
            "DELETE",
            &format!("/api/notes/{id}"),
            None,
            Some(&intruder_token),
        )
        .await;
    assert_eq!(delete.status, StatusCode::FORBIDDEN);

    // The note is untouched for its owner.
    let read_back = app
        .request("GET", &format!("/api/notes/{id}"), None, Some(&owner_token))
        .await;
    assert_eq!(read_back.status, StatusCode::OK);
    assert_eq!(read_back.body["data"]["title"], "private");
}

#[tokio::test]
async fn public_note_is_readable_but_not_writable_by_others() {
    let app = test_app!();
    let (_, owner_token) = registered_user(&app, "pub_owner").await;
    let (_, reader_token) = registered_user(&app, "pub_reader").await;

    let created = app
        .create_note(&owner_token, "shared", "for everyone", true)
        .await;
    let id = created["id"].as_i64().unwrap();

    let read = app
        .request("GET", &format!("/api/notes/{id}"), None, Some(&reader_token))
        .await;
    assert_eq!(read.status, StatusCode::OK);

    // Update and delete stay author-only even for public notes.
    let update = app
        .request(
            "PUT",
            &format!("/api/notes/{id}"),
            Some(serde_json::json!({
                "title": "x",
                "content": "x",
                "public": true,
            })),
            Some(&reader_token),
        )
        .await;
    assert_eq!(update.status, StatusCode::FORBIDDEN);

    let delete = app
        .request(
            "DELETE",
            &format!("/api/notes/{id}"),
            None,
            Some(&reader_token),
        )
        .await;
    assert_eq!(delete.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn my_notes_listing_includes_private_and_public() {
    let app = test_app!();
    let (username, token) = registered_user(&app, "list_mine").await;

    app.create_note(&token, "mine private", "p", false).await;
    app.create_note(&token, "mine public", "q", true).await;

    let response = app.request("GET", "/api/notes", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    let notes = response.body["data"].as_array().unwrap();
    assert_eq!(notes.len(), 2);
    assert!(notes.iter().all(|n| n["author"] == username.as_str()));
}

#[tokio::test]
async fn my_notes_search_matches_title_and_content() {
    let app = test_app!();
    let (_, token) = registered_user(&app, "search_mine").await;

    let marker = unique_name("marker");
    app.create_note(&token, &format!("has {marker} in title"), "body", false)
        .await;
    app.create_note(&token, "plain title", &format!("{marker} in body"), false)
        .await;
    app.create_note(&token, "unrelated", "unrelated", false).await;

    let response = app
        .request(
            "GET",
            &format!("/api/notes/search?text={marker}"),
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let notes = response.body["data"].as_array().unwrap();
    assert_eq!(notes.len(), 2);
}

#[tokio::test]
async fn public_listing_never_includes_private_notes() {
    let app = test_app!();
    let (username, token) = registered_user(&app, "pub_list").await;

    app.create_note(&token, "visible", "v", true).await;
    app.create_note(&token, "invisible", "i", false).await;

    let response = app
        .request(
            "GET",
            &format!("/api/public/notes?author={username}"),
            None,
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let notes = response.body["data"].as_array().unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0]["title"], "visible");
    assert_eq!(notes[0]["public"], true);
}

#[tokio::test]
async fn public_note_by_id_hides_private_notes() {
    let app = test_app!();
    let (_, token) = registered_user(&app, "pub_get").await;

    let public = app.create_note(&token, "open", "open body", true).await;
    let private = app.create_note(&token, "closed", "closed body", false).await;

    let open = app
        .request(
            "GET",
            &format!("/api/public/notes/{}", public["id"]),
            None,
            None,
        )
        .await;
    assert_eq!(open.status, StatusCode::OK);
    assert_eq!(open.body["data"]["title"], "open");

    // A private note reads as missing on the anonymous surface, the same
    // as a note that does not exist.
    let closed = app
        .request(
            "GET",
            &format!("/api/public/notes/{}", private["id"]),
            None,
            None,
        )
        .await;
    assert_eq!(closed.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn public_search_returns_only_matching_public_notes() {
    let app = test_app!();
    let (_, token) = registered_user(&app, "pub_search").await;

    let marker = unique_name("needle");
    app.create_note(&token, &format!("public {marker}"), "body", true)
        .await;
    app.create_note(&token, &format!("private {marker}"), "body", false)
        .await;
    app.create_note(&token, "public unrelated", "body", true).await;

    let response = app
        .request(
            "GET",
            &format!("/api/public/notes/search?text={marker}"),
            None,
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let notes = response.body["data"].as_array().unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0]["public"], true);
    assert!(notes[0]["title"].as_str().unwrap().contains(&marker));
}

#[tokio::test]
async fn public_search_scoped_to_author() {
    let app = test_app!();
    let (author_a, token_a) = registered_user(&app, "pub_author_a").await;
    let (_, token_b) = registered_user(&app, "pub_author_b").await;

    let marker = unique_name("scoped");
    app.create_note(&token_a, &format!("a {marker}"), "body", true)
        .await;
    app.create_note(&token_b, &format!("b {marker}"), "body", true)
        .await;

    let response = app
        .request(
            "GET",
            &format!("/api/public/notes/search?text={marker}&author={author_a}"),
            None,
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let notes = response.body["data"].as_array().unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0]["author"], author_a.as_str());
}
