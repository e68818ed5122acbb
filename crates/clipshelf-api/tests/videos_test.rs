//! End-to-end tests for the video API: upload, list, get, stream, delete,
//! and the ownership boundary between users.

mod helpers;

use axum::http::{header, StatusCode};
use axum_test::multipart::{MultipartForm, Part};
use helpers::{auth::token_for, setup_test_app};
use serde_json::Value;

const CLIP_BYTES: &[u8] = b"twelve bytes";

fn upload_form(bytes: &[u8], title: &str) -> MultipartForm {
    MultipartForm::new()
        .add_text("title", title.to_string())
        .add_part(
            "file",
            Part::bytes(bytes.to_vec())
                .file_name("clip.mp4")
                .mime_type("video/mp4"),
        )
}

#[tokio::test]
async fn test_upload_list_stream_delete_roundtrip() {
    let app = setup_test_app().await;
    app.seed_user("alice").await;
    let token = token_for("alice");

    // Upload
    let response = app
        .server
        .post("/api/videos/upload")
        .authorization_bearer(&token)
        .multipart(upload_form(CLIP_BYTES, "trip"))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);

    let body: Value = response.json();
    let video_id = body["videoId"].as_i64().expect("videoId");
    let filename = body["filename"].as_str().expect("filename").to_string();
    assert_eq!(body["fileSize"].as_i64(), Some(CLIP_BYTES.len() as i64));
    assert_eq!(body["message"].as_str(), Some("Video uploaded successfully"));
    assert!(filename.starts_with("alice_"));
    assert!(filename.ends_with(".mp4"));

    // List shows exactly the uploaded video
    let response = app
        .server
        .get("/api/videos/my-videos")
        .authorization_bearer(&token)
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let listed: Vec<Value> = response.json();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["title"].as_str(), Some("trip"));
    assert_eq!(listed[0]["uploaderUsername"].as_str(), Some("alice"));
    assert!(listed[0].get("filePath").is_none());

    // Get info
    let response = app
        .server
        .get(&format!("/api/videos/{}", video_id))
        .authorization_bearer(&token)
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let info: Value = response.json();
    assert_eq!(info["id"].as_i64(), Some(video_id));
    assert_eq!(info["contentType"].as_str(), Some("video/mp4"));

    // Stream returns exactly the uploaded bytes with the declared type
    let response = app
        .server
        .get(&format!("/api/videos/{}/stream", video_id))
        .authorization_bearer(&token)
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.as_bytes().as_ref(), CLIP_BYTES);
    let headers = response.headers();
    assert_eq!(
        headers.get(header::CONTENT_TYPE).and_then(|v| v.to_str().ok()),
        Some("video/mp4")
    );
    let disposition = headers
        .get(header::CONTENT_DISPOSITION)
        .and_then(|v| v.to_str().ok())
        .expect("content-disposition");
    assert!(disposition.starts_with("inline;"));
    assert!(disposition.contains(&filename));

    // Delete
    let response = app
        .server
        .delete(&format!("/api/videos/{}", video_id))
        .authorization_bearer(&token)
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["message"].as_str(), Some("Video deleted successfully"));

    // Gone from the list, gone from get, gone from disk
    let response = app
        .server
        .get("/api/videos/my-videos")
        .authorization_bearer(&token)
        .await;
    let listed: Vec<Value> = response.json();
    assert!(listed.is_empty());

    let response = app
        .server
        .get(&format!("/api/videos/{}", video_id))
        .authorization_bearer(&token)
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    assert!(app.stored_files().is_empty());
}

#[tokio::test]
async fn test_empty_upload_creates_nothing() {
    let app = setup_test_app().await;
    app.seed_user("alice").await;
    let token = token_for("alice");

    let response = app
        .server
        .post("/api/videos/upload")
        .authorization_bearer(&token)
        .multipart(upload_form(b"", "empty clip"))
        .await;
    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("Failed to upload video"));

    assert_eq!(app.video_count().await, 0);
    assert!(app.stored_files().is_empty());
}

#[tokio::test]
async fn test_missing_title_rejected() {
    let app = setup_test_app().await;
    app.seed_user("alice").await;
    let token = token_for("alice");

    let form = MultipartForm::new().add_part(
        "file",
        Part::bytes(CLIP_BYTES.to_vec())
            .file_name("clip.mp4")
            .mime_type("video/mp4"),
    );
    let response = app
        .server
        .post("/api/videos/upload")
        .authorization_bearer(&token)
        .multipart(form)
        .await;
    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(app.video_count().await, 0);
    assert!(app.stored_files().is_empty());
}

#[tokio::test]
async fn test_overlong_description_rejected() {
    let app = setup_test_app().await;
    app.seed_user("alice").await;
    let token = token_for("alice");

    // One character past the limit fails and leaves nothing behind
    let form = upload_form(CLIP_BYTES, "verbose").add_text("description", "d".repeat(1001));
    let response = app
        .server
        .post("/api/videos/upload")
        .authorization_bearer(&token)
        .multipart(form)
        .await;
    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("Description"));
    assert_eq!(app.video_count().await, 0);
    assert!(app.stored_files().is_empty());

    // A description at exactly the limit is accepted
    let form = upload_form(CLIP_BYTES, "verbose").add_text("description", "d".repeat(1000));
    let response = app
        .server
        .post("/api/videos/upload")
        .authorization_bearer(&token)
        .multipart(form)
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    assert_eq!(app.video_count().await, 1);
}

#[tokio::test]
async fn test_ownership_boundary_between_users() {
    let app = setup_test_app().await;
    app.seed_user("alice").await;
    app.seed_user("bob").await;
    let alice = token_for("alice");
    let bob = token_for("bob");

    let response = app
        .server
        .post("/api/videos/upload")
        .authorization_bearer(&alice)
        .multipart(upload_form(CLIP_BYTES, "private"))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    let video_id = response.json::<Value>()["videoId"].as_i64().unwrap();

    // Bob cannot see, stream, or delete Alice's video
    let response = app
        .server
        .get(&format!("/api/videos/{}", video_id))
        .authorization_bearer(&bob)
        .await;
    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);

    let response = app
        .server
        .get(&format!("/api/videos/{}/stream", video_id))
        .authorization_bearer(&bob)
        .await;
    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);

    let response = app
        .server
        .delete(&format!("/api/videos/{}", video_id))
        .authorization_bearer(&bob)
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    // Bob's own list stays empty; Alice still has her video
    let response = app
        .server
        .get("/api/videos/my-videos")
        .authorization_bearer(&bob)
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.json::<Vec<Value>>().is_empty());

    let response = app
        .server
        .get(&format!("/api/videos/{}", video_id))
        .authorization_bearer(&alice)
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_delete_unknown_id_is_bad_request() {
    let app = setup_test_app().await;
    app.seed_user("alice").await;

    let response = app
        .server
        .delete("/api/videos/9999")
        .authorization_bearer(&token_for("alice"))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("not found"));
}

#[tokio::test]
async fn test_unauthenticated_requests_rejected() {
    let app = setup_test_app().await;

    let response = app.server.get("/api/videos/my-videos").await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);

    let response = app.server.get("/api/videos/1").await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);

    let response = app.server.delete("/api/videos/1").await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);

    let response = app
        .server
        .post("/api/videos/upload")
        .multipart(upload_form(CLIP_BYTES, "x"))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);

    // Garbage token is as good as none
    let response = app
        .server
        .get("/api/videos/my-videos")
        .authorization_bearer("not-a-jwt")
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_concurrent_uploads_get_distinct_filenames() {
    let app = setup_test_app().await;
    app.seed_user("alice").await;
    let token = token_for("alice");

    let mut filenames = Vec::new();
    for _ in 0..2 {
        let response = app
            .server
            .post("/api/videos/upload")
            .authorization_bearer(&token)
            .multipart(upload_form(CLIP_BYTES, "dup"))
            .await;
        assert_eq!(response.status_code(), StatusCode::CREATED);
        filenames.push(
            response.json::<Value>()["filename"]
                .as_str()
                .unwrap()
                .to_string(),
        );
    }
    assert_ne!(filenames[0], filenames[1]);
    assert_eq!(app.stored_files().len(), 2);
}

#[tokio::test]
async fn test_stream_missing_file_is_not_found() {
    let app = setup_test_app().await;
    app.seed_user("alice").await;
    let token = token_for("alice");

    let response = app
        .server
        .post("/api/videos/upload")
        .authorization_bearer(&token)
        .multipart(upload_form(CLIP_BYTES, "doomed"))
        .await;
    let body: Value = response.json();
    let video_id = body["videoId"].as_i64().unwrap();
    let filename = body["filename"].as_str().unwrap();

    // Remove the file behind the row: stream must report not-found, not 500
    std::fs::remove_file(app.storage_root().join(filename)).unwrap();

    let response = app
        .server
        .get(&format!("/api/videos/{}/stream", video_id))
        .authorization_bearer(&token)
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_newest_first() {
    let app = setup_test_app().await;
    app.seed_user("alice").await;
    let token = token_for("alice");

    for title in ["first", "second", "third"] {
        let response = app
            .server
            .post("/api/videos/upload")
            .authorization_bearer(&token)
            .multipart(upload_form(CLIP_BYTES, title))
            .await;
        assert_eq!(response.status_code(), StatusCode::CREATED);
    }

    let response = app
        .server
        .get("/api/videos/my-videos")
        .authorization_bearer(&token)
        .await;
    let listed: Vec<Value> = response.json();
    let titles: Vec<&str> = listed.iter().map(|v| v["title"].as_str().unwrap()).collect();
    assert_eq!(titles, vec!["third", "second", "first"]);
}

#[tokio::test]
async fn test_principal_without_user_row_is_server_error() {
    let app = setup_test_app().await;
    // "ghost" has a valid token but no row in users

    let response = app
        .server
        .get("/api/videos/my-videos")
        .authorization_bearer(&token_for("ghost"))
        .await;
    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
}
