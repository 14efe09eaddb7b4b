/// API integration tests
/// Tests complete HTTP request/response cycles against the in-memory registry
mod common;

use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use common::{
    body_bytes, body_json, create_empty_app, create_seeded_app, delete, fixtures, get,
    json_request,
};
use serde_json::json;
use tower::util::ServiceExt;

/// Test GET /api/health
#[tokio::test]
async fn test_health() {
    let app = create_empty_app();

    let response = app.oneshot(get("/api/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert!(body["version"].is_string());
}

/// Walk the seeded registry through list, get, update and delete
#[tokio::test]
async fn test_seeded_crud_scenario() {
    let app = create_seeded_app().await;

    // GET /api/users returns all three seeded users
    let response = app.clone().oneshot(get("/api/users")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let users = body_json(response).await;
    assert_eq!(users.as_array().unwrap().len(), 3);

    // GET /api/users/3 is the inactive user
    let response = app.clone().oneshot(get("/api/users/3")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let wangwu = body_json(response).await;
    assert_eq!(wangwu["username"], fixtures::WANGWU);
    assert_eq!(wangwu["status"], "INACTIVE");

    // PUT /api/users/3 with only a status change
    let response = app
        .clone()
        .oneshot(json_request("PUT", "/api/users/3", &json!({ "status": "ACTIVE" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["id"], 3);
    assert_eq!(updated["status"], "ACTIVE");
    assert_eq!(updated["username"], fixtures::WANGWU);
    assert_eq!(updated["email"], fixtures::WANGWU_EMAIL);
    assert_eq!(updated["fullName"], fixtures::WANGWU_FULL_NAME);
    assert_eq!(updated["createdAt"], wangwu["createdAt"]);

    // DELETE /api/users/2 succeeds with no body
    let response = app.clone().oneshot(delete("/api/users/2")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(response).await.is_empty());

    // GET /api/users/2 is now gone
    let response = app.clone().oneshot(get("/api/users/2")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_bytes(response).await.is_empty());

    // Two users remain: 1 and 3
    let response = app.oneshot(get("/api/users")).await.unwrap();
    let users = body_json(response).await;
    let mut ids: Vec<i64> = users
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["id"].as_i64().unwrap())
        .collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![1, 3]);
}

/// POST /api/users returns 201 with a fresh active user
#[tokio::test]
async fn test_create_user() {
    let app = create_seeded_app().await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/users",
            &json!({ "username": "x", "email": "x@y.com", "fullName": "X" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let user = body_json(response).await;
    let id = user["id"].as_i64().unwrap();
    assert!(id > 3);
    assert_eq!(user["status"], "ACTIVE");
    assert_eq!(user["createdAt"], user["updatedAt"]);

    // The new user is retrievable
    let response = app.oneshot(get(&format!("/api/users/{id}"))).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["username"], "x");
}

/// A status in the create body is ignored
#[tokio::test]
async fn test_create_ignores_status() {
    let app = create_empty_app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/users",
            &json!({
                "username": "d",
                "email": "d@example.com",
                "fullName": "D",
                "status": "DISABLED"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let user = body_json(response).await;
    assert_eq!(user["id"], 1);
    assert_eq!(user["status"], "ACTIVE");
}

/// Create accepts a body without `fullName` and stores it empty
#[tokio::test]
async fn test_create_without_full_name() {
    let app = create_empty_app();

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/users",
            &json!({ "username": "x", "email": "x@y.com" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let user = body_json(response).await;
    assert_eq!(user["id"], 1);
    assert_eq!(user["username"], "x");
    assert_eq!(user["email"], "x@y.com");
    assert_eq!(user["fullName"], "");
    assert_eq!(user["status"], "ACTIVE");

    let response = app.oneshot(get("/api/users/1")).await.unwrap();
    assert_eq!(body_json(response).await["fullName"], "");
}

/// PUT with only username leaves every other field alone
#[tokio::test]
async fn test_partial_update_username_only() {
    let app = create_seeded_app().await;

    let before = body_json(app.clone().oneshot(get("/api/users/1")).await.unwrap()).await;

    let response = app
        .oneshot(json_request(
            "PUT",
            "/api/users/1",
            &json!({ "username": "zhangsan-renamed" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let after = body_json(response).await;
    assert_eq!(after["username"], "zhangsan-renamed");
    assert_ne!(after["username"], fixtures::ZHANGSAN);
    assert_eq!(after["email"], before["email"]);
    assert_eq!(after["fullName"], before["fullName"]);
    assert_eq!(after["status"], before["status"]);

    assert!(timestamp(&after["updatedAt"]) >= timestamp(&before["updatedAt"]));
}

/// Unknown ids answer 404 with an empty body on every item route
#[tokio::test]
async fn test_unknown_id_is_not_found() {
    let app = create_seeded_app().await;

    let response = app.clone().oneshot(get("/api/users/999")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .clone()
        .oneshot(json_request("PUT", "/api/users/999", &json!({ "username": "ghost" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_bytes(response).await.is_empty());

    let response = app.oneshot(delete("/api/users/999")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Deleting twice: second attempt is 404
#[tokio::test]
async fn test_delete_twice() {
    let app = create_seeded_app().await;

    let response = app.clone().oneshot(delete("/api/users/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.oneshot(delete("/api/users/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Ids are not reused after deletion
#[tokio::test]
async fn test_ids_not_reused_after_delete() {
    let app = create_empty_app();
    let body = json!({ "username": "a", "email": "a@example.com", "fullName": "A" });

    let first = body_json(
        app.clone()
            .oneshot(json_request("POST", "/api/users", &body))
            .await
            .unwrap(),
    )
    .await;
    let first_id = first["id"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(delete(&format!("/api/users/{first_id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let second = body_json(
        app.oneshot(json_request("POST", "/api/users", &body))
            .await
            .unwrap(),
    )
    .await;
    assert!(second["id"].as_i64().unwrap() > first_id);
}

/// An unknown status value is rejected before reaching the registry
#[tokio::test]
async fn test_unknown_status_rejected() {
    let app = create_seeded_app().await;

    let response = app
        .clone()
        .oneshot(json_request("PUT", "/api/users/1", &json!({ "status": "BANNED" })))
        .await
        .unwrap();
    assert!(response.status().is_client_error());

    // The stored user is untouched
    let user = body_json(app.oneshot(get("/api/users/1")).await.unwrap()).await;
    assert_eq!(user["status"], "ACTIVE");
}

/// Non-numeric ids are rejected by the path extractor
#[tokio::test]
async fn test_non_numeric_id_rejected() {
    let app = create_seeded_app().await;

    let response = app.oneshot(get("/api/users/abc")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Listing an empty registry yields an empty array
#[tokio::test]
async fn test_list_empty() {
    let app = create_empty_app();

    let response = app.oneshot(get("/api/users")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

fn timestamp(value: &serde_json::Value) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(value.as_str().unwrap())
        .unwrap()
        .with_timezone(&Utc)
}
