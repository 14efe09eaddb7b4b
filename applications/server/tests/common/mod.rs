/// Common test utilities and fixtures
use axum::{
    body::Body,
    http::{header, Request, Response},
    Router,
};
use exchange_core::LocalUserService;
use exchange_server::{create_router, AppState};
use std::sync::Arc;

/// Router over a service seeded with the three demo users
pub async fn create_seeded_app() -> Router {
    let service = LocalUserService::with_demo_users().await;
    create_router(AppState::new(Arc::new(service)))
}

/// Router over an empty service
pub fn create_empty_app() -> Router {
    create_router(AppState::new(Arc::new(LocalUserService::new())))
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn json_request(method: &str, uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// Demo user fixtures
pub mod fixtures {
    pub const ZHANGSAN: &str = "zhangsan";
    pub const WANGWU: &str = "wangwu";
    pub const WANGWU_EMAIL: &str = "wangwu@example.com";
    pub const WANGWU_FULL_NAME: &str = "Wang Wu";
}
