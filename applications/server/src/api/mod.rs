/// API route modules
pub mod health;
pub mod users;

use crate::state::AppState;
use axum::{routing::get, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

const API_PREFIX: &str = "/api";

/// Build the server router: user resource and health check under `/api`.
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route(&format!("{}/health", API_PREFIX), get(health::health))
        .merge(users::routes(&format!("{}/users", API_PREFIX)))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
