/// Aggregate API routes
pub mod health;

use axum::{routing::get, Router};
use exchange_server::{api::users, AppState};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

const AGGREGATE_PREFIX: &str = "/aggregate";

/// Build the aggregator router. `app_state` is expected to hold a remote
/// `UserService`; the handlers are the server's own.
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route(
            &format!("{}/health", AGGREGATE_PREFIX),
            get(health::health),
        )
        .merge(users::routes(&format!("{}/users", AGGREGATE_PREFIX)))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
