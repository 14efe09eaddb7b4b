/// User resource API routes
///
/// Handlers only talk to `AppState::users`, so the same routes serve the
/// in-process registry and the remote one.
use crate::{
    error::{Result, ServerError},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use exchange_core::{CreateUser, UpdateUser, User, UserId};

/// Mount the five user routes at `prefix` (e.g. `/api/users`).
pub fn routes(prefix: &str) -> Router<AppState> {
    Router::new()
        .route(prefix, get(list_users).post(create_user))
        .route(
            &format!("{}/:id", prefix),
            get(get_user).put(update_user).delete(delete_user),
        )
}

/// GET /users - List all users
pub async fn list_users(State(app_state): State<AppState>) -> Result<Json<Vec<User>>> {
    let users = app_state.users.find_all().await?;
    Ok(Json(users))
}

/// GET /users/:id - Get a single user
pub async fn get_user(
    Path(id): Path<i64>,
    State(app_state): State<AppState>,
) -> Result<Json<User>> {
    let id = UserId::new(id);
    app_state
        .users
        .find_by_id(id)
        .await?
        .map(Json)
        .ok_or(ServerError::NotFound(id))
}

/// POST /users - Create a user
pub async fn create_user(
    State(app_state): State<AppState>,
    Json(body): Json<CreateUser>,
) -> Result<(StatusCode, Json<User>)> {
    let user = app_state.users.create(body).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// PUT /users/:id - Partially update a user
pub async fn update_user(
    Path(id): Path<i64>,
    State(app_state): State<AppState>,
    Json(body): Json<UpdateUser>,
) -> Result<Json<User>> {
    let id = UserId::new(id);
    app_state
        .users
        .update(id, body)
        .await?
        .map(Json)
        .ok_or(ServerError::NotFound(id))
}

/// DELETE /users/:id - Delete a user
pub async fn delete_user(
    Path(id): Path<i64>,
    State(app_state): State<AppState>,
) -> Result<StatusCode> {
    let id = UserId::new(id);
    if app_state.users.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ServerError::NotFound(id))
    }
}
