//! User endpoints.

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use dormrate_common::AppResult;
use dormrate_core::CreateUserInput;

use crate::{middleware::AppState, response::Status};
use serde::Serialize;

/// User view returned by the API. The password hash never leaves the
/// database layer.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub username: String,
    pub email: String,
    pub created_at: String,
}

impl From<dormrate_db::entities::user::Model> for UserResponse {
    fn from(u: dormrate_db::entities::user::Model) -> Self {
        Self {
            username: u.username,
            email: u.email,
            created_at: u.created_at.to_rfc3339(),
        }
    }
}

/// Register a new user.
async fn create_user(
    State(state): State<AppState>,
    Json(input): Json<CreateUserInput>,
) -> AppResult<Json<UserResponse>> {
    let user = state.user_service.create(input).await?;
    Ok(Json(user.into()))
}

/// List all registered users.
async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<UserResponse>>> {
    let users = state.user_service.list().await?;
    Ok(Json(users.into_iter().map(Into::into).collect()))
}

/// Fetch a single user by username.
async fn get_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> AppResult<Json<UserResponse>> {
    let user = state.user_service.get(&username).await?;
    Ok(Json(user.into()))
}

/// Delete a user. Their posts, comments, ratings, and follow edges go
/// with them.
async fn delete_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> AppResult<Json<Status>> {
    state.user_service.delete(&username).await?;
    Ok(Json(Status::new(format!("Deleted user {username}"))))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", post(create_user).get(list_users))
        .route("/users/{username}", get(get_user).delete(delete_user))
}
