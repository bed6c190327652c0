//! Post endpoints.

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use dormrate_common::AppResult;
use dormrate_core::CreatePostInput;
use serde::Serialize;

use crate::{middleware::AppState, response::Status};

/// Post view returned by the API.
#[derive(Debug, Serialize)]
pub struct PostResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub imagefile: String,
    pub posted_by: String,
    pub posted_at: String,
}

impl From<dormrate_db::entities::post::Model> for PostResponse {
    fn from(p: dormrate_db::entities::post::Model) -> Self {
        Self {
            id: p.id,
            title: p.title,
            description: p.description,
            imagefile: p.imagefile,
            posted_by: p.posted_by,
            posted_at: p.posted_at.to_rfc3339(),
        }
    }
}

/// Publish a post.
async fn create_post(
    State(state): State<AppState>,
    Json(input): Json<CreatePostInput>,
) -> AppResult<Json<PostResponse>> {
    let created = state.post_service.create(input).await?;
    Ok(Json(created.into()))
}

/// List every post.
async fn list_posts(State(state): State<AppState>) -> AppResult<Json<Vec<PostResponse>>> {
    let posts = state.post_service.list().await?;
    Ok(Json(posts.into_iter().map(Into::into).collect()))
}

/// List a user's posts. An unknown username is an error, not an empty
/// list.
async fn list_posts_by_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> AppResult<Json<Vec<PostResponse>>> {
    let posts = state.post_service.list_by_user(&username).await?;
    Ok(Json(posts.into_iter().map(Into::into).collect()))
}

/// Delete a post and everything hanging off it.
async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Status>> {
    state.post_service.delete(&id).await?;
    Ok(Json(Status::new(format!("Deleted post {id}"))))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/posts", post(create_post).get(list_posts))
        // GET takes a username, DELETE a post ID; they share the path
        // template because axum rejects differing parameter names at the
        // same position.
        .route("/posts/{id}", get(list_posts_by_user).delete(delete_post))
}
