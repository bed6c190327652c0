//! Comment endpoints.

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use dormrate_common::AppResult;
use dormrate_core::CreateCommentInput;
use serde::Serialize;

use crate::{middleware::AppState, response::Status};

/// Comment view returned by the API.
#[derive(Debug, Serialize)]
pub struct CommentResponse {
    pub id: String,
    pub postid: String,
    pub posted_by: String,
    pub text: String,
    pub posted_at: String,
}

impl From<dormrate_db::entities::comment::Model> for CommentResponse {
    fn from(c: dormrate_db::entities::comment::Model) -> Self {
        Self {
            id: c.id,
            postid: c.postid,
            posted_by: c.posted_by,
            text: c.text,
            posted_at: c.posted_at.to_rfc3339(),
        }
    }
}

/// Post a comment.
async fn create_comment(
    State(state): State<AppState>,
    Json(input): Json<CreateCommentInput>,
) -> AppResult<Json<CommentResponse>> {
    let created = state.comment_service.create(input).await?;
    Ok(Json(created.into()))
}

/// List the comments on a post.
async fn list_comments(
    State(state): State<AppState>,
    Path(postid): Path<String>,
) -> AppResult<Json<Vec<CommentResponse>>> {
    let comments = state.comment_service.list_for_post(&postid).await?;
    Ok(Json(comments.into_iter().map(Into::into).collect()))
}

/// Delete a comment.
async fn delete_comment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Status>> {
    state.comment_service.delete(&id).await?;
    Ok(Json(Status::new(format!("Deleted comment {id}"))))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/comments", post(create_comment))
        // GET takes a post ID, DELETE a comment ID.
        .route("/comments/{id}", get(list_comments).delete(delete_comment))
}
