//! Rating endpoints.

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use dormrate_common::AppResult;
use dormrate_core::{PostRatingSummary, SubmitRatingInput};
use serde::Serialize;

use crate::{middleware::AppState, response::Status};

/// Rating view returned by the API.
#[derive(Debug, Serialize)]
pub struct RatingResponse {
    pub id: String,
    pub postid: String,
    pub rated_by: String,
    pub value: bool,
    pub created_at: String,
}

impl From<dormrate_db::entities::rating::Model> for RatingResponse {
    fn from(r: dormrate_db::entities::rating::Model) -> Self {
        Self {
            id: r.id,
            postid: r.postid,
            rated_by: r.rated_by,
            value: r.value,
            created_at: r.created_at.to_rfc3339(),
        }
    }
}

/// Submit a rating. A second rating by the same user on the same post
/// replaces the first.
async fn submit_rating(
    State(state): State<AppState>,
    Json(input): Json<SubmitRatingInput>,
) -> AppResult<Json<RatingResponse>> {
    let rating = state.rating_service.submit(input).await?;
    Ok(Json(rating.into()))
}

/// Fetch the rating a user left on a post.
async fn get_rating(
    State(state): State<AppState>,
    Path((postid, username)): Path<(String, String)>,
) -> AppResult<Json<RatingResponse>> {
    let rating = state.rating_service.get(&postid, &username).await?;
    Ok(Json(rating.into()))
}

/// Aggregate rating view of a post.
async fn rating_summary(
    State(state): State<AppState>,
    Path(postid): Path<String>,
) -> AppResult<Json<PostRatingSummary>> {
    let summary = state.rating_service.summary(&postid).await?;
    Ok(Json(summary))
}

/// Delete a rating.
async fn delete_rating(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Status>> {
    state.rating_service.delete(&id).await?;
    Ok(Json(Status::new(format!("Deleted rating {id}"))))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/ratings", post(submit_rating))
        // GET takes a post ID, DELETE a rating ID.
        .route("/ratings/{id}", get(rating_summary).delete(delete_rating))
        .route("/ratings/{postid}/{username}", get(get_rating))
}
