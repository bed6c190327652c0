//! Follow graph endpoints.

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use dormrate_common::AppResult;
use serde::{Deserialize, Serialize};

use crate::{middleware::AppState, response::Status};

/// Follow edge request.
#[derive(Debug, Deserialize)]
pub struct FollowRequest {
    pub follower: String,
    pub following: String,
}

/// One user's side of the follow graph.
#[derive(Debug, Serialize)]
pub struct FollowsResponse {
    pub username: String,
    pub follows: Vec<String>,
}

/// Follow a user. Repeating an existing follow is a no-op success.
async fn follow(
    State(state): State<AppState>,
    Json(req): Json<FollowRequest>,
) -> AppResult<Json<Status>> {
    state
        .follow_service
        .follow(&req.follower, &req.following)
        .await?;
    Ok(Json(Status::new(format!(
        "{} now follows {}",
        req.follower, req.following
    ))))
}

/// Unfollow a user. Removing an absent edge is a no-op success.
async fn unfollow(
    State(state): State<AppState>,
    Json(req): Json<FollowRequest>,
) -> AppResult<Json<Status>> {
    state
        .follow_service
        .unfollow(&req.follower, &req.following)
        .await?;
    Ok(Json(Status::new(format!(
        "{} no longer follows {}",
        req.follower, req.following
    ))))
}

/// Usernames following the given user.
async fn followers(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> AppResult<Json<FollowsResponse>> {
    let follows = state.follow_service.followers(&username).await?;
    Ok(Json(FollowsResponse { username, follows }))
}

/// Usernames the given user follows.
async fn following(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> AppResult<Json<FollowsResponse>> {
    let follows = state.follow_service.following(&username).await?;
    Ok(Json(FollowsResponse { username, follows }))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/follow", post(follow).delete(unfollow))
        .route("/followers/{username}", get(followers))
        .route("/following/{username}", get(following))
}
