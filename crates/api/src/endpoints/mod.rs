//! API endpoints.

mod comments;
mod follow;
mod posts;
mod ratings;
mod users;

use axum::Router;

use crate::middleware::AppState;

/// Create the API router.
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(users::router())
        .merge(follow::router())
        .merge(posts::router())
        .merge(comments::router())
        .merge(ratings::router())
}
