//! API middleware.

#![allow(missing_docs)]

use dormrate_core::{CommentService, FollowService, PostService, RatingService, UserService};

/// Application state shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub user_service: UserService,
    pub follow_service: FollowService,
    pub post_service: PostService,
    pub comment_service: CommentService,
    pub rating_service: RatingService,
}
