//! Database repositories.

#![allow(missing_docs)]

pub mod comment;
pub mod follow_edge;
pub mod post;
pub mod rating;
pub mod user;

pub use comment::CommentRepository;
pub use follow_edge::FollowEdgeRepository;
pub use post::PostRepository;
pub use rating::RatingRepository;
pub use user::UserRepository;
