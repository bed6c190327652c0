//! Business logic services.

#![allow(missing_docs)]

pub mod comment;
pub mod follow;
pub mod post;
pub mod rating;
pub mod user;

pub use comment::{CommentService, CreateCommentInput};
pub use follow::FollowService;
pub use post::{CreatePostInput, PostService};
pub use rating::{PostRatingSummary, RatingService, SubmitRatingInput};
pub use user::{CreateUserInput, UserService};
