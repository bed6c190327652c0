//! Database entities.

pub mod comment;
pub mod follow_edge;
pub mod post;
pub mod rating;
pub mod user;

pub use comment::Entity as Comment;
pub use follow_edge::Entity as FollowEdge;
pub use post::Entity as Post;
pub use rating::Entity as Rating;
pub use user::Entity as User;
