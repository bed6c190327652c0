//! Comment thread service.

use chrono::Utc;
use dormrate_common::{AppError, AppResult, IdGenerator};
use dormrate_db::{
    entities::comment,
    repositories::{CommentRepository, PostRepository, UserRepository},
};
use sea_orm::Set;
use serde::Deserialize;
use validator::Validate;

/// Comment service for business logic.
#[derive(Clone)]
pub struct CommentService {
    comment_repo: CommentRepository,
    post_repo: PostRepository,
    user_repo: UserRepository,
    id_gen: IdGenerator,
}

/// Input for posting a comment.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCommentInput {
    #[validate(length(min = 1))]
    pub postid: String,

    #[validate(length(min = 1, max = 125))]
    pub posted_by: String,

    #[validate(length(min = 1))]
    pub text: String,
}

impl CommentService {
    /// Create a new comment service.
    #[must_use]
    pub fn new(
        comment_repo: CommentRepository,
        post_repo: PostRepository,
        user_repo: UserRepository,
    ) -> Self {
        Self {
            comment_repo,
            post_repo,
            user_repo,
            id_gen: IdGenerator::new(),
        }
    }

    /// Post a comment.
    ///
    /// The post is resolved before the user; the first missing reference
    /// fails the call before anything is written.
    pub async fn create(&self, input: CreateCommentInput) -> AppResult<comment::Model> {
        input.validate()?;

        self.post_repo.get_by_id(&input.postid).await?;
        self.user_repo.get_by_username(&input.posted_by).await?;

        let model = comment::ActiveModel {
            id: Set(self.id_gen.generate()),
            postid: Set(input.postid),
            posted_by: Set(input.posted_by),
            text: Set(input.text),
            posted_at: Set(Utc::now().into()),
        };

        let created = self.comment_repo.create(model).await?;
        tracing::debug!(id = %created.id, postid = %created.postid, "Created comment");
        Ok(created)
    }

    /// List comments on a post. The post must exist.
    pub async fn list_for_post(&self, postid: &str) -> AppResult<Vec<comment::Model>> {
        self.post_repo.get_by_id(postid).await?;
        self.comment_repo.find_by_post(postid).await
    }

    /// Delete a comment by ID, returning the number of rows removed.
    pub async fn delete(&self, id: &str) -> AppResult<u64> {
        let count = self.comment_repo.delete(id).await?;
        if count == 0 {
            return Err(AppError::NotFound(format!("comment {id}")));
        }
        tracing::debug!(id = %id, "Deleted comment");
        Ok(count)
    }
}
