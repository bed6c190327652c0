//! Post rating service.

use chrono::Utc;
use dormrate_common::{AppError, AppResult, IdGenerator};
use dormrate_db::{
    entities::rating,
    repositories::{PostRepository, RatingRepository, UserRepository},
};
use sea_orm::Set;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Rating service for business logic.
#[derive(Clone)]
pub struct RatingService {
    rating_repo: RatingRepository,
    post_repo: PostRepository,
    user_repo: UserRepository,
    id_gen: IdGenerator,
}

/// Input for submitting a rating.
#[derive(Debug, Deserialize, Validate)]
pub struct SubmitRatingInput {
    #[validate(length(min = 1))]
    pub postid: String,

    #[validate(length(min = 1, max = 125))]
    pub rated_by: String,

    /// `true` is an upvote, `false` a downvote.
    pub value: bool,
}

/// Aggregate rating view of a single post.
#[derive(Debug, Serialize)]
pub struct PostRatingSummary {
    pub postid: String,
    pub post_owner: String,
    pub post_title: String,
    /// Net score: upvotes minus downvotes.
    pub post_rating: i64,
}

impl RatingService {
    /// Create a new rating service.
    #[must_use]
    pub fn new(
        rating_repo: RatingRepository,
        post_repo: PostRepository,
        user_repo: UserRepository,
    ) -> Self {
        Self {
            rating_repo,
            post_repo,
            user_repo,
            id_gen: IdGenerator::new(),
        }
    }

    /// Submit a rating, replacing any earlier rating by the same user on
    /// the same post.
    ///
    /// The upsert first looks for an existing (post, user) rating and
    /// updates it in place. When none is found it inserts a fresh row; a
    /// unique-constraint violation on that insert means a concurrent
    /// submitter won the race, so the row is re-read and updated instead.
    pub async fn submit(&self, input: SubmitRatingInput) -> AppResult<rating::Model> {
        input.validate()?;

        self.post_repo.get_by_id(&input.postid).await?;
        self.user_repo.get_by_username(&input.rated_by).await?;

        if let Some(existing) = self
            .rating_repo
            .find_by_post_and_user(&input.postid, &input.rated_by)
            .await?
        {
            return self.overwrite(existing, input.value).await;
        }

        let model = rating::ActiveModel {
            id: Set(self.id_gen.generate()),
            postid: Set(input.postid.clone()),
            rated_by: Set(input.rated_by.clone()),
            value: Set(input.value),
            created_at: Set(Utc::now().into()),
        };

        match self.rating_repo.create(model).await {
            Ok(created) => {
                tracing::debug!(id = %created.id, postid = %created.postid, "Created rating");
                Ok(created)
            }
            Err(AppError::Conflict(_)) => {
                let existing = self
                    .rating_repo
                    .find_by_post_and_user(&input.postid, &input.rated_by)
                    .await?
                    .ok_or_else(|| {
                        AppError::Database("rating vanished during concurrent upsert".to_string())
                    })?;
                self.overwrite(existing, input.value).await
            }
            Err(e) => Err(e),
        }
    }

    async fn overwrite(&self, existing: rating::Model, value: bool) -> AppResult<rating::Model> {
        let id = existing.id.clone();
        let mut active: rating::ActiveModel = existing.into();
        active.value = Set(value);
        let updated = self.rating_repo.update(active).await?;
        tracing::debug!(id = %id, "Updated rating");
        Ok(updated)
    }

    /// Fetch the rating a user left on a post.
    pub async fn get(&self, postid: &str, username: &str) -> AppResult<rating::Model> {
        self.post_repo.get_by_id(postid).await?;
        self.rating_repo
            .find_by_post_and_user(postid, username)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("rating by {username} on post {postid}")))
    }

    /// Aggregate view of a post's ratings: net score plus owner and title.
    pub async fn summary(&self, postid: &str) -> AppResult<PostRatingSummary> {
        let post = self.post_repo.get_by_id(postid).await?;
        let ratings = self.rating_repo.find_by_post(postid).await?;

        let score = ratings
            .iter()
            .fold(0i64, |acc, r| if r.value { acc + 1 } else { acc - 1 });

        Ok(PostRatingSummary {
            postid: post.id,
            post_owner: post.posted_by,
            post_title: post.title,
            post_rating: score,
        })
    }

    /// Delete a rating by ID, returning the number of rows removed.
    pub async fn delete(&self, id: &str) -> AppResult<u64> {
        let count = self.rating_repo.delete(id).await?;
        if count == 0 {
            return Err(AppError::NotFound(format!("rating {id}")));
        }
        tracing::debug!(id = %id, "Deleted rating");
        Ok(count)
    }
}
