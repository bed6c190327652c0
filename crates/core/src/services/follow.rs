//! Follow graph service.

use chrono::Utc;
use dormrate_common::{AppError, AppResult, IdGenerator};
use dormrate_db::{
    entities::follow_edge,
    repositories::{FollowEdgeRepository, UserRepository},
};
use sea_orm::Set;

/// Follow graph service for business logic.
///
/// Both endpoints of an operation must name existing users; edge
/// creation is idempotent and edge removal is a no-op when the edge is
/// absent.
#[derive(Clone)]
pub struct FollowService {
    follow_repo: FollowEdgeRepository,
    user_repo: UserRepository,
    id_gen: IdGenerator,
}

impl FollowService {
    /// Create a new follow service.
    #[must_use]
    pub fn new(follow_repo: FollowEdgeRepository, user_repo: UserRepository) -> Self {
        Self {
            follow_repo,
            user_repo,
            id_gen: IdGenerator::new(),
        }
    }

    /// Make `follower` follow `following`.
    ///
    /// Following an already-followed user succeeds without creating a
    /// second edge.
    pub async fn follow(&self, follower: &str, following: &str) -> AppResult<()> {
        self.user_repo.get_by_username(follower).await?;
        self.user_repo.get_by_username(following).await?;

        if self
            .follow_repo
            .find_by_pair(follower, following)
            .await?
            .is_some()
        {
            return Ok(());
        }

        let model = follow_edge::ActiveModel {
            id: Set(self.id_gen.generate()),
            follower: Set(follower.to_string()),
            following: Set(following.to_string()),
            created_at: Set(Utc::now().into()),
        };

        match self.follow_repo.create(model).await {
            Ok(_) => {
                tracing::debug!(follower = %follower, following = %following, "Created follow edge");
                Ok(())
            }
            // A concurrent request created the edge first; the unique
            // index keeps the pair single, so this is still success.
            Err(AppError::Conflict(_)) => Ok(()),
            Err(e) => Err(e),
        }
    }

    /// Make `follower` stop following `following`.
    ///
    /// Removing an edge that does not exist is a no-op success.
    pub async fn unfollow(&self, follower: &str, following: &str) -> AppResult<()> {
        self.user_repo.get_by_username(follower).await?;
        self.user_repo.get_by_username(following).await?;

        let removed = self.follow_repo.delete_by_pair(follower, following).await?;
        tracing::debug!(follower = %follower, following = %following, removed = removed, "Removed follow edge");
        Ok(())
    }

    /// Usernames following `username`.
    pub async fn followers(&self, username: &str) -> AppResult<Vec<String>> {
        self.user_repo.get_by_username(username).await?;

        let edges = self.follow_repo.find_followers(username).await?;
        Ok(edges.into_iter().map(|e| e.follower).collect())
    }

    /// Usernames that `username` follows.
    pub async fn following(&self, username: &str) -> AppResult<Vec<String>> {
        self.user_repo.get_by_username(username).await?;

        let edges = self.follow_repo.find_following(username).await?;
        Ok(edges.into_iter().map(|e| e.following).collect())
    }
}
