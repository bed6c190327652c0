//! Follow edge repository.

use std::sync::Arc;

use crate::entities::{follow_edge, FollowEdge};
use dormrate_common::{AppError, AppResult};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    SqlErr,
};

/// Follow edge repository for database operations.
#[derive(Clone)]
pub struct FollowEdgeRepository {
    db: Arc<DatabaseConnection>,
}

impl FollowEdgeRepository {
    /// Create a new follow edge repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find the edge for an ordered (follower, following) pair.
    pub async fn find_by_pair(
        &self,
        follower: &str,
        following: &str,
    ) -> AppResult<Option<follow_edge::Model>> {
        FollowEdge::find()
            .filter(follow_edge::Column::Follower.eq(follower))
            .filter(follow_edge::Column::Following.eq(following))
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Create a new follow edge.
    ///
    /// The (follower, following) pair carries a unique index; a duplicate
    /// insert surfaces as `Conflict` so callers can treat it as an
    /// already-existing edge.
    pub async fn create(&self, model: follow_edge::ActiveModel) -> AppResult<follow_edge::Model> {
        model.insert(self.db.as_ref()).await.map_err(|e| {
            if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
                AppError::Conflict("follow edge already exists".to_string())
            } else {
                AppError::Database(e.to_string())
            }
        })
    }

    /// Delete the edge for an ordered pair, returning the rows removed.
    pub async fn delete_by_pair(&self, follower: &str, following: &str) -> AppResult<u64> {
        let result = FollowEdge::delete_many()
            .filter(follow_edge::Column::Follower.eq(follower))
            .filter(follow_edge::Column::Following.eq(following))
            .exec(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(result.rows_affected)
    }

    /// Edges pointing at a user (their followers).
    pub async fn find_followers(&self, username: &str) -> AppResult<Vec<follow_edge::Model>> {
        FollowEdge::find()
            .filter(follow_edge::Column::Following.eq(username))
            .order_by_asc(follow_edge::Column::CreatedAt)
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Edges leaving a user (who they follow).
    pub async fn find_following(&self, username: &str) -> AppResult<Vec<follow_edge::Model>> {
        FollowEdge::find()
            .filter(follow_edge::Column::Follower.eq(username))
            .order_by_asc(follow_edge::Column::CreatedAt)
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn create_test_edge(id: &str, follower: &str, following: &str) -> follow_edge::Model {
        follow_edge::Model {
            id: id.to_string(),
            follower: follower.to_string(),
            following: following.to_string(),
            created_at: Utc::now().into(),
        }
    }

    #[tokio::test]
    async fn test_find_by_pair_found() {
        let edge = create_test_edge("e1", "alice", "bob");

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[edge.clone()]])
                .into_connection(),
        );

        let repo = FollowEdgeRepository::new(db);
        let result = repo.find_by_pair("alice", "bob").await.unwrap();

        assert!(result.is_some());
        let found = result.unwrap();
        assert_eq!(found.follower, "alice");
        assert_eq!(found.following, "bob");
    }

    #[tokio::test]
    async fn test_find_by_pair_not_found() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<follow_edge::Model>::new()])
                .into_connection(),
        );

        let repo = FollowEdgeRepository::new(db);
        let result = repo.find_by_pair("alice", "bob").await.unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_find_followers() {
        let e1 = create_test_edge("e1", "alice", "carol");
        let e2 = create_test_edge("e2", "bob", "carol");

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[e1, e2]])
                .into_connection(),
        );

        let repo = FollowEdgeRepository::new(db);
        let result = repo.find_followers("carol").await.unwrap();

        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|e| e.following == "carol"));
    }

    #[tokio::test]
    async fn test_find_following_empty() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<follow_edge::Model>::new()])
                .into_connection(),
        );

        let repo = FollowEdgeRepository::new(db);
        let result = repo.find_following("alice").await.unwrap();

        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn test_delete_by_pair_missing_edge_is_zero() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_exec_results([MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 0,
                }])
                .into_connection(),
        );

        let repo = FollowEdgeRepository::new(db);
        let count = repo.delete_by_pair("alice", "bob").await.unwrap();

        assert_eq!(count, 0);
    }
}
