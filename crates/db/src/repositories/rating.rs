//! Rating repository.

use std::sync::Arc;

use crate::entities::{rating, Rating};
use dormrate_common::{AppError, AppResult};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    SqlErr,
};

/// Rating repository for database operations.
#[derive(Clone)]
pub struct RatingRepository {
    db: Arc<DatabaseConnection>,
}

impl RatingRepository {
    /// Create a new rating repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find the rating a user left on a post.
    pub async fn find_by_post_and_user(
        &self,
        postid: &str,
        rated_by: &str,
    ) -> AppResult<Option<rating::Model>> {
        Rating::find()
            .filter(rating::Column::Postid.eq(postid))
            .filter(rating::Column::RatedBy.eq(rated_by))
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// List all ratings on a post.
    pub async fn find_by_post(&self, postid: &str) -> AppResult<Vec<rating::Model>> {
        Rating::find()
            .filter(rating::Column::Postid.eq(postid))
            .order_by_asc(rating::Column::CreatedAt)
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Create a new rating.
    ///
    /// The (postid, rated_by) pair carries a unique index; a duplicate
    /// insert surfaces as `Conflict` so the service can retry the upsert
    /// as an update.
    pub async fn create(&self, model: rating::ActiveModel) -> AppResult<rating::Model> {
        model.insert(self.db.as_ref()).await.map_err(|e| {
            if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
                AppError::Conflict("rating already exists for this user and post".to_string())
            } else {
                AppError::Database(e.to_string())
            }
        })
    }

    /// Update an existing rating in place.
    pub async fn update(&self, model: rating::ActiveModel) -> AppResult<rating::Model> {
        model
            .update(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Delete a rating by ID, returning the number of rows removed.
    pub async fn delete(&self, id: &str) -> AppResult<u64> {
        let result = Rating::delete_by_id(id)
            .exec(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(result.rows_affected)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn create_test_rating(id: &str, postid: &str, rated_by: &str, value: bool) -> rating::Model {
        rating::Model {
            id: id.to_string(),
            postid: postid.to_string(),
            rated_by: rated_by.to_string(),
            value,
            created_at: Utc::now().into(),
        }
    }

    #[tokio::test]
    async fn test_find_by_post_and_user_found() {
        let rating = create_test_rating("r1", "p1", "bob", false);

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[rating.clone()]])
                .into_connection(),
        );

        let repo = RatingRepository::new(db);
        let result = repo.find_by_post_and_user("p1", "bob").await.unwrap();

        assert!(result.is_some());
        let found = result.unwrap();
        assert_eq!(found.rated_by, "bob");
        assert!(!found.value);
    }

    #[tokio::test]
    async fn test_find_by_post_and_user_not_found() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<rating::Model>::new()])
                .into_connection(),
        );

        let repo = RatingRepository::new(db);
        let result = repo.find_by_post_and_user("p1", "bob").await.unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_find_by_post() {
        let r1 = create_test_rating("r1", "p1", "bob", true);
        let r2 = create_test_rating("r2", "p1", "carol", false);

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[r1, r2]])
                .into_connection(),
        );

        let repo = RatingRepository::new(db);
        let result = repo.find_by_post("p1").await.unwrap();

        assert_eq!(result.len(), 2);
    }

    #[tokio::test]
    async fn test_delete_reports_rows_affected() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_exec_results([MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                }])
                .into_connection(),
        );

        let repo = RatingRepository::new(db);
        let count = repo.delete("r1").await.unwrap();

        assert_eq!(count, 1);
    }
}
