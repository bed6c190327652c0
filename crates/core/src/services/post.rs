//! Post catalog service.

use chrono::Utc;
use dormrate_common::{AppError, AppResult, IdGenerator};
use dormrate_db::{
    entities::post,
    repositories::{PostRepository, UserRepository},
};
use sea_orm::Set;
use serde::Deserialize;
use validator::Validate;

/// Post service for business logic.
#[derive(Clone)]
pub struct PostService {
    post_repo: PostRepository,
    user_repo: UserRepository,
    id_gen: IdGenerator,
}

/// Input for publishing a new post.
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePostInput {
    #[validate(length(min = 1, max = 75))]
    pub title: String,

    pub description: String,

    /// Opaque image path; the file itself lives outside this service.
    #[validate(length(min = 1))]
    pub imagefile: String,

    #[validate(length(min = 1, max = 125))]
    pub posted_by: String,
}

impl PostService {
    /// Create a new post service.
    #[must_use]
    pub fn new(post_repo: PostRepository, user_repo: UserRepository) -> Self {
        Self {
            post_repo,
            user_repo,
            id_gen: IdGenerator::new(),
        }
    }

    /// Publish a post. The owner must exist.
    pub async fn create(&self, input: CreatePostInput) -> AppResult<post::Model> {
        input.validate()?;

        self.user_repo.get_by_username(&input.posted_by).await?;

        let model = post::ActiveModel {
            id: Set(self.id_gen.generate()),
            title: Set(input.title),
            description: Set(input.description),
            imagefile: Set(input.imagefile),
            posted_by: Set(input.posted_by),
            posted_at: Set(Utc::now().into()),
        };

        let created = self.post_repo.create(model).await?;
        tracing::info!(id = %created.id, posted_by = %created.posted_by, "Created post");
        Ok(created)
    }

    /// List all posts.
    pub async fn list(&self) -> AppResult<Vec<post::Model>> {
        self.post_repo.find_all().await
    }

    /// List posts authored by a user.
    ///
    /// The user is resolved first; an unknown username is an error, not
    /// an empty list.
    pub async fn list_by_user(&self, username: &str) -> AppResult<Vec<post::Model>> {
        self.user_repo.get_by_username(username).await?;
        self.post_repo.find_by_user(username).await
    }

    /// Delete a post by ID, returning the number of rows removed.
    ///
    /// Comments and ratings on the post are removed by storage-layer
    /// cascades.
    pub async fn delete(&self, id: &str) -> AppResult<u64> {
        let count = self.post_repo.delete(id).await?;
        if count == 0 {
            return Err(AppError::PostNotFound(id.to_string()));
        }
        tracing::info!(id = %id, "Deleted post");
        Ok(count)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use dormrate_db::entities::user;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
    use std::sync::Arc;

    fn create_test_user(username: &str) -> user::Model {
        user::Model {
            username: username.to_string(),
            email: format!("{username}@example.com"),
            password_hash: "$argon2id$test".to_string(),
            created_at: Utc::now().into(),
        }
    }

    fn create_test_post(id: &str, posted_by: &str) -> post::Model {
        post::Model {
            id: id.to_string(),
            title: "Test Post Title".to_string(),
            description: "Test description.".to_string(),
            imagefile: "test/image/file/path".to_string(),
            posted_by: posted_by.to_string(),
            posted_at: Utc::now().into(),
        }
    }

    #[tokio::test]
    async fn test_create_unknown_owner() {
        let user_db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<user::Model>::new()])
                .into_connection(),
        );
        let post_db = Arc::new(MockDatabase::new(DatabaseBackend::Postgres).into_connection());

        let service = PostService::new(PostRepository::new(post_db), UserRepository::new(user_db));

        let result = service
            .create(CreatePostInput {
                title: "Title".to_string(),
                description: "Desc".to_string(),
                imagefile: "img.png".to_string(),
                posted_by: "ghost".to_string(),
            })
            .await;

        match result {
            Err(AppError::UserNotFound(name)) => assert_eq!(name, "ghost"),
            _ => panic!("Expected UserNotFound error"),
        }
    }

    #[tokio::test]
    async fn test_create_rejects_empty_title() {
        let user_db = Arc::new(MockDatabase::new(DatabaseBackend::Postgres).into_connection());
        let post_db = Arc::new(MockDatabase::new(DatabaseBackend::Postgres).into_connection());

        let service = PostService::new(PostRepository::new(post_db), UserRepository::new(user_db));

        let result = service
            .create(CreatePostInput {
                title: String::new(),
                description: "Desc".to_string(),
                imagefile: "img.png".to_string(),
                posted_by: "alice".to_string(),
            })
            .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_list_posts() {
        let p1 = create_test_post("p1", "alice");
        let p2 = create_test_post("p2", "bob");

        let post_db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[p1, p2]])
                .into_connection(),
        );
        let user_db = Arc::new(MockDatabase::new(DatabaseBackend::Postgres).into_connection());

        let service = PostService::new(PostRepository::new(post_db), UserRepository::new(user_db));

        let posts = service.list().await.unwrap();
        assert_eq!(posts.len(), 2);
    }

    #[tokio::test]
    async fn test_list_by_unknown_user_is_error_not_empty() {
        let user_db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<user::Model>::new()])
                .into_connection(),
        );
        let post_db = Arc::new(MockDatabase::new(DatabaseBackend::Postgres).into_connection());

        let service = PostService::new(PostRepository::new(post_db), UserRepository::new(user_db));

        let result = service.list_by_user("ghost").await;
        assert!(matches!(result, Err(AppError::UserNotFound(_))));
    }

    #[tokio::test]
    async fn test_list_by_user_returns_their_posts() {
        let user_db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[create_test_user("alice")]])
                .into_connection(),
        );
        let post_db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[create_test_post("p1", "alice")]])
                .into_connection(),
        );

        let service = PostService::new(PostRepository::new(post_db), UserRepository::new(user_db));

        let posts = service.list_by_user("alice").await.unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].posted_by, "alice");
    }

    #[tokio::test]
    async fn test_delete_unknown_post_not_found() {
        let post_db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_exec_results([MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 0,
                }])
                .into_connection(),
        );
        let user_db = Arc::new(MockDatabase::new(DatabaseBackend::Postgres).into_connection());

        let service = PostService::new(PostRepository::new(post_db), UserRepository::new(user_db));

        let result = service.delete("missing").await;
        match result {
            Err(AppError::PostNotFound(id)) => assert_eq!(id, "missing"),
            _ => panic!("Expected PostNotFound error"),
        }
    }
}
