//! Service integration tests.
//!
//! These tests require a running `PostgreSQL` instance.
//! Run with: `cargo test --test service_integration -- --ignored`

#![allow(clippy::unwrap_used, clippy::expect_used)]

use chrono::Utc;
use dormrate_common::AppError;
use dormrate_core::{RatingService, SubmitRatingInput};
use dormrate_db::entities::{post, rating, user};
use dormrate_db::repositories::{PostRepository, RatingRepository, UserRepository};
use dormrate_db::test_utils::TestDatabase;
use sea_orm::Set;
use std::sync::Arc;

#[tokio::test]
#[ignore = "requires running PostgreSQL instance"]
async fn test_rating_submit_converges_to_one_row() {
    let db = TestDatabase::create_unique()
        .await
        .expect("Failed to create test database");
    let conn = Arc::clone(db.connection());

    let user_repo = UserRepository::new(Arc::clone(&conn));
    let post_repo = PostRepository::new(Arc::clone(&conn));
    let rating_repo = RatingRepository::new(Arc::clone(&conn));

    user_repo
        .create(user::ActiveModel {
            username: Set("alice".to_string()),
            email: Set("alice@example.com".to_string()),
            password_hash: Set("$argon2id$test".to_string()),
            created_at: Set(Utc::now().into()),
        })
        .await
        .unwrap();
    user_repo
        .create(user::ActiveModel {
            username: Set("bob".to_string()),
            email: Set("bob@example.com".to_string()),
            password_hash: Set("$argon2id$test".to_string()),
            created_at: Set(Utc::now().into()),
        })
        .await
        .unwrap();
    post_repo
        .create(post::ActiveModel {
            id: Set("p1".to_string()),
            title: Set("Corner desk".to_string()),
            description: Set("Desk with a lamp.".to_string()),
            imagefile: Set("uploads/desk.jpg".to_string()),
            posted_by: Set("alice".to_string()),
            posted_at: Set(Utc::now().into()),
        })
        .await
        .unwrap();

    // A row already holds the (p1, bob) pair, inserted behind the
    // service's back as a concurrent submitter would.
    rating_repo
        .create(rating::ActiveModel {
            id: Set("r1".to_string()),
            postid: Set("p1".to_string()),
            rated_by: Set("bob".to_string()),
            value: Set(true),
            created_at: Set(Utc::now().into()),
        })
        .await
        .unwrap();

    // A raw duplicate insert for the pair is rejected by the unique
    // index and surfaces as the Conflict the upsert retry consumes.
    let raw_duplicate = rating_repo
        .create(rating::ActiveModel {
            id: Set("r2".to_string()),
            postid: Set("p1".to_string()),
            rated_by: Set("bob".to_string()),
            value: Set(false),
            created_at: Set(Utc::now().into()),
        })
        .await;
    assert!(matches!(raw_duplicate, Err(AppError::Conflict(_))));

    // Submitting through the service still converges: one row for the
    // pair, holding the latest value.
    let service = RatingService::new(rating_repo.clone(), post_repo, user_repo);
    let updated = service
        .submit(SubmitRatingInput {
            postid: "p1".to_string(),
            rated_by: "bob".to_string(),
            value: false,
        })
        .await
        .unwrap();

    assert_eq!(updated.id, "r1");
    assert!(!updated.value);

    let ratings = rating_repo.find_by_post("p1").await.unwrap();
    assert_eq!(ratings.len(), 1);
    assert!(!ratings[0].value);

    let summary = service.summary("p1").await.unwrap();
    assert_eq!(summary.post_rating, -1);

    db.drop_database().await.unwrap();
}
