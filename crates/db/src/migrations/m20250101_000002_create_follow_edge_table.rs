//! Create follow edge table migration.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FollowEdge::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FollowEdge::Id)
                            .string_len(36)
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(FollowEdge::Follower)
                            .string_len(125)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FollowEdge::Following)
                            .string_len(125)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FollowEdge::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_follow_edge_follower")
                            .from(FollowEdge::Table, FollowEdge::Follower)
                            .to(User::Table, User::Username)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_follow_edge_following")
                            .from(FollowEdge::Table, FollowEdge::Following)
                            .to(User::Table, User::Username)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Unique index: (follower, following) - at most one edge per ordered pair
        manager
            .create_index(
                Index::create()
                    .name("idx_follow_edge_follower_following")
                    .table(FollowEdge::Table)
                    .col(FollowEdge::Follower)
                    .col(FollowEdge::Following)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Index: following (for listing followers)
        manager
            .create_index(
                Index::create()
                    .name("idx_follow_edge_following")
                    .table(FollowEdge::Table)
                    .col(FollowEdge::Following)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FollowEdge::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum FollowEdge {
    Table,
    Id,
    Follower,
    Following,
    CreatedAt,
}

#[derive(Iden)]
enum User {
    Table,
    Username,
}
