use crate::m20241019_000001_create_users::Users;
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        tracing::debug!("creating goal and todo tables");
        manager
            .create_table(
                Table::create()
                    .table(Goal::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Goal::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Goal::UserId).integer().not_null())
                    .col(ColumnDef::new(Goal::Title).string_len(255).not_null())
                    .col(ColumnDef::new(Goal::Type).string_len(20).not_null())
                    .col(ColumnDef::new(Goal::CreatedAt).timestamp_with_time_zone().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_goal_user_id")
                            .from(Goal::Table, Goal::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_goal_user_id")
                    .table(Goal::Table)
                    .col(Goal::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Todo::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Todo::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Todo::UserId).integer().not_null())
                    .col(ColumnDef::new(Todo::Text).string_len(255).not_null())
                    .col(ColumnDef::new(Todo::Completed).boolean().not_null().default(false))
                    .col(ColumnDef::new(Todo::CreatedAt).timestamp_with_time_zone().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_todo_user_id")
                            .from(Todo::Table, Todo::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_todo_user_id")
                    .table(Todo::Table)
                    .col(Todo::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Todo::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Goal::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Goal {
    Table,
    Id,
    UserId,
    Title,
    Type,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Todo {
    Table,
    Id,
    UserId,
    Text,
    Completed,
    CreatedAt,
}
