use crate::m20241019_000001_create_users::Users;
use sea_orm_migration::prelude::*;

pub(crate) const USER_DATE_INDEX: &str = "idx_journal_entry_user_id_date";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        tracing::debug!("creating journal_entry table");
        manager
            .create_table(
                Table::create()
                    .table(JournalEntry::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(JournalEntry::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(JournalEntry::UserId).integer().not_null())
                    .col(ColumnDef::new(JournalEntry::Content).text().not_null())
                    .col(ColumnDef::new(JournalEntry::Date).date().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_journal_entry_user_id")
                            .from(JournalEntry::Table, JournalEntry::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One entry per user and day. Concurrent creates race on this index, not in the application.
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name(USER_DATE_INDEX)
                    .table(JournalEntry::Table)
                    .col(JournalEntry::UserId)
                    .col(JournalEntry::Date)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(JournalEntry::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum JournalEntry {
    Table,
    Id,
    UserId,
    Content,
    Date,
}
