use daybook_entity::journal_entry::{Column, Entity as JournalEntry, Model as JournalEntryModel};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::error::Error;

pub struct Query;

impl Query {
    pub async fn get_user_journal_entries<C: ConnectionTrait>(
        conn: &C,
        user_id: i32,
    ) -> Result<Vec<JournalEntryModel>, DbErr> {
        JournalEntry::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_asc(Column::Id)
            .all(conn)
            .await
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, %user_id, "failed to load user journal entries"))
    }

    pub async fn get_user_journal_entry<C: ConnectionTrait>(
        conn: &C,
        user_id: i32,
        journal_entry_id: i32,
    ) -> Result<Option<JournalEntryModel>, DbErr> {
        JournalEntry::find_by_id(journal_entry_id)
            .filter(Column::UserId.eq(user_id))
            .one(conn)
            .await
    }
}
