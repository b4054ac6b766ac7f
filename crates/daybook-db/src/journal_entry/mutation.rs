use crate::journal_entry::Query;
use crate::util::{FlattenTransactionResultExt, RequireRecord};
use chrono::NaiveDate;
use daybook_entity::journal_entry::{ActiveModel, Column, Entity as JournalEntry, Model};
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, TransactionTrait};

pub struct Mutation;

impl Mutation {
    /// Inserts the entry for `date`.
    ///
    /// A second entry for the same user and date is rejected by the unique index on `(user_id, date)`,
    /// check the error with [`crate::util::UniqueViolation`].
    pub async fn create_journal_entry<C: ConnectionTrait>(
        conn: &C,
        user_id: i32,
        content: String,
        date: NaiveDate,
    ) -> Result<Model, DbErr> {
        let journal_entry = ActiveModel {
            id: NotSet,
            user_id: Set(user_id),
            content: Set(content),
            date: Set(date),
        };
        journal_entry.insert(conn).await
    }

    pub async fn update_user_journal_entry<C: TransactionTrait>(
        conn: &C,
        user_id: i32,
        journal_entry_id: i32,
        changes: ActiveModel,
    ) -> Result<Model, DbErr> {
        conn.transaction(|txn| {
            Box::pin(async move {
                if changes.is_changed() {
                    let res = JournalEntry::update_many()
                        .set(changes)
                        .filter(Column::Id.eq(journal_entry_id))
                        .filter(Column::UserId.eq(user_id))
                        .exec(txn)
                        .await?;
                    if res.rows_affected == 0 {
                        return Err(DbErr::RecordNotFound("Journal entry not found".to_string()));
                    }
                }
                Query::get_user_journal_entry(txn, user_id, journal_entry_id)
                    .await
                    .require()
            })
        })
        .await
        .flatten_res()
    }

    pub async fn delete_user_journal_entry<C: ConnectionTrait>(
        conn: &C,
        user_id: i32,
        journal_entry_id: i32,
    ) -> Result<(), DbErr> {
        let res = JournalEntry::delete_many()
            .filter(Column::Id.eq(journal_entry_id))
            .filter(Column::UserId.eq(user_id))
            .exec(conn)
            .await?;
        if res.rows_affected == 0 {
            return Err(DbErr::RecordNotFound("Journal entry not found".to_string()));
        }
        Ok(())
    }
}
