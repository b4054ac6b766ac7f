use crate::util::{FlattenTransactionResultExt, InspectTransactionError};
use chrono::Utc;
use daybook_entity::user::{ActiveModel, Entity, Model};
use daybook_entity::{goal, journal_entry, todo};
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, TransactionTrait};
use std::error::Error;

pub struct Mutation;

impl Mutation {
    /// `password` must already be hashed.
    pub async fn create_user<C: ConnectionTrait>(
        conn: &C,
        username: String,
        email: String,
        password: String,
    ) -> Result<Model, DbErr> {
        let new_user = ActiveModel {
            id: NotSet,
            username: Set(username),
            email: Set(email),
            password: Set(password),
            date_joined: Set(Utc::now().fixed_offset()),
        };
        new_user.insert(conn).await
    }

    /// Deletes the user and everything they own.
    pub async fn delete<C: TransactionTrait>(conn: &C, user_id: i32) -> Result<(), DbErr> {
        conn.transaction(|txn| {
            Box::pin(async move {
                // The foreign keys cascade as well, this also covers sqlite connections without foreign key support
                goal::Entity::delete_many()
                    .filter(goal::Column::UserId.eq(user_id))
                    .exec(txn)
                    .await?;
                todo::Entity::delete_many()
                    .filter(todo::Column::UserId.eq(user_id))
                    .exec(txn)
                    .await?;
                journal_entry::Entity::delete_many()
                    .filter(journal_entry::Column::UserId.eq(user_id))
                    .exec(txn)
                    .await?;
                let res = Entity::delete_by_id(user_id).exec(txn).await?;
                if res.rows_affected == 0 {
                    return Err(DbErr::RecordNotFound("User not found".to_string()));
                }
                Ok(())
            })
        })
        .await
        .inspect_transaction_err(|error| tracing::error!(error = error as &dyn Error, %user_id, "failed to delete user"))
        .flatten_res()
    }
}
