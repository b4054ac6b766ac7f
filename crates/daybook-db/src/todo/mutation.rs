use crate::todo::Query;
use crate::util::{FlattenTransactionResultExt, RequireRecord};
use chrono::Utc;
use daybook_entity::todo::{ActiveModel, Column, Entity as Todo, Model};
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, TransactionTrait};

pub struct Mutation;

impl Mutation {
    pub async fn create_todo<C: ConnectionTrait>(
        conn: &C,
        user_id: i32,
        text: String,
        completed: bool,
    ) -> Result<Model, DbErr> {
        let todo = ActiveModel {
            id: NotSet,
            user_id: Set(user_id),
            text: Set(text),
            completed: Set(completed),
            created_at: Set(Utc::now().fixed_offset()),
        };
        todo.insert(conn).await
    }

    pub async fn update_user_todo<C: TransactionTrait>(
        conn: &C,
        user_id: i32,
        todo_id: i32,
        changes: ActiveModel,
    ) -> Result<Model, DbErr> {
        conn.transaction(|txn| {
            Box::pin(async move {
                if changes.is_changed() {
                    let res = Todo::update_many()
                        .set(changes)
                        .filter(Column::Id.eq(todo_id))
                        .filter(Column::UserId.eq(user_id))
                        .exec(txn)
                        .await?;
                    if res.rows_affected == 0 {
                        return Err(DbErr::RecordNotFound("Todo not found".to_string()));
                    }
                }
                Query::get_user_todo(txn, user_id, todo_id).await.require()
            })
        })
        .await
        .flatten_res()
    }

    pub async fn delete_user_todo<C: ConnectionTrait>(conn: &C, user_id: i32, todo_id: i32) -> Result<(), DbErr> {
        let res = Todo::delete_many()
            .filter(Column::Id.eq(todo_id))
            .filter(Column::UserId.eq(user_id))
            .exec(conn)
            .await?;
        if res.rows_affected == 0 {
            return Err(DbErr::RecordNotFound("Todo not found".to_string()));
        }
        Ok(())
    }
}
