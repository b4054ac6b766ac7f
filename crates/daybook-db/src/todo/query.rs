use daybook_entity::todo::{Column, Entity as Todo, Model as TodoModel};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::error::Error;

pub struct Query;

impl Query {
    pub async fn get_user_todos<C: ConnectionTrait>(conn: &C, user_id: i32) -> Result<Vec<TodoModel>, DbErr> {
        Todo::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_asc(Column::Id)
            .all(conn)
            .await
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, %user_id, "failed to load user todos"))
    }

    pub async fn get_user_todo<C: ConnectionTrait>(
        conn: &C,
        user_id: i32,
        todo_id: i32,
    ) -> Result<Option<TodoModel>, DbErr> {
        Todo::find_by_id(todo_id)
            .filter(Column::UserId.eq(user_id))
            .one(conn)
            .await
    }
}
