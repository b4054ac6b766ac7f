use daybook_entity::goal::{Column, Entity as Goal, Model as GoalModel};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::error::Error;

pub struct Query;

impl Query {
    pub async fn get_user_goals<C: ConnectionTrait>(conn: &C, user_id: i32) -> Result<Vec<GoalModel>, DbErr> {
        Goal::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_asc(Column::Id)
            .all(conn)
            .await
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, %user_id, "failed to load user goals"))
    }

    pub async fn get_user_goal<C: ConnectionTrait>(
        conn: &C,
        user_id: i32,
        goal_id: i32,
    ) -> Result<Option<GoalModel>, DbErr> {
        Goal::find_by_id(goal_id)
            .filter(Column::UserId.eq(user_id))
            .one(conn)
            .await
    }
}
