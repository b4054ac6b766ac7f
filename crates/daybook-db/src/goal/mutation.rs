use crate::goal::Query;
use crate::util::{FlattenTransactionResultExt, RequireRecord};
use chrono::Utc;
use daybook_entity::goal::{ActiveModel, Column, Entity as Goal, GoalType, Model};
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, TransactionTrait};

pub struct Mutation;

impl Mutation {
    pub async fn create_goal<C: ConnectionTrait>(
        conn: &C,
        user_id: i32,
        title: String,
        kind: GoalType,
    ) -> Result<Model, DbErr> {
        let goal = ActiveModel {
            id: NotSet,
            user_id: Set(user_id),
            title: Set(title),
            kind: Set(kind),
            created_at: Set(Utc::now().fixed_offset()),
        };
        goal.insert(conn).await
    }

    /// Applies the set fields of `changes` to a goal owned by `user_id`.
    ///
    /// Returns [`DbErr::RecordNotFound`] if the goal does not exist or belongs to someone else.
    pub async fn update_user_goal<C: TransactionTrait>(
        conn: &C,
        user_id: i32,
        goal_id: i32,
        changes: ActiveModel,
    ) -> Result<Model, DbErr> {
        conn.transaction(|txn| {
            Box::pin(async move {
                if changes.is_changed() {
                    let res = Goal::update_many()
                        .set(changes)
                        .filter(Column::Id.eq(goal_id))
                        .filter(Column::UserId.eq(user_id))
                        .exec(txn)
                        .await?;
                    if res.rows_affected == 0 {
                        return Err(DbErr::RecordNotFound("Goal not found".to_string()));
                    }
                }
                Query::get_user_goal(txn, user_id, goal_id).await.require()
            })
        })
        .await
        .flatten_res()
    }

    pub async fn delete_user_goal<C: ConnectionTrait>(conn: &C, user_id: i32, goal_id: i32) -> Result<(), DbErr> {
        let res = Goal::delete_many()
            .filter(Column::Id.eq(goal_id))
            .filter(Column::UserId.eq(user_id))
            .exec(conn)
            .await?;
        if res.rows_affected == 0 {
            return Err(DbErr::RecordNotFound("Goal not found".to_string()));
        }
        Ok(())
    }
}
