mod common;

use crate::common::{create_test_user, setup_db};
use daybook_db::goal;
use daybook_entity::goal::{ActiveModel as ActiveGoalModel, GoalType};
use sea_orm::ActiveValue::Set;
use sea_orm::DbErr;
use test_log::test;

#[test(tokio::test)]
async fn test_create_and_list_goals() {
    let db = &setup_db().await;
    let user = create_test_user(db, "alice").await;

    let first = goal::Mutation::create_goal(db, user.id, "Run a marathon".to_owned(), GoalType::LongTerm)
        .await
        .unwrap();
    let second = goal::Mutation::create_goal(db, user.id, "Read a book".to_owned(), GoalType::ShortTerm)
        .await
        .unwrap();

    let goals = goal::Query::get_user_goals(db, user.id).await.unwrap();
    assert_eq!(goals, vec![first, second]);
}

#[test(tokio::test)]
async fn test_goals_are_scoped_to_owner() {
    let db = &setup_db().await;
    let alice = create_test_user(db, "alice").await;
    let bob = create_test_user(db, "bob").await;

    let goal = goal::Mutation::create_goal(db, alice.id, "Learn Rust".to_owned(), GoalType::LongTerm)
        .await
        .unwrap();

    assert!(goal::Query::get_user_goals(db, bob.id).await.unwrap().is_empty());
    assert!(goal::Query::get_user_goal(db, bob.id, goal.id).await.unwrap().is_none());

    let changes = ActiveGoalModel {
        title: Set("Hijacked".to_owned()),
        ..Default::default()
    };
    let res = goal::Mutation::update_user_goal(db, bob.id, goal.id, changes).await;
    assert!(matches!(res, Err(DbErr::RecordNotFound(_))));

    let res = goal::Mutation::delete_user_goal(db, bob.id, goal.id).await;
    assert!(matches!(res, Err(DbErr::RecordNotFound(_))));

    let unchanged = goal::Query::get_user_goal(db, alice.id, goal.id).await.unwrap().unwrap();
    assert_eq!(unchanged.title, "Learn Rust");
}

#[test(tokio::test)]
async fn test_update_goal() {
    let db = &setup_db().await;
    let user = create_test_user(db, "alice").await;
    let goal = goal::Mutation::create_goal(db, user.id, "Learn Rust".to_owned(), GoalType::LongTerm)
        .await
        .unwrap();

    let changes = ActiveGoalModel {
        kind: Set(GoalType::ShortTerm),
        ..Default::default()
    };
    let updated = goal::Mutation::update_user_goal(db, user.id, goal.id, changes).await.unwrap();
    assert_eq!(updated.kind, GoalType::ShortTerm);
    assert_eq!(updated.title, goal.title);
    assert_eq!(updated.created_at, goal.created_at);

    // No changes still returns the current record
    let same = goal::Mutation::update_user_goal(db, user.id, goal.id, ActiveGoalModel::default())
        .await
        .unwrap();
    assert_eq!(same, updated);
}

#[test(tokio::test)]
async fn test_delete_goal_twice() {
    let db = &setup_db().await;
    let user = create_test_user(db, "alice").await;
    let goal = goal::Mutation::create_goal(db, user.id, "Learn Rust".to_owned(), GoalType::LongTerm)
        .await
        .unwrap();

    goal::Mutation::delete_user_goal(db, user.id, goal.id).await.unwrap();
    let res = goal::Mutation::delete_user_goal(db, user.id, goal.id).await;
    assert!(matches!(res, Err(DbErr::RecordNotFound(_))));
    assert!(goal::Query::get_user_goals(db, user.id).await.unwrap().is_empty());
}
