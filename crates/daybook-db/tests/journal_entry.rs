mod common;

use crate::common::{create_test_user, setup_db};
use chrono::NaiveDate;
use daybook_db::journal_entry;
use daybook_db::util::UniqueViolation;
use daybook_entity::journal_entry::{ActiveModel as ActiveJournalEntryModel, Column, Entity as JournalEntry};
use sea_orm::ActiveValue::Set;
use sea_orm::{ColumnTrait, DbErr, EntityTrait, QueryFilter};
use test_log::test;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 10, d).unwrap()
}

#[test(tokio::test)]
async fn test_one_entry_per_day() {
    let db = &setup_db().await;
    let user = create_test_user(db, "alice").await;

    journal_entry::Mutation::create_journal_entry(db, user.id, "Good day".to_owned(), day(19))
        .await
        .unwrap();
    let err = journal_entry::Mutation::create_journal_entry(db, user.id, "Another one".to_owned(), day(19))
        .await
        .unwrap_err();
    assert!(err.is_unique_violation(), "unexpected error: {err:?}");

    journal_entry::Mutation::create_journal_entry(db, user.id, "Next day".to_owned(), day(20))
        .await
        .unwrap();
    assert_eq!(
        journal_entry::Query::get_user_journal_entries(db, user.id)
            .await
            .unwrap()
            .len(),
        2
    );
}

#[test(tokio::test)]
async fn test_same_day_for_different_users() {
    let db = &setup_db().await;
    let alice = create_test_user(db, "alice").await;
    let bob = create_test_user(db, "bob").await;

    journal_entry::Mutation::create_journal_entry(db, alice.id, "Alice".to_owned(), day(19))
        .await
        .unwrap();
    journal_entry::Mutation::create_journal_entry(db, bob.id, "Bob".to_owned(), day(19))
        .await
        .unwrap();

    let entry = JournalEntry::find()
        .filter(Column::UserId.eq(bob.id))
        .filter(Column::Date.eq(day(19)))
        .one(db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(entry.content, "Bob");
}

#[test(tokio::test)]
async fn test_update_and_delete_journal_entry() {
    let db = &setup_db().await;
    let alice = create_test_user(db, "alice").await;
    let bob = create_test_user(db, "bob").await;
    let entry = journal_entry::Mutation::create_journal_entry(db, alice.id, "Draft".to_owned(), day(19))
        .await
        .unwrap();

    let changes = ActiveJournalEntryModel {
        content: Set("Final".to_owned()),
        ..Default::default()
    };
    let res = journal_entry::Mutation::update_user_journal_entry(db, bob.id, entry.id, changes.clone()).await;
    assert!(matches!(res, Err(DbErr::RecordNotFound(_))));

    let updated = journal_entry::Mutation::update_user_journal_entry(db, alice.id, entry.id, changes)
        .await
        .unwrap();
    assert_eq!(updated.content, "Final");
    assert_eq!(updated.date, day(19));

    journal_entry::Mutation::delete_user_journal_entry(db, alice.id, entry.id)
        .await
        .unwrap();
    assert!(
        journal_entry::Query::get_user_journal_entry(db, alice.id, entry.id)
            .await
            .unwrap()
            .is_none()
    );
}
