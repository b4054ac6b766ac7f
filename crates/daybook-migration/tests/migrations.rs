use daybook_migration::{Migrator, MigratorTrait, SchemaManager};
use sea_orm::{ConnectionTrait, Database, DbBackend, Statement};
use test_log::test;

const TABLES: [&str; 4] = ["users", "goal", "todo", "journal_entry"];

#[test(tokio::test)]
async fn test_migrations() {
    let db = Database::connect("sqlite::memory:").await.unwrap();

    // Do it twice to make sure the migrations are reversible
    for _ in 0..2 {
        Migrator::up(&db, None).await.unwrap();
        let manager = SchemaManager::new(&db);
        for table in TABLES {
            assert!(manager.has_table(table).await.unwrap(), "missing table {table}");
        }

        Migrator::down(&db, None).await.unwrap();
        let manager = SchemaManager::new(&db);
        for table in TABLES {
            assert!(!manager.has_table(table).await.unwrap(), "table {table} not dropped");
        }
    }
}

#[test(tokio::test)]
async fn test_journal_entry_unique_per_day() {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    Migrator::up(&db, None).await.unwrap();

    db.execute_unprepared(
        "INSERT INTO users (username, email, password, date_joined) VALUES ('alice', '', 'x', '2024-10-19T00:00:00+00:00')",
    )
    .await
    .unwrap();
    let insert = |date: &str| {
        Statement::from_string(
            DbBackend::Sqlite,
            format!("INSERT INTO journal_entry (user_id, content, date) VALUES (1, 'a', '{date}')"),
        )
    };

    db.execute(insert("2024-10-19")).await.unwrap();
    db.execute(insert("2024-10-20")).await.unwrap();
    db.execute(insert("2024-10-19")).await.unwrap_err();
}
