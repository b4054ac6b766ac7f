use daybook_db::user;
use daybook_entity::user::Model as UserModel;
use daybook_migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};

pub async fn setup_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    db
}

#[allow(dead_code)]
pub async fn create_test_user(db: &DatabaseConnection, username: &str) -> UserModel {
    user::Mutation::create_user(db, username.to_owned(), String::new(), "not-a-real-hash".to_owned())
        .await
        .unwrap()
}
