use crate::TestDb;
use daybook_migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection, DbErr};
use std::borrow::Cow;
use tempfile::TempDir;
use thiserror::Error;

/// A sqlite file in a temporary directory, removed on drop.
///
/// Unlike `sqlite::memory:` the database is shared by every connection of a pool.
pub struct SqliteDb {
    // We keep this around so it does not get dropped early
    #[allow(dead_code)]
    temp_dir: TempDir,
    uri: String,
}

#[derive(Error, Debug)]
pub enum SqliteError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Db(#[from] DbErr),
}

impl SqliteDb {
    pub fn new() -> Result<Self, SqliteError> {
        let temp_dir = TempDir::with_prefix("daybook-test-db")?;
        let path = temp_dir.path().join("db.sqlite");
        let path = path
            .to_str()
            .ok_or(std::io::Error::new(std::io::ErrorKind::InvalidData, "Invalid path"))?;
        let uri = format!("sqlite://{path}?mode=rwc");

        tracing::debug!(uri = ?uri, "created sqlite test db");
        Ok(Self { temp_dir, uri })
    }

    /// Connects and applies all migrations.
    pub async fn connect(&self) -> Result<DatabaseConnection, SqliteError> {
        let conn = Database::connect(self.db_uri().as_ref()).await?;
        Migrator::up(&conn, None).await?;
        Ok(conn)
    }
}

impl TestDb for SqliteDb {
    fn db_uri(&self) -> Cow<'_, str> {
        self.uri.as_str().into()
    }
}
