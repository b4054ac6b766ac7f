pub(crate) mod error;

use crate::db::error::DbError;
use crate::opt::Db;
use daybook_migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::error::Error;
use url::Url;

pub(crate) fn build_connect_options(db_options: &Db, db_url: &Url) -> Result<ConnectOptions, DbError> {
    let db_type = db_url.scheme().split('+').next().unwrap_or_default();
    if !matches!(db_type, "sqlite" | "postgres" | "postgresql") {
        return Err(DbError::UnknownDbType(db_type.to_string()));
    }

    let mut seaorm_pool_options = ConnectOptions::new(db_url.as_str());
    if let Some(min_connections) = db_options.db_min_connections {
        seaorm_pool_options.min_connections(min_connections);
    }
    if let Some(max_connections) = db_options.db_max_connections {
        seaorm_pool_options.max_connections(max_connections);
    }
    seaorm_pool_options.sqlx_logging_level(log::LevelFilter::Debug);
    Ok(seaorm_pool_options)
}

/// Connects and brings the schema up to date.
pub(crate) async fn connect(db_options: &Db, db_url: &Url) -> Result<DatabaseConnection, DbError> {
    let conn = Database::connect(build_connect_options(db_options, db_url)?).await?;

    tracing::debug!("running migrations");
    Migrator::up(&conn, None)
        .await
        .map_err(DbError::MigrationFailed)
        .inspect_err(|error| tracing::error!(error = error as &dyn Error, "failed to migrate db"))?;
    Ok(conn)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    fn no_pool_options() -> Db {
        Db {
            db_min_connections: None,
            db_max_connections: None,
        }
    }

    #[test]
    fn test_unknown_db_type() {
        let url = Url::parse("mysql://localhost/daybook").unwrap();
        let res = build_connect_options(&no_pool_options(), &url);
        assert!(matches!(res, Err(DbError::UnknownDbType(db_type)) if db_type == "mysql"));
    }

    #[test]
    fn test_pool_options() {
        let url = Url::parse("postgresql://localhost/daybook").unwrap();
        let options = build_connect_options(
            &Db {
                db_min_connections: Some(2),
                db_max_connections: Some(8),
            },
            &url,
        )
        .unwrap();
        assert_eq!(options.get_min_connections(), Some(2));
        assert_eq!(options.get_max_connections(), Some(8));
    }

    #[test(tokio::test)]
    async fn test_connect_runs_migrations() {
        let db = daybook_test_helpers::SqliteDb::new().unwrap();
        let url = Url::parse(&daybook_test_helpers::TestDb::db_uri(&db)).unwrap();
        let conn = connect(&no_pool_options(), &url).await.unwrap();
        let applied = Migrator::get_applied_migrations(&conn).await.unwrap();
        assert_eq!(applied.len(), Migrator::migrations().len());
    }
}
