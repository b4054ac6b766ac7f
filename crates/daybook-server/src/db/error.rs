use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("Failed to run migration on db")]
    MigrationFailed(#[source] sea_orm::DbErr),

    #[error("Failed to connect to db")]
    ConnectionError(#[from] sea_orm::DbErr),

    #[error("Unknown database type {0}")]
    UnknownDbType(String),
}
