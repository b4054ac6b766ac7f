use sea_orm::{DbErr, SqlErr, TransactionError};
use std::error::Error;

/// Collapses the result of `conn.transaction(..)` into the error type of the closure.
///
/// Every repository write that spans several statements ends in `.flatten_res()`.
pub trait FlattenTransactionResultExt<T> {
    fn flatten_res(self) -> T;
}

/// Looks at an error raised inside the transaction closure, e.g. to log it, without consuming the result.
pub trait InspectTransactionError<E> {
    #[must_use]
    fn inspect_transaction_err<F: FnOnce(&E)>(self, f: F) -> Self;
}

impl<T, E> FlattenTransactionResultExt<Result<T, E>> for Result<T, TransactionError<E>>
where
    E: From<DbErr> + Error,
{
    fn flatten_res(self) -> Result<T, E> {
        self.map_err(|err| match err {
            TransactionError::Connection(err) => err.into(),
            TransactionError::Transaction(err) => err,
        })
    }
}

impl<T, E: Error> InspectTransactionError<E> for Result<T, TransactionError<E>> {
    fn inspect_transaction_err<F: FnOnce(&E)>(self, f: F) -> Self {
        if let Err(TransactionError::Transaction(err)) = &self {
            f(err);
        }
        self
    }
}

/// Turns a missing owner-scoped row into [`DbErr::RecordNotFound`], which the routes render as a 404.
pub trait RequireRecord<T> {
    fn require(self) -> Result<T, DbErr>;
}

impl<T> RequireRecord<T> for Result<Option<T>, DbErr> {
    fn require(self) -> Result<T, DbErr> {
        self?.ok_or_else(|| DbErr::RecordNotFound("record not found".to_string()))
    }
}

pub trait UniqueViolation {
    /// True if the statement was rejected by a unique index or primary key.
    fn is_unique_violation(&self) -> bool;
}

impl UniqueViolation for DbErr {
    fn is_unique_violation(&self) -> bool {
        matches!(self.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
    }
}
