use sea_orm::{DbErr, TransactionError};
use std::error::Error;

pub trait FlattenTransactionResultExt<T> {
    fn flatten_res(self) -> T;
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

/// Turns a missing row into [`DbErr::RecordNotFound`].
pub trait RequireRecord<T> {
    fn require(self, what: &str) -> Result<T, DbErr>;
}

impl<T> RequireRecord<T> for Result<Option<T>, DbErr> {
    fn require(self, what: &str) -> Result<T, DbErr> {
        self?.ok_or_else(|| DbErr::RecordNotFound(format!("{what} not found")))
    }
}

impl<T> RequireRecord<T> for Option<T> {
    fn require(self, what: &str) -> Result<T, DbErr> {
        self.ok_or_else(|| DbErr::RecordNotFound(format!("{what} not found")))
    }
}
