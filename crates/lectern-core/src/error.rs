use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error(transparent)]
    Conversion(#[from] lectern_model_tools::error::Error),

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("course belongs to another instructor")]
    NotOwner,

    #[error("invalid input: {0}")]
    Invalid(String),
}
