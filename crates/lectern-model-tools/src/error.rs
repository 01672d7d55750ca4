use lectern_model::error::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("stored value is invalid: {0}")]
    InvalidValue(#[from] ModelError),
}
