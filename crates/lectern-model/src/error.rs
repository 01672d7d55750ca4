use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("rating must be between 1 and 5, got {0}")]
    InvalidRating(i64),
    #[error("price must not be negative, got {0}")]
    NegativePrice(i64),
}
