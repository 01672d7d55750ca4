use crate::error::ModelError;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A review rating between 1 and 5 stars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "i64", into = "i64")]
#[schema(value_type = u8)]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: i64) -> Result<Self, ModelError> {
        match u8::try_from(value) {
            Ok(rating) if (Self::MIN..=Self::MAX).contains(&rating) => Ok(Self(rating)),
            _ => Err(ModelError::InvalidRating(value)),
        }
    }

    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Rating {
    type Error = ModelError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for i64 {
    fn from(value: Rating) -> Self {
        Self::from(value.0)
    }
}

impl From<Rating> for i16 {
    fn from(value: Rating) -> Self {
        Self::from(value.0)
    }
}
