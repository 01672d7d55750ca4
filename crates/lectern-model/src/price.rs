use crate::error::ModelError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::iter::Sum;
use std::ops::Add;
use utoipa::ToSchema;

/// A non-negative amount in the smallest currency unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "i64", into = "i64")]
#[schema(value_type = i64)]
pub struct Price(i64);

impl Price {
    pub const ZERO: Self = Self(0);

    pub fn from_cents(cents: i64) -> Result<Self, ModelError> {
        if cents < 0 {
            return Err(ModelError::NegativePrice(cents));
        }
        Ok(Self(cents))
    }

    #[must_use]
    pub fn cents(self) -> i64 {
        self.0
    }

    /// The amount saved compared to `original`, zero if `original` is not higher.
    #[must_use]
    pub fn savings_against(self, original: Option<Self>) -> Self {
        original.map_or(Self::ZERO, |original| Self((original.0 - self.0).max(0)))
    }

    #[must_use]
    pub fn saturating_mul(self, count: u64) -> Self {
        let count = i64::try_from(count).unwrap_or(i64::MAX);
        Self(self.0.saturating_mul(count))
    }
}

impl TryFrom<i64> for Price {
    type Error = ModelError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::from_cents(value)
    }
}

impl From<Price> for i64 {
    fn from(value: Price) -> Self {
        value.0
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl Display for Price {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_rejected() {
        assert_eq!(Price::from_cents(-1), Err(ModelError::NegativePrice(-1)));
        assert!(serde_json::from_str::<Price>("-5").is_err());
    }

    #[test]
    fn test_savings() {
        let price = Price::from_cents(4999).unwrap();
        assert_eq!(price.savings_against(Price::from_cents(9999).ok()).cents(), 5000);
        assert_eq!(price.savings_against(Price::from_cents(1000).ok()), Price::ZERO);
        assert_eq!(price.savings_against(None), Price::ZERO);
    }

    #[test]
    fn test_sum_and_display() {
        let total: Price = [1999, 2001, 5].into_iter().map(|c| Price::from_cents(c).unwrap()).sum();
        assert_eq!(total.cents(), 4005);
        assert_eq!(total.to_string(), "40.05");
        assert_eq!(Price::from_cents(7).unwrap().to_string(), "0.07");
    }
}
