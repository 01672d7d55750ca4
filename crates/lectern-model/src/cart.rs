use crate::price::Price;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CartItem {
    pub course_id: Uuid,
    pub title: String,
    pub price: Price,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Price>,
    pub added_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Cart {
    pub items: Vec<CartItem>,
    pub subtotal: Price,
    pub savings: Price,
}

impl Cart {
    #[must_use]
    pub fn new(items: Vec<CartItem>) -> Self {
        let subtotal = items.iter().map(|item| item.price).sum();
        let savings = items
            .iter()
            .map(|item| item.price.savings_against(item.original_price))
            .sum();
        Self {
            items,
            subtotal,
            savings,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Checkout {
    pub enrolled: Vec<Uuid>,
    /// Cart entries that could not be enrolled and are still in the cart
    pub failed: Vec<Uuid>,
}
