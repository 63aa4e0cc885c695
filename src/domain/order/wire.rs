//! Wire types for `POST /orders`.

use super::ProductSummary;
use crate::domain::user::User;
use crate::shared::{serde_util, OrderId, ProductId, Reference, UserId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Body of `POST /orders`: `{ userId, items: [{ productId, quantity }] }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    #[serde(rename = "userId")]
    pub user_id: UserId,
    pub items: Vec<OrderItemRequest>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItemRequest {
    #[serde(rename = "productId")]
    pub product_id: ProductId,
    pub quantity: u32,
}

/// Persisted order returned by `POST /orders`.
///
/// Only `_id` is required; the order exists once the server answers 2xx.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderResponse {
    #[serde(rename = "_id")]
    pub id: OrderId,
    #[serde(rename = "userId", default)]
    pub user: Reference<User>,
    #[serde(default)]
    pub items: Vec<OrderItemResponse>,
    #[serde(
        rename = "totalAmount",
        default,
        with = "serde_util::decimal_number"
    )]
    pub total_amount: Decimal,
    #[serde(rename = "orderDate", alias = "createdAt", default)]
    pub order_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemResponse {
    #[serde(rename = "productId", default)]
    pub product: Reference<ProductSummary>,
    #[serde(default)]
    pub quantity: u32,
    #[serde(default, with = "serde_util::option_decimal_number")]
    pub price: Option<Decimal>,
}
