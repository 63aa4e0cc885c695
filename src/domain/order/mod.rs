//! Order domain: draft orders, line items, persisted orders, and the
//! composer that turns one into the other.

#[cfg(feature = "http")]
pub mod client;
pub mod composer;
mod convert;
pub mod gateway;
pub mod wire;

use crate::domain::user::User;
use crate::shared::{Identified, OrderId, ProductId, Reference, UserId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use composer::{LineItemUpdate, Notice, OrderComposer, Phase};
pub use gateway::OrderGateway;
pub use wire::{CreateOrderRequest, OrderItemRequest};

// ─── Draft side ──────────────────────────────────────────────────────────────

/// One product + quantity pairing within a draft order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub product_id: ProductId,
    /// Always ≥ 1.
    pub quantity: u32,
}

/// The in-progress, client-side order.
///
/// No two line items share a product id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftOrder {
    pub user_id: Option<UserId>,
    pub items: Vec<LineItem>,
}

impl DraftOrder {
    pub fn is_empty(&self) -> bool {
        self.user_id.is_none() && self.items.is_empty()
    }

    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.items.iter().any(|item| &item.product_id == product_id)
    }

    /// The gateway body, or `None` while no user is selected.
    pub fn to_request(&self) -> Option<CreateOrderRequest> {
        let user_id = self.user_id.clone()?;
        Some(CreateOrderRequest {
            user_id,
            items: self
                .items
                .iter()
                .map(|item| OrderItemRequest {
                    product_id: item.product_id.clone(),
                    quantity: item.quantity,
                })
                .collect(),
        })
    }
}

// ─── Persisted side ──────────────────────────────────────────────────────────

/// Minimal product view embedded in persisted order items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSummary {
    #[serde(rename = "_id")]
    pub id: ProductId,
    #[serde(default)]
    pub name: String,
}

impl Identified for ProductSummary {
    fn id(&self) -> &str {
        self.id.as_str()
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}

/// A line of a persisted order, priced at order time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderedItem {
    pub product: Reference<ProductSummary>,
    pub quantity: u32,
    pub unit_price: Option<Decimal>,
}

/// An order as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedOrder {
    pub id: OrderId,
    pub user: Reference<User>,
    pub items: Vec<OrderedItem>,
    pub total: Decimal,
    /// `None` when the server did not echo a timestamp.
    pub created_at: Option<DateTime<Utc>>,
}
