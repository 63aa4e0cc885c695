//! Catalog snapshot: the read-only products + users an order form works
//! against, fetched once per form session.

mod loader;

use crate::domain::product::Product;
use crate::domain::user::User;
use crate::shared::{ProductId, UserId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

pub use loader::{load_snapshot, SnapshotSource};

/// Point-in-time copy of orderable products and placeable-for users.
///
/// Prices are looked up here at display time, so a stale snapshot yields a
/// stale total until the form reloads it.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogSnapshot {
    products: Vec<Product>,
    users: Vec<User>,
    loaded_at: DateTime<Utc>,
}

impl CatalogSnapshot {
    /// Build a snapshot. Inactive products are dropped.
    pub fn new(products: Vec<Product>, users: Vec<User>) -> Self {
        Self {
            products: products.into_iter().filter(Product::is_active).collect(),
            users,
            loaded_at: Utc::now(),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new(), Vec::new())
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    pub fn price(&self, id: &ProductId) -> Option<Decimal> {
        self.product(id).map(|p| p.price)
    }

    pub fn user(&self, id: &UserId) -> Option<&User> {
        self.users.iter().find(|u| &u.id == id)
    }
}
