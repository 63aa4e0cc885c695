//! Product domain: purchasable catalog items.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use crate::domain::category::Category;
use crate::shared::{Identified, ProductId, Reference};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

pub use wire::{NewProduct, ProductPatch};

// ─── ProductStatus ───────────────────────────────────────────────────────────

/// Only `Active` products are offered when composing an order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    #[default]
    Active,
    Inactive,
}

impl ProductStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductStatus::Active => "active",
            ProductStatus::Inactive => "inactive",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Some(ProductStatus::Active),
            "inactive" => Some(ProductStatus::Inactive),
            _ => None,
        }
    }
}

impl fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ─── Product ─────────────────────────────────────────────────────────────────

/// A validated catalog product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: Reference<Category>,
    pub price: Decimal,
    pub status: ProductStatus,
}

impl Product {
    pub fn is_active(&self) -> bool {
        self.status == ProductStatus::Active
    }

    /// Category name, resolved from the embedded document or `categories`.
    pub fn category_name<'a>(&'a self, categories: &'a [Category]) -> &'a str {
        self.category.display_name(categories)
    }
}

impl Identified for Product {
    fn id(&self) -> &str {
        self.id.as_str()
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}

// ─── Validation ──────────────────────────────────────────────────────────────

#[derive(Debug)]
pub enum ProductValidationError {
    Multiple(String, Vec<ProductValidationError>),
    MissingName,
    NegativePrice(Decimal),
    InvalidStatus(String),
}

impl fmt::Display for ProductValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductValidationError::Multiple(id, errors) => {
                writeln!(f, "Product validation errors ({id}):")?;
                for err in errors {
                    writeln!(f, "  - {}", err)?;
                }
                Ok(())
            }
            ProductValidationError::MissingName => write!(f, "Missing name"),
            ProductValidationError::NegativePrice(p) => write!(f, "Negative price: {}", p),
            ProductValidationError::InvalidStatus(s) => write!(f, "Invalid status: {:?}", s),
        }
    }
}

impl std::error::Error for ProductValidationError {}
