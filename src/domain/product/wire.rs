//! Wire types for product endpoints.

use crate::domain::category::Category;
use crate::shared::{serde_util, CategoryId, ProductId, Reference};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ProductStatus;

/// A product as returned by `GET /products`.
///
/// `categoryId` is either a bare id or the populated category document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductResponse {
    #[serde(rename = "_id")]
    pub id: ProductId,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "categoryId", default)]
    pub category: Reference<Category>,
    #[serde(with = "serde_util::decimal_number")]
    pub price: Decimal,
    pub status: String,
}

/// Body of `POST /products`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    #[serde(rename = "categoryId")]
    pub category_id: CategoryId,
    #[serde(with = "serde_util::decimal_number")]
    pub price: Decimal,
    pub status: ProductStatus,
}

/// Body of `PUT /products/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(
        rename = "categoryId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub category_id: Option<CategoryId>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_util::option_decimal_number"
    )]
    pub price: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ProductStatus>,
}
