//! Conversion: ProductResponse → Product (TryFrom + validation).

use super::wire;
use super::{Product, ProductStatus, ProductValidationError};

impl TryFrom<wire::ProductResponse> for Product {
    type Error = ProductValidationError;

    fn try_from(source: wire::ProductResponse) -> Result<Self, Self::Error> {
        let mut errors = Vec::new();

        if source.name.trim().is_empty() {
            errors.push(ProductValidationError::MissingName);
        }
        if source.price.is_sign_negative() && !source.price.is_zero() {
            errors.push(ProductValidationError::NegativePrice(source.price));
        }
        let status = ProductStatus::parse(&source.status).unwrap_or_else(|| {
            errors.push(ProductValidationError::InvalidStatus(source.status.clone()));
            ProductStatus::Inactive
        });

        if !errors.is_empty() {
            return Err(ProductValidationError::Multiple(
                source.id.to_string(),
                errors,
            ));
        }

        Ok(Product {
            id: source.id,
            name: source.name,
            category: source.category,
            price: source.price,
            status,
        })
    }
}

/// Convert a list response, failing with every invalid row listed.
#[cfg_attr(not(feature = "http"), allow(dead_code))]
pub(crate) fn products_from_wire(
    rows: Vec<wire::ProductResponse>,
) -> Result<Vec<Product>, ProductValidationError> {
    let mut products = Vec::with_capacity(rows.len());
    let mut errors = Vec::new();
    for row in rows {
        match Product::try_from(row) {
            Ok(p) => products.push(p),
            Err(e) => errors.push(e),
        }
    }
    if errors.is_empty() {
        Ok(products)
    } else {
        Err(ProductValidationError::Multiple("products".to_string(), errors))
    }
}

/// Keep only rows that convert cleanly and are active.
///
/// Invalid rows are skipped with a warning so that one bad document does
/// not block ordering from the rest of the catalog.
#[cfg_attr(not(feature = "http"), allow(dead_code))]
pub(crate) fn orderable_products_from_wire(rows: Vec<wire::ProductResponse>) -> Vec<Product> {
    rows.into_iter()
        .filter_map(|row| match Product::try_from(row) {
            Ok(product) => Some(product),
            Err(e) => {
                tracing::warn!(error = %e, "skipping invalid product row");
                None
            }
        })
        .filter(Product::is_active)
        .collect()
}
