//! Products sub-client.

use super::convert::{orderable_products_from_wire, products_from_wire};
use super::wire::ProductResponse;
use super::{NewProduct, Product, ProductPatch};
use crate::client::{segment, FoodAdminClient};
use crate::error::SdkError;
use crate::http::RetryPolicy;
use crate::shared::ProductId;

pub struct Products<'a> {
    pub(crate) client: &'a FoodAdminClient,
}

impl<'a> Products<'a> {
    /// All products, active and inactive.
    pub async fn list(&self) -> Result<Vec<Product>, SdkError> {
        let rows: Vec<ProductResponse> =
            self.client.get("products", RetryPolicy::Idempotent).await?;
        products_from_wire(rows).map_err(|e| SdkError::Validation(e.to_string()))
    }

    /// Only products that may be ordered. Rows that fail validation are
    /// skipped rather than failing the list.
    pub async fn list_active(&self) -> Result<Vec<Product>, SdkError> {
        let rows: Vec<ProductResponse> =
            self.client.get("products", RetryPolicy::Idempotent).await?;
        Ok(orderable_products_from_wire(rows))
    }

    pub async fn create(&self, product: &NewProduct) -> Result<Product, SdkError> {
        let row: ProductResponse = self.client.post("products", product).await?;
        into_product(row)
    }

    pub async fn update(&self, id: &ProductId, patch: &ProductPatch) -> Result<Product, SdkError> {
        let row: ProductResponse = self
            .client
            .put(&format!("products/{}", segment(id.as_str())), patch)
            .await?;
        into_product(row)
    }

    pub async fn delete(&self, id: &ProductId) -> Result<(), SdkError> {
        self.client
            .delete(&format!("products/{}", segment(id.as_str())))
            .await
    }
}

fn into_product(row: ProductResponse) -> Result<Product, SdkError> {
    Product::try_from(row).map_err(|e| SdkError::Validation(e.to_string()))
}
