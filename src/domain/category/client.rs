//! Categories sub-client.

use super::{Category, CategoryPatch, NewCategory};
use crate::client::{segment, FoodAdminClient};
use crate::error::SdkError;
use crate::http::RetryPolicy;
use crate::shared::CategoryId;

pub struct Categories<'a> {
    pub(crate) client: &'a FoodAdminClient,
}

impl<'a> Categories<'a> {
    pub async fn list(&self) -> Result<Vec<Category>, SdkError> {
        self.client.get("categories", RetryPolicy::Idempotent).await
    }

    pub async fn create(&self, category: &NewCategory) -> Result<Category, SdkError> {
        self.client.post("categories", category).await
    }

    pub async fn update(
        &self,
        id: &CategoryId,
        patch: &CategoryPatch,
    ) -> Result<Category, SdkError> {
        self.client
            .put(&format!("categories/{}", segment(id.as_str())), patch)
            .await
    }

    pub async fn delete(&self, id: &CategoryId) -> Result<(), SdkError> {
        self.client
            .delete(&format!("categories/{}", segment(id.as_str())))
            .await
    }
}
