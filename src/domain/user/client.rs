//! Users sub-client: list, create, update, delete.

use super::{NewUser, User, UserPatch};
use crate::client::{segment, FoodAdminClient};
use crate::error::SdkError;
use crate::http::RetryPolicy;
use crate::shared::UserId;

pub struct Users<'a> {
    pub(crate) client: &'a FoodAdminClient,
}

impl<'a> Users<'a> {
    pub async fn list(&self) -> Result<Vec<User>, SdkError> {
        self.client.get("users", RetryPolicy::Idempotent).await
    }

    pub async fn create(&self, user: &NewUser) -> Result<User, SdkError> {
        self.client.post("users", user).await
    }

    pub async fn update(&self, id: &UserId, patch: &UserPatch) -> Result<User, SdkError> {
        self.client
            .put(&format!("users/{}", segment(id.as_str())), patch)
            .await
    }

    pub async fn delete(&self, id: &UserId) -> Result<(), SdkError> {
        self.client
            .delete(&format!("users/{}", segment(id.as_str())))
            .await
    }
}
