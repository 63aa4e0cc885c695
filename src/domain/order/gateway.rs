//! The order submission seam.

use super::{CreateOrderRequest, PersistedOrder};
use crate::error::SdkError;
use async_trait::async_trait;

/// Accepts a finished order and returns the persisted record.
///
/// `FoodAdminClient` implements this over `POST /orders`; tests and
/// alternative transports can supply their own.
#[async_trait]
pub trait OrderGateway: Send + Sync {
    async fn create_order(&self, request: &CreateOrderRequest)
        -> Result<PersistedOrder, SdkError>;
}
