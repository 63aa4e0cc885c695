//! Orders sub-client: order creation.

use super::wire::{CreateOrderRequest, OrderResponse};
use super::{OrderGateway, PersistedOrder};
use crate::client::FoodAdminClient;
use crate::error::{HttpError, SdkError};
use async_trait::async_trait;

pub struct Orders<'a> {
    pub(crate) client: &'a FoodAdminClient,
}

impl<'a> Orders<'a> {
    /// `POST /orders`. Never retried automatically.
    ///
    /// A 2xx reply that does not decode yields [`SdkError::OrderUnconfirmed`]:
    /// the order exists server-side and must not be resent.
    pub async fn create(&self, request: &CreateOrderRequest) -> Result<PersistedOrder, SdkError> {
        let resp: OrderResponse = self
            .client
            .post("orders", request)
            .await
            .map_err(|e| match e {
                SdkError::Http(HttpError::InvalidBody(detail)) => {
                    SdkError::OrderUnconfirmed(detail)
                }
                other => other,
            })?;
        let order = PersistedOrder::from(resp);
        tracing::info!(order_id = %order.id, total = %order.total, "order created");
        Ok(order)
    }
}

#[async_trait]
impl OrderGateway for FoodAdminClient {
    async fn create_order(
        &self,
        request: &CreateOrderRequest,
    ) -> Result<PersistedOrder, SdkError> {
        self.orders().create(request).await
    }
}
