//! Dashboard sub-client.

use super::{DashboardStats, StatTile};
use crate::client::FoodAdminClient;
use crate::error::SdkError;
use crate::http::RetryPolicy;

pub struct Dashboard<'a> {
    pub(crate) client: &'a FoodAdminClient,
}

impl<'a> Dashboard<'a> {
    pub async fn stats(&self) -> Result<DashboardStats, SdkError> {
        self.client.get("dashboard", RetryPolicy::Idempotent).await
    }

    /// Fetch the stats and format them for display.
    pub async fn tiles(&self) -> Result<Vec<StatTile>, SdkError> {
        Ok(self.stats().await?.tiles())
    }
}
