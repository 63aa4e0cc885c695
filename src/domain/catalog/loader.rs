//! Concurrent products + users fetch with all-or-nothing failure.

use super::CatalogSnapshot;
use crate::domain::product::Product;
use crate::domain::user::User;
use crate::error::{FetchError, Resource, SdkError};
use async_trait::async_trait;
use futures_util::future::join;

/// Where the snapshot's two collections come from.
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    async fn fetch_products(&self) -> Result<Vec<Product>, SdkError>;
    async fn fetch_users(&self) -> Result<Vec<User>, SdkError>;
}

/// Fetch products and users concurrently.
///
/// Both must succeed. Any failure yields a single [`FetchError`] naming every
/// failed collection; nothing is retried here.
pub async fn load_snapshot<S: SnapshotSource + ?Sized>(
    source: &S,
) -> Result<CatalogSnapshot, SdkError> {
    let (products, users) = join(source.fetch_products(), source.fetch_users()).await;

    match (products, users) {
        (Ok(products), Ok(users)) => {
            let snapshot = CatalogSnapshot::new(products, users);
            tracing::debug!(
                products = snapshot.products().len(),
                users = snapshot.users().len(),
                "catalog snapshot loaded"
            );
            Ok(snapshot)
        }
        (products, users) => {
            let mut failures = Vec::new();
            if let Err(e) = products {
                failures.push((Resource::Products, e));
            }
            if let Err(e) = users {
                failures.push((Resource::Users, e));
            }
            let err = FetchError { failures };
            tracing::warn!(error = %err, "catalog snapshot load failed");
            Err(err.into())
        }
    }
}

#[cfg(feature = "http")]
#[async_trait]
impl SnapshotSource for crate::client::FoodAdminClient {
    async fn fetch_products(&self) -> Result<Vec<Product>, SdkError> {
        self.products().list_active().await
    }

    async fn fetch_users(&self) -> Result<Vec<User>, SdkError> {
        self.users().list().await
    }
}
