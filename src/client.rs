//! High-level client: `FoodAdminClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, the session slot, and the verb helpers
//! that inject the session into every outbound call.

use crate::auth::client::Auth;
use crate::auth::Session;
use crate::domain::category::client::Categories;
use crate::domain::dashboard::client::Dashboard;
use crate::domain::order::client::Orders;
use crate::domain::product::client::Products;
use crate::domain::user::client::Users;
use crate::error::{HttpError, SdkError};
use crate::http::{AdminHttp, RetryConfig, RetryPolicy};

use async_lock::RwLock;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::auth::client::Auth as AuthClient;
pub use crate::domain::category::client::Categories as CategoriesClient;
pub use crate::domain::dashboard::client::Dashboard as DashboardClient;
pub use crate::domain::order::client::Orders as OrdersClient;
pub use crate::domain::product::client::Products as ProductsClient;
pub use crate::domain::user::client::Users as UsersClient;

/// Environment variable read by [`FoodAdminClientBuilder::from_env`].
pub const API_URL_ENV: &str = "FOOD_ADMIN_API_URL";

/// The primary entry point for the SDK.
///
/// Provides nested sub-client accessors for each domain:
/// `client.users()`, `client.orders()`, etc.
pub struct FoodAdminClient {
    pub(crate) http: AdminHttp,
    /// Current session. `None` until login; cleared on logout or 401.
    pub(crate) session: Arc<RwLock<Option<Session>>>,
}

impl std::fmt::Debug for FoodAdminClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FoodAdminClient").finish_non_exhaustive()
    }
}

impl FoodAdminClient {
    pub fn builder() -> FoodAdminClientBuilder {
        FoodAdminClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn auth(&self) -> Auth<'_> {
        Auth { client: self }
    }

    pub fn users(&self) -> Users<'_> {
        Users { client: self }
    }

    pub fn categories(&self) -> Categories<'_> {
        Categories { client: self }
    }

    pub fn products(&self) -> Products<'_> {
        Products { client: self }
    }

    pub fn orders(&self) -> Orders<'_> {
        Orders { client: self }
    }

    pub fn dashboard(&self) -> Dashboard<'_> {
        Dashboard { client: self }
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    // ── Session-injecting verbs ──────────────────────────────────────────

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        retry: RetryPolicy,
    ) -> Result<T, SdkError> {
        let url = self.http.url(path);
        let session = self.session.read().await.clone();
        let result = self.http.get(&url, session.as_ref(), retry).await;
        self.settle(result).await
    }

    pub(crate) async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, SdkError> {
        let url = self.http.url(path);
        let session = self.session.read().await.clone();
        let result = self
            .http
            .post(&url, body, session.as_ref(), RetryPolicy::None)
            .await;
        self.settle(result).await
    }

    pub(crate) async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, SdkError> {
        let url = self.http.url(path);
        let session = self.session.read().await.clone();
        let result = self
            .http
            .put(&url, body, session.as_ref(), RetryPolicy::None)
            .await;
        self.settle(result).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), SdkError> {
        let url = self.http.url(path);
        let session = self.session.read().await.clone();
        let result = self
            .http
            .delete(&url, session.as_ref(), RetryPolicy::None)
            .await;
        self.settle(result).await
    }

    /// A 401 means the token is no longer accepted: drop the session.
    async fn settle<T>(&self, result: Result<T, HttpError>) -> Result<T, SdkError> {
        if let Err(HttpError::Unauthorized(_)) = &result {
            if self.session.write().await.take().is_some() {
                tracing::warn!("session rejected by server; cleared");
            }
        }
        Ok(result?)
    }
}

impl Clone for FoodAdminClient {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            session: self.session.clone(),
        }
    }
}

/// Percent-encode an id for use as a path segment.
pub(crate) fn segment(id: &str) -> String {
    urlencoding::encode(id).into_owned()
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct FoodAdminClientBuilder {
    base_url: String,
    timeout: Duration,
    retry: RetryConfig,
    session: Option<Session>,
}

impl Default for FoodAdminClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(30),
            retry: RetryConfig::idempotent(),
            session: None,
        }
    }
}

impl FoodAdminClientBuilder {
    /// Defaults, with the base URL taken from `FOOD_ADMIN_API_URL` when set.
    pub fn from_env() -> Self {
        let builder = Self::default();
        match std::env::var(API_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => builder.base_url(&url),
            _ => builder,
        }
    }

    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.trim().to_string();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Retry behaviour for idempotent (GET) requests.
    pub fn retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Pre-set a session on construction.
    pub fn session(mut self, session: Session) -> Self {
        self.session = Some(session);
        self
    }

    pub fn build(self) -> Result<FoodAdminClient, SdkError> {
        if self.base_url.is_empty() {
            return Err(SdkError::Validation("base URL must not be empty".to_string()));
        }
        Ok(FoodAdminClient {
            http: AdminHttp::new(&self.base_url, self.timeout, self.retry)?,
            session: Arc::new(RwLock::new(self.session)),
        })
    }
}
