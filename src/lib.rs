//! # Food Admin SDK
//!
//! A Rust SDK for the food-ordering back office API: catalog and user
//! administration, dashboard statistics, and a stateful order composer.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core**: Ids, references, domain models, the order composer and the
//!    catalog snapshot (no transport required)
//! 2. **Auth**: Admin login and the session context that carries the token
//! 3. **HTTP API**: `AdminHttp` with per-request retry policies
//! 4. **High-Level Client**: `FoodAdminClient` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use food_admin_sdk::prelude::*;
//!
//! let client = FoodAdminClient::builder()
//!     .base_url("http://localhost:5000/api")
//!     .build()?;
//! client.auth().login("admin@example.com", "secret").await?;
//!
//! let mut composer = OrderComposer::new(load_snapshot(&client).await?);
//! composer.select_user("u1")?;
//! composer.add_line_item("p1")?;
//! let order = composer.submit(&client).await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes, references and formatting helpers.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, state.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: Auth ────────────────────────────────────────────────────────────

/// Authentication: admin profile, session, login/logout.
pub mod auth;

// ── Layer 3: HTTP API ────────────────────────────────────────────────────────

/// HTTP client with retry policies.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `FoodAdminClient`, the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{CategoryId, Identified, OrderId, ProductId, Reference, UserId};

    // Domain types
    pub use crate::domain::catalog::{load_snapshot, CatalogSnapshot, SnapshotSource};
    pub use crate::domain::category::{Category, CategoryPatch, NewCategory};
    pub use crate::domain::dashboard::{DashboardStats, StatTile};
    pub use crate::domain::order::{
        CreateOrderRequest, DraftOrder, LineItem, LineItemUpdate, Notice, OrderComposer,
        OrderGateway, OrderItemRequest, OrderedItem, PersistedOrder, Phase,
    };
    pub use crate::domain::product::{NewProduct, Product, ProductPatch, ProductStatus};
    pub use crate::domain::user::{NewUser, User, UserPatch};

    // Errors
    pub use crate::error::{AuthError, ComposerError, FetchError, HttpError, Resource, SdkError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // Auth
    pub use crate::auth::{Admin, Session};

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        AuthClient, CategoriesClient, DashboardClient, FoodAdminClient, FoodAdminClientBuilder,
        OrdersClient, ProductsClient, UsersClient,
    };
    #[cfg(feature = "http")]
    pub use crate::http::retry::{RetryConfig, RetryPolicy};
}
