//! Authentication: admin login, session context, current-admin lookup.
//!
//! ## Session model
//!
//! - `client.auth().login(email, password)` calls `POST /auth/login` and
//!   creates a [`Session`] holding the bearer token and the admin profile.
//! - The session is the only holder of the token. The HTTP layer receives it
//!   explicitly on every call and attaches `Authorization: Bearer <token>`.
//!   There is no public token accessor.
//! - The session ends on `logout()` or on the first `401` the server returns
//!   (the token expired or was revoked).

#[cfg(feature = "http")]
pub mod client;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Admin profile
// ============================================================================

/// The authenticated back office administrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Admin {
    #[serde(alias = "_id")]
    pub id: String,
    pub username: String,
    pub email: String,
}

// ============================================================================
// Session context
// ============================================================================

/// An authenticated session: created on login, dropped on logout or expiry.
#[derive(Clone)]
pub struct Session {
    token: String,
    admin: Admin,
    created_at: DateTime<Utc>,
}

impl Session {
    /// Rebuild a session from a token obtained elsewhere.
    pub fn new(token: impl Into<String>, admin: Admin) -> Self {
        Self {
            token: token.into(),
            admin,
            created_at: Utc::now(),
        }
    }

    pub fn admin(&self) -> &Admin {
        &self.admin
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[cfg_attr(not(feature = "http"), allow(dead_code))]
    pub(crate) fn bearer(&self) -> &str {
        &self.token
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("token", &"<redacted>")
            .field("admin", &self.admin)
            .field("created_at", &self.created_at)
            .finish()
    }
}

// ============================================================================
// Wire types
// ============================================================================

/// Body of `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response of `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub message: String,
    pub token: String,
    pub admin: Admin,
}
