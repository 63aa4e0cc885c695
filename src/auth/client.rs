//! Auth sub-client: login, logout, session validation.

use crate::auth::{Admin, LoginRequest, LoginResponse, Session};
use crate::client::FoodAdminClient;
use crate::error::{AuthError, HttpError, SdkError};
use crate::http::RetryPolicy;

/// Sub-client for authentication operations.
pub struct Auth<'a> {
    pub(crate) client: &'a FoodAdminClient,
}

impl<'a> Auth<'a> {
    /// Log in and install the resulting session on the client.
    ///
    /// Bad credentials surface as [`AuthError::LoginFailed`] carrying the
    /// server's message.
    pub async fn login(&self, email: &str, password: &str) -> Result<Admin, SdkError> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let url = self.client.http.url("auth/login");
        let resp: LoginResponse = self
            .client
            .http
            .post(&url, &request, None, RetryPolicy::None)
            .await
            .map_err(|e| match e {
                HttpError::Unauthorized(msg) | HttpError::BadRequest { message: msg, .. } => {
                    SdkError::Auth(AuthError::LoginFailed(msg))
                }
                other => SdkError::Http(other),
            })?;

        let admin = resp.admin.clone();
        *self.client.session.write().await = Some(Session::new(resp.token, resp.admin));
        tracing::info!(admin = %admin.username, "logged in");

        Ok(admin)
    }

    /// Validate the current session against `GET /auth/me`.
    ///
    /// A `401` clears the session and returns [`AuthError::SessionExpired`].
    pub async fn me(&self) -> Result<Admin, SdkError> {
        if self.client.session.read().await.is_none() {
            return Err(AuthError::NotAuthenticated.into());
        }

        match self
            .client
            .get::<Admin>("auth/me", RetryPolicy::Idempotent)
            .await
        {
            Ok(admin) => Ok(admin),
            Err(SdkError::Http(HttpError::Unauthorized(_))) => {
                Err(AuthError::SessionExpired.into())
            }
            Err(e) => Err(e),
        }
    }

    /// End the session. There is no server-side logout endpoint; the token
    /// is simply forgotten.
    pub async fn logout(&self) {
        if let Some(session) = self.client.session.write().await.take() {
            tracing::info!(admin = %session.admin().username, "logged out");
        }
    }

    /// The current session, if any.
    pub async fn session(&self) -> Option<Session> {
        self.client.session.read().await.clone()
    }

    /// Whether a session is installed. For a server-validated check, use `me()`.
    pub async fn is_authenticated(&self) -> bool {
        self.client.session.read().await.is_some()
    }
}
