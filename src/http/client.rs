//! Low-level HTTP client: `AdminHttp`.
//!
//! Generic verbs with retry, bearer injection and error-body extraction.
//! The session is passed in on every call; this layer keeps no auth state.
//! Internal to the SDK; the high-level client wraps this.

use crate::auth::Session;
use crate::error::HttpError;
use crate::http::retry::{RetryConfig, RetryPolicy};

use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Low-level HTTP client for the back office REST API.
pub struct AdminHttp {
    base_url: String,
    client: Client,
    idempotent_retry: RetryConfig,
}

/// Error body convention of the backend: `{ "message": "..." }`.
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl AdminHttp {
    pub fn new(
        base_url: &str,
        timeout: Duration,
        idempotent_retry: RetryConfig,
    ) -> Result<Self, HttpError> {
        let client = Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(10)
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            idempotent_retry,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base_url}/{path}` with `path` given without a leading slash.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    // ── Verbs ────────────────────────────────────────────────────────────

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        url: &str,
        session: Option<&Session>,
        retry: RetryPolicy,
    ) -> Result<T, HttpError> {
        self.request_with_retry(Method::GET, url, None::<&()>, session, retry)
            .await
    }

    pub(crate) async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &str,
        body: &B,
        session: Option<&Session>,
        retry: RetryPolicy,
    ) -> Result<T, HttpError> {
        self.request_with_retry(Method::POST, url, Some(body), session, retry)
            .await
    }

    pub(crate) async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &str,
        body: &B,
        session: Option<&Session>,
        retry: RetryPolicy,
    ) -> Result<T, HttpError> {
        self.request_with_retry(Method::PUT, url, Some(body), session, retry)
            .await
    }

    pub(crate) async fn delete(
        &self,
        url: &str,
        session: Option<&Session>,
        retry: RetryPolicy,
    ) -> Result<(), HttpError> {
        let _: serde::de::IgnoredAny = self
            .request_with_retry(Method::DELETE, url, None::<&()>, session, retry)
            .await?;
        Ok(())
    }

    // ── Internal ─────────────────────────────────────────────────────────

    async fn request_with_retry<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        url: &str,
        body: Option<&B>,
        session: Option<&Session>,
        retry: RetryPolicy,
    ) -> Result<T, HttpError> {
        let config = match &retry {
            RetryPolicy::None => {
                return self.do_request(&method, url, body, session).await;
            }
            RetryPolicy::Idempotent => self.idempotent_retry.clone(),
            RetryPolicy::Custom(c) => c.clone(),
        };

        let mut last_error = None;

        for attempt in 0..=config.max_retries {
            match self.do_request::<T, B>(&method, url, body, session).await {
                Ok(resp) => return Ok(resp),
                Err(e) => {
                    let should_retry = match &e {
                        HttpError::ServerError { status, .. } => {
                            config.retryable_statuses.contains(status)
                        }
                        HttpError::RateLimited { .. } => config.retryable_statuses.contains(&429),
                        HttpError::Timeout => true,
                        HttpError::Reqwest(re) => {
                            re.is_connect() || re.is_timeout() || re.is_request()
                        }
                        _ => false,
                    };

                    if should_retry && attempt < config.max_retries {
                        let delay = match &e {
                            HttpError::RateLimited {
                                retry_after_ms: Some(ms),
                            } => Duration::from_millis(*ms).min(config.max_delay),
                            _ => config.delay_for_attempt(attempt),
                        };
                        tracing::debug!(
                            attempt = attempt + 1,
                            max = config.max_retries,
                            delay_ms = delay.as_millis() as u64,
                            "Retrying {} {}",
                            method,
                            url
                        );
                        futures_timer::Delay::new(delay).await;
                        last_error = Some(e);
                    } else if should_retry {
                        return Err(HttpError::MaxRetriesExceeded {
                            attempts: attempt + 1,
                            last_error: e.to_string(),
                        });
                    } else {
                        return Err(e);
                    }
                }
            }
        }

        Err(HttpError::MaxRetriesExceeded {
            attempts: config.max_retries + 1,
            last_error: last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "unknown".to_string()),
        })
    }

    async fn do_request<T: DeserializeOwned, B: Serialize>(
        &self,
        method: &Method,
        url: &str,
        body: Option<&B>,
        session: Option<&Session>,
    ) -> Result<T, HttpError> {
        let mut req = self.client.request(method.clone(), url);

        if let Some(session) = session {
            req = req.bearer_auth(session.bearer());
        }

        if let Some(b) = body {
            req = req.json(b);
        }

        tracing::debug!(method = %method, url, "request");
        let resp = req.send().await.map_err(|e| {
            if e.is_timeout() {
                HttpError::Timeout
            } else {
                HttpError::Reqwest(e)
            }
        })?;

        if resp.status().is_success() {
            return parse_body(resp).await;
        }

        Err(error_from_response(resp).await)
    }
}

/// Empty 2xx bodies (e.g. `204` from DELETE) decode as JSON `null`.
async fn parse_body<T: DeserializeOwned>(resp: Response) -> Result<T, HttpError> {
    let text = resp.text().await?;
    let source = if text.trim().is_empty() { "null" } else { &text };
    serde_json::from_str(source).map_err(|e| HttpError::InvalidBody(e.to_string()))
}

async fn error_from_response(resp: Response) -> HttpError {
    let status_code = resp.status().as_u16();
    let retry_after_ms = resp
        .headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(parse_retry_after_ms);
    let body_text = resp.text().await.unwrap_or_default();
    let message = extract_message(status_code, &body_text);

    match status_code {
        401 => HttpError::Unauthorized(message),
        404 => HttpError::NotFound(message),
        429 => HttpError::RateLimited { retry_after_ms },
        400..=499 => HttpError::BadRequest {
            status: status_code,
            message,
        },
        _ => HttpError::ServerError {
            status: status_code,
            message,
        },
    }
}

/// `Retry-After` in delta-seconds, as milliseconds. HTTP-date values are ignored.
fn parse_retry_after_ms(value: &str) -> Option<u64> {
    value
        .trim()
        .parse::<u64>()
        .ok()
        .map(|secs| secs.saturating_mul(1000))
}

/// Pull `message` out of an error body, falling back to the status line.
pub(crate) fn extract_message(status: u16, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| format!("HTTP error! status: {}", status))
}

impl Clone for AdminHttp {
    fn clone(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            client: self.client.clone(),
            idempotent_retry: self.idempotent_retry.clone(),
        }
    }
}
