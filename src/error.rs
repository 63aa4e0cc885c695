//! Unified SDK error types.

use thiserror::Error;

/// Fallback shown when a failure carries no server-provided message.
pub const GENERIC_ORDER_FAILURE: &str = "Failed to create order";

/// Shown when the server accepted an order but its reply could not be read.
pub const UNCONFIRMED_ORDER: &str =
    "The order was submitted but the confirmation could not be read. Check the order list before submitting again";

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    #[error("Order error: {0}")]
    Composer(#[from] ComposerError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// `POST /orders` answered 2xx with a body that did not decode.
    #[error("Order accepted but the response could not be read: {0}")]
    OrderUnconfirmed(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl SdkError {
    /// The string a view should render for this error.
    ///
    /// Server-provided `{ "message": ... }` bodies win; local validation
    /// errors render their own text; transport failures fall back to a
    /// generic sentence.
    pub fn user_message(&self) -> String {
        match self {
            SdkError::Http(e) => e
                .server_message()
                .map(str::to_string)
                .unwrap_or_else(|| GENERIC_ORDER_FAILURE.to_string()),
            SdkError::Composer(e) => e.to_string(),
            SdkError::Auth(e) => e.to_string(),
            SdkError::Fetch(_) => "Failed to load data".to_string(),
            SdkError::OrderUnconfirmed(_) => UNCONFIRMED_ORDER.to_string(),
            SdkError::Validation(msg) | SdkError::Other(msg) => msg.clone(),
            SdkError::Serde(_) => GENERIC_ORDER_FAILURE.to_string(),
        }
    }

    /// Whether the error was raised before any request left the process.
    pub fn is_local(&self) -> bool {
        matches!(self, SdkError::Composer(_) | SdkError::Validation(_))
    }

    /// Whether the server accepted the request even though the call failed.
    /// Replaying such a request would repeat its effect.
    pub fn reached_server(&self) -> bool {
        matches!(self, SdkError::OrderUnconfirmed(_))
    }
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Server error {status}: {message}")]
    ServerError { status: u16, message: String },

    #[error("Rate limited (retry after {retry_after_ms:?}ms)")]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request ({status}): {message}")]
    BadRequest { status: u16, message: String },

    #[error("Invalid response body: {0}")]
    InvalidBody(String),

    #[error("Timeout")]
    Timeout,

    #[error("Max retries exceeded after {attempts} attempts: {last_error}")]
    MaxRetriesExceeded { attempts: u32, last_error: String },
}

impl HttpError {
    /// The message extracted from a non-2xx response body, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            HttpError::ServerError { message, .. } | HttpError::BadRequest { message, .. } => {
                Some(message)
            }
            HttpError::Unauthorized(message) | HttpError::NotFound(message) => Some(message),
            _ => None,
        }
    }

    /// HTTP status code, when the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            HttpError::ServerError { status, .. } | HttpError::BadRequest { status, .. } => {
                Some(*status)
            }
            HttpError::Unauthorized(_) => Some(401),
            HttpError::NotFound(_) => Some(404),
            HttpError::RateLimited { .. } => Some(429),
            _ => None,
        }
    }
}

/// Authentication errors.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Not authenticated")]
    NotAuthenticated,

    #[error("Login failed: {0}")]
    LoginFailed(String),

    #[error("Session expired")]
    SessionExpired,
}

/// Local validation errors raised by the order composer.
///
/// All of these are detected before any network call is made.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ComposerError {
    #[error("Please select a user")]
    MissingUser,

    #[error("Please add at least one product to the order")]
    EmptyOrder,

    #[error("This product is already in the order")]
    DuplicateProduct(String),

    #[error("Please select a product")]
    NoProductSelected,

    #[error("Product {0} is not available")]
    UnknownProduct(String),

    #[error("Quantity must be a whole number of at least 1 (got {0})")]
    InvalidQuantity(String),

    #[error("Unknown line item field: {0}")]
    UnknownField(String),

    #[error("Line item {index} does not exist (order has {len} items)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("An order is already being submitted")]
    SubmissionInProgress,

    #[error("No submission is in flight")]
    NotSubmitting,
}

/// A collection the snapshot loader failed to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Products,
    Users,
}

impl Resource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Resource::Products => "products",
            Resource::Users => "users",
        }
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Aggregate failure of the initial catalog/directory load.
///
/// Lists every collection that failed; partial results are discarded.
#[derive(Error, Debug)]
#[error("Failed to load data ({})", summarize(.failures))]
pub struct FetchError {
    pub failures: Vec<(Resource, SdkError)>,
}

impl FetchError {
    pub fn failed(&self, resource: Resource) -> bool {
        self.failures.iter().any(|(r, _)| *r == resource)
    }
}

fn summarize(failures: &[(Resource, SdkError)]) -> String {
    failures
        .iter()
        .map(|(resource, err)| format!("{}: {}", resource, err))
        .collect::<Vec<_>>()
        .join("; ")
}
