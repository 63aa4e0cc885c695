//! Network URL constants for the SDK.

/// Default REST API base URL (local back office server).
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";
