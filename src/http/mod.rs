//! HTTP client layer: `AdminHttp` with per-request retry policies.

pub mod client;
pub mod retry;

pub use client::AdminHttp;
pub use retry::{RetryConfig, RetryPolicy};
