//! HTTP backend
//!
//! Sends form-encoded requests to the API and decodes JSON responses.
//!
//! # Features
//!
//! - **Backend trait**: the async seam service clients call through
//! - **Automatic Retries**: connection errors, timeouts, 409, 429 lock
//!   timeouts and 5xx, with `Stripe-Should-Retry` taking precedence
//! - **Backoff**: quadratic with jitter, 500ms to 5s
//! - **Idempotency**: a generated key on every write, reused across retries
//! - **Rate Limiting**: optional token bucket using governor
//! - **Authentication**: integration with auth module

mod backend;
mod client;
mod rate_limit;

pub use backend::{call_as, Backend};
pub use client::{
    HttpClient, HttpClientConfig, HttpClientConfigBuilder, API_VERSION, DEFAULT_BASE_URL,
    DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT,
};
pub use rate_limit::{RateLimiter, RateLimiterConfig};
