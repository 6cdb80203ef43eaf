//! HTTP client with retry and rate limiting
//!
//! Provides the reqwest-backed [`Backend`] that handles:
//! - Authentication and the API's identifying headers
//! - Idempotency keys for writes, stable across retries
//! - Automatic retries with jittered quadratic backoff
//! - Rate limiting to prevent API throttling
//! - Decoding of the API's error envelope

use super::backend::Backend;
use super::rate_limit::{RateLimiter, RateLimiterConfig};
use crate::auth::{AuthConfig, Authenticator};
use crate::error::{is_retryable_status, ApiError, Error, ErrorEnvelope, Result};
use crate::form::FormValues;
use crate::params::RequestOptions;
use crate::types::Method;
use async_trait::async_trait;
use once_cell::sync::Lazy;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, RequestBuilder, Response};
use serde_json::Value;
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;
use uuid::Uuid;

/// Production API host
pub const DEFAULT_BASE_URL: &str = "https://api.stripe.com";

/// API version the resource types are modelled on
pub const API_VERSION: &str = "2024-12-18.acacia";

/// Retries after the first attempt
pub const DEFAULT_MAX_RETRIES: u32 = 2;

/// Request timeout used by the official libraries
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(80);

const MIN_RETRY_DELAY: Duration = Duration::from_millis(500);
const MAX_RETRY_DELAY: Duration = Duration::from_secs(5);

static USER_AGENT: Lazy<String> =
    Lazy::new(|| format!("Stripe/v1 stripe-kit/{}", env!("CARGO_PKG_VERSION")));

static CLIENT_USER_AGENT: Lazy<String> = Lazy::new(|| {
    serde_json::json!({
        "bindings_version": env!("CARGO_PKG_VERSION"),
        "lang": "rust",
        "publisher": "stripe-kit",
        "uname": format!("{} {}", std::env::consts::OS, std::env::consts::ARCH),
    })
    .to_string()
});

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Base URL for all requests
    pub base_url: String,
    /// Value of the `Stripe-Version` header
    pub api_version: String,
    /// Request timeout
    pub timeout: Duration,
    /// Maximum number of retries
    pub max_retries: u32,
    /// Initial delay for backoff
    pub initial_backoff: Duration,
    /// Maximum delay for backoff
    pub max_backoff: Duration,
    /// Whether to sleep between retries at all
    pub retry_sleep: bool,
    /// Rate limiter configuration
    pub rate_limit: Option<RateLimiterConfig>,
    /// Connected account sent as `Stripe-Account` on every request
    pub stripe_account: Option<String>,
    /// Default headers for all requests
    pub default_headers: BTreeMap<String, String>,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: API_VERSION.to_string(),
            timeout: DEFAULT_TIMEOUT,
            max_retries: DEFAULT_MAX_RETRIES,
            initial_backoff: MIN_RETRY_DELAY,
            max_backoff: MAX_RETRY_DELAY,
            retry_sleep: true,
            rate_limit: None,
            stripe_account: None,
            default_headers: BTreeMap::new(),
            user_agent: USER_AGENT.clone(),
        }
    }
}

impl HttpClientConfig {
    /// Create a new config builder
    pub fn builder() -> HttpClientConfigBuilder {
        HttpClientConfigBuilder::default()
    }
}

/// Builder for HTTP client config
#[derive(Default)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Pin a different API version
    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.config.api_version = version.into();
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set max retries
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.config.max_retries = retries;
        self
    }

    /// Set backoff bounds
    pub fn backoff(mut self, initial: Duration, max: Duration) -> Self {
        self.config.initial_backoff = initial;
        self.config.max_backoff = max;
        self
    }

    /// Retry immediately instead of sleeping (tests)
    pub fn no_retry_sleep(mut self) -> Self {
        self.config.retry_sleep = false;
        self
    }

    /// Set rate limiter
    pub fn rate_limit(mut self, config: RateLimiterConfig) -> Self {
        self.config.rate_limit = Some(config);
        self
    }

    /// Disable rate limiting
    pub fn no_rate_limit(mut self) -> Self {
        self.config.rate_limit = None;
        self
    }

    /// Act on behalf of a connected account
    pub fn stripe_account(mut self, account: impl Into<String>) -> Self {
        self.config.stripe_account = Some(account.into());
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}

// ============================================================================
// Client
// ============================================================================

/// HTTP client with retry and rate limiting
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    base_url: Url,
    config: HttpClientConfig,
    authenticator: Authenticator,
    rate_limiter: Option<RateLimiter>,
}

/// What a failed attempt left behind
struct Failure {
    error: Error,
    retry: bool,
    reason: String,
    transport: bool,
}

impl HttpClient {
    /// Create a client authenticating with a secret key and default settings
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(HttpClientConfig::default(), AuthConfig::bearer(api_key.into()))
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(config: HttpClientConfig, auth: AuthConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)?;
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        let rate_limiter = config.rate_limit.as_ref().map(RateLimiter::new);

        Ok(Self {
            client,
            base_url,
            config,
            authenticator: Authenticator::new(auth),
            rate_limiter,
        })
    }

    /// The active configuration
    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    /// Check if rate limiting is enabled
    pub fn has_rate_limiter(&self) -> bool {
        self.rate_limiter.is_some()
    }

    /// Backoff before retry number `attempt + 1`, without jitter
    ///
    /// `initial * (1 + attempt²)`, capped at the maximum.
    pub fn calculate_backoff(&self, attempt: u32) -> Duration {
        let factor = 1 + attempt.saturating_mul(attempt);
        let delay = self.config.initial_backoff.saturating_mul(factor);
        std::cmp::min(delay, self.config.max_backoff)
    }

    /// Backoff with jitter in 75-100% of the base, never below the initial delay
    fn retry_delay(&self, attempt: u32) -> Duration {
        if !self.config.retry_sleep {
            return Duration::ZERO;
        }
        let delay = self.calculate_backoff(attempt);
        let jittered = delay.saturating_sub(delay.mul_f64(0.25 * unit_random()));
        std::cmp::max(jittered, self.config.initial_backoff)
    }

    /// Append `path` to the base URL, keeping any path prefix the base carries
    fn build_url(&self, path: &str, query: Option<&str>) -> Result<Url> {
        let mut url = self.base_url.clone();
        let joined = format!(
            "{}/{}",
            url.path().trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        url.set_path(&joined);
        url.set_query(query.filter(|q| !q.is_empty()));
        Ok(url)
    }

    fn build_request(
        &self,
        method: Method,
        url: &Url,
        body: Option<&str>,
        idempotency_key: Option<&str>,
        options: &RequestOptions,
    ) -> RequestBuilder {
        let mut req = self.client.request(method.into(), url.clone());
        req = self.authenticator.apply(req);
        req = req
            .header("Stripe-Version", &self.config.api_version)
            .header("X-Stripe-Client-User-Agent", CLIENT_USER_AGENT.as_str())
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded");

        for (key, value) in &self.config.default_headers {
            req = req.header(key.as_str(), value.as_str());
        }

        let account = options
            .connected_account()
            .or_else(|| self.config.stripe_account.clone());
        if let Some(account) = account {
            req = req.header("Stripe-Account", account);
        }

        if let Some(key) = idempotency_key {
            req = req.header("Idempotency-Key", key);
        }

        for (key, value) in &options.headers {
            req = req.header(key.as_str(), value.as_str());
        }

        if let Some(body) = body {
            req = req.body(body.to_string());
        }

        req
    }

    async fn attempt(&self, req: RequestBuilder) -> std::result::Result<Value, Failure> {
        let response = match req.send().await {
            Ok(response) => response,
            Err(e) => {
                let retry = is_retryable_transport(&e);
                let (error, reason) = if e.is_timeout() {
                    let timeout_ms = self.config.timeout.as_millis() as u64;
                    (Error::Timeout { timeout_ms }, "Request timeout".to_string())
                } else {
                    (Error::Http(e), "Connection error".to_string())
                };
                return Err(Failure {
                    error,
                    retry,
                    reason,
                    transport: true,
                });
            }
        };

        let status = response.status().as_u16();
        let request_id = header(&response, "request-id");
        let should_retry = header(&response, "stripe-should-retry");
        if let Some(id) = &request_id {
            debug!(request_id = %id, status, "Received response");
        }

        let body = response.bytes().await.map_err(|e| Failure {
            retry: is_retryable_transport(&e),
            error: Error::Http(e),
            reason: "Body read error".to_string(),
            transport: true,
        })?;

        if (200..300).contains(&status) {
            return serde_json::from_slice(&body).map_err(|e| Failure {
                error: Error::decode(e.to_string()),
                retry: false,
                reason: "Invalid JSON".to_string(),
                transport: false,
            });
        }

        let error = decode_error(status, request_id, &body);
        let lock_timeout = error.as_api_error().is_some_and(ApiError::is_lock_timeout);
        let retry = match should_retry.as_deref() {
            Some("true") => true,
            Some("false") => false,
            _ => is_retryable_status(status, lock_timeout),
        };

        Err(Failure {
            error,
            retry,
            reason: format!("Request failed with {status}"),
            transport: false,
        })
    }
}

#[async_trait]
impl Backend for HttpClient {
    async fn call(
        &self,
        method: Method,
        path: &str,
        form: FormValues,
        options: &RequestOptions,
    ) -> Result<Value> {
        let idempotency_key = match options.validated_idempotency_key()? {
            Some(key) => Some(key),
            None if method.is_write() => Some(Uuid::new_v4().to_string()),
            None => None,
        };

        let encoded = form.encode();
        let (url, body) = if method.encodes_in_query() {
            (self.build_url(path, Some(&encoded))?, None)
        } else {
            (self.build_url(path, None)?, Some(encoded.as_str()))
        };

        let max_retries = options.max_retries.unwrap_or(self.config.max_retries);
        let mut attempt = 0;

        loop {
            if let Some(ref limiter) = self.rate_limiter {
                limiter.wait().await;
            }

            debug!(%method, path, attempt = attempt + 1, "Sending request");
            let req = self.build_request(method, &url, body, idempotency_key.as_deref(), options);

            let failure = match self.attempt(req).await {
                Ok(value) => return Ok(value),
                Err(failure) => failure,
            };

            if !failure.retry {
                return Err(failure.error);
            }
            if attempt >= max_retries {
                if failure.transport && max_retries > 0 {
                    return Err(Error::MaxRetriesExceeded {
                        max_retries,
                        source: Box::new(failure.error),
                    });
                }
                return Err(failure.error);
            }

            let delay = self.retry_delay(attempt);
            warn!(
                "{}, attempt {}/{}, retrying in {:?}",
                failure.reason,
                attempt + 1,
                max_retries + 1,
                delay
            );
            tokio::time::sleep(delay).await;
            attempt += 1;
        }
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .field("authenticator", &self.authenticator)
            .field("has_rate_limiter", &self.rate_limiter.is_some())
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn header(response: &Response, name: &str) -> Option<String> {
    response
        .headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

/// Transport failures worth another attempt: all of them except redirect
/// loops and requests that could never be built (bad scheme or URL)
fn is_retryable_transport(e: &reqwest::Error) -> bool {
    !(e.is_redirect() || e.is_builder())
}

/// Decode the error envelope, falling back to the raw body
fn decode_error(status: u16, request_id: Option<String>, body: &[u8]) -> Error {
    match serde_json::from_slice::<ErrorEnvelope>(body) {
        Ok(ErrorEnvelope { mut error }) => {
            error.status = status;
            error.request_id = request_id;
            Error::api(error)
        }
        Err(_) => Error::http_status(status, String::from_utf8_lossy(body)),
    }
}

/// A value in `[0, 1)` taken from the random bits of a v4 UUID
fn unit_random() -> f64 {
    // the low 53 bits hold no version or variant bits
    let bits = (Uuid::new_v4().as_u128() as u64) & ((1u64 << 53) - 1);
    bits as f64 / (1u64 << 53) as f64
}
