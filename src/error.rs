//! Error types for stripe-kit
//!
//! Every public API returns `Result<T, Error>`. API failures reported by the
//! server keep the decoded error envelope in [`ApiError`].

use crate::enums::string_enum;
use serde::{Deserialize, Serialize};
use thiserror::Error;

string_enum! {
    /// Category of an API error
    pub enum ErrorType {
        ApiError => "api_error",
        CardError => "card_error",
        IdempotencyError => "idempotency_error",
        InvalidRequestError => "invalid_request_error",
    }
}

/// Error returned by the API, decoded from the `{"error": {...}}` envelope
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    #[serde(rename = "type")]
    pub type_: Option<ErrorType>,
    pub code: Option<String>,
    pub decline_code: Option<String>,
    pub doc_url: Option<String>,
    pub message: Option<String>,
    pub param: Option<String>,
    pub request_log_url: Option<String>,
    pub charge: Option<String>,
    pub payment_method_type: Option<String>,

    /// HTTP status of the response that carried the error
    #[serde(skip)]
    pub status: u16,
    /// Value of the `Request-Id` response header
    #[serde(skip)]
    pub request_id: Option<String>,
}

impl ApiError {
    /// Whether the server reported a lock timeout (the only retryable 429)
    pub fn is_lock_timeout(&self) -> bool {
        self.code.as_deref() == Some("lock_timeout")
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(ty) = &self.type_ {
            write!(f, " {ty}")?;
        }
        if let Some(code) = &self.code {
            write!(f, " ({code})")?;
        }
        if let Some(message) = &self.message {
            write!(f, ": {message}")?;
        }
        if let Some(id) = &self.request_id {
            write!(f, " [request {id}]")?;
        }
        Ok(())
    }
}

/// Wire envelope around [`ApiError`]
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorEnvelope {
    pub error: ApiError,
}

/// The main error type for stripe-kit
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing required config field: {field}")]
    MissingConfigField { field: String },

    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    // ============================================================================
    // Encoding / Decoding Errors
    // ============================================================================
    #[error("Form encoding failed: {message}")]
    Form { message: String },

    #[error("Failed to decode response: {message}")]
    Decode { message: String },

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("API error: {0}")]
    Api(Box<ApiError>),

    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("Max retries ({max_retries}) exceeded: {source}")]
    MaxRetriesExceeded { max_retries: u32, source: Box<Error> },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// Create an invalid config value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a form encoding error
    pub fn form(message: impl Into<String>) -> Self {
        Self::Form {
            message: message.into(),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Wrap a decoded API error
    pub fn api(error: ApiError) -> Self {
        Self::Api(Box::new(error))
    }

    /// The decoded API error, if this is one
    pub fn as_api_error(&self) -> Option<&ApiError> {
        match self {
            Error::Api(e) => Some(e),
            _ => None,
        }
    }

    /// HTTP status carried by this error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api(e) => Some(e.status),
            Error::HttpStatus { status, .. } => Some(*status),
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if this error is retryable
    ///
    /// Mirrors the status rules of the HTTP backend for callers that retry
    /// at a higher level. The `Stripe-Should-Retry` header is only visible
    /// to the backend itself.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Http(e) => e.is_connect() || e.is_timeout(),
            Error::Timeout { .. } => true,
            Error::Api(e) => is_retryable_status(e.status, e.is_lock_timeout()),
            Error::HttpStatus { status, .. } => is_retryable_status(*status, false),
            _ => false,
        }
    }
}

/// Check if an HTTP status code is retryable
pub(crate) fn is_retryable_status(status: u16, lock_timeout: bool) -> bool {
    match status {
        409 => true,
        429 => lock_timeout,
        s => s >= 500,
    }
}

/// Result type alias for stripe-kit
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api_error(status: u16, code: Option<&str>) -> Error {
        Error::api(ApiError {
            status,
            code: code.map(String::from),
            ..ApiError::default()
        })
    }

    #[test]
    fn test_error_display() {
        let err = Error::config("test message");
        assert_eq!(err.to_string(), "Configuration error: test message");

        let err = Error::missing_field("api_key");
        assert_eq!(err.to_string(), "Missing required config field: api_key");

        let err = Error::http_status(404, "Not found");
        assert_eq!(err.to_string(), "HTTP 404: Not found");

        let err = Error::MaxRetriesExceeded {
            max_retries: 2,
            source: Box::new(Error::Timeout { timeout_ms: 80_000 }),
        };
        assert_eq!(
            err.to_string(),
            "Max retries (2) exceeded: Request timeout after 80000ms"
        );
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_api_error_display() {
        let err = Error::api(ApiError {
            type_: Some(ErrorType::InvalidRequestError),
            code: Some("resource_missing".into()),
            message: Some("No such account".into()),
            status: 404,
            request_id: Some("req_123".into()),
            ..ApiError::default()
        });
        assert_eq!(
            err.to_string(),
            "API error: HTTP 404 invalid_request_error (resource_missing): No such account [request req_123]"
        );
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn test_is_retryable() {
        assert!(Error::Timeout { timeout_ms: 1000 }.is_retryable());
        assert!(api_error(409, None).is_retryable());
        assert!(api_error(429, Some("lock_timeout")).is_retryable());
        assert!(api_error(500, None).is_retryable());
        assert!(Error::http_status(503, "").is_retryable());

        assert!(!api_error(429, Some("rate_limit")).is_retryable());
        assert!(!api_error(400, None).is_retryable());
        assert!(!Error::http_status(401, "").is_retryable());
        assert!(!Error::http_status(404, "").is_retryable());
        assert!(!Error::config("test").is_retryable());
    }

    #[test]
    fn test_error_envelope_decodes() {
        let body = r#"{"error":{"type":"card_error","code":"card_declined","decline_code":"insufficient_funds","message":"Your card has insufficient funds.","param":"number"}}"#;
        let envelope: ErrorEnvelope = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.error.type_, Some(ErrorType::CardError));
        assert_eq!(envelope.error.decline_code.as_deref(), Some("insufficient_funds"));
        assert_eq!(envelope.error.param.as_deref(), Some("number"));
        assert_eq!(envelope.error.status, 0);
    }

    #[test]
    fn test_unknown_error_type_is_kept() {
        let body = r#"{"error":{"type":"temporary_session_expired"}}"#;
        let envelope: ErrorEnvelope = serde_json::from_str(body).unwrap();
        assert_eq!(
            envelope.error.type_,
            Some(ErrorType::Unrecognized("temporary_session_expired".into()))
        );
    }

    #[test]
    fn test_result_context() {
        let result: Result<()> = Err(Error::config("inner"));
        let with_context = result.context("outer");
        assert!(with_context
            .unwrap_err()
            .to_string()
            .contains("outer: Configuration error: inner"));
    }
}
