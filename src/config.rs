//! Client configuration
//!
//! A [`ClientConfig`] is assembled in layers, later sources winning:
//! built-in defaults, an optional YAML file, `STRIPE_*` environment
//! variables, and finally whatever the caller (usually the CLI) sets.
//!
//! ```yaml
//! api_key: sk_test_...
//! max_network_retries: 3
//! rate_limit:
//!   requests_per_second: 20
//! ```

use crate::auth::{ApiKey, AuthConfig};
use crate::error::{Error, Result};
use crate::http::{
    HttpClientConfig, RateLimiterConfig, API_VERSION, DEFAULT_BASE_URL, DEFAULT_MAX_RETRIES,
    DEFAULT_TIMEOUT,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Environment variable holding the secret key
pub const ENV_API_KEY: &str = "STRIPE_API_KEY";
/// Environment variable overriding the API base URL
pub const ENV_API_BASE: &str = "STRIPE_API_BASE";
/// Environment variable selecting a connected account
pub const ENV_ACCOUNT: &str = "STRIPE_ACCOUNT";
/// Environment variable overriding the retry count
pub const ENV_MAX_NETWORK_RETRIES: &str = "STRIPE_MAX_NETWORK_RETRIES";

/// Settings needed to build a [`Client`](crate::Client)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Secret or restricted key
    pub api_key: Option<ApiKey>,

    /// API root, `https://api.stripe.com` unless testing against a mock
    pub base_url: String,

    /// Value of the `Stripe-Version` header
    pub api_version: String,

    /// Retries after the first attempt
    pub max_network_retries: u32,

    /// Per-request timeout in seconds
    pub timeout_seconds: u64,

    /// Connected account to act on behalf of
    pub stripe_account: Option<String>,

    /// Client-side rate limiting, off when absent
    pub rate_limit: Option<RateLimiterConfig>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: API_VERSION.to_string(),
            max_network_retries: DEFAULT_MAX_RETRIES,
            timeout_seconds: DEFAULT_TIMEOUT.as_secs(),
            stripe_account: None,
            rate_limit: None,
        }
    }
}

impl ClientConfig {
    /// Defaults with the given key
    pub fn new(api_key: impl Into<ApiKey>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }

    /// Defaults, then `path` if given, then the process environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env(|name| std::env::var(name).ok())?;
        Ok(config)
    }

    /// Parse a YAML file; missing fields keep their defaults
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        debug!(path = %path.display(), "Loaded config file");
        Self::from_yaml(&content)
    }

    /// Parse YAML text
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Overlay `STRIPE_*` variables looked up through `lookup`
    ///
    /// Empty values are ignored.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(key) = var(ENV_API_KEY) {
            self.api_key = Some(ApiKey::new(key));
        }
        if let Some(base) = var(ENV_API_BASE) {
            self.base_url = base;
        }
        if let Some(account) = var(ENV_ACCOUNT) {
            self.stripe_account = Some(account);
        }
        if let Some(retries) = var(ENV_MAX_NETWORK_RETRIES) {
            self.max_network_retries = retries.trim().parse().map_err(|_| {
                Error::invalid_value(
                    ENV_MAX_NETWORK_RETRIES,
                    format!("expected a non-negative integer, got '{retries}'"),
                )
            })?;
        }
        Ok(())
    }

    /// Check the settings before building a client
    pub fn validate(&self) -> Result<()> {
        match &self.api_key {
            None => return Err(Error::missing_field("api_key")),
            Some(key) if key.is_empty() => {
                return Err(Error::invalid_value("api_key", "must not be empty"));
            }
            Some(_) => {}
        }

        let url = Url::parse(&self.base_url)
            .map_err(|e| Error::invalid_value("base_url", e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") || !url.has_host() {
            return Err(Error::invalid_value(
                "base_url",
                format!("'{}' is not an absolute http(s) URL", self.base_url),
            ));
        }

        if self.timeout_seconds == 0 {
            return Err(Error::invalid_value("timeout_seconds", "must be at least 1"));
        }
        Ok(())
    }

    /// Transport settings for [`HttpClient`](crate::http::HttpClient)
    pub fn http_config(&self) -> HttpClientConfig {
        let mut builder = HttpClientConfig::builder()
            .base_url(&self.base_url)
            .api_version(&self.api_version)
            .timeout(Duration::from_secs(self.timeout_seconds))
            .max_retries(self.max_network_retries);
        if let Some(account) = &self.stripe_account {
            builder = builder.stripe_account(account);
        }
        if let Some(rate_limit) = &self.rate_limit {
            builder = builder.rate_limit(rate_limit.clone());
        }
        builder.build()
    }

    /// Bearer authentication with the configured key
    pub fn auth(&self) -> AuthConfig {
        self.api_key
            .clone()
            .map_or(AuthConfig::None, |key| AuthConfig::Bearer { key })
    }
}

#[cfg(test)]
mod config_tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://api.stripe.com");
        assert_eq!(config.max_network_retries, 2);
        assert_eq!(config.timeout_seconds, 80);
        assert!(config.rate_limit.is_none());
    }

    #[test]
    fn test_from_file_keeps_defaults_for_missing_fields() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "api_key: sk_test_file\nmax_network_retries: 5\nrate_limit:\n  requests_per_second: 10"
        )
        .unwrap();

        let config = ClientConfig::from_file(file.path()).unwrap();
        assert_eq!(config.api_key, Some(ApiKey::new("sk_test_file")));
        assert_eq!(config.max_network_retries, 5);
        assert_eq!(config.timeout_seconds, 80);
        assert_eq!(config.rate_limit, Some(RateLimiterConfig::new(10, 25)));
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ClientConfig::from_file(dir.path().join("nope.yaml")).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_bad_yaml() {
        let err = ClientConfig::from_yaml("max_network_retries: [1").unwrap_err();
        assert!(matches!(err, Error::YamlParse(_)));
    }

    #[test]
    fn test_env_overrides_file() {
        let mut config = ClientConfig::from_yaml("api_key: sk_test_file\nbase_url: http://a").unwrap();
        config
            .apply_env(env(&[
                ("STRIPE_API_KEY", "sk_test_env"),
                ("STRIPE_API_BASE", "http://localhost:12111"),
                ("STRIPE_ACCOUNT", "acct_1"),
                ("STRIPE_MAX_NETWORK_RETRIES", "0"),
            ]))
            .unwrap();

        assert_eq!(config.api_key, Some(ApiKey::new("sk_test_env")));
        assert_eq!(config.base_url, "http://localhost:12111");
        assert_eq!(config.stripe_account.as_deref(), Some("acct_1"));
        assert_eq!(config.max_network_retries, 0);
    }

    #[test]
    fn test_empty_env_values_are_ignored() {
        let mut config = ClientConfig::new("sk_test_keep");
        config.apply_env(env(&[("STRIPE_API_KEY", "  ")])).unwrap();
        assert_eq!(config.api_key, Some(ApiKey::new("sk_test_keep")));
    }

    #[test]
    fn test_bad_retry_env() {
        let mut config = ClientConfig::default();
        let err = config
            .apply_env(env(&[("STRIPE_MAX_NETWORK_RETRIES", "many")]))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidConfigValue { .. }));
    }

    #[test]
    fn test_validate() {
        assert!(matches!(
            ClientConfig::default().validate(),
            Err(Error::MissingConfigField { .. })
        ));
        assert!(ClientConfig::new("  ").validate().is_err());

        let mut config = ClientConfig::new("sk_test_123");
        assert!(config.validate().is_ok());

        config.base_url = "/v1".into();
        assert!(config.validate().is_err());
        config.base_url = "ftp://example.com".into();
        assert!(config.validate().is_err());

        config.base_url = DEFAULT_BASE_URL.into();
        config.timeout_seconds = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_http_config() {
        let mut config = ClientConfig::new("sk_test_123");
        config.stripe_account = Some("acct_1".into());
        config.timeout_seconds = 5;
        config.rate_limit = Some(RateLimiterConfig::default());

        let http = config.http_config();
        assert_eq!(http.timeout, Duration::from_secs(5));
        assert_eq!(http.stripe_account.as_deref(), Some("acct_1"));
        assert!(http.rate_limit.is_some());
        assert!(matches!(config.auth(), AuthConfig::Bearer { .. }));
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = ClientConfig::new("sk_test_supersecret");
        let debug = format!("{config:?}");
        assert!(!debug.contains("supersecret"));
    }
}
