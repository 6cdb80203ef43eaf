//! Auth configuration types

use serde::{Deserialize, Serialize};

/// A secret or restricted API key
///
/// `Debug` prints only the key prefix and mode.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap a key, trimming surrounding whitespace
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into().trim().to_string())
    }

    /// The raw key, for building the `Authorization` header
    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether this is a live-mode key (`sk_live_`, `rk_live_`)
    pub fn is_live(&self) -> bool {
        self.0.contains("_live_")
    }

    /// Key kind prefix such as `sk` or `rk`, if it has one
    fn prefix(&self) -> Option<&str> {
        self.0.split_once('_').map(|(prefix, _)| prefix)
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mode = if self.is_live() { "live" } else { "test" };
        match self.prefix() {
            Some(prefix) => write!(f, "ApiKey({prefix}_{mode}_****)"),
            None => f.write_str("ApiKey(****)"),
        }
    }
}

impl From<&str> for ApiKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for ApiKey {
    fn from(key: String) -> Self {
        Self::new(key)
    }
}

/// Authentication configuration
#[derive(Debug, Clone, Default)]
pub enum AuthConfig {
    /// No authentication, only useful against local mock servers
    #[default]
    None,

    /// `Authorization: Bearer <key>`
    Bearer {
        /// The API key
        key: ApiKey,
    },

    /// HTTP Basic with the key as username and an empty password
    Basic {
        /// The API key
        key: ApiKey,
    },
}

impl AuthConfig {
    /// Bearer authentication with the given key
    pub fn bearer(key: impl Into<ApiKey>) -> Self {
        Self::Bearer { key: key.into() }
    }

    /// The configured key, if any
    pub fn api_key(&self) -> Option<&ApiKey> {
        match self {
            AuthConfig::None => None,
            AuthConfig::Bearer { key } | AuthConfig::Basic { key } => Some(key),
        }
    }
}
