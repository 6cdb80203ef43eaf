//! Applies credentials to outgoing requests

use super::types::AuthConfig;
use reqwest::RequestBuilder;

/// Adds the configured credentials to each request
#[derive(Debug, Clone)]
pub struct Authenticator {
    config: AuthConfig,
}

impl Authenticator {
    /// Create a new authenticator
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }

    /// The configuration this authenticator applies
    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Apply authentication to a request
    pub fn apply(&self, req: RequestBuilder) -> RequestBuilder {
        match &self.config {
            AuthConfig::None => req,
            AuthConfig::Bearer { key } => req.bearer_auth(key.expose()),
            AuthConfig::Basic { key } => req.basic_auth(key.expose(), Some("")),
        }
    }
}
