//! Service clients
//!
//! [`Client`] is the entry point. Each resource family gets a small API
//! struct that turns typed parameters into a call on the shared [`Backend`].
//!
//! # Features
//!
//! - **Accounts**: CRUD, reject, listing and the external accounts of an account
//! - **Tax IDs**: customer tax IDs
//! - **Confirmation tokens**: retrieval, plus test-mode creation
//! - **Financial Connections**: accounts, their owners and data refresh
//! - **Per-call options**: `with_options` on any API struct
//!
//! ```rust,ignore
//! let client = Client::new("sk_test_...")?;
//! let account = client.accounts().retrieve("acct_123", &AccountParams::default()).await?;
//! ```

mod accounts;
mod confirmation_tokens;
mod financial_connections;
mod tax_ids;
mod test_helpers;

pub use accounts::AccountsApi;
pub use confirmation_tokens::ConfirmationTokensApi;
pub use financial_connections::FinancialConnectionsAccountsApi;
pub use tax_ids::TaxIdsApi;
pub use test_helpers::TestHelpersApi;

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::form;
use crate::http::{call_as, Backend, HttpClient};
use crate::pagination::ListPager;
use crate::params::{ListParamsExt, RequestOptions};
use crate::types::{Identified, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use url::Url;

/// API client
///
/// Cheap to clone; clones share the connection pool and rate limiter.
#[derive(Clone)]
pub struct Client {
    backend: Arc<dyn Backend>,
}

impl Client {
    /// Client with default settings for the given secret key
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Ok(Self::with_backend(Arc::new(HttpClient::new(api_key)?)))
    }

    /// Client built from a validated [`ClientConfig`]
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        config.validate()?;
        let http = HttpClient::with_config(config.http_config(), config.auth())?;
        Ok(Self::with_backend(Arc::new(http)))
    }

    /// Client over any backend
    pub fn with_backend(backend: Arc<dyn Backend>) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &Arc<dyn Backend> {
        &self.backend
    }

    pub fn accounts(&self) -> AccountsApi {
        AccountsApi::new(self.requestor())
    }

    pub fn tax_ids(&self) -> TaxIdsApi {
        TaxIdsApi::new(self.requestor())
    }

    pub fn confirmation_tokens(&self) -> ConfirmationTokensApi {
        ConfirmationTokensApi::new(self.requestor())
    }

    /// Test-mode only endpoints
    pub fn test_helpers(&self) -> TestHelpersApi {
        TestHelpersApi::new(self.requestor())
    }

    pub fn financial_connections_accounts(&self) -> FinancialConnectionsAccountsApi {
        FinancialConnectionsAccountsApi::new(self.requestor())
    }

    fn requestor(&self) -> Requestor {
        Requestor {
            backend: self.backend.clone(),
            options: RequestOptions::default(),
        }
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("backend", &self.backend)
            .finish()
    }
}

// ============================================================================
// Shared request plumbing
// ============================================================================

/// Backend handle plus the options applied to every call
#[derive(Debug, Clone)]
pub(crate) struct Requestor {
    backend: Arc<dyn Backend>,
    options: RequestOptions,
}

impl Requestor {
    pub(crate) fn set_options(&mut self, options: RequestOptions) {
        self.options = options;
    }

    pub(crate) async fn get<T, P>(&self, path: &str, params: &P) -> Result<T>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        self.send(Method::GET, path, params).await
    }

    pub(crate) async fn post<T, P>(&self, path: &str, params: &P) -> Result<T>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        self.send(Method::POST, path, params).await
    }

    pub(crate) async fn delete<T, P>(&self, path: &str, params: &P) -> Result<T>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        self.send(Method::DELETE, path, params).await
    }

    pub(crate) fn list<T, P>(&self, path: String, params: P) -> ListPager<T, P>
    where
        T: DeserializeOwned + Identified,
        P: Serialize + ListParamsExt,
    {
        ListPager::new(self.backend.clone(), path, params, self.options.clone())
    }

    async fn send<T, P>(&self, method: Method, path: &str, params: &P) -> Result<T>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        let values = form::encode(params)?;
        call_as(self.backend.as_ref(), method, path, values, &self.options).await
    }
}

/// Percent-encode `id` as one path segment
///
/// Surrounding whitespace is trimmed. An empty id, or a dot segment that
/// would collapse onto the parent path, is rejected before any request is
/// made.
pub(crate) fn path_segment(name: &str, id: &str) -> Result<String> {
    let id = id.trim();
    if id.is_empty() {
        return Err(Error::invalid_value(name, "must not be empty"));
    }
    if matches!(id, "." | "..") {
        return Err(Error::invalid_value(name, "must not be a dot segment"));
    }

    let mut url = Url::parse("http://localhost/")?;
    url.path_segments_mut()
        .map_err(|()| Error::config("cannot build path"))?
        .pop_if_empty()
        .push(id);
    Ok(url.path().trim_start_matches('/').to_string())
}
