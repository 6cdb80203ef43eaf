//! The transport seam between service clients and the network

use crate::error::{Error, Result};
use crate::form::FormValues;
use crate::params::RequestOptions;
use crate::types::Method;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Sends one API call and returns the decoded JSON body
///
/// [`HttpClient`](super::HttpClient) is the real implementation. Tests can
/// substitute their own to check paths and parameters without a server.
#[async_trait]
pub trait Backend: Send + Sync + std::fmt::Debug {
    /// Perform `method path` with the given form values
    ///
    /// GET and DELETE put the values in the query string, POST in the body.
    async fn call(
        &self,
        method: Method,
        path: &str,
        form: FormValues,
        options: &RequestOptions,
    ) -> Result<Value>;
}

/// Call the backend and decode the body into `T`
pub async fn call_as<T: DeserializeOwned>(
    backend: &dyn Backend,
    method: Method,
    path: &str,
    form: FormValues,
    options: &RequestOptions,
) -> Result<T> {
    let value = backend.call(method, path, form, options).await?;
    serde_json::from_value(value)
        .map_err(|e| Error::decode(format!("{method} {path}: {e}")))
}
