//! In-memory backend for unit tests

use crate::error::{Error, Result};
use crate::form::FormValues;
use crate::http::Backend;
use crate::params::RequestOptions;
use crate::types::Method;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::Mutex;

/// One call seen by [`StubBackend`]
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RecordedCall {
    pub method: Method,
    pub path: String,
    pub form: FormValues,
    pub options: RequestOptions,
}

/// Replays canned responses in order and records every call
#[derive(Debug, Default)]
pub(crate) struct StubBackend {
    responses: Mutex<VecDeque<Value>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl StubBackend {
    pub fn new(responses: impl IntoIterator<Item = Value>) -> Self {
        Self {
            responses: Mutex::new(responses.into_iter().collect()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Backend for StubBackend {
    async fn call(
        &self,
        method: Method,
        path: &str,
        form: FormValues,
        options: &RequestOptions,
    ) -> Result<Value> {
        self.calls.lock().unwrap().push(RecordedCall {
            method,
            path: path.to_string(),
            form,
            options: options.clone(),
        });
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| Error::Other(format!("no canned response for {method} {path}")))
    }
}
