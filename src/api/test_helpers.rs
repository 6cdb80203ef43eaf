//! Test-mode helpers

use super::Requestor;
use crate::error::Result;
use crate::params::RequestOptions;
use crate::resources::{ConfirmationToken, TestHelpersConfirmationTokenParams};

/// `/v1/test_helpers`; only accepted with test-mode keys
#[derive(Debug, Clone)]
pub struct TestHelpersApi {
    requestor: Requestor,
}

impl TestHelpersApi {
    pub(crate) fn new(requestor: Requestor) -> Self {
        Self { requestor }
    }

    #[must_use]
    pub fn with_options(mut self, options: RequestOptions) -> Self {
        self.requestor.set_options(options);
        self
    }

    /// Create a confirmation token as a client-side integration would
    pub async fn create_confirmation_token(
        &self,
        params: &TestHelpersConfirmationTokenParams,
    ) -> Result<ConfirmationToken> {
        self.requestor
            .post("/v1/test_helpers/confirmation_tokens", params)
            .await
    }
}
