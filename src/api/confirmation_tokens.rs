//! Confirmation tokens

use super::{path_segment, Requestor};
use crate::error::Result;
use crate::params::RequestOptions;
use crate::resources::{ConfirmationToken, ConfirmationTokenParams};

/// `/v1/confirmation_tokens`
#[derive(Debug, Clone)]
pub struct ConfirmationTokensApi {
    requestor: Requestor,
}

impl ConfirmationTokensApi {
    pub(crate) fn new(requestor: Requestor) -> Self {
        Self { requestor }
    }

    #[must_use]
    pub fn with_options(mut self, options: RequestOptions) -> Self {
        self.requestor.set_options(options);
        self
    }

    pub async fn retrieve(
        &self,
        id: &str,
        params: &ConfirmationTokenParams,
    ) -> Result<ConfirmationToken> {
        let path = format!(
            "/v1/confirmation_tokens/{}",
            path_segment("confirmation_token", id)?
        );
        self.requestor.get(&path, params).await
    }
}
