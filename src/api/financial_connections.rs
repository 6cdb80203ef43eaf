//! Financial Connections accounts

use super::{path_segment, Requestor};
use crate::error::Result;
use crate::pagination::ListPager;
use crate::params::RequestOptions;
use crate::resources::{
    FinancialConnectionsAccount, FinancialConnectionsAccountDisconnectParams,
    FinancialConnectionsAccountListOwnersParams, FinancialConnectionsAccountListParams,
    FinancialConnectionsAccountOwner, FinancialConnectionsAccountParams,
    FinancialConnectionsAccountRefreshParams, FinancialConnectionsAccountSubscribeParams,
    FinancialConnectionsAccountUnsubscribeParams,
};

const ACCOUNTS: &str = "/v1/financial_connections/accounts";

/// `/v1/financial_connections/accounts`
#[derive(Debug, Clone)]
pub struct FinancialConnectionsAccountsApi {
    requestor: Requestor,
}

impl FinancialConnectionsAccountsApi {
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
        params: &FinancialConnectionsAccountParams,
    ) -> Result<FinancialConnectionsAccount> {
        self.requestor.get(&account_path(id)?, params).await
    }

    pub fn list(
        &self,
        params: FinancialConnectionsAccountListParams,
    ) -> ListPager<FinancialConnectionsAccount, FinancialConnectionsAccountListParams> {
        self.requestor.list(ACCOUNTS.to_string(), params)
    }

    /// Stop access to the account's data
    pub async fn disconnect(
        &self,
        id: &str,
        params: &FinancialConnectionsAccountDisconnectParams,
    ) -> Result<FinancialConnectionsAccount> {
        self.action(id, "disconnect", params).await
    }

    /// Start a refresh of balance, ownership or transactions
    pub async fn refresh(
        &self,
        id: &str,
        params: &FinancialConnectionsAccountRefreshParams,
    ) -> Result<FinancialConnectionsAccount> {
        self.action(id, "refresh", params).await
    }

    pub async fn subscribe(
        &self,
        id: &str,
        params: &FinancialConnectionsAccountSubscribeParams,
    ) -> Result<FinancialConnectionsAccount> {
        self.action(id, "subscribe", params).await
    }

    pub async fn unsubscribe(
        &self,
        id: &str,
        params: &FinancialConnectionsAccountUnsubscribeParams,
    ) -> Result<FinancialConnectionsAccount> {
        self.action(id, "unsubscribe", params).await
    }

    /// Owners from one ownership refresh; `params.ownership` selects it
    pub fn list_owners(
        &self,
        id: &str,
        params: FinancialConnectionsAccountListOwnersParams,
    ) -> Result<ListPager<FinancialConnectionsAccountOwner, FinancialConnectionsAccountListOwnersParams>>
    {
        let path = format!("{}/owners", account_path(id)?);
        Ok(self.requestor.list(path, params))
    }

    async fn action<P: serde::Serialize>(
        &self,
        id: &str,
        action: &str,
        params: &P,
    ) -> Result<FinancialConnectionsAccount> {
        let path = format!("{}/{action}", account_path(id)?);
        self.requestor.post(&path, params).await
    }
}

fn account_path(id: &str) -> Result<String> {
    Ok(format!(
        "{ACCOUNTS}/{}",
        path_segment("financial_connections_account", id)?
    ))
}
