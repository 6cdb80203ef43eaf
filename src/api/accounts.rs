//! Connected accounts and their external accounts

use super::{path_segment, Requestor};
use crate::error::Result;
use crate::pagination::ListPager;
use crate::params::RequestOptions;
use crate::resources::{
    Account, AccountListParams, AccountParams, AccountRejectParams, BankAccountListParams,
    BankAccountParams, ExternalAccount,
};

const ACCOUNTS: &str = "/v1/accounts";

/// `/v1/accounts` and `/v1/account`
#[derive(Debug, Clone)]
pub struct AccountsApi {
    requestor: Requestor,
}

impl AccountsApi {
    pub(crate) fn new(requestor: Requestor) -> Self {
        Self { requestor }
    }

    /// Use these options for every call made through this handle
    #[must_use]
    pub fn with_options(mut self, options: RequestOptions) -> Self {
        self.requestor.set_options(options);
        self
    }

    pub async fn create(&self, params: &AccountParams) -> Result<Account> {
        self.requestor.post(ACCOUNTS, params).await
    }

    /// The account that owns the API key (or `Stripe-Account`)
    pub async fn retrieve_current(&self, params: &AccountParams) -> Result<Account> {
        self.requestor.get("/v1/account", params).await
    }

    pub async fn retrieve(&self, id: &str, params: &AccountParams) -> Result<Account> {
        self.requestor.get(&account_path(id)?, params).await
    }

    pub async fn update(&self, id: &str, params: &AccountParams) -> Result<Account> {
        self.requestor.post(&account_path(id)?, params).await
    }

    /// Delete an account; the returned object has `deleted` set
    pub async fn delete(&self, id: &str) -> Result<Account> {
        self.requestor
            .delete(&account_path(id)?, &AccountParams::default())
            .await
    }

    pub async fn reject(&self, id: &str, params: &AccountRejectParams) -> Result<Account> {
        let path = format!("{}/reject", account_path(id)?);
        self.requestor.post(&path, params).await
    }

    pub fn list(&self, params: AccountListParams) -> ListPager<Account, AccountListParams> {
        self.requestor.list(ACCOUNTS.to_string(), params)
    }

    // ------------------------------------------------------------------------
    // External accounts
    // ------------------------------------------------------------------------

    /// Attach a bank account or card, given as `params.external_account`
    pub async fn create_external_account(
        &self,
        account: &str,
        params: &BankAccountParams,
    ) -> Result<ExternalAccount> {
        self.requestor
            .post(&external_accounts_path(account)?, params)
            .await
    }

    pub async fn retrieve_external_account(
        &self,
        account: &str,
        id: &str,
        params: &BankAccountParams,
    ) -> Result<ExternalAccount> {
        let path = external_account_path(account, id)?;
        self.requestor.get(&path, params).await
    }

    pub async fn update_external_account(
        &self,
        account: &str,
        id: &str,
        params: &BankAccountParams,
    ) -> Result<ExternalAccount> {
        let path = external_account_path(account, id)?;
        self.requestor.post(&path, params).await
    }

    pub async fn delete_external_account(
        &self,
        account: &str,
        id: &str,
    ) -> Result<ExternalAccount> {
        let path = external_account_path(account, id)?;
        self.requestor
            .delete(&path, &BankAccountParams::default())
            .await
    }

    /// Bank accounts and cards; filter with `params.object`
    pub fn list_external_accounts(
        &self,
        account: &str,
        params: BankAccountListParams,
    ) -> Result<ListPager<ExternalAccount, BankAccountListParams>> {
        Ok(self
            .requestor
            .list(external_accounts_path(account)?, params))
    }
}

fn account_path(id: &str) -> Result<String> {
    Ok(format!("{ACCOUNTS}/{}", path_segment("account", id)?))
}

fn external_accounts_path(account: &str) -> Result<String> {
    Ok(format!("{}/external_accounts", account_path(account)?))
}

fn external_account_path(account: &str, id: &str) -> Result<String> {
    Ok(format!(
        "{}/{}",
        external_accounts_path(account)?,
        path_segment("external_account", id)?
    ))
}
