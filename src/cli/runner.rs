//! CLI runner - executes commands

use crate::api::Client;
use crate::auth::ApiKey;
use crate::cli::commands::{
    AccountCommand, Cli, Commands, ConfirmationTokenCommand, FcAccountCommand, ListArgs,
    TaxIdCommand, TestHelpersCommand,
};
use crate::config::ClientConfig;
use crate::error::{Error, Result, ResultExt};
use crate::form;
use crate::pagination::ListPager;
use crate::params::{ListParams, ListParamsExt};
use crate::resources::financial_connections::FinancialConnectionsAccountListAccountHolderParams;
use crate::resources::{
    AccountListParams, AccountParams, AccountRejectParams, BankAccountListParams,
    ConfirmationTokenParams, FinancialConnectionsAccountListOwnersParams,
    FinancialConnectionsAccountListParams, FinancialConnectionsAccountParams,
    FinancialConnectionsAccountRefreshParams, TaxIdListParams, TaxIdParams,
    TestHelpersConfirmationTokenParams,
};
use crate::types::Identified;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command and print its output
    pub async fn run(&self) -> Result<()> {
        if let Commands::Encode { file, json } = &self.cli.command {
            let input = read_input(file.as_deref(), json.as_deref())?;
            for line in encode_lines(&input)? {
                println!("{line}");
            }
            return Ok(());
        }

        let client = Client::from_config(&self.client_config()?)?;
        let output = self.execute(&client).await?;
        println!("{}", serde_json::to_string_pretty(&output)?);
        Ok(())
    }

    /// Config file and environment, then command-line flags
    pub fn client_config(&self) -> Result<ClientConfig> {
        let mut config = ClientConfig::load(self.cli.config.as_deref())?;
        if let Some(key) = &self.cli.api_key {
            config.api_key = Some(ApiKey::new(key.as_str()));
        }
        if let Some(url) = &self.cli.base_url {
            config.base_url.clone_from(url);
        }
        if let Some(account) = &self.cli.stripe_account {
            config.stripe_account = Some(account.clone());
        }
        if let Some(retries) = self.cli.max_retries {
            config.max_network_retries = retries;
        }
        debug!(base_url = %config.base_url, "Resolved client config");
        Ok(config)
    }

    /// Execute an API command against `client`
    pub async fn execute(&self, client: &Client) -> Result<Value> {
        match &self.cli.command {
            Commands::Account(command) => account(client, command).await,
            Commands::TaxId(command) => tax_id(client, command).await,
            Commands::ConfirmationToken(command) => confirmation_token(client, command).await,
            Commands::TestHelpers(command) => test_helpers(client, command).await,
            Commands::FcAccount(command) => fc_account(client, command).await,
            Commands::Encode { .. } => Err(Error::config("encode runs offline")),
        }
    }
}

async fn account(client: &Client, command: &AccountCommand) -> Result<Value> {
    let accounts = client.accounts();
    match command {
        AccountCommand::Get { id, expand } => {
            let params = AccountParams {
                expand: expand.expand.clone(),
                ..Default::default()
            };
            let account = match id {
                Some(id) => accounts.retrieve(id, &params).await?,
                None => accounts.retrieve_current(&params).await?,
            };
            to_value(&account)
        }
        AccountCommand::List { list } => {
            let params = with_list(AccountListParams::default(), list);
            list_output(accounts.list(params), list).await
        }
        AccountCommand::ExternalAccounts { id, object, list } => {
            let mut params = with_list(BankAccountListParams::default(), list);
            params.object.clone_from(object);
            list_output(accounts.list_external_accounts(id, params)?, list).await
        }
        AccountCommand::Reject { id, reason } => {
            let params = AccountRejectParams {
                reason: Some(reason.clone()),
                ..Default::default()
            };
            to_value(&accounts.reject(id, &params).await?)
        }
    }
}

async fn tax_id(client: &Client, command: &TaxIdCommand) -> Result<Value> {
    let tax_ids = client.tax_ids();
    match command {
        TaxIdCommand::List { customer, list } => {
            let params = with_list(TaxIdListParams::default(), list);
            list_output(tax_ids.list(customer, params)?, list).await
        }
        TaxIdCommand::Get { customer, id } => {
            to_value(&tax_ids.retrieve(customer, id, &TaxIdParams::default()).await?)
        }
        TaxIdCommand::Delete { customer, id } => to_value(&tax_ids.delete(customer, id).await?),
    }
}

async fn confirmation_token(client: &Client, command: &ConfirmationTokenCommand) -> Result<Value> {
    match command {
        ConfirmationTokenCommand::Get { id, expand } => {
            let params = ConfirmationTokenParams {
                expand: expand.expand.clone(),
                ..Default::default()
            };
            to_value(&client.confirmation_tokens().retrieve(id, &params).await?)
        }
    }
}

async fn test_helpers(client: &Client, command: &TestHelpersCommand) -> Result<Value> {
    match command {
        TestHelpersCommand::ConfirmationToken {
            payment_method,
            return_url,
            setup_future_usage,
        } => {
            let params = TestHelpersConfirmationTokenParams {
                payment_method: Some(payment_method.clone()),
                return_url: return_url.clone(),
                setup_future_usage: setup_future_usage.as_deref().map(Into::into),
                ..Default::default()
            };
            to_value(
                &client
                    .test_helpers()
                    .create_confirmation_token(&params)
                    .await?,
            )
        }
    }
}

async fn fc_account(client: &Client, command: &FcAccountCommand) -> Result<Value> {
    let api = client.financial_connections_accounts();
    match command {
        FcAccountCommand::Get { id, expand } => {
            let params = FinancialConnectionsAccountParams {
                expand: expand.expand.clone(),
                ..Default::default()
            };
            to_value(&api.retrieve(id, &params).await?)
        }
        FcAccountCommand::List {
            customer,
            account,
            session,
            list,
        } => {
            let mut params = with_list(FinancialConnectionsAccountListParams::default(), list);
            if customer.is_some() || account.is_some() {
                params.account_holder = Some(FinancialConnectionsAccountListAccountHolderParams {
                    account: account.clone(),
                    customer: customer.clone(),
                });
            }
            params.session.clone_from(session);
            list_output(api.list(params), list).await
        }
        FcAccountCommand::Disconnect { id } => {
            to_value(&api.disconnect(id, &Default::default()).await?)
        }
        FcAccountCommand::Refresh { id, features } => {
            let params = FinancialConnectionsAccountRefreshParams {
                features: Some(features.clone()),
                ..Default::default()
            };
            to_value(&api.refresh(id, &params).await?)
        }
        FcAccountCommand::Owners {
            id,
            ownership,
            list,
        } => {
            let mut params =
                with_list(FinancialConnectionsAccountListOwnersParams::default(), list);
            params.ownership = Some(ownership.clone());
            list_output(api.list_owners(id, params)?, list).await
        }
    }
}

// ============================================================================
// Helpers
// ============================================================================

impl ListArgs {
    /// Cursor fields for the request
    pub fn params(&self) -> ListParams {
        ListParams {
            ending_before: self.ending_before.clone(),
            limit: self.limit,
            starting_after: self.starting_after.clone(),
            expand: Vec::new(),
        }
    }
}

fn with_list<P: ListParamsExt>(mut params: P, args: &ListArgs) -> P {
    *params.list_mut() = args.params();
    params
}

/// One page as a list object, or every item as an array with `--all`
async fn list_output<T, P>(mut pager: ListPager<T, P>, args: &ListArgs) -> Result<Value>
where
    T: DeserializeOwned + Identified + Serialize,
    P: Serialize + ListParamsExt,
{
    if args.all {
        let items = pager.collect_all(args.max_items).await?;
        return to_value(&items);
    }
    match pager.next_page().await? {
        Some(page) => to_value(&page),
        None => Ok(Value::Null),
    }
}

fn to_value<T: Serialize>(value: &T) -> Result<Value> {
    Ok(serde_json::to_value(value)?)
}

fn read_input(file: Option<&Path>, inline: Option<&str>) -> Result<String> {
    if let Some(json) = inline {
        return Ok(json.to_string());
    }
    match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read '{}'", path.display())),
        None => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read stdin")?;
            Ok(input)
        }
    }
}

/// `key=value` lines, unescaped, in wire order
fn encode_lines(json: &str) -> Result<Vec<String>> {
    let document: Value = serde_json::from_str(json)
        .map_err(|e| Error::config(format!("Invalid params JSON: {e}")))?;
    let values = form::encode(&document)?;
    Ok(values
        .pairs()
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect())
}

#[cfg(test)]
mod runner_tests {
    use super::*;
    use crate::testing::StubBackend;
    use clap::Parser;
    use serde_json::json;
    use std::sync::Arc;

    fn runner(args: &[&str]) -> Runner {
        let mut argv = vec!["stripe-kit"];
        argv.extend_from_slice(args);
        Runner::new(Cli::try_parse_from(argv).unwrap())
    }

    #[test]
    fn test_encode_lines() {
        let lines = encode_lines(
            r#"{"email": "a@b.co", "capabilities": {"transfers": {"requested": true}}, "gone": null}"#,
        )
        .unwrap();
        assert_eq!(
            lines,
            vec![
                "capabilities[transfers][requested]=true".to_string(),
                "email=a@b.co".to_string(),
            ]
        );
    }

    #[test]
    fn test_read_input_sources() {
        assert_eq!(read_input(None, Some("{}")).unwrap(), "{}");

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("params.json");
        fs::write(&path, r#"{"email": "a@b.co"}"#).unwrap();
        assert_eq!(read_input(Some(&path), None).unwrap(), r#"{"email": "a@b.co"}"#);

        let missing = dir.path().join("missing.json");
        let err = read_input(Some(&missing), None).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
        assert!(err.to_string().contains("missing.json"));
    }

    #[test]
    fn test_encode_rejects_non_object() {
        assert!(encode_lines("[1, 2]").is_err());
        assert!(encode_lines("{").is_err());
    }

    #[test]
    fn test_flags_override_config() {
        let runner = runner(&[
            "--api-key",
            "sk_test_flag",
            "--base-url",
            "http://localhost:12111",
            "--max-retries",
            "0",
            "account",
            "get",
        ]);
        let config = runner.client_config().unwrap();

        assert_eq!(config.api_key, Some(ApiKey::new("sk_test_flag")));
        assert_eq!(config.base_url, "http://localhost:12111");
        assert_eq!(config.max_network_retries, 0);
    }

    #[tokio::test]
    async fn test_account_get_without_id_uses_current_account() {
        let backend = Arc::new(StubBackend::new([json!({"id": "acct_me", "object": "account"})]));
        let client = Client::with_backend(backend.clone());

        let output = runner(&["account", "get"]).execute(&client).await.unwrap();

        assert_eq!(output["id"], "acct_me");
        assert_eq!(backend.calls()[0].path, "/v1/account");
    }

    #[tokio::test]
    async fn test_list_all_collects_items() {
        let backend = Arc::new(StubBackend::new([
            json!({"object": "list", "has_more": true, "data": [{"id": "txi_1", "object": "tax_id"}]}),
            json!({"object": "list", "has_more": false, "data": [{"id": "txi_2", "object": "tax_id"}]}),
        ]));
        let client = Client::with_backend(backend.clone());

        let output = runner(&["tax-id", "list", "cus_1", "--limit", "1", "--all"])
            .execute(&client)
            .await
            .unwrap();

        assert_eq!(output.as_array().map(Vec::len), Some(2));
        let calls = backend.calls();
        assert_eq!(calls[1].form.get("starting_after"), Some("txi_1"));
        assert_eq!(calls[1].form.get("limit"), Some("1"));
    }

    #[tokio::test]
    async fn test_fc_refresh_sends_features() {
        let backend = Arc::new(StubBackend::new([
            json!({"id": "fca_1", "object": "financial_connections.account"}),
        ]));
        let client = Client::with_backend(backend.clone());

        runner(&["fc-account", "refresh", "fca_1", "--feature", "balance", "--feature", "ownership"])
            .execute(&client)
            .await
            .unwrap();

        let call = &backend.calls()[0];
        assert_eq!(call.path, "/v1/financial_connections/accounts/fca_1/refresh");
        assert_eq!(call.form.get_all("features[1]"), vec!["ownership"]);
    }

    #[test]
    fn test_reject_requires_reason() {
        let argv = ["stripe-kit", "account", "reject", "acct_1"];
        assert!(Cli::try_parse_from(argv).is_err());
    }
}
