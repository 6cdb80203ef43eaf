//! Integration tests using mock HTTP server
//!
//! Tests the full end-to-end flow: typed params → form request → mock API →
//! decoded resources

use futures::TryStreamExt;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::sync::Arc;
use stripe_kit::auth::AuthConfig;
use stripe_kit::http::{HttpClient, HttpClientConfig};
use stripe_kit::resources::{
    AccountListParams, AccountParams, AccountRejectParams, BankAccountListParams,
    BankAccountParams, ConfirmationTokenParams, ExternalAccount,
    FinancialConnectionsAccountListOwnersParams, FinancialConnectionsAccountListParams,
    FinancialConnectionsAccountParams, FinancialConnectionsAccountSubscribeParams, TaxIdListParams,
    TaxIdParams, TestHelpersConfirmationTokenParams,
};
use stripe_kit::resources::account::{
    AccountSettingsParams, AccountSettingsPayoutsParams, AccountSettingsPayoutsScheduleParams,
    DelayDays,
};
use stripe_kit::{Client, ClientConfig, Error, Expandable, RequestOptions};
use wiremock::matchers::{body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

fn client_for(server: &MockServer) -> Client {
    let config = HttpClientConfig::builder()
        .base_url(server.uri())
        .no_retry_sleep()
        .build();
    let http = HttpClient::with_config(config, AuthConfig::bearer("sk_test_123")).unwrap();
    Client::with_backend(Arc::new(http))
}

fn body_of(request: &Request) -> String {
    String::from_utf8(request.body.clone()).unwrap()
}

async fn mount(server: &MockServer, verb: &str, route: &str, body: Value) {
    Mock::given(method(verb))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

fn list(items: Vec<Value>, has_more: bool) -> Value {
    json!({"object": "list", "url": "/v1/x", "has_more": has_more, "data": items})
}

// ============================================================================
// Configuration
// ============================================================================

#[tokio::test]
async fn test_client_from_config() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/account"))
        .and(header("Authorization", "Bearer sk_test_cfg"))
        .and(header("Stripe-Account", "acct_connected"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": "acct_connected", "object": "account"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut config = ClientConfig::new("sk_test_cfg");
    config.base_url = server.uri();
    config.stripe_account = Some("acct_connected".into());
    let client = Client::from_config(&config).unwrap();

    let account = client
        .accounts()
        .retrieve_current(&AccountParams::default())
        .await
        .unwrap();
    assert_eq!(account.id, "acct_connected");
}

#[tokio::test]
async fn test_base_url_path_prefix_is_kept() {
    let server = MockServer::start().await;
    mount(
        &server,
        "GET",
        "/stripe/v1/accounts/acct_1",
        json!({"id": "acct_1", "object": "account"}),
    )
    .await;

    let mut config = ClientConfig::new("sk_test_cfg");
    config.base_url = format!("{}/stripe", server.uri());
    let account = Client::from_config(&config)
        .unwrap()
        .accounts()
        .retrieve("acct_1", &AccountParams::default())
        .await
        .unwrap();
    assert_eq!(account.id, "acct_1");
}

#[test]
fn test_client_from_invalid_config() {
    let err = Client::from_config(&ClientConfig::default()).unwrap_err();
    assert!(matches!(err, Error::MissingConfigField { .. }));
}

// ============================================================================
// Accounts
// ============================================================================

#[tokio::test]
async fn test_account_create_sends_nested_form_body() {
    let server = MockServer::start().await;
    mount(&server, "POST", "/v1/accounts", json!({"id": "acct_1", "object": "account"})).await;

    let params = AccountParams {
        email: Some("jenny@example.com".into()),
        settings: Some(AccountSettingsParams {
            payouts: Some(AccountSettingsPayoutsParams {
                schedule: Some(AccountSettingsPayoutsScheduleParams {
                    delay_days: Some(DelayDays::Minimum),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        }),
        ..Default::default()
    };
    client_for(&server).accounts().create(&params).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(
        body_of(&requests[0]),
        "email=jenny%40example.com&settings[payouts][schedule][delay_days]=minimum"
    );
    assert_eq!(
        requests[0].headers.get("Content-Type").unwrap(),
        "application/x-www-form-urlencoded"
    );
    assert!(requests[0].headers.contains_key("Idempotency-Key"));
}

#[tokio::test]
async fn test_account_retrieve_with_expansion() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/accounts/acct_1"))
        .and(query_param("expand[0]", "external_accounts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "acct_1",
            "object": "account",
            "external_accounts": list(vec![
                json!({"id": "ba_1", "object": "bank_account", "account": "acct_1"}),
                json!({"id": "card_1", "object": "card", "account": {"id": "acct_1", "object": "account"}}),
            ], false)
        })))
        .expect(1)
        .mount(&server)
        .await;

    let params = AccountParams {
        expand: vec!["external_accounts".into()],
        ..Default::default()
    };
    let account = client_for(&server)
        .accounts()
        .retrieve("acct_1", &params)
        .await
        .unwrap();

    let external = account.external_accounts.unwrap();
    match &external.data[0] {
        ExternalAccount::BankAccount(bank) => {
            assert_eq!(bank.account, Some(Expandable::Id("acct_1".into())));
        }
        other => panic!("expected bank account, got {other:?}"),
    }
    match &external.data[1] {
        ExternalAccount::Card(card) => {
            assert!(matches!(card.account, Some(Expandable::Object(_))));
        }
        other => panic!("expected card, got {other:?}"),
    }
}

#[tokio::test]
async fn test_account_update_delete_reject() {
    let server = MockServer::start().await;
    mount(&server, "POST", "/v1/accounts/acct_1", json!({"id": "acct_1", "object": "account"})).await;
    mount(
        &server,
        "DELETE",
        "/v1/accounts/acct_1",
        json!({"id": "acct_1", "object": "account", "deleted": true}),
    )
    .await;
    mount(
        &server,
        "POST",
        "/v1/accounts/acct_1/reject",
        json!({"id": "acct_1", "object": "account", "charges_enabled": false}),
    )
    .await;

    let accounts = client_for(&server).accounts();
    let metadata = BTreeMap::from([("order".to_string(), "6735".to_string())]);
    let params = AccountParams {
        metadata: Some(metadata),
        ..Default::default()
    };
    accounts.update("acct_1", &params).await.unwrap();
    let deleted = accounts.delete("acct_1").await.unwrap();
    assert_eq!(deleted.deleted, Some(true));
    let reject = AccountRejectParams {
        reason: Some("fraud".into()),
        ..Default::default()
    };
    accounts.reject("acct_1", &reject).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(body_of(&requests[0]), "metadata[order]=6735");
    assert_eq!(requests[1].url.query(), None);
    assert_eq!(body_of(&requests[2]), "reason=fraud");
}

#[tokio::test]
async fn test_account_list_pages_through_cursor() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/accounts"))
        .and(query_param("starting_after", "acct_2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list(
            vec![json!({"id": "acct_3", "object": "account"})],
            false,
        )))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/accounts"))
        .and(query_param("limit", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list(
            vec![
                json!({"id": "acct_1", "object": "account"}),
                json!({"id": "acct_2", "object": "account"}),
            ],
            true,
        )))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    let mut params = AccountListParams::default();
    params.list.limit = Some(2);
    let ids: Vec<String> = client_for(&server)
        .accounts()
        .list(params)
        .into_stream()
        .map_ok(|account| account.id)
        .try_collect()
        .await
        .unwrap();

    assert_eq!(ids, vec!["acct_1", "acct_2", "acct_3"]);
}

// ============================================================================
// External accounts
// ============================================================================

#[tokio::test]
async fn test_external_account_lifecycle() {
    let server = MockServer::start().await;
    let bank = json!({"id": "ba_1", "object": "bank_account", "last4": "6789", "status": "new"});
    Mock::given(method("POST"))
        .and(path("/v1/accounts/acct_1/external_accounts"))
        .and(body_string_contains("external_account=btok_123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(bank.clone()))
        .expect(1)
        .mount(&server)
        .await;
    mount(&server, "GET", "/v1/accounts/acct_1/external_accounts/ba_1", bank.clone()).await;
    mount(&server, "POST", "/v1/accounts/acct_1/external_accounts/ba_1", bank).await;
    mount(
        &server,
        "DELETE",
        "/v1/accounts/acct_1/external_accounts/ba_1",
        json!({"id": "ba_1", "object": "bank_account", "deleted": true}),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/v1/accounts/acct_1/external_accounts"))
        .and(query_param("object", "card"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list(
            vec![json!({"id": "card_1", "object": "card", "brand": "Visa"})],
            false,
        )))
        .mount(&server)
        .await;

    let accounts = client_for(&server).accounts();
    let params = BankAccountParams {
        external_account: Some("btok_123".into()),
        ..Default::default()
    };
    let created = accounts.create_external_account("acct_1", &params).await.unwrap();
    assert!(matches!(created, ExternalAccount::BankAccount(_)));

    accounts
        .retrieve_external_account("acct_1", "ba_1", &BankAccountParams::default())
        .await
        .unwrap();
    let update = BankAccountParams {
        default_for_currency: Some(true),
        ..Default::default()
    };
    accounts
        .update_external_account("acct_1", "ba_1", &update)
        .await
        .unwrap();
    accounts.delete_external_account("acct_1", "ba_1").await.unwrap();

    let cards = accounts
        .list_external_accounts(
            "acct_1",
            BankAccountListParams {
                object: Some("card".into()),
                ..Default::default()
            },
        )
        .unwrap()
        .collect_all(None)
        .await
        .unwrap();
    assert!(matches!(&cards[0], ExternalAccount::Card(card) if card.id == "card_1"));
}

// ============================================================================
// Tax IDs, confirmation tokens, test helpers
// ============================================================================

#[tokio::test]
async fn test_tax_id_endpoints() {
    let server = MockServer::start().await;
    let tax_id = json!({
        "id": "txi_1",
        "object": "tax_id",
        "type": "eu_vat",
        "value": "DE123456789",
        "owner": {"type": "self"},
        "verification": {"status": "pending"}
    });
    Mock::given(method("POST"))
        .and(path("/v1/customers/cus_1/tax_ids"))
        .and(body_string_contains("type=eu_vat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(tax_id.clone()))
        .expect(1)
        .mount(&server)
        .await;
    mount(&server, "GET", "/v1/customers/cus_1/tax_ids/txi_1", tax_id.clone()).await;
    mount(
        &server,
        "DELETE",
        "/v1/customers/cus_1/tax_ids/txi_1",
        json!({"id": "txi_1", "object": "tax_id", "deleted": true}),
    )
    .await;
    mount(&server, "GET", "/v1/customers/cus_1/tax_ids", list(vec![tax_id], false)).await;

    let tax_ids = client_for(&server).tax_ids();
    let params = TaxIdParams {
        type_: Some("eu_vat".into()),
        value: Some("DE123456789".into()),
        ..Default::default()
    };
    let created = tax_ids.create("cus_1", &params).await.unwrap();
    assert_eq!(created.value.as_deref(), Some("DE123456789"));

    tax_ids
        .retrieve("cus_1", "txi_1", &TaxIdParams::default())
        .await
        .unwrap();
    assert_eq!(tax_ids.delete("cus_1", "txi_1").await.unwrap().deleted, Some(true));
    let all = tax_ids
        .list("cus_1", TaxIdListParams::default())
        .unwrap()
        .collect_all(None)
        .await
        .unwrap();
    assert_eq!(all.len(), 1);
}

#[tokio::test]
async fn test_confirmation_tokens() {
    let server = MockServer::start().await;
    let token = json!({
        "id": "ctoken_1",
        "object": "confirmation_token",
        "livemode": false,
        "payment_method_preview": {"type": "card", "card": {"brand": "visa", "last4": "4242"}}
    });
    mount(&server, "GET", "/v1/confirmation_tokens/ctoken_1", token.clone()).await;
    Mock::given(method("POST"))
        .and(path("/v1/test_helpers/confirmation_tokens"))
        .and(body_string_contains("payment_method=pm_card_visa"))
        .respond_with(ResponseTemplate::new(200).set_body_json(token))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let token = client
        .confirmation_tokens()
        .retrieve("ctoken_1", &ConfirmationTokenParams::default())
        .await
        .unwrap();
    assert_eq!(token.id, "ctoken_1");

    let params = TestHelpersConfirmationTokenParams {
        payment_method: Some("pm_card_visa".into()),
        ..Default::default()
    };
    client
        .test_helpers()
        .create_confirmation_token(&params)
        .await
        .unwrap();
}

// ============================================================================
// Financial Connections
// ============================================================================

#[tokio::test]
async fn test_financial_connections_endpoints() {
    let server = MockServer::start().await;
    let fca = json!({
        "id": "fca_1",
        "object": "financial_connections.account",
        "category": "cash",
        "status": "active",
        "ownership": "fcaowns_1"
    });
    mount(&server, "GET", "/v1/financial_connections/accounts/fca_1", fca.clone()).await;
    mount(&server, "GET", "/v1/financial_connections/accounts", list(vec![fca.clone()], false)).await;
    for action in ["disconnect", "refresh", "subscribe", "unsubscribe"] {
        mount(
            &server,
            "POST",
            &format!("/v1/financial_connections/accounts/fca_1/{action}"),
            fca.clone(),
        )
        .await;
    }
    Mock::given(method("GET"))
        .and(path("/v1/financial_connections/accounts/fca_1/owners"))
        .and(query_param("ownership", "fcaowns_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list(
            vec![json!({"id": "fcaowner_1", "object": "financial_connections.account_owner", "name": "Jenny Rosen"})],
            false,
        )))
        .mount(&server)
        .await;

    let api = client_for(&server).financial_connections_accounts();
    let account = api
        .retrieve("fca_1", &FinancialConnectionsAccountParams::default())
        .await
        .unwrap();
    assert!(matches!(account.ownership, Some(Expandable::Id(ref id)) if id == "fcaowns_1"));

    let all = api
        .list(FinancialConnectionsAccountListParams::default())
        .collect_all(None)
        .await
        .unwrap();
    assert_eq!(all.len(), 1);

    api.disconnect("fca_1", &Default::default()).await.unwrap();
    api.refresh("fca_1", &Default::default()).await.unwrap();
    let subscribe = FinancialConnectionsAccountSubscribeParams {
        features: Some(vec!["transactions".into()]),
        ..Default::default()
    };
    api.subscribe("fca_1", &subscribe).await.unwrap();
    api.unsubscribe("fca_1", &Default::default()).await.unwrap();

    let owners = api
        .list_owners(
            "fca_1",
            FinancialConnectionsAccountListOwnersParams {
                ownership: Some("fcaowns_1".into()),
                ..Default::default()
            },
        )
        .unwrap()
        .collect_all(None)
        .await
        .unwrap();
    assert_eq!(owners[0].name.as_deref(), Some("Jenny Rosen"));

    let requests = server.received_requests().await.unwrap();
    let subscribe_request = requests
        .iter()
        .find(|r| r.url.path().ends_with("/subscribe"))
        .unwrap();
    assert_eq!(body_of(subscribe_request), "features[0]=transactions");
}

// ============================================================================
// Errors and retries through the client
// ============================================================================

#[tokio::test]
async fn test_api_error_is_decoded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/accounts/acct_missing"))
        .respond_with(
            ResponseTemplate::new(404)
                .insert_header("Request-Id", "req_123")
                .set_body_json(json!({
                    "error": {
                        "type": "invalid_request_error",
                        "code": "resource_missing",
                        "message": "No such account: 'acct_missing'",
                        "param": "account"
                    }
                })),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .accounts()
        .retrieve("acct_missing", &AccountParams::default())
        .await
        .unwrap_err();

    let api = err.as_api_error().unwrap();
    assert_eq!(api.status, 404);
    assert_eq!(api.code.as_deref(), Some("resource_missing"));
    assert_eq!(api.request_id.as_deref(), Some("req_123"));
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn test_write_retry_reuses_idempotency_key() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/accounts"))
        .respond_with(ResponseTemplate::new(409))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    mount(&server, "POST", "/v1/accounts", json!({"id": "acct_1", "object": "account"})).await;

    client_for(&server)
        .accounts()
        .create(&AccountParams::default())
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
    assert_eq!(
        requests[0].headers.get("Idempotency-Key"),
        requests[1].headers.get("Idempotency-Key")
    );
}

#[tokio::test]
async fn test_request_options_on_api_handle() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/accounts/acct_1"))
        .and(header("Idempotency-Key", "my-key"))
        .and(header("Stripe-Account", "acct_platform_child"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "acct_1", "object": "account"})))
        .expect(1)
        .mount(&server)
        .await;

    let options = RequestOptions::new()
        .idempotency_key("my-key")
        .stripe_account("acct_platform_child");
    client_for(&server)
        .accounts()
        .with_options(options)
        .update("acct_1", &AccountParams::default())
        .await
        .unwrap();
}

#[tokio::test]
async fn test_path_ids_are_escaped() {
    let server = MockServer::start().await;
    mount(
        &server,
        "GET",
        "/v1/customers/cus%2F1/tax_ids/txi_1",
        json!({"id": "txi_1", "object": "tax_id"}),
    )
    .await;

    client_for(&server)
        .tax_ids()
        .retrieve("cus/1", "txi_1", &TaxIdParams::default())
        .await
        .unwrap();
}
