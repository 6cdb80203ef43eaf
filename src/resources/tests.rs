//! Decoding tests across resource families

use super::confirmation_token::{
    CardReadMethod, PaymentMethodDataParams, PaymentMethodPreviewCard,
    PaymentMethodPreviewSepaDebit, PaymentMethodType, ReceiptAccountType, SetupFutureUsage,
};
use super::financial_connections::{
    AccountHolderType, FinancialConnectionsAccountListAccountHolderParams,
    FinancialConnectionsAccountListParams, FinancialConnectionsAccountRefreshParams, Permission,
    RefreshStatus,
};
use super::tax_id::{TaxIdOwnerType, TaxIdType, TaxIdVerificationStatus};
use super::*;
use crate::expand::Expandable;
use crate::form;
use crate::params::MetadataParams;
use crate::types::{Identified, Object};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn test_object_tags() {
    assert_eq!(Account::OBJECT, "account");
    assert_eq!(BankAccount::OBJECT, "bank_account");
    assert_eq!(TaxId::OBJECT, "tax_id");
    assert_eq!(
        FinancialConnectionsAccount::OBJECT,
        "financial_connections.account"
    );
    assert_eq!(
        ConnectCollectionTransfer::OBJECT,
        "connect_collection_transfer"
    );
}

#[test]
fn test_tax_id_owner_references() {
    let tax_id: TaxId = serde_json::from_value(json!({
        "id": "txi_1",
        "object": "tax_id",
        "type": "eu_vat",
        "value": "DE123456789",
        "customer": {"id": "cus_1", "object": "customer", "email": "jenny@example.com"},
        "owner": {"type": "self", "account": "acct_1", "application": "ca_1"},
        "verification": {"status": "pending"}
    }))
    .unwrap();

    assert_eq!(tax_id.type_, Some(TaxIdType::EuVat));
    let customer = tax_id.customer.as_ref().unwrap();
    assert!(customer.is_expanded());
    assert_eq!(customer.id(), "cus_1");
    assert_eq!(
        customer.as_object().unwrap().email.as_deref(),
        Some("jenny@example.com")
    );

    let owner = tax_id.owner.as_ref().unwrap();
    assert_eq!(owner.type_, Some(TaxIdOwnerType::SelfOwned));
    assert_eq!(owner.account.as_ref().unwrap().id(), "acct_1");
    assert_eq!(owner.application.as_ref().unwrap().id(), "ca_1");
    assert_eq!(
        tax_id.verification.unwrap().status,
        Some(TaxIdVerificationStatus::Pending)
    );
}

#[test]
fn test_collection_transfer_destination() {
    let transfer: ConnectCollectionTransfer = serde_json::from_value(json!({
        "id": "connct_1",
        "object": "connect_collection_transfer",
        "amount": 1000,
        "currency": "usd",
        "destination": {"id": "acct_1", "object": "account", "country": "US"},
        "livemode": false
    }))
    .unwrap();

    let destination = transfer.destination.unwrap();
    assert!(destination.is_expanded());
    let account = destination.into_object().unwrap();
    assert_eq!(account.country.as_deref(), Some("US"));
}

#[test]
fn test_expandable_rejects_wrong_shape() {
    let result = serde_json::from_value::<ConnectCollectionTransfer>(json!({
        "id": "connct_1",
        "destination": 42
    }));
    assert!(result.is_err());
}

#[test]
fn test_financial_connections_account() {
    let account: FinancialConnectionsAccount = serde_json::from_value(json!({
        "id": "fca_1",
        "object": "financial_connections.account",
        "account_holder": {"type": "customer", "customer": "cus_1"},
        "balance": {"as_of": 1700000000, "type": "cash", "cash": {"available": {"usd": 1200}}},
        "balance_refresh": {"status": "succeeded", "last_attempted_at": 1700000000},
        "ownership": "fcaowns_1",
        "permissions": ["balances", "ownership"],
        "subscriptions": ["transactions"],
        "supported_payment_method_types": ["us_bank_account"],
        "transaction_refresh": {"id": "fctxnref_1", "status": "pending"}
    }))
    .unwrap();

    let holder = account.account_holder.as_ref().unwrap();
    assert_eq!(holder.type_, Some(AccountHolderType::Customer));
    assert_eq!(holder.customer.as_ref().unwrap().id(), "cus_1");

    let cash = account.balance.as_ref().and_then(|b| b.cash.as_ref()).unwrap();
    assert_eq!(cash.available.as_ref().unwrap()["usd"], 1200);
    assert_eq!(
        account.balance_refresh.as_ref().unwrap().status,
        Some(RefreshStatus::Succeeded)
    );
    assert_eq!(account.ownership.as_ref().unwrap().id(), "fcaowns_1");
    assert_eq!(
        account.permissions,
        Some(vec![Permission::Balances, Permission::Ownership])
    );
}

#[test]
fn test_expanded_ownership_with_owners() {
    let account: FinancialConnectionsAccount = serde_json::from_value(json!({
        "id": "fca_1",
        "object": "financial_connections.account",
        "ownership": {
            "id": "fcaowns_1",
            "object": "financial_connections.account_ownership",
            "owners": {
                "object": "list",
                "has_more": false,
                "data": [{
                    "id": "fcaown_1",
                    "object": "financial_connections.account_owner",
                    "name": "Jenny Rosen",
                    "ownership": "fcaowns_1"
                }]
            }
        }
    }))
    .unwrap();

    let ownership = account.ownership.unwrap().into_object().unwrap();
    let owners = ownership.owners.unwrap();
    assert_eq!(owners.len(), 1);
    assert_eq!(owners.data[0].name.as_deref(), Some("Jenny Rosen"));
    assert_eq!(owners.data[0].ownership.as_ref().unwrap().id(), "fcaowns_1");
}

#[test]
fn test_financial_connections_params() {
    let list = FinancialConnectionsAccountListParams {
        account_holder: Some(FinancialConnectionsAccountListAccountHolderParams {
            customer: Some("cus_1".into()),
            ..Default::default()
        }),
        ..Default::default()
    };
    assert_eq!(form::encode(&list).unwrap().encode(), "account_holder[customer]=cus_1");

    let refresh = FinancialConnectionsAccountRefreshParams {
        features: Some(vec!["balance".into(), "ownership".into()]),
        ..Default::default()
    };
    assert_eq!(
        form::encode(&refresh).unwrap().encode(),
        "features[0]=balance&features[1]=ownership"
    );
}

#[test]
fn test_confirmation_token_preview() {
    let token: ConfirmationToken = serde_json::from_value(json!({
        "id": "ctoken_1",
        "object": "confirmation_token",
        "setup_future_usage": "off_session",
        "payment_method_preview": {
            "type": "card",
            "allow_redisplay": "always",
            "customer": null,
            "billing_details": {"name": "Jenny Rosen", "address": {"country": "US"}},
            "card": {
                "brand": "visa",
                "last4": "4242",
                "checks": {"cvc_check": "pass"},
                "networks": {"available": ["visa"], "preferred": null},
                "three_d_secure_usage": {"supported": true},
                "wallet": {"type": "apple_pay", "apple_pay": {}}
            }
        }
    }))
    .unwrap();

    assert_eq!(token.setup_future_usage, Some(SetupFutureUsage::OffSession));
    let preview = token.payment_method_preview.as_ref().unwrap();
    assert_eq!(preview.type_, Some(PaymentMethodType::Card));
    assert!(preview.customer.is_none());
    let card = preview.card.as_ref().unwrap();
    assert_eq!(card.last4.as_deref(), Some("4242"));
    assert_eq!(
        card.checks.as_ref().unwrap().cvc_check.as_deref(),
        Some("pass")
    );
    assert!(card.wallet.as_ref().unwrap().apple_pay.is_some());
}

#[test]
fn test_generated_from_references() {
    let card: PaymentMethodPreviewCard = serde_json::from_value(json!({
        "brand": "visa",
        "generated_from": {
            "charge": "ch_1",
            "setup_attempt": "setatt_1",
            "payment_method_details": {
                "type": "card_present",
                "card_present": {
                    "amount_authorized": 1000,
                    "read_method": "contactless_emv",
                    "receipt": {"account_type": "credit"}
                }
            }
        }
    }))
    .unwrap();
    let from = card.generated_from.unwrap();
    assert_eq!(from.charge.as_deref(), Some("ch_1"));
    assert_eq!(from.setup_attempt, Some(Expandable::Id("setatt_1".into())));
    let present = from.payment_method_details.unwrap().card_present.unwrap();
    assert_eq!(present.amount_authorized, Some(1000));
    assert_eq!(present.read_method, Some(CardReadMethod::ContactlessEmv));
    assert_eq!(
        present.receipt.unwrap().account_type,
        Some(ReceiptAccountType::Credit)
    );

    let sepa: PaymentMethodPreviewSepaDebit = serde_json::from_value(json!({
        "last4": "3000",
        "generated_from": {
            "charge": {"id": "ch_2", "object": "charge", "amount": 500, "paid": true},
            "setup_attempt": null
        }
    }))
    .unwrap();
    let from = sepa.generated_from.unwrap();
    let charge = from.charge.unwrap();
    assert!(charge.is_expanded());
    assert_eq!(charge.id(), "ch_2");
    assert_eq!(charge.as_object().unwrap().amount, Some(500));
    assert!(from.setup_attempt.is_none());

    let result = serde_json::from_value::<PaymentMethodPreviewSepaDebit>(json!({
        "generated_from": {"charge": 7}
    }));
    assert!(result.is_err());
}

#[test]
fn test_test_helper_params_encoding() {
    let mut data = PaymentMethodDataParams {
        type_: Some(PaymentMethodType::Card),
        ..Default::default()
    };
    data.add_metadata("source", "test");

    let params = TestHelpersConfirmationTokenParams {
        payment_method_data: Some(data),
        return_url: Some("https://example.com/return".into()),
        setup_future_usage: Some(SetupFutureUsage::OnSession),
        ..Default::default()
    };

    assert_eq!(
        form::encode(&params).unwrap().encode(),
        "payment_method_data[metadata][source]=test\
         &payment_method_data[type]=card\
         &return_url=https%3A%2F%2Fexample.com%2Freturn\
         &setup_future_usage=on_session"
    );
}

#[test]
fn test_reference_types() {
    let file: File = serde_json::from_value(json!({
        "id": "file_1",
        "object": "file",
        "purpose": "identity_document",
        "type": "png",
        "size": 1024
    }))
    .unwrap();
    assert_eq!(file.id(), "file_1");
    assert_eq!(file.type_.as_deref(), Some("png"));

    let customer: Customer =
        serde_json::from_value(json!({"id": "cus_1", "object": "customer", "deleted": true}))
            .unwrap();
    assert_eq!(customer.deleted, Some(true));
}
