//! Tests for the external account union

use super::*;
use crate::form;
use crate::types::Identified;
use serde_json::json;

#[test]
fn test_bank_account_variant() {
    let account: ExternalAccount = serde_json::from_value(json!({
        "id": "ba_123",
        "object": "bank_account",
        "account": "acct_1",
        "bank_name": "STRIPE TEST BANK",
        "status": "new",
        "available_payout_methods": ["standard", "instant"]
    }))
    .unwrap();

    assert_eq!(account.id(), "ba_123");
    assert_eq!(account.object(), "bank_account");
    assert!(account.card().is_none());
    let bank = account.bank_account().unwrap();
    assert_eq!(bank.status, Some(BankAccountStatus::New));
    assert_eq!(bank.account.as_ref().unwrap().id(), "acct_1");
    assert_eq!(
        bank.available_payout_methods,
        Some(vec![AvailablePayoutMethod::Standard, AvailablePayoutMethod::Instant])
    );
}

#[test]
fn test_card_variant() {
    let account: ExternalAccount = serde_json::from_value(json!({
        "id": "card_123",
        "object": "card",
        "brand": "Visa",
        "funding": "debit",
        "exp_month": 12,
        "exp_year": 2030
    }))
    .unwrap();

    assert!(account.bank_account().is_none());
    let card = account.card().unwrap();
    assert_eq!(card.brand, Some(CardBrand::Visa));
    assert_eq!(card.funding, Some(CardFunding::Debit));
    assert_eq!(card.exp_year, Some(2030));
}

#[test]
fn test_unknown_discriminator_is_kept() {
    let account: ExternalAccount = serde_json::from_value(json!({
        "id": "xa_1",
        "object": "crypto_wallet",
        "network": "whatever"
    }))
    .unwrap();

    assert_eq!(
        account,
        ExternalAccount::Unrecognized {
            id: "xa_1".into(),
            object: "crypto_wallet".into(),
        }
    );
    assert!(account.bank_account().is_none());
    assert!(account.card().is_none());
}

#[test]
fn test_missing_discriminator_is_unrecognized() {
    let account: ExternalAccount = serde_json::from_value(json!({"id": "xa_2"})).unwrap();
    assert_eq!(account.object(), "");
    assert_eq!(account.id(), "xa_2");
}

#[test]
fn test_mismatched_body_is_an_error() {
    let result = serde_json::from_value::<ExternalAccount>(json!({
        "id": "card_1",
        "object": "card",
        "exp_month": "twelve"
    }));
    assert!(result.is_err());

    let result = serde_json::from_value::<ExternalAccount>(json!(42));
    assert!(result.is_err());
}

#[test]
fn test_bare_id_is_an_unexpanded_reference() {
    let account: ExternalAccount = serde_json::from_str("\"ba_123\"").unwrap();

    assert_eq!(account, ExternalAccount::Id("ba_123".into()));
    assert_eq!(account.id(), "ba_123");
    assert_eq!(account.object(), "");
    assert!(account.bank_account().is_none());
    assert!(account.card().is_none());
    assert_eq!(serde_json::to_value(&account).unwrap(), json!("ba_123"));
}

#[test]
fn test_serializes_back_to_wire_shape() {
    let account: ExternalAccount =
        serde_json::from_value(json!({"id": "ba_1", "object": "bank_account"})).unwrap();
    let value = serde_json::to_value(&account).unwrap();
    assert_eq!(value["object"], "bank_account");
    assert_eq!(value["id"], "ba_1");

    let unknown = ExternalAccount::Unrecognized {
        id: "xa_1".into(),
        object: "other".into(),
    };
    assert_eq!(
        serde_json::to_value(&unknown).unwrap(),
        json!({"id": "xa_1", "object": "other"})
    );
}

#[test]
fn test_bank_account_params_with_token() {
    let mut params = BankAccountParams {
        external_account: Some("btok_1".into()),
        default_for_currency: Some(true),
        ..Default::default()
    };
    crate::params::MetadataParams::add_metadata(&mut params, "nickname", "main");

    let values = form::encode(&params).unwrap();
    assert_eq!(values.get("external_account"), Some("btok_1"));
    assert_eq!(values.get("default_for_currency"), Some("true"));
    assert_eq!(values.get("metadata[nickname]"), Some("main"));
    assert_eq!(values.len(), 3);
}

#[test]
fn test_list_params_object_filter() {
    let params = BankAccountListParams {
        object: Some("card".into()),
        ..Default::default()
    };
    let values = form::encode(&params).unwrap();
    assert_eq!(values.encode(), "object=card");
}

#[test]
fn test_inline_details_carry_holder_type_and_metadata() {
    let details = BankAccountDetailsParams {
        account_number: "000123456789".into(),
        country: "US".into(),
        account_holder_type: Some(BankAccountHolderType::Company),
        metadata: Some([("source".to_string(), "import".to_string())].into()),
        ..Default::default()
    };
    let params = BankAccountParams {
        account_holder_type: Some(BankAccountHolderType::Individual),
        external_account: Some(details.into()),
        ..Default::default()
    };

    let values = form::encode(&params).unwrap();
    assert_eq!(values.get("account_holder_type"), Some("individual"));
    assert_eq!(
        values.get("external_account[account_holder_type]"),
        Some("company")
    );
    assert_eq!(values.get("external_account[metadata][source]"), Some("import"));
    assert_eq!(values.get("external_account[object]"), Some("bank_account"));
}
