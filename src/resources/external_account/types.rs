//! Bank account and card response types

use super::enums::{
    AllowRedisplay, AvailablePayoutMethod, BankAccountHolderType, BankAccountRequirementsErrorCode,
    BankAccountStatus, CardBrand, CardCheck, CardFunding, CardRegulatedStatus,
    CardTokenizationMethod,
};
use crate::expand::Expandable;
use crate::resources::account::Account;
use crate::resources::refs::Customer;
use crate::types::Metadata;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BankAccountRequirementsError {
    pub code: Option<BankAccountRequirementsErrorCode>,
    pub reason: Option<String>,
    pub requirement: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BankAccountRequirements {
    pub currently_due: Option<Vec<String>>,
    pub errors: Option<Vec<BankAccountRequirementsError>>,
    pub past_due: Option<Vec<String>>,
    pub pending_verification: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BankAccount {
    pub account: Option<Expandable<Account>>,
    pub account_holder_name: Option<String>,
    pub account_holder_type: Option<BankAccountHolderType>,
    pub account_type: Option<String>,
    pub available_payout_methods: Option<Vec<AvailablePayoutMethod>>,
    pub bank_name: Option<String>,
    pub country: Option<String>,
    pub currency: Option<String>,
    pub customer: Option<Expandable<Customer>>,
    pub default_for_currency: Option<bool>,
    pub deleted: Option<bool>,
    pub fingerprint: Option<String>,
    pub future_requirements: Option<BankAccountRequirements>,
    #[serde(default)]
    pub id: String,
    pub last4: Option<String>,
    pub metadata: Option<Metadata>,
    #[serde(default)]
    pub object: String,
    pub requirements: Option<BankAccountRequirements>,
    pub routing_number: Option<String>,
    pub status: Option<BankAccountStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardNetworks {
    pub preferred: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub account: Option<Expandable<Account>>,
    pub address_city: Option<String>,
    pub address_country: Option<String>,
    pub address_line1: Option<String>,
    pub address_line1_check: Option<CardCheck>,
    pub address_line2: Option<String>,
    pub address_state: Option<String>,
    pub address_zip: Option<String>,
    pub address_zip_check: Option<CardCheck>,
    pub allow_redisplay: Option<AllowRedisplay>,
    pub available_payout_methods: Option<Vec<AvailablePayoutMethod>>,
    pub brand: Option<CardBrand>,
    pub country: Option<String>,
    pub currency: Option<String>,
    pub customer: Option<Expandable<Customer>>,
    pub cvc_check: Option<CardCheck>,
    pub default_for_currency: Option<bool>,
    pub deleted: Option<bool>,
    pub description: Option<String>,
    pub dynamic_last4: Option<String>,
    pub exp_month: Option<i64>,
    pub exp_year: Option<i64>,
    pub fingerprint: Option<String>,
    pub funding: Option<CardFunding>,
    #[serde(default)]
    pub id: String,
    pub iin: Option<String>,
    pub issuer: Option<String>,
    pub last4: Option<String>,
    pub metadata: Option<Metadata>,
    pub name: Option<String>,
    pub networks: Option<CardNetworks>,
    #[serde(default)]
    pub object: String,
    pub regulated_status: Option<CardRegulatedStatus>,
    pub status: Option<String>,
    pub tokenization_method: Option<CardTokenizationMethod>,
}
