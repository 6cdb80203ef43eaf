//! Financial Connections account response types

use super::enums::{
    AccountCategory, AccountHolderType, AccountStatus, AccountSubcategory, BalanceType, Permission,
    RefreshStatus, Subscription, SupportedPaymentMethodType,
};
use crate::expand::Expandable;
use crate::resources::account::Account;
use crate::resources::refs::Customer;
use crate::types::List;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancialConnectionsAccountAccountHolder {
    pub account: Option<Expandable<Account>>,
    pub customer: Option<Expandable<Customer>>,
    #[serde(rename = "type")]
    pub type_: Option<AccountHolderType>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancialConnectionsAccountBalanceCash {
    pub available: Option<BTreeMap<String, i64>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancialConnectionsAccountBalanceCredit {
    pub used: Option<BTreeMap<String, i64>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancialConnectionsAccountBalance {
    pub as_of: Option<i64>,
    pub cash: Option<FinancialConnectionsAccountBalanceCash>,
    pub credit: Option<FinancialConnectionsAccountBalanceCredit>,
    pub current: Option<BTreeMap<String, i64>>,
    #[serde(rename = "type")]
    pub type_: Option<BalanceType>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancialConnectionsAccountRefresh {
    pub last_attempted_at: Option<i64>,
    pub next_refresh_available_at: Option<i64>,
    pub status: Option<RefreshStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancialConnectionsAccountTransactionRefresh {
    #[serde(default)]
    pub id: String,
    pub last_attempted_at: Option<i64>,
    pub next_refresh_available_at: Option<i64>,
    pub status: Option<RefreshStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancialConnectionsAccount {
    pub account_holder: Option<FinancialConnectionsAccountAccountHolder>,
    pub balance: Option<FinancialConnectionsAccountBalance>,
    pub balance_refresh: Option<FinancialConnectionsAccountRefresh>,
    pub category: Option<AccountCategory>,
    pub created: Option<i64>,
    pub display_name: Option<String>,
    #[serde(default)]
    pub id: String,
    pub institution_name: Option<String>,
    pub last4: Option<String>,
    pub livemode: Option<bool>,
    #[serde(default)]
    pub object: String,
    pub ownership: Option<Expandable<FinancialConnectionsAccountOwnership>>,
    pub ownership_refresh: Option<FinancialConnectionsAccountRefresh>,
    pub permissions: Option<Vec<Permission>>,
    pub status: Option<AccountStatus>,
    pub subcategory: Option<AccountSubcategory>,
    pub subscriptions: Option<Vec<Subscription>>,
    pub supported_payment_method_types: Option<Vec<SupportedPaymentMethodType>>,
    pub transaction_refresh: Option<FinancialConnectionsAccountTransactionRefresh>,
}

/// Ownership details fetched for an account
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancialConnectionsAccountOwnership {
    pub created: Option<i64>,
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub object: String,
    pub owners: Option<List<FinancialConnectionsAccountOwner>>,
}

/// One owner listed on an account's ownership record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancialConnectionsAccountOwner {
    pub email: Option<String>,
    #[serde(default)]
    pub id: String,
    pub name: Option<String>,
    #[serde(default)]
    pub object: String,
    pub ownership: Option<Expandable<FinancialConnectionsAccountOwnership>>,
    pub phone: Option<String>,
    pub raw_address: Option<String>,
    pub refreshed_at: Option<i64>,
}
