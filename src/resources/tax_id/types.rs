//! Tax ID response types

use super::enums::{TaxIdOwnerType, TaxIdType, TaxIdVerificationStatus};
use crate::expand::Expandable;
use crate::resources::account::Account;
use crate::resources::refs::{Application, Customer};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaxIdOwner {
    pub account: Option<Expandable<Account>>,
    pub application: Option<Expandable<Application>>,
    pub customer: Option<Expandable<Customer>>,
    #[serde(rename = "type")]
    pub type_: Option<TaxIdOwnerType>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaxIdVerification {
    pub status: Option<TaxIdVerificationStatus>,
    pub verified_address: Option<String>,
    pub verified_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaxId {
    pub country: Option<String>,
    pub created: Option<i64>,
    pub customer: Option<Expandable<Customer>>,
    pub deleted: Option<bool>,
    #[serde(default)]
    pub id: String,
    pub livemode: Option<bool>,
    #[serde(default)]
    pub object: String,
    pub owner: Option<TaxIdOwner>,
    #[serde(rename = "type")]
    pub type_: Option<TaxIdType>,
    pub value: Option<String>,
    pub verification: Option<TaxIdVerification>,
}
