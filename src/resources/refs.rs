//! Minimal reference types for objects outside the modelled slice
//!
//! Only the fields needed to identify the object are decoded. They exist so
//! that expandable references to them have something to expand into.

use crate::types::{impl_object, Metadata};
use serde::{Deserialize, Serialize};

/// A customer, as referenced from tax IDs, cards and payment methods
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub created: Option<i64>,
    pub deleted: Option<bool>,
    pub description: Option<String>,
    pub email: Option<String>,
    #[serde(default)]
    pub id: String,
    pub livemode: Option<bool>,
    pub metadata: Option<Metadata>,
    pub name: Option<String>,
    #[serde(default)]
    pub object: String,
}

/// A Connect platform application
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub deleted: Option<bool>,
    #[serde(default)]
    pub id: String,
    pub name: Option<String>,
    #[serde(default)]
    pub object: String,
}

/// An uploaded file, e.g. an identity document or a brand icon
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct File {
    pub created: Option<i64>,
    pub deleted: Option<bool>,
    pub expires_at: Option<i64>,
    pub filename: Option<String>,
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub object: String,
    pub purpose: Option<String>,
    pub size: Option<i64>,
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub type_: Option<String>,
    pub url: Option<String>,
}

/// A charge, as referenced from payment methods it generated
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Charge {
    pub amount: Option<i64>,
    pub created: Option<i64>,
    pub currency: Option<String>,
    #[serde(default)]
    pub id: String,
    pub livemode: Option<bool>,
    pub metadata: Option<Metadata>,
    #[serde(default)]
    pub object: String,
    pub paid: Option<bool>,
    pub status: Option<String>,
}

/// A single attempt to set up a payment method for future use
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SetupAttempt {
    pub created: Option<i64>,
    #[serde(default)]
    pub id: String,
    pub livemode: Option<bool>,
    #[serde(default)]
    pub object: String,
    pub payment_method: Option<String>,
    pub setup_intent: Option<String>,
    pub status: Option<String>,
    pub usage: Option<String>,
}

impl_object!(
    Customer => "customer",
    Application => "application",
    File => "file",
    Charge => "charge",
    SetupAttempt => "setup_attempt",
);
