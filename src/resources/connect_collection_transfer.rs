//! Connect collection transfers

use crate::expand::Expandable;
use crate::resources::account::Account;
use crate::types::impl_object;
use serde::{Deserialize, Serialize};

/// Funds collected from a connected account's balance by the platform
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConnectCollectionTransfer {
    pub amount: Option<i64>,
    pub currency: Option<String>,
    pub destination: Option<Expandable<Account>>,
    #[serde(default)]
    pub id: String,
    pub livemode: Option<bool>,
    #[serde(default)]
    pub object: String,
}

impl_object!(ConnectCollectionTransfer => "connect_collection_transfer");
