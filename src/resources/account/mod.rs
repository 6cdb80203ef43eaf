//! Connected accounts
//!
//! # Features
//!
//! - **Account**: business profile, capabilities, company, controller,
//!   requirements, settings and TOS acceptance, plus the embedded
//!   `external_accounts` list
//! - **AccountParams**: create/update parameters, including the individual
//!   (`PersonParams`), the `external_account` token-or-details parameter and
//!   the payout `DelayDays`

mod enums;
mod params;
mod types;

pub use enums::*;
pub use params::*;
pub use types::*;

use crate::params::{impl_expand, impl_list_params, impl_metadata, impl_params};
use crate::types::{impl_object, timestamp_to_datetime};
use chrono::{DateTime, Utc};

impl_object!(Account => "account");

impl Account {
    /// `created` as a UTC datetime
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created.and_then(timestamp_to_datetime)
    }

    /// Whether the account can both accept charges and receive payouts
    pub fn is_fully_enabled(&self) -> bool {
        self.charges_enabled == Some(true) && self.payouts_enabled == Some(true)
    }
}

impl_params!(AccountParams, AccountListParams, AccountRejectParams);
impl_expand!(
    AccountParams => expand,
    AccountListParams => list.expand,
    AccountRejectParams => expand,
);
impl_metadata!(AccountParams);
impl_list_params!(AccountListParams);
