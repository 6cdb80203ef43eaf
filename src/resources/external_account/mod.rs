//! External accounts: the bank accounts and cards an account pays out to
//!
//! # Features
//!
//! - **Union decoding**: `ExternalAccount` picks its variant from the `object`
//!   field and keeps unknown kinds as `Unrecognized` instead of failing
//! - **Polymorphic params**: `ExternalAccountParams` is either a token string or
//!   inline bank details tagged with `object=bank_account`

mod enums;
mod params;
mod types;
mod union;

pub use enums::*;
pub use params::{BankAccountDocumentsParams, BankAccountListParams, BankAccountParams};
pub use types::{
    BankAccount, BankAccountRequirements, BankAccountRequirementsError, Card, CardNetworks,
};
pub use union::{BankAccountDetailsParams, ExternalAccount, ExternalAccountParams};

use crate::params::{impl_expand, impl_list_params, impl_metadata, impl_params};
use crate::types::impl_object;

impl_object!(BankAccount => "bank_account", Card => "card");

impl_params!(BankAccountParams, BankAccountListParams);
impl_expand!(BankAccountParams => expand, BankAccountListParams => list.expand);
impl_metadata!(BankAccountParams);
impl_list_params!(BankAccountListParams);

#[cfg(test)]
mod tests;
