//! API resources and their parameter sets
//!
//! Each submodule holds the response types, request parameters and
//! enumerations for one resource family. Types are plain data: every field
//! is optional except `id` and `object`, and unknown JSON fields are ignored.
//!
//! # Features
//!
//! - **Accounts**: `Account`, `AccountParams` and `Person`
//! - **External accounts**: `BankAccount`, `Card` and the `ExternalAccount` union
//! - **Confirmation tokens**: the token and its payment method preview
//! - **Tax IDs** and **Financial Connections accounts**
//! - **References**: minimal `Customer`, `Application`, `File`, `Charge` and
//!   `SetupAttempt`

pub mod account;
pub mod confirmation_token;
pub mod connect_collection_transfer;
pub mod external_account;
pub mod financial_connections;
pub mod person;
pub mod refs;
pub mod tax_id;

pub use account::{Account, AccountListParams, AccountParams, AccountRejectParams, DelayDays};
pub use confirmation_token::{
    ConfirmationToken, ConfirmationTokenParams, TestHelpersConfirmationTokenParams,
};
pub use connect_collection_transfer::ConnectCollectionTransfer;
pub use external_account::{
    BankAccount, BankAccountListParams, BankAccountParams, Card, ExternalAccount,
    ExternalAccountParams,
};
pub use financial_connections::{
    FinancialConnectionsAccount, FinancialConnectionsAccountDisconnectParams,
    FinancialConnectionsAccountListOwnersParams, FinancialConnectionsAccountListParams,
    FinancialConnectionsAccountOwner, FinancialConnectionsAccountOwnership,
    FinancialConnectionsAccountParams, FinancialConnectionsAccountRefreshParams,
    FinancialConnectionsAccountSubscribeParams, FinancialConnectionsAccountUnsubscribeParams,
};
pub use person::{Person, PersonParams};
pub use refs::{Application, Charge, Customer, File, SetupAttempt};
pub use tax_id::{TaxId, TaxIdListParams, TaxIdParams};

#[cfg(test)]
mod tests;
