//! Financial Connections accounts, their ownership and owners
//!
//! # Features
//!
//! - **Account**: holder, balances, refresh state for balance, ownership and
//!   transactions, permissions and subscriptions
//! - **Ownership**: the expandable `ownership` record and its owners list
//! - **Actions**: disconnect, refresh, subscribe and unsubscribe parameters

mod enums;
mod params;
mod types;

pub use enums::*;
pub use params::*;
pub use types::*;

use crate::params::{impl_expand, impl_list_params, impl_params};
use crate::types::impl_object;

impl_object!(
    FinancialConnectionsAccount => "financial_connections.account",
    FinancialConnectionsAccountOwnership => "financial_connections.account_ownership",
    FinancialConnectionsAccountOwner => "financial_connections.account_owner",
);

impl_params!(
    FinancialConnectionsAccountListParams,
    FinancialConnectionsAccountParams,
    FinancialConnectionsAccountListOwnersParams,
    FinancialConnectionsAccountDisconnectParams,
    FinancialConnectionsAccountRefreshParams,
    FinancialConnectionsAccountSubscribeParams,
    FinancialConnectionsAccountUnsubscribeParams,
);
impl_expand!(
    FinancialConnectionsAccountListParams => list.expand,
    FinancialConnectionsAccountParams => expand,
    FinancialConnectionsAccountListOwnersParams => list.expand,
    FinancialConnectionsAccountDisconnectParams => expand,
    FinancialConnectionsAccountRefreshParams => expand,
    FinancialConnectionsAccountSubscribeParams => expand,
    FinancialConnectionsAccountUnsubscribeParams => expand,
);
impl_list_params!(
    FinancialConnectionsAccountListParams,
    FinancialConnectionsAccountListOwnersParams,
);
