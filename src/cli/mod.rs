//! CLI module
//!
//! Command-line interface over the service clients.
//!
//! # Commands
//!
//! - `account` - get, list, external-accounts, reject
//! - `tax-id` - list, get, delete
//! - `confirmation-token` - get
//! - `test-helpers` - confirmation-token
//! - `fc-account` - get, list, disconnect, refresh, owners
//! - `encode` - show the form encoding of a JSON document, offline

mod commands;
mod runner;

pub use commands::{
    AccountCommand, Cli, Commands, ConfirmationTokenCommand, ExpandArgs, FcAccountCommand,
    ListArgs, TaxIdCommand, TestHelpersCommand,
};
pub use runner::Runner;
