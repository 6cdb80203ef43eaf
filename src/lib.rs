// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::match_wildcard_for_single_variants)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # stripe-kit
//!
//! Typed resources, form encoding and a retrying async client for the
//! Connect accounts, external accounts, tax IDs, confirmation tokens and
//! Financial Connections parts of the Stripe API.
//!
//! ## Features
//!
//! - **Expandable references**: fields that are either an id or the full object
//! - **External account union**: bank accounts and cards behind one type
//! - **Form encoding**: nested `key[sub][0]=value` bodies from typed params
//! - **Retrying client**: idempotency keys, backoff, `Stripe-Should-Retry`
//! - **Pagination**: cursor pages, collected or streamed
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use stripe_kit::{Client, Result};
//! use stripe_kit::resources::AccountListParams;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = Client::new("sk_test_...")?;
//!
//!     let accounts = client
//!         .accounts()
//!         .list(AccountListParams::default())
//!         .collect_all(Some(50))
//!         .await?;
//!     println!("{} accounts", accounts.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      Client (api module)                        │
//! │  accounts()  tax_ids()  confirmation_tokens()  fc accounts()    │
//! └─────────────────────────────────────────────────────────────────┘
//!                                │
//! ┌──────────┬───────────┬───────┴───────┬───────────┬─────────────┐
//! │  Params  │   Form    │  Pagination   │  Backend  │  Resources  │
//! ├──────────┼───────────┼───────────────┼───────────┼─────────────┤
//! │ Extra    │ Nested    │ Cursor        │ Retry     │ Expandable  │
//! │ Expand   │ Arrays    │ Backward      │ Backoff   │ Union       │
//! │ Metadata │ Sorted    │ Stream        │ Rate Limit│ Enums       │
//! │ Options  │           │               │ Auth      │             │
//! └──────────┴───────────┴───────────────┴───────────┴─────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Closed string enumerations
pub(crate) mod enums;

/// Authentication
pub mod auth;

/// Expandable references
pub mod expand;

/// Form encoding of parameters
pub mod form;

/// Request parameters and options
pub mod params;

/// Resource types and their parameter sets
pub mod resources;

/// HTTP backend with retry and rate limiting
pub mod http;

/// Cursor pagination
pub mod pagination;

/// Service clients
pub mod api;

/// Client configuration
pub mod config;

/// Command-line interface
pub mod cli;

#[cfg(test)]
mod testing;

// ============================================================================
// Re-exports
// ============================================================================

pub use api::Client;
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use expand::Expandable;
pub use pagination::ListPager;
pub use params::RequestOptions;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
