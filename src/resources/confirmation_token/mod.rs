//! Confirmation tokens
//!
//! A confirmation token snapshots the payment method details collected on
//! the client. Outside of tests they are created by the client SDKs; the
//! test-helper endpoint creates them server-side.

mod enums;
mod params;
mod types;

pub use enums::*;
pub use params::*;
pub use types::*;

use crate::params::{impl_expand, impl_metadata, impl_params};
use crate::types::impl_object;

impl_object!(ConfirmationToken => "confirmation_token");

impl_params!(ConfirmationTokenParams, TestHelpersConfirmationTokenParams);
impl_expand!(
    ConfirmationTokenParams => expand,
    TestHelpersConfirmationTokenParams => expand,
);
impl_metadata!(PaymentMethodDataParams);
