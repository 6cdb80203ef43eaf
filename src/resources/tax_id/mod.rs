//! Tax IDs of customers and accounts

mod enums;
mod params;
mod types;

pub use enums::*;
pub use params::{TaxIdListParams, TaxIdParams};
pub use types::{TaxId, TaxIdOwner, TaxIdVerification};

use crate::params::{impl_expand, impl_list_params, impl_params};
use crate::types::impl_object;

impl_object!(TaxId => "tax_id");

impl_params!(TaxIdParams, TaxIdListParams);
impl_expand!(TaxIdParams => expand, TaxIdListParams => list.expand);
impl_list_params!(TaxIdListParams);
