//! Persons associated with an account

mod enums;
mod params;
mod types;

pub use enums::*;
pub use params::*;
pub use types::*;

use crate::params::{impl_expand, impl_metadata, impl_params};
use crate::types::impl_object;

impl_object!(Person => "person");

impl_params!(PersonParams);
impl_expand!(PersonParams => expand);
impl_metadata!(PersonParams);
