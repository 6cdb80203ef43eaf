//! Request parameters for tax IDs

use super::enums::TaxIdType;
use crate::params::{Extra, ListParams};
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct TaxIdParams {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<TaxIdType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct TaxIdListParams {
    #[serde(flatten)]
    pub list: ListParams,
    #[serde(flatten)]
    pub extra: Extra,
}
