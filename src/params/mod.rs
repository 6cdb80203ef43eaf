//! Request parameters and per-request options
//!
//! # Features
//!
//! - **Mutators**: `add_expand`, `add_metadata` and `add_extra` on every parameter set
//! - **List paging**: `ListParams` flattened into each list parameter set
//! - **Range filters**: `RangeQuery` for exact or bounded timestamps
//! - **Request options**: idempotency key, connected account and extra headers,
//!   which travel as headers and are never form-encoded

mod types;

pub use types::{
    ExpandParams, Extra, ListParams, ListParamsExt, MetadataParams, Params, RangeBounds,
    RangeQuery, RequestOptions, MAX_IDEMPOTENCY_KEY_LEN,
};

pub(crate) use types::{impl_expand, impl_list_params, impl_metadata, impl_params};
