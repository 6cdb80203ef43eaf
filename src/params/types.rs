//! Parameter traits and shared parameter shapes

use crate::error::{Error, Result};
use crate::types::Metadata;
use crate::types::OptionStringExt;
use serde::Serialize;
use std::collections::BTreeMap;

/// Longest idempotency key the API accepts
pub const MAX_IDEMPOTENCY_KEY_LEN: usize = 255;

// ============================================================================
// Parameter Traits
// ============================================================================

/// Top-level parameter set sent to an endpoint
pub trait Params {
    /// Raw extra values for keys the typed fields do not model
    fn extra_mut(&mut self) -> &mut Extra;

    /// Send an additional raw key, e.g. `"settings[new_field]"`
    fn add_extra(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.extra_mut().insert(key, value);
    }
}

/// Parameter set that accepts `expand[]`
pub trait ExpandParams {
    /// The list of fields to expand
    fn expand_mut(&mut self) -> &mut Vec<String>;

    /// Ask the API to expand a field in the response
    fn add_expand(&mut self, field: impl Into<String>) {
        self.expand_mut().push(field.into());
    }
}

/// Parameter set that carries `metadata`
pub trait MetadataParams {
    /// The metadata map, created on first use
    fn metadata_mut(&mut self) -> &mut Option<Metadata>;

    /// Add a metadata key-value pair
    fn add_metadata(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.metadata_mut()
            .get_or_insert_with(Metadata::new)
            .insert(key.into(), value.into());
    }
}

/// List parameter set, used by the paginator to move the cursor
pub trait ListParamsExt {
    /// Shared list fields
    fn list(&self) -> &ListParams;

    /// Shared list fields, mutably
    fn list_mut(&mut self) -> &mut ListParams;
}

macro_rules! impl_params {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::params::Params for $ty {
                fn extra_mut(&mut self) -> &mut $crate::params::Extra {
                    &mut self.extra
                }
            }
        )+
    };
}

macro_rules! impl_expand {
    ($($ty:ty => $($field:ident).+),+ $(,)?) => {
        $(
            impl $crate::params::ExpandParams for $ty {
                fn expand_mut(&mut self) -> &mut Vec<String> {
                    &mut self.$($field).+
                }
            }
        )+
    };
}

macro_rules! impl_metadata {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::params::MetadataParams for $ty {
                fn metadata_mut(&mut self) -> &mut Option<$crate::types::Metadata> {
                    &mut self.metadata
                }
            }
        )+
    };
}

macro_rules! impl_list_params {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::params::ListParamsExt for $ty {
                fn list(&self) -> &$crate::params::ListParams {
                    &self.list
                }

                fn list_mut(&mut self) -> &mut $crate::params::ListParams {
                    &mut self.list
                }
            }
        )+
    };
}

pub(crate) use impl_expand;
pub(crate) use impl_list_params;
pub(crate) use impl_metadata;
pub(crate) use impl_params;

// ============================================================================
// Shared Shapes
// ============================================================================

/// Raw form values flattened into a parameter set
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Extra(BTreeMap<String, String>);

impl Extra {
    /// Insert a raw key, replacing any previous value
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Value for a raw key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Whether no extra values were added
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Cursor and page size shared by every list endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListParams {
    /// Page backwards, ending before this object id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ending_before: Option<String>,
    /// Page size, 1 to 100
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    /// Page forwards, starting after this object id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starting_after: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
}

/// Bounds of a range filter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RangeBounds {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gt: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gte: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lt: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lte: Option<i64>,
}

/// Filter on a timestamp: an exact value or a range, under the same key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RangeQuery {
    /// `created=<t>`
    Exact(i64),
    /// `created[gte]=<t>` and friends
    Range(RangeBounds),
}

impl RangeQuery {
    /// Match exactly this timestamp
    pub fn exact(t: i64) -> Self {
        RangeQuery::Exact(t)
    }

    /// Inclusive range `[from, to]`
    pub fn between(from: i64, to: i64) -> Self {
        RangeQuery::Range(RangeBounds {
            gte: Some(from),
            lte: Some(to),
            ..RangeBounds::default()
        })
    }

    /// Everything at or after `t`
    pub fn since(t: i64) -> Self {
        RangeQuery::Range(RangeBounds {
            gte: Some(t),
            ..RangeBounds::default()
        })
    }

    /// Everything strictly before `t`
    pub fn before(t: i64) -> Self {
        RangeQuery::Range(RangeBounds {
            lt: Some(t),
            ..RangeBounds::default()
        })
    }
}

// ============================================================================
// Request Options
// ============================================================================

/// Per-request settings that travel as headers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// Makes a retried write safe; generated automatically for writes if unset
    pub idempotency_key: Option<String>,
    /// Act on behalf of a connected account (`Stripe-Account` header)
    pub stripe_account: Option<String>,
    /// Additional headers
    pub headers: BTreeMap<String, String>,
    /// Override the client's max network retries
    pub max_retries: Option<u32>,
}

impl RequestOptions {
    /// Create empty options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the idempotency key
    #[must_use]
    pub fn idempotency_key(mut self, key: impl Into<String>) -> Self {
        self.idempotency_key = Some(key.into());
        self
    }

    /// Act on behalf of a connected account
    #[must_use]
    pub fn stripe_account(mut self, account: impl Into<String>) -> Self {
        self.stripe_account = Some(account.into());
        self
    }

    /// Add a header
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Override max retries
    #[must_use]
    pub fn retries(mut self, retries: u32) -> Self {
        self.max_retries = Some(retries);
        self
    }

    /// The trimmed idempotency key, rejected when longer than the API allows
    pub fn validated_idempotency_key(&self) -> Result<Option<String>> {
        let key = self.idempotency_key.clone().none_if_blank();
        if let Some(k) = &key {
            if k.chars().count() > MAX_IDEMPOTENCY_KEY_LEN {
                return Err(Error::invalid_value(
                    "idempotency_key",
                    format!(
                        "must be at most {MAX_IDEMPOTENCY_KEY_LEN} characters, got {}",
                        k.chars().count()
                    ),
                ));
            }
        }
        Ok(key)
    }

    /// The trimmed connected account id
    pub fn connected_account(&self) -> Option<String> {
        self.stripe_account.clone().none_if_blank()
    }
}
