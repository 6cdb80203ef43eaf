//! Common types used throughout stripe-kit
//!
//! Shared wire shapes (addresses, list envelopes, metadata) and the small
//! traits every resource implements.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// Type Aliases
// ============================================================================

/// Arbitrary key-value pairs attached to an object
///
/// A `BTreeMap` so that encoded keys come out in a stable order.
pub type Metadata = BTreeMap<String, String>;

// ============================================================================
// HTTP Types
// ============================================================================

/// HTTP method used by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    #[default]
    GET,
    POST,
    DELETE,
}

impl Method {
    /// Whether the method mutates server state and needs an idempotency key
    pub fn is_write(self) -> bool {
        matches!(self, Method::POST | Method::DELETE)
    }

    /// Whether parameters travel in the query string rather than the body
    pub fn encodes_in_query(self) -> bool {
        matches!(self, Method::GET | Method::DELETE)
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::GET => reqwest::Method::GET,
            Method::POST => reqwest::Method::POST,
            Method::DELETE => reqwest::Method::DELETE,
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Method::GET => "GET",
            Method::POST => "POST",
            Method::DELETE => "DELETE",
        };
        f.write_str(name)
    }
}

// ============================================================================
// Resource Traits
// ============================================================================

/// Anything with an identifier, usable as a list cursor
pub trait Identified {
    /// Unique identifier of the resource
    fn id(&self) -> &str;
}

/// A top-level API resource with an identifier and a fixed `object` tag
pub trait Object: Identified {
    /// Value of the `object` field for this resource
    const OBJECT: &'static str;
}

/// Implement [`Identified`] and [`Object`] for resources with an `id: String` field
macro_rules! impl_object {
    ($($ty:ty => $tag:literal),+ $(,)?) => {
        $(
            impl $crate::types::Identified for $ty {
                fn id(&self) -> &str {
                    &self.id
                }
            }

            impl $crate::types::Object for $ty {
                const OBJECT: &'static str = $tag;
            }
        )+
    };
}

pub(crate) use impl_object;

// ============================================================================
// Shared Shapes
// ============================================================================

/// Postal address as returned by the API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub city: Option<String>,
    pub country: Option<String>,
    pub line1: Option<String>,
    pub line2: Option<String>,
    pub postal_code: Option<String>,
    pub state: Option<String>,
}

/// Postal address sent in request parameters
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AddressParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

/// One page of a list endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct List<T> {
    #[serde(default)]
    pub object: String,
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    #[serde(default)]
    pub has_more: bool,
    pub url: Option<String>,
    pub total_count: Option<i64>,
}

impl<T> List<T> {
    /// Number of items on this page
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether this page has no items
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterate over the items on this page
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

// ============================================================================
// Utilities
// ============================================================================

/// Convert a Unix timestamp (seconds) into a UTC datetime
pub fn timestamp_to_datetime(seconds: i64) -> Option<DateTime<Utc>> {
    Utc.timestamp_opt(seconds, 0).single()
}

/// Extension trait for Option<String> to handle blank strings
pub trait OptionStringExt {
    /// Trims the value and returns None if nothing is left
    fn none_if_blank(self) -> Option<String>;
}

impl OptionStringExt for Option<String> {
    fn none_if_blank(self) -> Option<String> {
        self.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
    }
}

impl OptionStringExt for String {
    fn none_if_blank(self) -> Option<String> {
        Some(self).none_if_blank()
    }
}
