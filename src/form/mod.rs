//! Form encoding of request parameters
//!
//! The API takes `application/x-www-form-urlencoded` bodies with nested
//! structures flattened into bracket notation.
//!
//! # Features
//!
//! - **Bracket keys**: `a[b][c]` for nested objects, `a[0]` for arrays
//! - **Absent means absent**: `None` fields never reach the wire
//! - **Clearing lists**: an explicitly empty array encodes as `key=`
//! - **Stable output**: map keys come out sorted
//!
//! Anything that implements `Serialize` can be encoded; polymorphic
//! parameters pick their wire representation in their own `Serialize` impl.

mod encoder;

pub use encoder::{encode, FormValues};

#[cfg(test)]
mod tests;
