//! Expandable references
//!
//! Many fields arrive either as a bare identifier string or, when the
//! caller asked for them with `expand[]`, as the full nested object.
//!
//! # Features
//!
//! - **Shape detection**: a JSON string decodes to `Id`, a JSON object to `Object`
//! - **Strict decoding**: any other payload is an error, never a half-filled value
//! - **Lossless**: serializes back to the shape it was decoded from

mod expandable;

pub use expandable::Expandable;
