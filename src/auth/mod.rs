//! Authentication module
//!
//! Supports: Bearer (what the client sends) and Basic with the secret key as the
//! username. Keys are wrapped in [`ApiKey`] so they never show up in
//! `Debug` output or logs.

mod authenticator;
mod types;

pub use authenticator::Authenticator;
pub use types::{ApiKey, AuthConfig};

#[cfg(test)]
mod tests;
