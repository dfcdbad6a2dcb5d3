//! Networking modules for the remote blog API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` defines the `BlogApi` interface and its HTTP implementation, and
//! `types` defines the JSON wire schema shared with the remote API.

pub mod api;
pub mod types;

#[cfg(test)]
pub(crate) mod mock;
