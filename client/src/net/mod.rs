//! Networking modules for the host's REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` is the auth gateway the session and login flows call, and `types`
//! defines the shared wire schema the host also serializes.

pub mod api;
#[cfg(test)]
pub(crate) mod fake;
pub mod types;
