//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate router/browser concerns from page and component
//! logic to improve reuse and testability.

pub mod auth;
pub mod effects;
pub mod route_guard;
