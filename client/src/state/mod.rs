//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `login`, `toast`) so components can
//! depend on small focused models. Flows report what should happen next as
//! `effect::UiEffect` values instead of reaching into other state.

pub mod effect;
pub mod login;
pub mod session;
pub mod toast;
