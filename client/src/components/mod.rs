//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the session and toast stores from Leptos context and push
//! flow effects through `util::effects`.

pub mod login_form;
pub mod navbar;
pub mod protected;
pub mod recaptcha;
pub mod toaster;
