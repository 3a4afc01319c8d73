//! Session store for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided once by `App` as `RwSignal<SessionState>` and read by the navbar,
//! the login form and protected pages. Setting `loading` asks the resolver
//! installed by `util::auth::install_session_resolver` to re-query the host.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::api::{ApiError, AuthGateway};
use crate::net::types::User;

/// Cached session plus the refresh flag.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub user: Option<User>,
    pub loading: bool,
}

impl SessionState {
    /// State at page load: nothing known yet, resolution pending.
    #[must_use]
    pub fn startup() -> Self {
        Self { user: None, loading: true }
    }

    /// The signed-in user, if any. A record without an email does not count.
    #[must_use]
    pub fn current_user(&self) -> Option<&User> {
        self.user.as_ref().filter(|user| !user.email.is_empty())
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.current_user().is_some()
    }

    /// `true` requests a refetch from the host on the next observation.
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Replace the cached session with a freshly resolved one.
    pub fn apply_resolution(&mut self, user: Option<User>) {
        self.user = user;
        self.loading = false;
    }

    pub fn clear(&mut self) {
        self.user = None;
        self.loading = false;
    }
}

/// Query the host for the current session.
///
/// Every failure resolves to `None` (logged out); nothing is surfaced to the
/// user.
pub async fn resolve_session<G: AuthGateway>(gateway: &G) -> Option<User> {
    match gateway.current_user().await {
        Ok(user) => user,
        Err(ApiError::Unavailable) => None,
        Err(e) => {
            leptos::logging::warn!("session resolution failed: {e}");
            None
        }
    }
}
