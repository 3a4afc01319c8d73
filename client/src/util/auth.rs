//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` installs the session resolver once; protected pages install the
//! unauthenticated redirect; the navbar drives `sign_out`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::api::AuthGateway;
use crate::state::effect::UiEffect;
use crate::state::session::SessionState;
use crate::util::route_guard::{HOME_PATH, LOGIN_PATH, RouteGuard};

pub const LOGOUT_ERROR_MESSAGE: &str = "Logout failed, please try again";

/// Whether a protected page should bounce the visitor to `/login`.
pub fn should_redirect_unauth(state: &SessionState) -> bool {
    !state.loading && !state.is_authenticated()
}

/// Redirect to `/login` whenever the session has resolved with no user.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if session.with(should_redirect_unauth) {
            navigate(LOGIN_PATH, NavigateOptions::default());
        }
    });
}

/// Re-resolve the session from the host every time `loading` turns on.
///
/// The startup state has `loading` set, so this also performs the initial
/// resolution.
pub fn install_session_resolver<G>(session: RwSignal<SessionState>, gateway: G)
where
    G: AuthGateway + Clone + 'static,
{
    let loading = Memo::new(move |_| session.with(|s| s.loading));
    Effect::new(move || {
        if !loading.get() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let gateway = gateway.clone();
            leptos::task::spawn_local(async move {
                let user = crate::state::session::resolve_session(&gateway).await;
                session.try_update(|s| s.apply_resolution(user));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &gateway;
        }
    });
}

/// Log out, then request a session refresh and leave protected pages.
///
/// The session is refreshed even when the host call fails so the navbar
/// reflects whatever the host now reports.
pub async fn sign_out<G: AuthGateway>(gateway: &G, current_path: &str, guard: &RouteGuard) -> Vec<UiEffect> {
    let mut effects = Vec::new();
    if let Err(e) = gateway.logout().await {
        leptos::logging::warn!("logout failed: {e}");
        effects.push(UiEffect::error(LOGOUT_ERROR_MESSAGE));
    }
    effects.push(UiEffect::RefreshSession);
    if guard.is_protected(current_path) {
        effects.push(UiEffect::Navigate(HOME_PATH.to_owned()));
    }
    effects
}
