use futures::executor::block_on;

use super::*;
use crate::net::api::ApiError;
use crate::net::fake::FakeGateway;
use crate::net::types::{Role, User};

fn user() -> User {
    User {
        user_id: "u1".to_owned(),
        name: "Alice".to_owned(),
        email: "alice@example.com".to_owned(),
        has_shop: false,
        is_active: true,
        role: Role::User,
        exp: None,
    }
}

// =============================================================
// should_redirect_unauth
// =============================================================

#[test]
fn should_redirect_unauth_when_not_loading_and_user_missing() {
    let state = SessionState { user: None, loading: false };
    assert!(should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_while_loading() {
    let state = SessionState { user: None, loading: true };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_when_user_exists() {
    let state = SessionState { user: Some(user()), loading: false };
    assert!(!should_redirect_unauth(&state));
}

// =============================================================
// sign_out
// =============================================================

#[test]
fn sign_out_on_protected_page_refreshes_then_goes_home() {
    let gateway = FakeGateway::default();
    let effects = block_on(sign_out(&gateway, "/user/dashboard", RouteGuard::protected()));
    assert_eq!(effects, vec![UiEffect::RefreshSession, UiEffect::Navigate("/".to_owned())]);
    assert_eq!(gateway.calls(), vec!["logout"]);
}

#[test]
fn sign_out_on_public_page_stays_put() {
    let gateway = FakeGateway::default();
    let effects = block_on(sign_out(&gateway, "/", RouteGuard::protected()));
    assert_eq!(effects, vec![UiEffect::RefreshSession]);
}

#[test]
fn sign_out_without_session_is_silent_and_leaves_no_user() {
    let gateway = FakeGateway::default();
    let mut state = SessionState::default();

    let effects = block_on(sign_out(&gateway, "/", RouteGuard::protected()));
    assert!(effects.iter().all(|e| !matches!(e, UiEffect::Notify(..))));

    assert!(effects.contains(&UiEffect::RefreshSession));
    state.set_loading(true);
    let user = block_on(crate::state::session::resolve_session(&gateway));
    state.apply_resolution(user);
    assert!(state.current_user().is_none());
}

#[test]
fn sign_out_failure_notifies_and_still_refreshes() {
    let gateway = FakeGateway::default();
    *gateway.logout.borrow_mut() = Err(ApiError::Network("offline".to_owned()));
    let effects = block_on(sign_out(&gateway, "/admin", RouteGuard::protected()));
    assert_eq!(
        effects,
        vec![
            UiEffect::error(LOGOUT_ERROR_MESSAGE),
            UiEffect::RefreshSession,
            UiEffect::Navigate("/".to_owned()),
        ]
    );
}
