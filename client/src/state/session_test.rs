use futures::executor::block_on;

use super::*;
use crate::net::fake::FakeGateway;
use crate::net::types::Role;

fn user(email: &str) -> User {
    User {
        user_id: "u1".to_owned(),
        name: "Mama".to_owned(),
        email: email.to_owned(),
        has_shop: false,
        is_active: true,
        role: Role::User,
        exp: None,
    }
}

// =============================================================
// SessionState
// =============================================================

#[test]
fn default_has_no_user_and_is_not_loading() {
    let state = SessionState::default();
    assert!(state.current_user().is_none());
    assert!(!state.loading);
}

#[test]
fn startup_is_loading() {
    assert!(SessionState::startup().loading);
}

#[test]
fn apply_resolution_sets_user_and_clears_loading() {
    let mut state = SessionState::startup();
    state.apply_resolution(Some(user("a@b.com")));
    assert!(!state.loading);
    assert_eq!(state.current_user().map(|u| u.email.as_str()), Some("a@b.com"));
    assert!(state.is_authenticated());
}

#[test]
fn user_without_email_is_not_authenticated() {
    let mut state = SessionState::default();
    state.apply_resolution(Some(user("")));
    assert!(state.current_user().is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn set_loading_keeps_cached_user_until_resolved() {
    let mut state = SessionState::default();
    state.apply_resolution(Some(user("a@b.com")));
    state.set_loading(true);
    assert!(state.loading);
    assert!(state.is_authenticated());
    state.apply_resolution(None);
    assert!(!state.is_authenticated());
}

#[test]
fn clear_drops_user() {
    let mut state = SessionState::default();
    state.apply_resolution(Some(user("a@b.com")));
    state.clear();
    assert_eq!(state, SessionState::default());
}

// =============================================================
// resolve_session
// =============================================================

#[test]
fn resolve_session_returns_backend_user() {
    let gateway = FakeGateway::default();
    *gateway.session.borrow_mut() = Ok(Some(user("a@b.com")));
    let resolved = block_on(resolve_session(&gateway));
    assert_eq!(resolved.map(|u| u.email), Some("a@b.com".to_owned()));
    assert_eq!(gateway.calls(), vec!["current_user"]);
}

#[test]
fn resolve_session_failure_is_logged_out() {
    let gateway = FakeGateway::default();
    *gateway.session.borrow_mut() = Err(ApiError::Status(500));
    assert!(block_on(resolve_session(&gateway)).is_none());
}

#[test]
fn resolve_session_network_error_is_logged_out() {
    let gateway = FakeGateway::default();
    *gateway.session.borrow_mut() = Err(ApiError::Network("offline".to_owned()));
    assert!(block_on(resolve_session(&gateway)).is_none());
}
