//! Recording `AuthGateway` used by flow tests.

use std::cell::RefCell;

use super::api::{ApiError, AuthGateway};
use super::types::{ApiMessage, ChallengeVerification, Credentials, User};

/// Gateway with canned responses that records every call it receives.
pub(crate) struct FakeGateway {
    pub session: RefCell<Result<Option<User>, ApiError>>,
    pub challenge: RefCell<Result<ChallengeVerification, ApiError>>,
    pub login: RefCell<Result<ApiMessage, ApiError>>,
    pub logout: RefCell<Result<(), ApiError>>,
    pub calls: RefCell<Vec<String>>,
}

impl Default for FakeGateway {
    fn default() -> Self {
        Self {
            session: RefCell::new(Ok(None)),
            challenge: RefCell::new(Ok(ChallengeVerification { success: true, message: None })),
            login: RefCell::new(Ok(ApiMessage::ok("Logged in"))),
            logout: RefCell::new(Ok(())),
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl FakeGateway {
    pub fn with_login(response: Result<ApiMessage, ApiError>) -> Self {
        let gateway = Self::default();
        *gateway.login.borrow_mut() = response;
        gateway
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn login_calls(&self) -> usize {
        self.calls.borrow().iter().filter(|c| c.starts_with("login")).count()
    }
}

impl AuthGateway for FakeGateway {
    async fn current_user(&self) -> Result<Option<User>, ApiError> {
        self.calls.borrow_mut().push("current_user".to_owned());
        self.session.borrow().clone()
    }

    async fn verify_challenge(&self, token: &str) -> Result<ChallengeVerification, ApiError> {
        self.calls.borrow_mut().push(format!("verify_challenge:{token}"));
        self.challenge.borrow().clone()
    }

    async fn login(&self, credentials: &Credentials) -> Result<ApiMessage, ApiError> {
        self.calls.borrow_mut().push(format!("login:{}", credentials.email));
        self.login.borrow().clone()
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.calls.borrow_mut().push("logout".to_owned());
        self.logout.borrow().clone()
    }
}
