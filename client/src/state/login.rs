//! Login form state machine.
//!
//! SYSTEM CONTEXT
//! ==============
//! `LoginForm` keeps a `RwSignal<LoginFlow>` and hands it to the async drivers
//! below. The drivers call the auth gateway between two synchronous
//! transitions so no state is held across an `.await`.
//!
//! ```text
//! Idle -> ChallengePending -> ChallengeVerified -> Submitting -> Success | Failed
//! ```
//!
//! Credentials never reach the gateway unless the challenge was verified for
//! the current widget render. Any login outcome spends the challenge.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use std::cell::RefCell;
use std::sync::LazyLock;

use leptos::prelude::{RwSignal, Update};
use regex::Regex;

use super::effect::UiEffect;
use crate::net::api::{ApiError, AuthGateway};
use crate::net::types::{ApiMessage, ChallengeVerification, Credentials};
use crate::util::route_guard::{HOME_PATH, RouteGuard};

pub const MIN_PASSWORD_LEN: usize = 8;

pub const ROBOT_CHECK_MESSAGE: &str = "Please verify you're not a robot";
pub const CHALLENGE_FAILED_MESSAGE: &str = "Captcha verification failed, please try again";
pub const LOGIN_SUCCEEDED_FALLBACK: &str = "Logged in successfully";
pub const LOGIN_FAILED_FALLBACK: &str = "Login failed";
pub const LOGIN_ERROR_MESSAGE: &str = "An error occurred during login";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoginPhase {
    #[default]
    Idle,
    ChallengePending,
    ChallengeVerified,
    Submitting,
    Success,
    Failed,
}

/// Inline, per-field validation messages.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
}

impl FieldErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("login form has invalid fields")]
    Validation(FieldErrors),
    #[error("Please verify you're not a robot")]
    ChallengeRequired,
    #[error("a login attempt is already in flight")]
    InFlight,
    #[error("challenge verification failed: {0}")]
    ChallengeVerification(String),
}

impl LoginError {
    /// Toast text for this rejection, if it warrants one.
    ///
    /// Field errors render inline and a duplicate submit is silently dropped.
    #[must_use]
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            Self::Validation(_) | Self::InFlight => None,
            Self::ChallengeRequired => Some(ROBOT_CHECK_MESSAGE),
            Self::ChallengeVerification(_) => Some(CHALLENGE_FAILED_MESSAGE),
        }
    }
}

/// Validate form input, returning the credentials to submit.
///
/// # Errors
///
/// Returns the per-field messages when any field is invalid.
pub fn validate_credentials(input: &Credentials) -> Result<Credentials, FieldErrors> {
    let email = input.email.trim();
    let mut errors = FieldErrors::default();

    if email.is_empty() {
        errors.email = Some("Email is required");
    } else if !EMAIL_RE.is_match(email) {
        errors.email = Some("Please enter a valid email address");
    }

    if input.password.is_empty() {
        errors.password = Some("Password is required");
    } else if input.password.chars().count() < MIN_PASSWORD_LEN {
        errors.password = Some("Password must be at least 8 characters");
    }

    if errors.is_empty() {
        Ok(Credentials { email: email.to_owned(), password: input.password.clone() })
    } else {
        Err(errors)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginFlow {
    pub phase: LoginPhase,
    pub fields: Credentials,
    pub field_errors: FieldErrors,
    challenge_verified: bool,
    challenge_seq: u64,
}

impl LoginFlow {
    #[must_use]
    pub fn challenge_verified(&self) -> bool {
        self.challenge_verified
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.phase == LoginPhase::Submitting
    }

    #[must_use]
    pub fn submit_disabled(&self) -> bool {
        !self.challenge_verified || self.is_submitting()
    }

    pub fn set_email(&mut self, email: String) {
        self.fields.email = email;
        self.field_errors.email = None;
    }

    pub fn set_password(&mut self, password: String) {
        self.fields.password = password;
        self.field_errors.password = None;
    }

    pub fn reset_fields(&mut self) {
        self.fields = Credentials::default();
        self.field_errors = FieldErrors::default();
    }

    /// The challenge widget is on screen.
    pub fn show_challenge(&mut self) {
        if self.phase == LoginPhase::Idle {
            self.phase = LoginPhase::ChallengePending;
        }
    }

    /// The widget produced a token, or expired one (`None`).
    ///
    /// Any previous verification is discarded. Returns the sequence number to
    /// verify the token under, or `None` when there is nothing to verify.
    pub fn receive_token(&mut self, token: Option<&str>) -> Option<u64> {
        if self.is_submitting() {
            return None;
        }
        self.challenge_seq += 1;
        self.challenge_verified = false;
        self.phase = LoginPhase::ChallengePending;
        token.filter(|t| !t.is_empty()).map(|_| self.challenge_seq)
    }

    /// Record the verification result for token `seq`.
    ///
    /// Results for a superseded token, or arriving mid-submit, are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`LoginError::ChallengeVerification`] when the provider rejected
    /// the token or could not be reached.
    pub fn apply_verification(
        &mut self,
        seq: u64,
        result: Result<ChallengeVerification, ApiError>,
    ) -> Result<(), LoginError> {
        if seq != self.challenge_seq || self.is_submitting() {
            return Ok(());
        }
        let failure = match result {
            Ok(verification) if verification.success => {
                self.challenge_verified = true;
                self.phase = LoginPhase::ChallengeVerified;
                return Ok(());
            }
            Ok(verification) => verification.message.unwrap_or_else(|| "token rejected".to_owned()),
            Err(e) => e.to_string(),
        };
        self.challenge_verified = false;
        self.phase = LoginPhase::ChallengePending;
        Err(LoginError::ChallengeVerification(failure))
    }

    /// Validate and enter `Submitting`, returning what to send.
    ///
    /// Field errors are recorded even when the challenge check rejects the
    /// submit, so the form shows everything that needs fixing.
    ///
    /// # Errors
    ///
    /// Rejects a duplicate submit, an unverified challenge, or invalid fields.
    pub fn begin_submit(&mut self) -> Result<Credentials, LoginError> {
        if self.is_submitting() {
            return Err(LoginError::InFlight);
        }
        let validated = validate_credentials(&self.fields);
        self.field_errors = validated.as_ref().err().cloned().unwrap_or_default();
        if !self.challenge_verified {
            return Err(LoginError::ChallengeRequired);
        }
        let credentials = validated.map_err(LoginError::Validation)?;
        self.phase = LoginPhase::Submitting;
        Ok(credentials)
    }

    /// Settle a submission and return the effects to apply, in order.
    pub fn finish_submit(
        &mut self,
        result: Result<ApiMessage, ApiError>,
        current_path: &str,
        guard: &RouteGuard,
    ) -> Vec<UiEffect> {
        self.challenge_verified = false;
        match result {
            Ok(response) if response.success => {
                self.phase = LoginPhase::Success;
                self.reset_fields();
                let message = response.message.unwrap_or_else(|| LOGIN_SUCCEEDED_FALLBACK.to_owned());
                let mut effects = vec![UiEffect::success(message), UiEffect::ResetChallenge, UiEffect::RefreshSession];
                if guard.is_protected(current_path) {
                    effects.push(UiEffect::Navigate(HOME_PATH.to_owned()));
                }
                effects
            }
            Ok(response) => {
                self.phase = LoginPhase::Failed;
                let message = response.message.unwrap_or_else(|| LOGIN_FAILED_FALLBACK.to_owned());
                vec![UiEffect::error(message), UiEffect::ResetChallenge]
            }
            Err(e) => {
                leptos::logging::warn!("login request failed: {e}");
                self.phase = LoginPhase::Failed;
                vec![UiEffect::error(LOGIN_ERROR_MESSAGE), UiEffect::ResetChallenge]
            }
        }
    }
}

/// Imperative handle on the bot-challenge widget.
///
/// The widget reports tokens through its `on_verify` callback; the flow only
/// ever needs to wipe it.
pub trait ChallengeWidget {
    fn reset(&self);
}

/// No widget on screen (e.g. effects raised from the navbar).
impl ChallengeWidget for () {
    fn reset(&self) {}
}

/// Mutable access to a [`LoginFlow`] that may live in a reactive signal.
pub trait FlowHandle {
    /// Run `f` against the flow; `None` if the flow no longer exists.
    fn with_flow<R>(&self, f: impl FnOnce(&mut LoginFlow) -> R) -> Option<R>;
}

impl FlowHandle for RwSignal<LoginFlow> {
    fn with_flow<R>(&self, f: impl FnOnce(&mut LoginFlow) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl FlowHandle for RefCell<LoginFlow> {
    fn with_flow<R>(&self, f: impl FnOnce(&mut LoginFlow) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// Handle a token (or expiry) from the challenge widget.
pub async fn verify_challenge<G, H>(gateway: &G, flow: &H, token: Option<String>) -> Vec<UiEffect>
where
    G: AuthGateway,
    H: FlowHandle,
{
    let Some(Some(seq)) = flow.with_flow(|f| f.receive_token(token.as_deref())) else {
        return Vec::new();
    };
    let token = token.unwrap_or_default();
    let result = gateway.verify_challenge(&token).await;
    match flow.with_flow(|f| f.apply_verification(seq, result)) {
        Some(Err(e)) => {
            leptos::logging::warn!("{e}");
            let mut effects: Vec<UiEffect> = e.notice().map(UiEffect::error).into_iter().collect();
            effects.push(UiEffect::ResetChallenge);
            effects
        }
        _ => Vec::new(),
    }
}

/// Submit the form. `current_path` is where the user was when submitting.
pub async fn submit_login<G, H>(gateway: &G, flow: &H, guard: &RouteGuard, current_path: &str) -> Vec<UiEffect>
where
    G: AuthGateway,
    H: FlowHandle,
{
    let credentials = match flow.with_flow(LoginFlow::begin_submit) {
        Some(Ok(credentials)) => credentials,
        Some(Err(e)) => return e.notice().map(UiEffect::error).into_iter().collect(),
        None => return Vec::new(),
    };
    let result = gateway.login(&credentials).await;
    flow.with_flow(|f| f.finish_submit(result, current_path, guard))
        .unwrap_or_default()
}
