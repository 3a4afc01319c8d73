//! Side effects requested by the login and logout flows.
//!
//! Flows return an ordered list of effects instead of touching the DOM, router
//! or widget themselves; components apply them in order.

use super::toast::ToastKind;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiEffect {
    /// Show a toast.
    Notify(ToastKind, String),
    /// Reset the bot-challenge widget so a fresh token is required.
    ResetChallenge,
    /// Ask the session store to re-resolve the current user.
    RefreshSession,
    /// Client-side navigation to the given path.
    Navigate(String),
}

impl UiEffect {
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self::Notify(ToastKind::Success, message.into())
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::Notify(ToastKind::Error, message.into())
    }
}
