//! Auth gateway: REST calls to the host's `/api` session endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call reports [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics. Response bodies are parsed
//! by pure helpers so status/body handling stays testable without a browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ApiMessage, ChallengeVerification, Credentials, User};

pub const SESSION_ENDPOINT: &str = "/api/auth/me";
pub const LOGIN_ENDPOINT: &str = "/api/auth/login";
pub const LOGOUT_ENDPOINT: &str = "/api/auth/logout";
pub const CHALLENGE_ENDPOINT: &str = "/api/recaptcha/verify";

/// Failure talking to the host API.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed: {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

/// Backend operations the session and login flows depend on.
///
/// Implementations never touch UI state; callers decide how a result changes
/// the session store or the login flow.
#[allow(async_fn_in_trait)]
pub trait AuthGateway {
    /// Resolve the current session. `Ok(None)` means "not logged in".
    async fn current_user(&self) -> Result<Option<User>, ApiError>;

    /// Redeem a bot-challenge token.
    async fn verify_challenge(&self, token: &str) -> Result<ChallengeVerification, ApiError>;

    /// Submit credentials. On success the host sets the session cookie.
    async fn login(&self, credentials: &Credentials) -> Result<ApiMessage, ApiError>;

    /// Invalidate the current session.
    async fn logout(&self) -> Result<(), ApiError>;
}

/// Browser gateway backed by same-origin `fetch` calls.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpAuthGateway;

#[cfg(any(test, feature = "hydrate"))]
fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Interpret a `{success, message}` response.
///
/// The host answers auth failures with a JSON envelope, sometimes under a
/// 4xx status; the envelope wins over the status when it parses.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn parse_message_body(status: u16, body: &str) -> Result<ApiMessage, ApiError> {
    match serde_json::from_str::<ApiMessage>(body) {
        Ok(message) => Ok(message),
        Err(e) if is_success(status) => Err(ApiError::Decode(e.to_string())),
        Err(_) => Err(ApiError::Status(status)),
    }
}

/// Interpret a challenge verification response.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn parse_challenge_body(status: u16, body: &str) -> Result<ChallengeVerification, ApiError> {
    match serde_json::from_str::<ChallengeVerification>(body) {
        Ok(verification) => Ok(verification),
        Err(e) if is_success(status) => Err(ApiError::Decode(e.to_string())),
        Err(_) => Err(ApiError::Status(status)),
    }
}

/// Interpret a `/api/auth/me` response. 401/403 mean "no session".
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn parse_session_body(status: u16, body: &str) -> Result<Option<User>, ApiError> {
    if status == 401 || status == 403 {
        return Ok(None);
    }
    if !is_success(status) {
        return Err(ApiError::Status(status));
    }
    serde_json::from_str::<User>(body)
        .map(Some)
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn read_response(resp: gloo_net::http::Response) -> Result<(u16, String), ApiError> {
    let status = resp.status();
    let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
    Ok((status, body))
}

#[cfg(feature = "hydrate")]
async fn post_json<T: serde::Serialize>(url: &str, payload: &T) -> Result<(u16, String), ApiError> {
    let resp = gloo_net::http::Request::post(url)
        .json(payload)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_response(resp).await
}

impl AuthGateway for HttpAuthGateway {
    async fn current_user(&self) -> Result<Option<User>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(SESSION_ENDPOINT)
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            let (status, body) = read_response(resp).await?;
            parse_session_body(status, &body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    async fn verify_challenge(&self, token: &str) -> Result<ChallengeVerification, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let payload = super::types::ChallengeRequest { token: token.to_owned() };
            let (status, body) = post_json(CHALLENGE_ENDPOINT, &payload).await?;
            parse_challenge_body(status, &body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
            Err(ApiError::Unavailable)
        }
    }

    async fn login(&self, credentials: &Credentials) -> Result<ApiMessage, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let (status, body) = post_json(LOGIN_ENDPOINT, credentials).await?;
            parse_message_body(status, &body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credentials;
            Err(ApiError::Unavailable)
        }
    }

    async fn logout(&self) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(LOGOUT_ENDPOINT)
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            let status = resp.status();
            if !is_success(status) {
                return Err(ApiError::Status(status));
            }
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }
}
