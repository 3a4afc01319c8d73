//! Shared wire DTOs for the browser/host boundary.
//!
//! DESIGN
//! ======
//! The host serializes these same types from `/api/auth/*`, so field names
//! follow the upstream storefront's camelCase token claims.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Account role carried in the access token.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
    /// Any role the storefront does not know about yet.
    #[serde(other)]
    Other,
}

impl Role {
    /// Route segment for the role's dashboard.
    ///
    /// Unrecognised roles land on the regular user dashboard.
    #[must_use]
    pub fn dashboard_segment(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User | Self::Other => "user",
        }
    }
}

/// The authenticated user, as decoded from the session's access token.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Upstream user identifier.
    #[serde(default)]
    pub user_id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Login email. An empty email is treated as "no session".
    pub email: String,
    /// Whether the user already owns a shop.
    #[serde(default)]
    pub has_shop: bool,
    /// Whether the account is active upstream.
    #[serde(default = "default_active")]
    pub is_active: bool,
    /// Account role.
    #[serde(default)]
    pub role: Role,
    /// Token expiry in seconds since the Unix epoch, if present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}

fn default_active() -> bool {
    true
}

impl User {
    /// Whether the token behind this user has expired at `now_secs`.
    #[must_use]
    pub fn is_expired_at(&self, now_secs: i64) -> bool {
        self.exp.is_some_and(|exp| exp <= now_secs)
    }
}

/// Login form input. Never persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// `{success, message}` envelope returned by login and logout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiMessage {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ApiMessage {
    #[must_use]
    pub fn ok(message: impl Into<String>) -> Self {
        Self { success: true, message: Some(message.into()) }
    }

    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self { success: false, message: Some(message.into()) }
    }
}

/// Bot-challenge verification request body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeRequest {
    pub token: String,
}

/// Bot-challenge verification result.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeVerification {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
