//! Authentication state management.

use serde::Deserialize;

/// Header carrying the session token on protected requests.
pub const SESSION_HEADER: &str = "Signalfire-Session";

/// Session handed out by `POST /v1/auth`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Session token.
    pub token: String,
}

impl Session {
    /// Create a session.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// Check if the token looks usable.
    pub fn is_valid(&self) -> bool {
        !self.token.trim().is_empty()
    }
}

/// Body of a successful auth response.
#[derive(Debug, Deserialize)]
pub(crate) struct AuthTokenResponse {
    #[serde(default)]
    pub token: Option<String>,
}

impl AuthTokenResponse {
    pub(crate) fn into_session(self) -> Option<Session> {
        self.token.map(Session::new).filter(Session::is_valid)
    }
}
