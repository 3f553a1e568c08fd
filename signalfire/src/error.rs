//! Error types.

use reqwest::StatusCode;
use thiserror::Error;

/// Status code recorded when a request never produced an HTTP response.
pub const TRANSPORT_FAILURE_CODE: u16 = 0;

/// Error returned by every SignalFire API call.
///
/// Carries a human readable message and the HTTP status copied from the
/// transport. Requests that failed before any response arrived (connection
/// refused, DNS, timeout) carry [`TRANSPORT_FAILURE_CODE`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("SignalFire API error [{code}]: {message}")]
pub struct ApiError {
    message: String,
    code: u16,
}

impl ApiError {
    /// Create an API error.
    pub fn new(message: impl Into<String>, code: u16) -> Self {
        Self {
            message: message.into(),
            code,
        }
    }

    /// Create an error for a request that failed in the transport layer.
    pub fn transport(err: &reqwest::Error) -> Self {
        let code = err
            .status()
            .map(|s| s.as_u16())
            .unwrap_or(TRANSPORT_FAILURE_CODE);
        Self::new(err.to_string(), code)
    }

    /// Create an error from a non-success status.
    ///
    /// `detail` is the server's own error text, when it sent one.
    pub fn status(status: StatusCode, detail: Option<String>) -> Self {
        let message = detail
            .filter(|d| !d.is_empty())
            .or_else(|| status.canonical_reason().map(str::to_owned))
            .unwrap_or_else(|| "error".to_owned());
        Self::new(message, status.as_u16())
    }

    /// Create an error for a body that does not match its declared shape.
    pub fn parse(status: StatusCode, err: &serde_json::Error) -> Self {
        Self::new(format!("parsererror: {err}"), status.as_u16())
    }

    /// Message describing the failure.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// HTTP status code, or [`TRANSPORT_FAILURE_CODE`].
    pub fn code(&self) -> u16 {
        self.code
    }

    /// Check if the request never reached the server.
    pub fn is_transport(&self) -> bool {
        self.code == TRANSPORT_FAILURE_CODE
    }

    /// Check if the server rejected the session.
    pub fn is_unauthorized(&self) -> bool {
        self.code == StatusCode::UNAUTHORIZED.as_u16()
    }
}

/// Result type alias for API calls.
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Errors raised while configuring a client.
#[derive(Debug, Error)]
pub enum Error {
    /// The HTTP client could not be constructed.
    #[error("Client error: {0}")]
    Client(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// Invalid configuration value.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type alias for client construction.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let e = ApiError::new("Not Found", 404);
        assert_eq!(format!("{}", e), "SignalFire API error [404]: Not Found");
    }

    #[test]
    fn test_status_message_fallback() {
        let e = ApiError::status(StatusCode::INTERNAL_SERVER_ERROR, None);
        assert_eq!(e.message(), "Internal Server Error");
        assert_eq!(e.code(), 500);

        let e = ApiError::status(StatusCode::FORBIDDEN, Some("Incorrect username or password".into()));
        assert_eq!(e.message(), "Incorrect username or password");
        assert_eq!(e.code(), 403);

        let e = ApiError::status(StatusCode::UNAUTHORIZED, Some(String::new()));
        assert_eq!(e.message(), "Unauthorized");
        assert!(e.is_unauthorized());
    }

    #[test]
    fn test_transport_code() {
        let e = ApiError::new("connection refused", TRANSPORT_FAILURE_CODE);
        assert!(e.is_transport());
        assert!(!ApiError::new("Bad Gateway", 502).is_transport());
    }
}
