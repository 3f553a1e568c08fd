//! Server info and authentication method models.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Authentication scheme the server currently expects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthMethod {
    /// No credentials; a no-op handshake opens the session.
    #[default]
    None,
    /// Username and password.
    UserPass,
}

impl AuthMethod {
    /// Classify the server's `auth_type` string.
    ///
    /// Only the exact value `"userpass"` selects [`AuthMethod::UserPass`].
    pub fn from_auth_type(auth_type: &str) -> Self {
        if auth_type == "userpass" {
            AuthMethod::UserPass
        } else {
            AuthMethod::None
        }
    }

    /// Classify a raw `/v1/info` payload.
    ///
    /// An absent or non-string `auth_type` resolves to [`AuthMethod::None`].
    pub fn from_info_payload(payload: &serde_json::Value) -> Self {
        payload
            .get("auth_type")
            .and_then(|v| v.as_str())
            .map(Self::from_auth_type)
            .unwrap_or_default()
    }

    /// Name as reported by the server.
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthMethod::None => "none",
            AuthMethod::UserPass => "userpass",
        }
    }
}

impl fmt::Display for AuthMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload of `GET /v1/info`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiInfo {
    /// Server version string.
    #[serde(default)]
    pub version: String,
    /// Auth scheme name, e.g. `"none"` or `"userpass"`.
    #[serde(default)]
    pub auth_type: String,
}

impl ApiInfo {
    /// Auth method declared by this payload.
    pub fn auth_method(&self) -> AuthMethod {
        AuthMethod::from_auth_type(&self.auth_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_auth_method_from_auth_type() {
        assert_eq!(AuthMethod::from_auth_type("userpass"), AuthMethod::UserPass);
        assert_eq!(AuthMethod::from_auth_type("none"), AuthMethod::None);
        assert_eq!(AuthMethod::from_auth_type("noop"), AuthMethod::None);
        assert_eq!(AuthMethod::from_auth_type("UserPass"), AuthMethod::None);
        assert_eq!(AuthMethod::from_auth_type(" userpass"), AuthMethod::None);
        assert_eq!(AuthMethod::from_auth_type(""), AuthMethod::None);
    }

    #[test]
    fn test_auth_method_from_payload() {
        let userpass = json!({ "version": "0.1.0", "auth_type": "userpass" });
        assert_eq!(AuthMethod::from_info_payload(&userpass), AuthMethod::UserPass);

        let missing = json!({ "version": "0.1.0" });
        assert_eq!(AuthMethod::from_info_payload(&missing), AuthMethod::None);

        let wrong_type = json!({ "auth_type": 1 });
        assert_eq!(AuthMethod::from_info_payload(&wrong_type), AuthMethod::None);

        let not_an_object = json!(["userpass"]);
        assert_eq!(AuthMethod::from_info_payload(&not_an_object), AuthMethod::None);
    }

    #[test]
    fn test_api_info_defaults() {
        let info: ApiInfo = serde_json::from_str("{}").unwrap();
        assert_eq!(info, ApiInfo::default());
        assert_eq!(info.auth_method(), AuthMethod::None);
        assert_eq!(AuthMethod::UserPass.to_string(), "userpass");
    }
}
