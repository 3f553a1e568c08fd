//! Rust client library for the SignalFire director management API.

pub mod api;
pub mod client;
pub mod controller;
pub mod error;
pub mod models;
pub mod render;

// Re-export main types
pub use client::{HttpConfig, Session, SignalFireClient, SignalFireClientBuilder};
pub use error::{ApiError, ApiResult, Error, Result};

// Re-export commonly used models
pub use models::{ApiInfo, AuthMethod, Deployment, DeploymentGroup, Director, Release, ReleaseVersion};

// Re-export API and flow types
pub use api::{AuthApi, DirectorApi, GroupApi, InfoApi, SignalFireApi};
pub use controller::{MemoryRegion, PageController, Region};
pub use render::render_directors;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builder() {
        let client = SignalFireClient::builder().build();
        assert!(client.is_ok());

        let client = client.unwrap();
        assert!(!client.is_authenticated());
        assert_eq!(client.base_url(), client::DEFAULT_BASE_URL);
    }

    #[test]
    fn test_client_with_session() {
        let client = SignalFireClient::builder()
            .base_url("http://signalfire.internal:11001")
            .session("abc123")
            .build()
            .unwrap();

        assert!(client.is_authenticated());
        assert_eq!(client.session(), Some(Session::new("abc123")));

        client.clear_session();
        assert!(!client.is_authenticated());
    }

    #[test]
    fn test_client_rejects_bad_base_url() {
        let client = SignalFireClient::builder().base_url("::nope::").build();
        assert!(matches!(client, Err(Error::Url(_))));
    }

    #[test]
    fn test_blank_session_ignored() {
        let client = SignalFireClient::builder().session("").build().unwrap();
        assert!(!client.is_authenticated());
    }
}
