//! Server info API.

use std::sync::Arc;

use crate::{
    client::SignalFireClientInner,
    error::ApiResult,
    models::{ApiInfo, AuthMethod},
};

const INFO_PATH: &str = "v1/info";

/// API for `GET /v1/info`.
pub struct InfoApi {
    client: Arc<SignalFireClientInner>,
}

impl InfoApi {
    pub(crate) fn new(client: Arc<SignalFireClientInner>) -> Self {
        Self { client }
    }

    /// Fetch the full info payload.
    pub async fn get(&self) -> ApiResult<ApiInfo> {
        self.client.executor().get(INFO_PATH).await?.json()
    }

    /// Resolve the auth method the server expects.
    ///
    /// A payload that is not JSON, or lacks a string `auth_type`, means
    /// [`AuthMethod::None`].
    pub async fn auth_type(&self) -> ApiResult<AuthMethod> {
        let response = self.client.executor().get(INFO_PATH).await?;

        Ok(response
            .json_lenient::<serde_json::Value>()
            .map(|payload| AuthMethod::from_info_payload(&payload))
            .unwrap_or_default())
    }
}
