//! Authentication API.

use std::sync::Arc;

use log::debug;
use serde_json::json;

use crate::{
    client::{AuthTokenResponse, SignalFireClientInner},
    error::ApiResult,
};

const AUTH_PATH: &str = "v1/auth";

/// API for `POST /v1/auth`.
pub struct AuthApi {
    client: Arc<SignalFireClientInner>,
}

impl AuthApi {
    pub(crate) fn new(client: Arc<SignalFireClientInner>) -> Self {
        Self { client }
    }

    /// Open a session on a server that needs no credentials.
    pub async fn noop(&self) -> ApiResult<()> {
        self.authenticate(None).await
    }

    /// Open a session with username and password.
    pub async fn basic(&self, username: &str, password: &str) -> ApiResult<()> {
        let body = json!({
            "username": username,
            "password": password,
        });
        self.authenticate(Some(&body)).await
    }

    /// Any 2xx counts as success; the token is kept when the body has one.
    async fn authenticate(&self, body: Option<&serde_json::Value>) -> ApiResult<()> {
        let response = self.client.executor().post(AUTH_PATH, body).await?;

        match response
            .json_lenient::<AuthTokenResponse>()
            .and_then(AuthTokenResponse::into_session)
        {
            Some(session) => self.client.set_session(Some(session)),
            None => debug!("auth response carried no session token"),
        }

        Ok(())
    }
}
