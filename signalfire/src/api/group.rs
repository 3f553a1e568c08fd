//! Deployment group API.

use std::sync::Arc;

use serde::Deserialize;

use crate::{client::SignalFireClientInner, error::ApiResult, models::DeploymentGroup};

const GROUPS_PATH: &str = "v1/deployment-groups";

#[derive(Deserialize)]
struct GroupsResponse {
    groups: Vec<DeploymentGroup>,
}

/// API for `GET /v1/deployment-groups`.
pub struct GroupApi {
    client: Arc<SignalFireClientInner>,
}

impl GroupApi {
    pub(crate) fn new(client: Arc<SignalFireClientInner>) -> Self {
        Self { client }
    }

    /// List deployment groups.
    pub async fn list(&self) -> ApiResult<Vec<DeploymentGroup>> {
        let response: GroupsResponse = self.client.executor().get(GROUPS_PATH).await?.json()?;
        Ok(response.groups)
    }
}
