//! Director API.

use std::sync::Arc;

use serde::Deserialize;

use crate::{client::SignalFireClientInner, error::ApiResult, models::Director};

const DIRECTORS_PATH: &str = "v1/directors";

#[derive(Deserialize)]
struct DirectorsResponse {
    directors: Vec<Director>,
}

/// API for `GET /v1/directors`.
pub struct DirectorApi {
    client: Arc<SignalFireClientInner>,
}

impl DirectorApi {
    pub(crate) fn new(client: Arc<SignalFireClientInner>) -> Self {
        Self { client }
    }

    /// List directors in the order the server returned them.
    pub async fn list(&self) -> ApiResult<Vec<Director>> {
        let response: DirectorsResponse = self.client.executor().get(DIRECTORS_PATH).await?.json()?;
        Ok(response.directors)
    }
}
