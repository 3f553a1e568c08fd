//! API modules.

mod auth;
mod director;
mod group;
mod info;

pub use auth::AuthApi;
pub use director::DirectorApi;
pub use group::GroupApi;
pub use info::InfoApi;

use async_trait::async_trait;

use crate::client::SignalFireClient;
use crate::error::ApiResult;
use crate::models::{AuthMethod, Director};

/// Operations the startup flow needs from a SignalFire server.
///
/// Every call is one round trip and fails with [`crate::ApiError`].
#[async_trait]
pub trait SignalFireApi: Send + Sync {
    /// Resolve the auth method declared by `GET /v1/info`.
    async fn auth_type(&self) -> ApiResult<AuthMethod>;

    /// Open a session without credentials.
    async fn auth_noop(&self) -> ApiResult<()>;

    /// Open a session with username and password.
    async fn auth_basic(&self, username: &str, password: &str) -> ApiResult<()>;

    /// Fetch directors in server order.
    async fn list_directors(&self) -> ApiResult<Vec<Director>>;
}

#[async_trait]
impl SignalFireApi for SignalFireClient {
    async fn auth_type(&self) -> ApiResult<AuthMethod> {
        self.info().auth_type().await
    }

    async fn auth_noop(&self) -> ApiResult<()> {
        self.auth().noop().await
    }

    async fn auth_basic(&self, username: &str, password: &str) -> ApiResult<()> {
        self.auth().basic(username, password).await
    }

    async fn list_directors(&self) -> ApiResult<Vec<Director>> {
        self.directors().list().await
    }
}
