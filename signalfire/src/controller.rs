//! Startup flow: resolve auth, open a session, fetch and render directors.

use std::io;

use log::{info, warn};
use thiserror::Error;

use crate::api::SignalFireApi;
use crate::error::ApiError;
use crate::models::{AuthMethod, Director};
use crate::render::render_directors;

/// Destination for the rendered director list.
pub trait Region {
    /// Replace the region's contents with `markup`.
    fn replace(&mut self, markup: &str) -> io::Result<()>;
}

/// Region kept in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryRegion {
    contents: Option<String>,
}

impl MemoryRegion {
    /// Create an empty, never written region.
    pub fn new() -> Self {
        Self::default()
    }

    /// Markup last written, or `None` if the region was never written.
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl Region for MemoryRegion {
    fn replace(&mut self, markup: &str) -> io::Result<()> {
        self.contents = Some(markup.to_owned());
        Ok(())
    }
}

/// Terminal states of a startup run that stop before rendering.
#[derive(Debug, Error)]
pub(crate) enum StartupFailure {
    #[error("Couldn't get auth type: {0}")]
    AuthType(#[source] ApiError),

    #[error("Can't do {0} auth from the startup flow")]
    Unsupported(AuthMethod),

    #[error("Couldn't do no-op auth: {0}")]
    Auth(#[source] ApiError),

    #[error("Couldn't get director list: {0}")]
    Directors(#[source] ApiError),
}

/// Drives the startup flow against an API and writes the result to a region.
///
/// The USERPASS method is not handled here: a server that asks for it ends
/// the run with a diagnostic. Use [`SignalFireApi::auth_basic`] directly for
/// such servers.
pub struct PageController<A, R> {
    api: A,
    region: R,
}

impl<A: SignalFireApi, R: Region> PageController<A, R> {
    /// Create a controller.
    pub fn new(api: A, region: R) -> Self {
        Self { api, region }
    }

    /// Run the flow once.
    ///
    /// Failures are logged and leave the region untouched; nothing is
    /// returned to the caller.
    pub async fn run(&mut self) {
        match self.startup().await {
            Ok(directors) => {
                let markup = render_directors(&directors);
                match self.region.replace(&markup) {
                    Ok(()) => info!("Rendered {} directors", directors.len()),
                    Err(e) => warn!("Couldn't write director list: {e}"),
                }
            }
            Err(failure) => warn!("{failure}"),
        }
    }

    async fn startup(&self) -> Result<Vec<Director>, StartupFailure> {
        let method = self
            .api
            .auth_type()
            .await
            .map_err(StartupFailure::AuthType)?;

        match method {
            AuthMethod::None => {}
            AuthMethod::UserPass => return Err(StartupFailure::Unsupported(method)),
        }

        self.api.auth_noop().await.map_err(StartupFailure::Auth)?;

        self.api
            .list_directors()
            .await
            .map_err(StartupFailure::Directors)
    }

    /// The API the controller talks to.
    pub fn api(&self) -> &A {
        &self.api
    }

    /// The region the controller writes to.
    pub fn region(&self) -> &R {
        &self.region
    }

    /// Take the API and region back.
    pub fn into_parts(self) -> (A, R) {
        (self.api, self.region)
    }
}
