//! HTTP client and configuration.

mod auth;
mod http;

pub use auth::{Session, SESSION_HEADER};
pub use http::{ApiResponse, HttpConfig, DEFAULT_BASE_URL, DEFAULT_USER_AGENT};

pub(crate) use auth::AuthTokenResponse;

use crate::api::{AuthApi, DirectorApi, GroupApi, InfoApi};
use crate::error::Result;
use http::{build_client, HttpExecutor};
use log::debug;
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

/// Builder for creating SignalFireClient.
pub struct SignalFireClientBuilder {
    http_config: HttpConfig,
    session: Option<Session>,
}

impl std::fmt::Debug for SignalFireClientBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignalFireClientBuilder")
            .field("http_config", &self.http_config)
            .field("session", &self.session.as_ref().map(|_| "..."))
            .finish()
    }
}

impl Default for SignalFireClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SignalFireClientBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            http_config: HttpConfig::default(),
            session: None,
        }
    }

    /// Set base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.http_config.base_url = url.into();
        self
    }

    /// Start with an already issued session token.
    pub fn session(mut self, token: impl Into<String>) -> Self {
        self.session = Some(Session::new(token));
        self
    }

    /// Set custom user agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.http_config.custom_user_agent = Some(ua.into());
        self
    }

    /// Set connection timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.http_config.connect_timeout = timeout;
        self
    }

    /// Set read timeout.
    pub fn read_timeout(mut self, timeout: Duration) -> Self {
        self.http_config.read_timeout = timeout;
        self
    }

    /// Build SignalFireClient.
    pub fn build(self) -> Result<SignalFireClient> {
        self.http_config.base()?;
        let http_client = build_client(&self.http_config)?;

        Ok(SignalFireClient {
            inner: Arc::new(SignalFireClientInner {
                http: http_client,
                config: self.http_config,
                session: RwLock::new(self.session.filter(Session::is_valid)),
            }),
        })
    }
}

/// Internal client state.
pub(crate) struct SignalFireClientInner {
    pub http: reqwest::Client,
    pub config: HttpConfig,
    session: RwLock<Option<Session>>,
}

impl SignalFireClientInner {
    /// Current session, if one was issued.
    pub fn session(&self) -> Option<Session> {
        self.session
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replace the current session.
    pub fn set_session(&self, session: Option<Session>) {
        debug!(
            "session {}",
            if session.is_some() { "established" } else { "cleared" }
        );
        *self
            .session
            .write()
            .unwrap_or_else(PoisonError::into_inner) = session;
    }

    /// Create HTTP executor carrying the current session.
    pub fn executor(&self) -> HttpExecutor<'_> {
        HttpExecutor::new(&self.http, &self.config, self.session().map(|s| s.token))
    }
}

/// Client for the SignalFire API.
#[derive(Clone)]
pub struct SignalFireClient {
    pub(crate) inner: Arc<SignalFireClientInner>,
}

impl SignalFireClient {
    /// Create a new client builder.
    pub fn builder() -> SignalFireClientBuilder {
        SignalFireClientBuilder::new()
    }

    /// Get the server info API.
    pub fn info(&self) -> InfoApi {
        InfoApi::new(self.inner.clone())
    }

    /// Get the authentication API.
    pub fn auth(&self) -> AuthApi {
        AuthApi::new(self.inner.clone())
    }

    /// Get the director API.
    pub fn directors(&self) -> DirectorApi {
        DirectorApi::new(self.inner.clone())
    }

    /// Get the deployment group API.
    pub fn groups(&self) -> GroupApi {
        GroupApi::new(self.inner.clone())
    }

    /// Check if a session token is held.
    pub fn is_authenticated(&self) -> bool {
        self.inner.session().is_some()
    }

    /// Get the current session.
    pub fn session(&self) -> Option<Session> {
        self.inner.session()
    }

    /// Drop the current session.
    pub fn clear_session(&self) {
        self.inner.set_session(None);
    }

    /// Base URL requests are resolved against.
    pub fn base_url(&self) -> &str {
        &self.inner.config.base_url
    }
}

impl std::fmt::Debug for SignalFireClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignalFireClient")
            .field("authenticated", &self.is_authenticated())
            .field("base_url", &self.inner.config.base_url)
            .finish()
    }
}
