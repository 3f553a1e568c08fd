//! HTTP client configuration and request execution.

use crate::error::{ApiError, ApiResult, Error, Result, TRANSPORT_FAILURE_CODE};
use log::debug;
use reqwest::{header, Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use url::Url;

use super::auth::SESSION_HEADER;

/// Default SignalFire API base URL.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:11001/";

/// User agent sent when none is configured.
pub const DEFAULT_USER_AGENT: &str = concat!("signalfire-rs/", env!("CARGO_PKG_VERSION"));

/// HTTP client configuration.
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Base URL for API requests.
    pub base_url: String,
    /// Connection timeout.
    pub connect_timeout: Duration,
    /// Read timeout.
    pub read_timeout: Duration,
    /// Custom user agent.
    pub custom_user_agent: Option<String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            connect_timeout: Duration::from_secs(5),
            read_timeout: Duration::from_secs(20),
            custom_user_agent: None,
        }
    }
}

impl HttpConfig {
    /// Get the user agent to send.
    pub fn user_agent(&self) -> &str {
        self.custom_user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT)
    }

    /// Parse the base URL, treating its path as a directory.
    pub fn base(&self) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)?;
        if url.cannot_be_a_base() {
            return Err(Error::InvalidArgument(format!(
                "base URL cannot carry paths: {}",
                self.base_url
            )));
        }
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(url)
    }

    /// Resolve a relative API path to a full URL.
    pub fn resolve_url(&self, api: &str) -> Result<Url> {
        if api.starts_with("http://") || api.starts_with("https://") {
            return Url::parse(api).map_err(Error::Url);
        }

        self.base()?
            .join(api.trim_start_matches('/'))
            .map_err(Error::Url)
    }
}

/// Build a reqwest client with the given configuration.
pub fn build_client(config: &HttpConfig) -> Result<Client> {
    Client::builder()
        .connect_timeout(config.connect_timeout)
        .read_timeout(config.read_timeout)
        .gzip(true)
        .build()
        .map_err(Error::Client)
}

/// Successful (2xx) response with its body read.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: StatusCode,
    body: Vec<u8>,
}

impl ApiResponse {
    /// Decode the body, failing with a parse error if it does not match `T`.
    pub fn json<T: DeserializeOwned>(&self) -> ApiResult<T> {
        serde_json::from_slice(&self.body).map_err(|e| ApiError::parse(self.status, &e))
    }

    /// Decode the body, or `None` if it does not match `T`.
    pub fn json_lenient<T: DeserializeOwned>(&self) -> Option<T> {
        serde_json::from_slice(&self.body).ok()
    }
}

/// Error body written by the server: `{"error": "..."}`.
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

fn error_detail(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .map(|b| b.error)
}

/// HTTP request executor.
pub struct HttpExecutor<'a> {
    client: &'a Client,
    config: &'a HttpConfig,
    session: Option<String>,
}

impl<'a> HttpExecutor<'a> {
    /// Create a new executor.
    pub fn new(client: &'a Client, config: &'a HttpConfig, session: Option<String>) -> Self {
        Self {
            client,
            config,
            session,
        }
    }

    /// Build a request with common headers.
    fn build_request(&self, method: Method, url: Url) -> RequestBuilder {
        let mut request = self
            .client
            .request(method, url)
            .header(header::USER_AGENT, self.config.user_agent())
            .header(header::ACCEPT, "application/json");

        if let Some(token) = &self.session {
            request = request.header(SESSION_HEADER, token);
        }
        request
    }

    /// Execute a GET request.
    pub async fn get(&self, api: &str) -> ApiResult<ApiResponse> {
        self.execute(Method::GET, api, None).await
    }

    /// Execute a POST request with an optional JSON body.
    pub async fn post(&self, api: &str, body: Option<&serde_json::Value>) -> ApiResult<ApiResponse> {
        self.execute(Method::POST, api, body).await
    }

    async fn execute(
        &self,
        method: Method,
        api: &str,
        body: Option<&serde_json::Value>,
    ) -> ApiResult<ApiResponse> {
        let url = self
            .config
            .resolve_url(api)
            .map_err(|e| ApiError::new(e.to_string(), TRANSPORT_FAILURE_CODE))?;

        debug!("{} {}", method, url);

        let mut request = self.build_request(method, url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| ApiError::transport(&e))?;
        self.handle_response(response).await
    }

    /// Read the body and turn non-success statuses into errors.
    async fn handle_response(&self, response: Response) -> ApiResult<ApiResponse> {
        let status = response.status();

        // Body read failures still carry the response status.
        let body = match response.bytes().await {
            Ok(bytes) => bytes.to_vec(),
            Err(e) if status.is_success() => {
                return Err(ApiError::new(e.to_string(), status.as_u16()))
            }
            Err(e) => {
                debug!("unreadable error body for {}: {}", status, e);
                return Err(ApiError::status(status, None));
            }
        };

        if !status.is_success() {
            return Err(ApiError::status(status, error_detail(&body)));
        }

        Ok(ApiResponse { status, body })
    }
}
