//! HTTP client for remote JSON sources
//!
//! Provides a minimal HTTP client that handles:
//! - A single GET per call with caller-supplied headers
//! - Status classification (2xx success, everything else an error)
//! - Full-body accumulation and JSON parsing

use crate::error::{Error, Result};
use crate::source::parse_json_slice;
use crate::types::StringMap;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::redirect::Policy;
use reqwest::{Client, Response};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Request timeout (None = transport default, i.e. no timeout)
    pub timeout: Option<Duration>,
    /// Follow redirects
    pub follow_redirects: bool,
    /// Default headers for all requests
    pub default_headers: StringMap,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            follow_redirects: false,
            default_headers: StringMap::new(),
            user_agent: format!("trainxm/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HttpClientConfig {
    /// Create a new config builder
    pub fn builder() -> HttpClientConfigBuilder {
        HttpClientConfigBuilder::default()
    }
}

/// Builder for HTTP client config
#[derive(Default)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    /// Enable or disable redirect following
    pub fn follow_redirects(mut self, enabled: bool) -> Self {
        self.config.follow_redirects = enabled;
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}

/// HTTP client for fetching JSON samples
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
}

impl HttpClient {
    /// Create a new HTTP client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(HttpClientConfig::default())
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(config: HttpClientConfig) -> Result<Self> {
        let redirect = if config.follow_redirects {
            Policy::default()
        } else {
            Policy::none()
        };

        let mut builder = Client::builder()
            .user_agent(&config.user_agent)
            .redirect(redirect);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            config,
        })
    }

    /// Issue a single GET request with the given headers.
    ///
    /// Returns the response for any status; classification is left to the caller.
    pub async fn get(&self, url: &str, headers: &StringMap) -> Result<Response> {
        let url = Url::parse(url)?;

        // Caller headers replace defaults with the same (case-insensitive) name
        let mut header_map = HeaderMap::new();
        for (key, value) in self.config.default_headers.iter().chain(headers) {
            let (name, value) = header_pair(key, value)?;
            header_map.insert(name, value);
        }

        let response = self
            .client
            .get(url.clone())
            .headers(header_map)
            .send()
            .await?;
        debug!("GET {} -> {}", url, response.status().as_u16());
        Ok(response)
    }

    /// GET a URL and parse the body as JSON.
    ///
    /// Non-2xx statuses fail with `HttpStatus` before the body is read. A 2xx body
    /// that is not valid JSON fails with `Parse("Invalid JSON response")`.
    pub async fn get_json(&self, url: &str, headers: &StringMap) -> Result<Value> {
        let response = self.get(url, headers).await?;
        let status = response.status();

        if !status.is_success() {
            return Err(Error::http_status(status.as_u16()));
        }

        let body = response.bytes().await?;
        parse_json_slice(&body).map_err(|_| Error::parse("Invalid JSON response"))
    }
}

/// Validate one header name/value pair
fn header_pair(key: &str, value: &str) -> Result<(HeaderName, HeaderValue)> {
    let name = HeaderName::from_bytes(key.as_bytes())
        .map_err(|e| Error::parse(format!("Invalid header name '{key}': {e}")))?;
    let value = HeaderValue::from_str(value)
        .map_err(|e| Error::parse(format!("Invalid value for header '{key}': {e}")))?;
    Ok((name, value))
}
