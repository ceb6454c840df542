//! HTTP gateway backed by reqwest
//!
//! Provides a client that handles:
//! - Cloud Controller request headers (JSON content, user agent, token)
//! - Error classification for non-2xx responses
//! - Collection of `X-Cf-Warnings` response headers

use crate::error::{Error, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use std::collections::HashMap;
use std::fmt;
use std::sync::Mutex;
use std::time::Duration;
use tracing::debug;

const WARNINGS_HEADER: &str = "X-Cf-Warnings";

/// Minimal HTTP surface consumed by the paginated fetcher
#[async_trait]
pub trait Gateway: Send + Sync {
    /// Issue a GET for a fully-qualified URL and return the body of a 2xx
    /// response. Transport failures and non-2xx statuses are errors.
    async fn get(&self, url: &str) -> Result<String>;
}

/// Configuration for the HTTP client
#[derive(Clone)]
pub struct HttpClientConfig {
    /// Request timeout
    pub timeout: Duration,
    /// TCP connect timeout
    pub connect_timeout: Duration,
    /// User agent string
    pub user_agent: String,
    /// Value for the `Authorization` header, sent verbatim (e.g. `bearer abc`)
    pub access_token: Option<String>,
    /// Accept invalid TLS certificates
    pub skip_ssl_validation: bool,
    /// Default headers for all requests
    pub default_headers: HashMap<String, String>,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(5),
            user_agent: format!("cf-api/{}", env!("CARGO_PKG_VERSION")),
            access_token: None,
            skip_ssl_validation: false,
            default_headers: HashMap::new(),
        }
    }
}

impl fmt::Debug for HttpClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpClientConfig")
            .field("timeout", &self.timeout)
            .field("connect_timeout", &self.connect_timeout)
            .field("user_agent", &self.user_agent)
            .field("has_access_token", &self.access_token.is_some())
            .field("skip_ssl_validation", &self.skip_ssl_validation)
            .field("default_headers", &self.default_headers)
            .finish()
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
        self.config.timeout = timeout;
        self
    }

    /// Set the connect timeout
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = timeout;
        self
    }

    /// Set the access token
    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        let token = token.into();
        self.config.access_token = (!token.is_empty()).then_some(token);
        self
    }

    /// Accept invalid TLS certificates
    pub fn skip_ssl_validation(mut self, skip: bool) -> Self {
        self.config.skip_ssl_validation = skip;
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

/// HTTP client for the Cloud Controller
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
    warnings: Mutex<Vec<String>>,
}

impl HttpClient {
    /// Create a new HTTP client with custom configuration
    pub fn new(config: HttpClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .danger_accept_invalid_certs(config.skip_ssl_validation)
            .build()?;

        Ok(Self {
            client,
            config,
            warnings: Mutex::new(Vec::new()),
        })
    }

    /// Get the client configuration
    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    /// Warnings reported by the server so far, in arrival order
    pub fn warnings(&self) -> Vec<String> {
        self.warnings
            .lock()
            .map(|w| w.clone())
            .unwrap_or_default()
    }

    fn record_warnings(&self, headers: &HeaderMap) {
        let found: Vec<String> = headers
            .get_all(WARNINGS_HEADER)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .flat_map(|v| v.split(','))
            .filter(|raw| !raw.trim().is_empty())
            .map(|raw| unescape_warning(raw.trim()))
            .collect();

        if found.is_empty() {
            return;
        }

        for warning in &found {
            debug!("Cloud Controller warning: {warning}");
        }
        if let Ok(mut warnings) = self.warnings.lock() {
            warnings.extend(found);
        }
    }
}

#[async_trait]
impl Gateway for HttpClient {
    async fn get(&self, url: &str) -> Result<String> {
        let mut req = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json");

        for (key, value) in &self.config.default_headers {
            req = req.header(key.as_str(), value.as_str());
        }

        if let Some(ref token) = self.config.access_token {
            req = req.header(AUTHORIZATION, token.as_str());
        }

        debug!("GET {url}");
        let response = req.send().await?;
        let status = response.status();
        self.record_warnings(response.headers());

        let body = response.text().await?;
        if !status.is_success() {
            debug!("GET {url} failed with {}", status.as_u16());
            return Err(Error::from_response(status.as_u16(), &body));
        }

        Ok(body)
    }
}

impl fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Decode one URL-encoded warning.
///
/// The whole value is percent-decoded as a single form value, so `=` and `&`
/// are kept as text.
fn unescape_warning(raw: &str) -> String {
    let field = format!("w={}", raw.replace('&', "%26"));
    url::form_urlencoded::parse(field.as_bytes())
        .next()
        .map(|(_, value)| value.into_owned())
        .unwrap_or_default()
}
