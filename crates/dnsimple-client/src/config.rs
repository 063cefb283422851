//! Configuration for the DNSimple API client
//!
//! A [`ClientConfig`] is an owned value. Build it (explicitly, or by loading
//! the credentials file), then hand it to [`crate::DnsimpleClient`], which
//! freezes it for the lifetime of the client.

use crate::error::{ApiError, ApiResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default API endpoint
pub const API_BASE_URI: &str = "https://api.dnsimple.com/v1";

/// Default user agent sent with every request
pub const DEFAULT_USER_AGENT: &str = concat!("dnsimple-rust/", env!("CARGO_PKG_VERSION"));

/// HTTP proxy settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpProxy {
    /// Proxy host name or address
    pub addr: Option<String>,
    /// Proxy port
    pub port: Option<u16>,
}

impl HttpProxy {
    /// Create proxy settings for `addr:port`
    pub fn new(addr: impl Into<String>, port: u16) -> Self {
        Self {
            addr: Some(addr.into()),
            port: Some(port),
        }
    }

    /// Proxy URL understood by the HTTP transport, if an address is known
    #[must_use]
    pub fn url(&self) -> Option<String> {
        let addr = self.addr.as_deref()?;
        let addr = if addr.contains("://") {
            addr.to_string()
        } else {
            format!("http://{addr}")
        };
        Some(match self.port {
            Some(port) => format!("{addr}:{port}"),
            None => addr,
        })
    }
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Account user name (email)
    pub username: Option<String>,
    /// Account password, used for HTTP Basic auth
    pub password: Option<String>,
    /// API token, sent in the `X-DNSimple-Token` header
    pub api_token: Option<String>,
    /// Optional HTTP proxy
    pub http_proxy: Option<HttpProxy>,
    /// Log request and response lines at info level
    pub debug: bool,
    /// Per-request timeout applied by the transport
    pub timeout: Option<Duration>,
    /// User agent header value
    pub user_agent: String,
    base_uri: String,
    pub(crate) credentials_loaded: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            username: None,
            password: None,
            api_token: None,
            http_proxy: None,
            debug: false,
            timeout: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            base_uri: API_BASE_URI.to_string(),
            credentials_loaded: false,
        }
    }
}

impl ClientConfig {
    /// Create an empty configuration pointing at the production API
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create configuration from the credentials file
    ///
    /// The file is located through `DNSIMPLE_CONFIG`, falling back to
    /// `~/.dnsimple`. A missing or malformed file is a configuration error.
    pub fn from_env() -> ApiResult<Self> {
        let mut config = Self::default();
        config.load_credentials_if_necessary()?;
        Ok(config)
    }

    /// The qualified API base URI, never ending in `/`
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Set the API base URI, stripping one trailing slash
    pub fn set_base_uri(&mut self, uri: impl Into<String>) {
        let mut uri = uri.into();
        if uri.ends_with('/') {
            uri.pop();
        }
        self.base_uri = uri;
    }

    /// Builder-style method to set the base URI
    #[must_use]
    pub fn with_base_uri(mut self, uri: impl Into<String>) -> Self {
        self.set_base_uri(uri);
        self
    }

    /// Builder-style method to set the user name
    #[must_use]
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Builder-style method to set the password
    #[must_use]
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Builder-style method to set the API token
    #[must_use]
    pub fn with_api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    /// Builder-style method to set the HTTP proxy
    #[must_use]
    pub fn with_http_proxy(mut self, proxy: HttpProxy) -> Self {
        self.http_proxy = Some(proxy);
        self
    }

    /// Builder-style method to toggle request logging
    #[must_use]
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Builder-style method to set timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builder-style method to set the user agent
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Validate the configuration
    ///
    /// Credentials are not checked here; they are resolved per request.
    pub fn validate(&self) -> ApiResult<()> {
        if self.base_uri.is_empty() {
            return Err(ApiError::config("base_uri cannot be empty"));
        }

        if !self.base_uri.starts_with("http://") && !self.base_uri.starts_with("https://") {
            return Err(ApiError::config("base_uri must start with http:// or https://"));
        }

        if self.timeout.is_some_and(|t| t.is_zero()) {
            return Err(ApiError::config("timeout cannot be zero"));
        }

        Ok(())
    }
}
