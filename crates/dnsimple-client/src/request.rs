//! Request options and their merge rules

use crate::auth::Auth;
use crate::config::ClientConfig;
use crate::error::ApiResult;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT};
use reqwest::RequestBuilder;
use serde::Serialize;
use std::time::Duration;

/// Options for a single API call
///
/// Per-call options are merged on top of [`standard_options`]: headers and
/// query keys replace same-named entries, body, timeout and auth replace
/// when set.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Extra request headers
    pub headers: HeaderMap,
    /// Query string pairs
    pub query: Vec<(String, String)>,
    /// JSON request body
    pub body: Option<serde_json::Value>,
    /// Request timeout
    pub timeout: Option<Duration>,
    /// Credentials override
    pub auth: Option<Auth>,
}

/// Base options for every request: JSON accept header plus credentials
pub fn standard_options(config: &ClientConfig) -> ApiResult<RequestOptions> {
    Ok(json_options().auth(Auth::from_config(config)?))
}

fn json_options() -> RequestOptions {
    RequestOptions::new().header(ACCEPT, HeaderValue::from_static("application/json"))
}

impl RequestOptions {
    /// Empty options
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a header
    #[must_use]
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Add or replace a query parameter
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.set_query(key.into(), value.to_string());
        self
    }

    /// Request a specific page of a list endpoint
    #[must_use]
    pub fn page(self, page: u32) -> Self {
        self.query("page", page)
    }

    /// Set the number of entries per page
    #[must_use]
    pub fn per_page(self, per_page: u32) -> Self {
        self.query("per_page", per_page)
    }

    /// Sort a list endpoint, e.g. `"name:asc"`
    #[must_use]
    pub fn sort(self, sort: impl Into<String>) -> Self {
        self.query("sort", sort.into())
    }

    /// Filter a list endpoint, e.g. `("name_like", "example")`
    #[must_use]
    pub fn filter(self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query(key, value)
    }

    /// Use these credentials instead of the configured ones
    #[must_use]
    pub fn auth(mut self, auth: Auth) -> Self {
        self.auth = Some(auth);
        self
    }

    /// Set a JSON body
    pub fn json<B: Serialize>(mut self, body: &B) -> ApiResult<Self> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Set the request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Value of a query parameter, if set
    #[must_use]
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Merge `other` on top of these options
    #[must_use]
    pub fn merge(mut self, other: RequestOptions) -> Self {
        for (name, value) in &other.headers {
            self.headers.insert(name.clone(), value.clone());
        }
        for (key, value) in other.query {
            self.set_query(key, value);
        }
        self.body = other.body.or(self.body);
        self.timeout = other.timeout.or(self.timeout);
        self.auth = other.auth.or(self.auth);
        self
    }

    /// Merge these options on top of [`standard_options`]
    ///
    /// Credentials are only resolved from `config` when no auth override
    /// is set, so an override works with a credential-less config.
    pub fn with_standard(self, config: &ClientConfig) -> ApiResult<Self> {
        let base = if self.auth.is_some() {
            json_options()
        } else {
            standard_options(config)?
        };
        Ok(base.merge(self))
    }

    /// Apply these options to a request
    pub fn apply(self, mut request: RequestBuilder) -> ApiResult<RequestBuilder> {
        request = request.headers(self.headers);

        if !self.query.is_empty() {
            request = request.query(&self.query);
        }
        if let Some(ref body) = self.body {
            request = request.json(body);
        }
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }
        if let Some(ref auth) = self.auth {
            request = auth.apply(request)?;
        }

        Ok(request)
    }

    fn set_query(&mut self, key: String, value: String) {
        self.query.retain(|(k, _)| *k != key);
        self.query.push((key, value));
    }
}
