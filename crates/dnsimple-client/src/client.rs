//! Main API client implementation

use crate::config::ClientConfig;
use crate::endpoints::{RegistrarApi, ZonesApi};
use crate::error::{ApiError, ApiResult};
use crate::request::RequestOptions;
use crate::response::{PaginatedResponse, Response};
use reqwest::{Client, Method, Proxy};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

/// DNSimple API client
///
/// Cheap to clone: the HTTP connection pool and the frozen configuration
/// are shared between clones.
#[derive(Clone)]
pub struct DnsimpleClient {
    inner: Client,
    config: Arc<ClientConfig>,
}

impl std::fmt::Debug for DnsimpleClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DnsimpleClient")
            .field("base_uri", &self.config.base_uri())
            .finish_non_exhaustive()
    }
}

impl DnsimpleClient {
    /// Create a client from the credentials file
    ///
    /// See [`ClientConfig::from_env`].
    pub fn new() -> ApiResult<Self> {
        let config = ClientConfig::from_env()?;
        Self::with_config(config)
    }

    /// Create a new client with specific configuration
    pub fn with_config(config: ClientConfig) -> ApiResult<Self> {
        config.validate()?;

        let mut builder = Client::builder().user_agent(config.user_agent.clone());

        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        if let Some(http_proxy) = &config.http_proxy {
            if let Some(url) = http_proxy.url() {
                let proxy = Proxy::all(&url)
                    .map_err(|e| ApiError::config(format!("Invalid HTTP proxy {url}: {e}")))?;
                builder = builder.proxy(proxy);
            } else {
                warn!(port = ?http_proxy.port, "HTTP proxy has no address, connecting directly");
            }
        }

        let inner = builder
            .build()
            .map_err(|e| ApiError::config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            inner,
            config: Arc::new(config),
        })
    }

    /// Get the current configuration
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get the base URI
    #[must_use]
    pub fn base_uri(&self) -> &str {
        self.config.base_uri()
    }

    /// Absolute URL for a resource path
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_uri(), path)
    }

    // -------------------------------------------------------------------------
    // Endpoint API accessors
    // -------------------------------------------------------------------------

    /// Access zone and zone record endpoints
    #[must_use]
    pub fn zones(&self) -> ZonesApi {
        ZonesApi::new(self.clone())
    }

    /// Access registrar endpoints
    #[must_use]
    pub fn registrar(&self) -> RegistrarApi {
        RegistrarApi::new(self.clone())
    }

    // -------------------------------------------------------------------------
    // Low-level HTTP methods
    // -------------------------------------------------------------------------

    /// Perform a GET request
    pub async fn get(&self, path: &str, options: RequestOptions) -> ApiResult<reqwest::Response> {
        self.request(Method::GET, path, options).await
    }

    /// Perform a POST request
    pub async fn post(&self, path: &str, options: RequestOptions) -> ApiResult<reqwest::Response> {
        self.request(Method::POST, path, options).await
    }

    /// Perform a PUT request
    pub async fn put(&self, path: &str, options: RequestOptions) -> ApiResult<reqwest::Response> {
        self.request(Method::PUT, path, options).await
    }

    /// Perform a PATCH request
    pub async fn patch(&self, path: &str, options: RequestOptions) -> ApiResult<reqwest::Response> {
        self.request(Method::PATCH, path, options).await
    }

    /// Perform a DELETE request
    pub async fn delete(&self, path: &str, options: RequestOptions) -> ApiResult<reqwest::Response> {
        self.request(Method::DELETE, path, options).await
    }

    /// Send a request to `base_uri + path`
    ///
    /// Standard options (JSON accept header and credentials) are merged
    /// under `options`. Missing credentials fail before anything is sent,
    /// unless `options` carries its own [`Auth`](crate::Auth).
    /// 401 maps to [`ApiError::Authentication`], 404 to
    /// [`ApiError::NotFound`], any other non-2xx status to
    /// [`ApiError::Request`].
    #[instrument(skip(self, options), fields(request_id))]
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        options: RequestOptions,
    ) -> ApiResult<reqwest::Response> {
        let request_id = Uuid::new_v4().to_string();
        tracing::Span::current().record("request_id", request_id.as_str());

        let options = options.with_standard(&self.config)?;
        let url = self.url(path);

        if self.config.debug {
            info!(method = %method, url = %url, query = ?options.query, "Sending request");
        } else {
            debug!(method = %method, url = %url, "Sending request");
        }

        let request = options.apply(self.inner.request(method, &url))?;

        let start = Instant::now();
        let response = request.send().await?;
        let status = response.status();
        let elapsed = start.elapsed();

        if self.config.debug {
            info!(status = status.as_u16(), elapsed_ms = elapsed.as_millis(), "Received response");
        } else {
            debug!(status = status.as_u16(), elapsed_ms = elapsed.as_millis(), "Received response");
        }

        if status.is_success() {
            return Ok(response);
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                warn!(status = status.as_u16(), error = %e, "Failed to read error response body");
                String::new()
            }
        };
        let error = ApiError::from_status(status.as_u16(), &body);
        warn!(status = status.as_u16(), url = %url, error = %error, "Request failed");
        Err(error)
    }

    // -------------------------------------------------------------------------
    // Typed helpers
    // -------------------------------------------------------------------------

    /// GET a single item
    pub async fn get_response<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> ApiResult<Response<T>> {
        let response = self.get(path, options).await?;
        decode_response(response).await
    }

    /// GET one page of a list
    pub async fn get_paginated<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> ApiResult<PaginatedResponse<T>> {
        let response = self.get(path, options).await?;
        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response.bytes().await?;
        PaginatedResponse::decode(status, headers, &body)
    }

    /// POST a JSON body and decode a single item
    pub async fn post_response<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
        options: RequestOptions,
    ) -> ApiResult<Response<T>> {
        let options = RequestOptions::new().json(body)?.merge(options);
        let response = self.post(path, options).await?;
        decode_response(response).await
    }

    /// PATCH a JSON body and decode a single item
    pub async fn patch_response<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
        options: RequestOptions,
    ) -> ApiResult<Response<T>> {
        let options = RequestOptions::new().json(body)?.merge(options);
        let response = self.patch(path, options).await?;
        decode_response(response).await
    }

    /// DELETE and decode the item the server echoes back
    pub async fn delete_response<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> ApiResult<Response<T>> {
        let response = self.delete(path, options).await?;
        decode_response(response).await
    }
}

async fn decode_response<T: DeserializeOwned>(response: reqwest::Response) -> ApiResult<Response<T>> {
    let status = response.status().as_u16();
    let headers = response.headers().clone();
    let body = response.bytes().await?;
    Response::decode(status, headers, &body)
}
